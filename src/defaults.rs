use std::path::PathBuf;

use crate::error::{CntknError, Result};

/// Defaults shipped inside the binary so installs carry them.
pub const DEFAULTS_TOML: &str = include_str!("../resources/default.toml");

/// Model used when neither the packaged defaults nor any config file name one.
pub const BASELINE_MODEL: &str = "gpt-4o";

pub fn package_defaults() -> Result<toml::Table> {
    DEFAULTS_TOML
        .parse::<toml::Table>()
        .map_err(|e| CntknError::ConfigParse {
            path: PathBuf::from("resources/default.toml"),
            message: e.to_string(),
        })
}
