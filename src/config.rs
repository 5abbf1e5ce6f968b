use crate::defaults::{self, BASELINE_MODEL};
use crate::error::{CntknError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Project marker; settings live under its `[tool.cntkn]` table.
pub const PROJECT_FILE: &str = "pyproject.toml";
/// Standalone override file, same keys at the top level.
pub const LOCAL_FILE: &str = ".cntkn.toml";
const TOOL_NAME: &str = "cntkn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    On,
    Off,
}

impl ColorMode {
    /// Unknown values fall back to `Auto`.
    pub fn parse_lossy(s: &str) -> Self {
        match s {
            "on" => ColorMode::On,
            "off" => ColorMode::Off,
            _ => ColorMode::Auto,
        }
    }

    /// An explicit `--color`/`--no-color` wins over the configured mode.
    pub fn resolve(&self, flag: Option<bool>, stdout_is_tty: bool) -> bool {
        match (flag, self) {
            (Some(forced), _) => forced,
            (None, ColorMode::On) => true,
            (None, ColorMode::Off) => false,
            (None, ColorMode::Auto) => stdout_is_tty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub default_model: String,
    pub color_mode: ColorMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_model: BASELINE_MODEL.to_string(),
            color_mode: ColorMode::Auto,
        }
    }
}

impl Config {
    /// Returns a copy with every recognized key of `table` applied.
    /// Wrong-typed or empty values keep the current setting.
    pub fn overlay(&self, table: &toml::Table) -> Config {
        let mut next = self.clone();

        if let Some(model) = table.get("default_model").and_then(|v| v.as_str()) {
            if !model.is_empty() {
                next.default_model = model.to_string();
            }
        }
        if let Some(color) = table.get("color").and_then(|v| v.as_str()) {
            if !color.is_empty() {
                next.color_mode = ColorMode::parse_lossy(color);
            }
        }

        next
    }

    pub fn from_package_defaults() -> Result<Config> {
        let table = defaults::package_defaults()?;
        Ok(Config::default().overlay(&table))
    }
}

pub fn load_config(start: &Path) -> Result<Config> {
    let mut config = Config::from_package_defaults()?;

    // 1. Project config: [tool.cntkn] in the nearest pyproject.toml
    if let Some(path) = find_upward(start, PROJECT_FILE) {
        let table = read_toml(&path)?;
        if let Some(section) = table
            .get("tool")
            .and_then(|t| t.as_table())
            .and_then(|t| t.get(TOOL_NAME))
            .and_then(|t| t.as_table())
        {
            debug!(path = %path.display(), "applying project config");
            config = config.overlay(section);
        }
    }

    // 2. Standalone override: nearest .cntkn.toml
    if let Some(path) = find_upward(start, LOCAL_FILE) {
        let table = read_toml(&path)?;
        debug!(path = %path.display(), "applying local config");
        config = config.overlay(&table);
    }

    Ok(config)
}

fn find_upward(start: &Path, name: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

fn read_toml(path: &Path) -> Result<toml::Table> {
    let content = fs::read_to_string(path).map_err(|e| CntknError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    content
        .parse::<toml::Table>()
        .map_err(|e| CntknError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Per-invocation memo of resolved configs, keyed by canonical start directory.
#[derive(Debug, Default)]
pub struct ConfigCache {
    entries: HashMap<PathBuf, Config>,
}

impl ConfigCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, start: &Path) -> Result<Config> {
        let key = fs::canonicalize(start).unwrap_or_else(|_| start.to_path_buf());

        if let Some(config) = self.entries.get(&key) {
            debug!(dir = %key.display(), "config cache hit");
            return Ok(config.clone());
        }

        let config = load_config(&key)?;
        self.entries.insert(key, config.clone());
        Ok(config)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
