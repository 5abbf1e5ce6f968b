use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::registry::EXACT_MODELS;

pub type Result<T> = std::result::Result<T, CntknError>;

#[derive(Error, Debug)]
pub enum CntknError {
    /// `--model` (or the configured default) failed the registry check.
    #[error(
        "'{model}' is not a supported model. Use `cntkn models` to see available models.\nSupported: {}...",
        EXACT_MODELS.iter().take(5).copied().collect::<Vec<_>>().join(", ")
    )]
    UnsupportedModel { model: String },

    #[error(
        "no input provided.\nProvide a string, `-`, file via `--file`, or pipe via stdin.\nExample: echo 'hello world' | cntkn"
    )]
    NoInput,

    #[error("could not read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// The registry accepted the name but the tokenizer library could not
    /// map it to an encoding.
    #[error("could not resolve an encoding for model '{model}': {reason}")]
    ModelResolution { model: String, reason: String },

    #[error("failed to read standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}
