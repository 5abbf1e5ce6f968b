pub mod config;
pub mod defaults;
pub mod error;
pub mod input;
pub mod output;
pub mod registry;
pub mod tokens;

pub use config::{load_config, ColorMode, Config, ConfigCache};
pub use error::{CntknError, Result};
pub use input::{resolve_inputs, InputItem, ProcessStdin, StdinSource};
pub use output::{OutputOptions, ResultItem};
pub use registry::{is_model_supported, supported_models, SupportedModels};
pub use tokens::{count_tokens, Encoded, FixedCounter, TiktokenCounter, TokenCounter};
