use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// Subcommand used when the first argument names none.
pub const DEFAULT_COMMAND: &str = "count";
const COMMAND_NAMES: &[&str] = &["count", "models", "help"];
const TOP_LEVEL_FLAGS: &[&str] = &["-h", "--help", "-V", "--version", "--debug"];

#[derive(Parser)]
#[command(name = "cntkn", version)]
#[command(about = "cntkn: count tokens using OpenAI's tiktoken", long_about = None)]
pub struct Cli {
    #[arg(long, global = true, help = "Log diagnostics to stderr")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Count tokens in text, files or stdin (default)")]
    Count(CountArgs),

    #[command(about = "List known supported model names and prefixes")]
    Models(ModelsArgs),
}

#[derive(Parser, Debug, Default)]
pub struct CountArgs {
    #[arg(value_name = "TEXT", help = "Text to count; `-` reads stdin")]
    pub text: Vec<String>,

    #[arg(short = 'f', long = "file", value_name = "PATH", help = "Read input text from file(s)")]
    pub files: Vec<PathBuf>,

    #[arg(short, long, help = "Model name or prefix (defaults to config)")]
    pub model: Option<String>,

    #[arg(short = 'j', long = "json", help = "Emit JSON output")]
    pub json: bool,

    #[arg(short, long, help = "Suppress output")]
    pub quiet: bool,

    #[arg(long, help = "Show detailed output")]
    pub verbose: bool,

    #[arg(long, help = "Print raw tokens")]
    pub tokens: bool,

    #[arg(long, help = "Sum token counts for all inputs")]
    pub total: bool,

    #[arg(long, overrides_with = "no_color", help = "Force-enable color output")]
    pub color: bool,

    #[arg(long, overrides_with = "color", help = "Disable color output")]
    pub no_color: bool,
}

impl CountArgs {
    /// `Some(true)` for `--color`, `Some(false)` for `--no-color`, else `None`.
    pub fn color_flag(&self) -> Option<bool> {
        match (self.color, self.no_color) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Parser, Debug, Default)]
pub struct ModelsArgs {
    #[arg(long, help = "Emit JSON output")]
    pub json: bool,
}

/// Insert the default subcommand unless the first argument is a known
/// subcommand or a top-level flag. `args` includes the program name.
pub fn with_default_command<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    // `--debug` is global, so it may precede the command name.
    let at = args
        .iter()
        .skip(1)
        .position(|a| a != "--debug")
        .map_or(args.len(), |i| i + 1)
        .max(1)
        .min(args.len());

    let needs_default = match args.get(at).map(|a| a.to_str()) {
        None => true,
        Some(None) => true,
        Some(Some(first)) => {
            !COMMAND_NAMES.contains(&first) && !TOP_LEVEL_FLAGS.contains(&first)
        }
    };

    if needs_default {
        args.insert(at, OsString::from(DEFAULT_COMMAND));
    }
    args
}
