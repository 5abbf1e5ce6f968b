mod cli;
mod count;
mod models_cmd;

use clap::Parser;
use cli::{Cli, Commands};
use cntkn::config::ConfigCache;
use cntkn::error::Result;
use cntkn::input::ProcessStdin;
use cntkn::tokens::TiktokenCounter;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::Level;

fn main() {
    let cli = Cli::parse_from(cli::with_default_command(std::env::args_os()));
    init_logging(cli.debug);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut cache = ConfigCache::new();
    let config = cache.load(&cwd)?;
    let stdout_is_tty = std::io::stdout().is_terminal();

    match cli.command {
        Commands::Count(args) => {
            let color = config.color_mode.resolve(args.color_flag(), stdout_is_tty);
            colored::control::set_override(color);
            count::run(args, &config, &TiktokenCounter, &mut ProcessStdin, color)
        }
        Commands::Models(args) => {
            let color = config.color_mode.resolve(None, stdout_is_tty);
            colored::control::set_override(color);
            models_cmd::run(args, color)
        }
    }
}
