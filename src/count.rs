use crate::cli::CountArgs;
use cntkn::config::Config;
use cntkn::error::{CntknError, Result};
use cntkn::input::{resolve_inputs, StdinSource};
use cntkn::output::{self, OutputOptions, ResultItem};
use cntkn::registry::is_model_supported;
use cntkn::tokens::{count_tokens, TokenCounter};
use tracing::debug;

pub fn run(
    args: CountArgs,
    config: &Config,
    counter: &dyn TokenCounter,
    stdin: &mut dyn StdinSource,
    color: bool,
) -> Result<()> {
    if let Some(out) = execute(&args, config, counter, stdin, color)? {
        print!("{}", out);
    }
    Ok(())
}

/// Everything `count` does short of printing. `None` means quiet mode.
/// Inputs are all materialized before any counting so a failure leaves
/// stdout untouched.
pub fn execute(
    args: &CountArgs,
    config: &Config,
    counter: &dyn TokenCounter,
    stdin: &mut dyn StdinSource,
    color: bool,
) -> Result<Option<String>> {
    let model = args
        .model
        .clone()
        .unwrap_or_else(|| config.default_model.clone());

    if !is_model_supported(&model) {
        return Err(CntknError::UnsupportedModel { model });
    }

    let inputs = resolve_inputs(&args.text, &args.files, stdin)?;
    if inputs.is_empty() {
        return Err(CntknError::NoInput);
    }

    debug!(model = %model, inputs = inputs.len(), "counting");
    let results = inputs
        .into_iter()
        .map(|item| -> Result<ResultItem> {
            let encoded = count_tokens(counter, &item.text, &model, args.tokens)?;
            Ok(ResultItem {
                label: item.label,
                encoded,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if args.quiet {
        return Ok(None);
    }

    let opts = OutputOptions {
        as_json: args.json,
        total: args.total,
        verbose: args.verbose,
        show_tokens: args.tokens,
        color,
    };
    output::render(&results, &opts).map(Some)
}
