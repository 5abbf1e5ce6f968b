use crate::cli::ModelsArgs;
use cntkn::error::Result;
use cntkn::registry::{supported_models, SupportedModels};
use colored::*;

pub fn run(args: ModelsArgs, color: bool) -> Result<()> {
    print!("{}", render(&args, &supported_models(), color)?);
    Ok(())
}

fn render(args: &ModelsArgs, models: &SupportedModels, color: bool) -> Result<String> {
    if args.json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(models)?));
    }

    let heading = |s: &str| {
        if color {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    };

    let mut out = format!("{}\n", heading("Exact models:"));
    for model in &models.exact_models {
        out.push_str(&format!("  - {}\n", model));
    }
    out.push_str(&format!("\n{}\n", heading("Model name prefixes (allowed):")));
    for prefix in &models.prefixes {
        out.push_str(&format!("  - {}*\n", prefix));
    }
    Ok(out)
}
