use super::{total_tokens, OutputOptions, ResultItem};
use crate::tokens::Encoded;
use colored::*;

pub fn render(results: &[ResultItem], opts: &OutputOptions) -> String {
    if opts.total {
        return format!("{}\n", total_tokens(results));
    }

    let mut out = String::new();
    for r in results {
        let count = r.encoded.count();
        if opts.verbose {
            out.push_str(&verbose_line(&r.label, count, opts.color));
        } else {
            out.push_str(&count.to_string());
        }
        out.push('\n');

        if opts.show_tokens {
            out.push_str(&format!("  Tokens: {}\n", token_list(&r.encoded)));
        }
    }
    out
}

fn verbose_line(label: &str, count: usize, color: bool) -> String {
    if color {
        format!(
            "{} → {} tokens",
            label.cyan(),
            count.to_string().green().bold()
        )
    } else {
        format!("{} → {} tokens", label, count)
    }
}

fn token_list(encoded: &Encoded) -> String {
    match encoded {
        Encoded::Tokens(tokens) => format!("{:?}", tokens),
        Encoded::Count(n) => n.to_string(),
    }
}
