pub mod json;
pub mod plain;

use crate::error::Result;
use crate::tokens::Encoded;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub label: String,
    pub encoded: Encoded,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub as_json: bool,
    pub total: bool,
    pub verbose: bool,
    pub show_tokens: bool,
    pub color: bool,
}

#[derive(Serialize, Debug)]
pub struct TotalOutput {
    pub total_tokens: usize,
}

/// Sum of counts; token sequences contribute their length.
pub fn total_tokens(results: &[ResultItem]) -> usize {
    results.iter().map(|r| r.encoded.count()).sum()
}

/// Render every result into the text written to stdout.
pub fn render(results: &[ResultItem], opts: &OutputOptions) -> Result<String> {
    if opts.as_json {
        json::render(results, opts.total)
    } else {
        Ok(plain::render(results, opts))
    }
}
