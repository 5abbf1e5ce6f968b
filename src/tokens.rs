use crate::error::{CntknError, Result};
use serde::Serialize;
use std::collections::HashMap;
use tiktoken_rs::tokenizer::{get_tokenizer, Tokenizer};
use tiktoken_rs::{
    cl100k_base_singleton, o200k_base_singleton, o200k_harmony_singleton, p50k_base_singleton,
    p50k_edit_singleton, r50k_base_singleton, CoreBPE, Rank,
};
use tracing::debug;

/// Either a bare count or the full token id sequence.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Encoded {
    Count(usize),
    Tokens(Vec<Rank>),
}

impl Encoded {
    pub fn count(&self) -> usize {
        match self {
            Encoded::Count(n) => *n,
            Encoded::Tokens(tokens) => tokens.len(),
        }
    }

    fn from_tokens(tokens: Vec<Rank>, return_tokens: bool) -> Self {
        if return_tokens {
            Encoded::Tokens(tokens)
        } else {
            Encoded::Count(tokens.len())
        }
    }
}

pub trait TokenCounter {
    fn encode(&self, text: &str, model: &str, return_tokens: bool) -> Result<Encoded>;
}

/// Shared, immutable BPE table for an encoding. Each table is built once
/// per process.
pub fn encoder_for(tokenizer: Tokenizer) -> &'static CoreBPE {
    match tokenizer {
        Tokenizer::O200kHarmony => o200k_harmony_singleton(),
        Tokenizer::O200kBase => o200k_base_singleton(),
        Tokenizer::Cl100kBase => cl100k_base_singleton(),
        Tokenizer::P50kBase => p50k_base_singleton(),
        Tokenizer::P50kEdit => p50k_edit_singleton(),
        Tokenizer::R50kBase | Tokenizer::Gpt2 => r50k_base_singleton(),
    }
}

/// Production counter backed by tiktoken-rs.
#[derive(Debug, Default, Clone, Copy)]
pub struct TiktokenCounter;

impl TokenCounter for TiktokenCounter {
    fn encode(&self, text: &str, model: &str, return_tokens: bool) -> Result<Encoded> {
        let tokenizer = get_tokenizer(model).ok_or_else(|| CntknError::ModelResolution {
            model: model.to_string(),
            reason: "no encoding registered for this name".to_string(),
        })?;
        debug!(model, ?tokenizer, "resolved encoding");

        let tokens = encoder_for(tokenizer).encode_ordinary(text);
        Ok(Encoded::from_tokens(tokens, return_tokens))
    }
}

/// Deterministic counter for tests: looks text up in a fixed table and
/// otherwise counts whitespace-separated words. Token ids are `0..count`.
#[derive(Debug, Default, Clone)]
pub struct FixedCounter {
    counts: HashMap<String, usize>,
}

impl FixedCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, text: &str, count: usize) -> Self {
        self.counts.insert(text.to_string(), count);
        self
    }
}

impl TokenCounter for FixedCounter {
    fn encode(&self, text: &str, _model: &str, return_tokens: bool) -> Result<Encoded> {
        let count = self
            .counts
            .get(text)
            .copied()
            .unwrap_or_else(|| text.split_whitespace().count());
        let tokens: Vec<Rank> = (0..count as Rank).collect();
        Ok(Encoded::from_tokens(tokens, return_tokens))
    }
}

/// Count tokens (or return them) for `text` under `model`.
pub fn count_tokens(
    counter: &dyn TokenCounter,
    text: &str,
    model: &str,
    return_tokens: bool,
) -> Result<Encoded> {
    counter.encode(text, model, return_tokens)
}
