use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashSet;

/// Every model name tiktoken-rs maps to an encoding directly. Kept sorted.
pub static EXACT_MODELS: &[&str] = &[
    "ada",
    "babbage",
    "babbage-002",
    "chatgpt-4o-latest",
    "code-cushman-001",
    "code-cushman-002",
    "code-davinci-001",
    "code-davinci-002",
    "code-davinci-edit-001",
    "code-search-ada-code-001",
    "code-search-babbage-code-001",
    "curie",
    "cushman-codex",
    "davinci",
    "davinci-002",
    "davinci-codex",
    "gpt-2",
    "gpt-3.5",
    "gpt-3.5-turbo",
    "gpt-35-turbo",
    "gpt-4",
    "gpt-4.1",
    "gpt-4o",
    "gpt-5",
    "gpt2",
    "o1",
    "o3",
    "o4",
    "text-ada-001",
    "text-babbage-001",
    "text-curie-001",
    "text-davinci-001",
    "text-davinci-002",
    "text-davinci-003",
    "text-davinci-edit-001",
    "text-embedding-3-large",
    "text-embedding-3-small",
    "text-embedding-ada-002",
    "text-search-ada-doc-001",
    "text-search-babbage-doc-001",
    "text-search-curie-doc-001",
    "text-search-davinci-doc-001",
    "text-similarity-ada-001",
    "text-similarity-babbage-001",
    "text-similarity-curie-001",
    "text-similarity-davinci-001",
];

/// Every family prefix tiktoken-rs resolves for dated, sized or fine-tuned
/// variants. Kept sorted.
pub static MODEL_PREFIXES: &[&str] = &[
    "chatgpt-4o-",
    "ft:babbage-002",
    "ft:davinci-002",
    "ft:gpt-3.5-turbo",
    "ft:gpt-4",
    "ft:gpt-4o",
    "gpt-3.5-turbo-",
    "gpt-35-turbo-",
    "gpt-4-",
    "gpt-4.1-",
    "gpt-4.5-",
    "gpt-4o-",
    "gpt-5-",
    "gpt-oss-",
    "o1-",
    "o3-",
    "o4-",
];

lazy_static! {
    static ref EXACT_SET: HashSet<&'static str> = EXACT_MODELS.iter().copied().collect();
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SupportedModels {
    pub exact_models: Vec<&'static str>,
    pub prefixes: Vec<&'static str>,
}

pub fn is_model_supported(name: &str) -> bool {
    if EXACT_SET.contains(name) {
        return true;
    }
    MODEL_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

pub fn supported_models() -> SupportedModels {
    SupportedModels {
        exact_models: EXACT_MODELS.to_vec(),
        prefixes: MODEL_PREFIXES.to_vec(),
    }
}
