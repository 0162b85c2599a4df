pub mod fluency;
pub mod similarity;

pub use fluency::{
    MAX_SEQUENCE_LENGTH, evaluate_perplexity, perplexity_with_default, try_evaluate_perplexity,
};
pub use similarity::{
    DEFAULT_LANG, evaluate_similarity, similarity_with_default, try_evaluate_similarity,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Defaulted<T> {
    pub value: T,
    pub failure: Option<String>,
}

impl<T> Defaulted<T> {
    pub fn ok(value: T) -> Self {
        Self {
            value,
            failure: None,
        }
    }

    pub fn substituted(value: T, reason: &dyn std::fmt::Display) -> Self {
        Self {
            value,
            failure: Some(reason.to_string()),
        }
    }
}
