pub mod http;

use serde::{Deserialize, Serialize};

pub use self::http::{HttpModelHub, HttpSimilarityBackend};

pub const DEFAULT_MODEL_SERVER: &str = "http://localhost:8000";
pub const DEFAULT_LANGUAGE_MODEL: &str = "gpt2";

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("model server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed model server reply: {0}")]
    Malformed(String),
    #[error("length mismatch: {what} ({left} vs {right})")]
    LengthMismatch {
        what: &'static str,
        left: usize,
        right: usize,
    },
    #[error("nothing to score")]
    EmptyInput,
    #[error("tokenizer produced no tokens")]
    EmptyTokens,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilarityDistributions {
    pub precision: Vec<f64>,
    pub recall: Vec<f64>,
    pub f1: Vec<f64>,
}

pub trait SimilarityBackend {
    fn score(
        &self,
        candidates: &[String],
        references: &[String],
        lang: &str,
        rescale_with_baseline: bool,
    ) -> Result<SimilarityDistributions, BackendError>;
}

pub trait LanguageModelHub {
    fn load(&self, model_name: &str) -> Result<Box<dyn LanguageModel>, BackendError>;
}

pub trait LanguageModel {
    fn name(&self) -> &str;

    fn tokenize(&self, text: &str, max_length: usize) -> Result<Vec<u32>, BackendError>;

    // Mean token negative log-likelihood of one forward pass, with the
    // ids used as both input and labels. No gradient state is kept.
    fn loss(&self, input_ids: &[u32]) -> Result<f64, BackendError>;
}
