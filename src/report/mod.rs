pub mod json;
pub mod text;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSettings {
    pub chat_url: String,
    pub model_server: String,
    pub lang: String,
    pub model: String,
    pub max_length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub query: String,
    pub reference: String,
    pub candidate: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch_failure: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilaritySection {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerplexitySection {
    // `None` stands for the NaN sentinel, which JSON cannot carry.
    pub average: Option<f64>,
    pub per_candidate: Vec<f64>,
    pub scored: usize,
    pub skipped: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl PerplexitySection {
    pub fn average_or_nan(&self) -> f64 {
        self.average.unwrap_or(f64::NAN)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalSummary {
    pub tool: ToolMeta,
    pub settings: RunSettings,
    pub cases: Vec<CaseRecord>,
    pub similarity: SimilaritySection,
    pub perplexity: PerplexitySection,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn format_metric(v: f64) -> String {
    if v.is_nan() {
        "nan".to_string()
    } else if v == f64::INFINITY {
        "inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{:.4}", v)
    }
}

pub fn finite_or_none(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
