use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl ScoreResult {
    pub const ZERO: ScoreResult = ScoreResult {
        precision: 0.0,
        recall: 0.0,
        f1: 0.0,
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct FluencyScore {
    // Mean over scored candidates; NaN when `per_candidate` is empty.
    pub average: f64,
    pub per_candidate: Vec<f64>,
    pub skipped: usize,
}

impl FluencyScore {
    pub fn unscored() -> Self {
        Self {
            average: f64::NAN,
            per_candidate: Vec::new(),
            skipped: 0,
        }
    }

    pub fn scored(&self) -> usize {
        self.per_candidate.len()
    }
}

pub fn clamp_non_negative(v: f64) -> f64 {
    v.max(0.0)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
