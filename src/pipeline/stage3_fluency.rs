use crate::backend::LanguageModelHub;
use crate::scoring::perplexity_with_default;

#[derive(Debug, Clone)]
pub struct Stage3Output {
    pub perplexity: f64,
    pub per_candidate: Vec<f64>,
    pub scored: usize,
    pub skipped: usize,
    pub failure: Option<String>,
}

pub struct Stage3Inputs<'a> {
    pub hub: &'a dyn LanguageModelHub,
    pub candidates: &'a [String],
    pub model_name: &'a str,
    pub max_length: usize,
}

pub fn run_stage3(inputs: &Stage3Inputs<'_>) -> Stage3Output {
    let outcome = perplexity_with_default(
        inputs.hub,
        inputs.candidates,
        inputs.model_name,
        inputs.max_length,
    );
    Stage3Output {
        perplexity: outcome.value.average,
        scored: outcome.value.scored(),
        per_candidate: outcome.value.per_candidate,
        skipped: outcome.value.skipped,
        failure: outcome.failure,
    }
}
