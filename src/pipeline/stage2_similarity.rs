use crate::backend::SimilarityBackend;
use crate::model::scores::ScoreResult;
use crate::scoring::similarity_with_default;

#[derive(Debug, Clone)]
pub struct Stage2Output {
    pub scores: ScoreResult,
    pub failure: Option<String>,
}

pub struct Stage2Inputs<'a> {
    pub backend: &'a dyn SimilarityBackend,
    pub references: &'a [String],
    pub candidates: &'a [String],
    pub lang: &'a str,
}

pub fn run_stage2(inputs: &Stage2Inputs<'_>) -> Stage2Output {
    let outcome = similarity_with_default(
        inputs.backend,
        inputs.references,
        inputs.candidates,
        inputs.lang,
    );
    Stage2Output {
        scores: outcome.value,
        failure: outcome.failure,
    }
}
