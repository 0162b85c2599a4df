use tracing::{debug, error};

use crate::backend::{BackendError, SimilarityBackend, SimilarityDistributions};
use crate::model::scores::{ScoreResult, clamp_non_negative, mean};
use crate::scoring::Defaulted;

pub const DEFAULT_LANG: &str = "en";
pub const REFERENCE_FALLBACK: &str = "No reference available.";
pub const CANDIDATE_FALLBACK: &str = "No candidate response.";

pub fn fill_blanks(texts: &[String], fallback: &str) -> Vec<String> {
    texts
        .iter()
        .map(|t| {
            if t.trim().is_empty() {
                fallback.to_string()
            } else {
                t.clone()
            }
        })
        .collect()
}

pub fn try_evaluate_similarity(
    backend: &dyn SimilarityBackend,
    references: &[String],
    candidates: &[String],
    lang: &str,
) -> Result<ScoreResult, BackendError> {
    debug!("Evaluating BERTScore...");
    if references.len() != candidates.len() {
        return Err(BackendError::LengthMismatch {
            what: "references vs candidates",
            left: references.len(),
            right: candidates.len(),
        });
    }
    if candidates.is_empty() {
        return Err(BackendError::EmptyInput);
    }

    let references = fill_blanks(references, REFERENCE_FALLBACK);
    let candidates = fill_blanks(candidates, CANDIDATE_FALLBACK);
    debug!("References: {references:?}");
    debug!("Candidates: {candidates:?}");

    let dists = backend.score(&candidates, &references, lang, true)?;
    check_shape(&dists, candidates.len())?;

    let result = ScoreResult {
        precision: clamp_non_negative(mean(&dists.precision)),
        recall: clamp_non_negative(mean(&dists.recall)),
        f1: clamp_non_negative(mean(&dists.f1)),
    };
    debug!(
        "BERTScore - Precision: {}, Recall: {}, F1: {}",
        result.precision, result.recall, result.f1
    );
    Ok(result)
}

pub fn similarity_with_default(
    backend: &dyn SimilarityBackend,
    references: &[String],
    candidates: &[String],
    lang: &str,
) -> Defaulted<ScoreResult> {
    match try_evaluate_similarity(backend, references, candidates, lang) {
        Ok(result) => Defaulted::ok(result),
        Err(err) => {
            error!("Error calculating BERTScore: {err}");
            Defaulted::substituted(ScoreResult::ZERO, &err)
        }
    }
}

pub fn evaluate_similarity(
    backend: &dyn SimilarityBackend,
    references: &[String],
    candidates: &[String],
    lang: &str,
) -> ScoreResult {
    similarity_with_default(backend, references, candidates, lang).value
}

fn check_shape(dists: &SimilarityDistributions, pairs: usize) -> Result<(), BackendError> {
    for (what, values) in [
        ("precision vs pairs", &dists.precision),
        ("recall vs pairs", &dists.recall),
        ("f1 vs pairs", &dists.f1),
    ] {
        if values.len() != pairs {
            return Err(BackendError::LengthMismatch {
                what,
                left: values.len(),
                right: pairs,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/similarity.rs"]
mod tests;
