use tracing::{debug, error, warn};

use crate::backend::{BackendError, LanguageModel, LanguageModelHub};
use crate::model::scores::{FluencyScore, mean};
use crate::scoring::Defaulted;

pub const MAX_SEQUENCE_LENGTH: usize = 512;

// `exp(loss / n_tokens)`, where `loss` is already the per-token mean NLL.
pub fn sequence_perplexity(loss: f64, n_tokens: usize) -> f64 {
    (loss / n_tokens as f64).exp()
}

pub fn try_evaluate_perplexity(
    hub: &dyn LanguageModelHub,
    candidates: &[String],
    model_name: &str,
    max_length: usize,
) -> Result<FluencyScore, BackendError> {
    debug!("Evaluating Perplexity...");
    let model = hub.load(model_name)?;
    debug!("Loaded language model {}", model.name());

    let mut per_candidate = Vec::with_capacity(candidates.len());
    let mut skipped = 0usize;
    for candidate in candidates {
        if candidate.trim().is_empty() {
            warn!("Skipping empty candidate response.");
            skipped += 1;
            continue;
        }
        per_candidate.push(score_candidate(model.as_ref(), candidate, max_length)?);
    }

    let average = mean(&per_candidate);
    debug!("Average Perplexity: {average}");
    Ok(FluencyScore {
        average,
        per_candidate,
        skipped,
    })
}

pub fn perplexity_with_default(
    hub: &dyn LanguageModelHub,
    candidates: &[String],
    model_name: &str,
    max_length: usize,
) -> Defaulted<FluencyScore> {
    match try_evaluate_perplexity(hub, candidates, model_name, max_length) {
        Ok(score) => Defaulted::ok(score),
        Err(err) => {
            error!("Error calculating Perplexity: {err}");
            Defaulted::substituted(FluencyScore::unscored(), &err)
        }
    }
}

pub fn evaluate_perplexity(
    hub: &dyn LanguageModelHub,
    candidates: &[String],
    model_name: &str,
    max_length: usize,
) -> f64 {
    perplexity_with_default(hub, candidates, model_name, max_length)
        .value
        .average
}

fn score_candidate(
    model: &dyn LanguageModel,
    candidate: &str,
    max_length: usize,
) -> Result<f64, BackendError> {
    let ids = model.tokenize(candidate, max_length)?;
    if ids.is_empty() {
        return Err(BackendError::EmptyTokens);
    }
    let loss = model.loss(&ids)?;
    Ok(sequence_perplexity(loss, ids.len()))
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/fluency.rs"]
mod tests;
