use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::backend::{
    BackendError, LanguageModel, LanguageModelHub, SimilarityBackend, SimilarityDistributions,
};

#[derive(Debug, Serialize)]
struct BertScoreRequest<'a> {
    candidates: &'a [String],
    references: &'a [String],
    lang: &'a str,
    rescale_with_baseline: bool,
}

#[derive(Debug, Serialize)]
struct TokenizeRequest<'a> {
    text: &'a str,
    truncation: bool,
    max_length: usize,
}

#[derive(Debug, Deserialize)]
struct TokenizeReply {
    input_ids: Vec<u32>,
}

#[derive(Debug, Serialize)]
struct LossRequest<'a> {
    input_ids: &'a [u32],
    labels: &'a [u32],
}

#[derive(Debug, Deserialize)]
struct LossReply {
    loss: f64,
}

#[derive(Debug, Clone)]
pub struct HttpSimilarityBackend {
    client: Client,
    base_url: String,
}

impl HttpSimilarityBackend {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: trim_base(base_url),
        }
    }
}

impl SimilarityBackend for HttpSimilarityBackend {
    fn score(
        &self,
        candidates: &[String],
        references: &[String],
        lang: &str,
        rescale_with_baseline: bool,
    ) -> Result<SimilarityDistributions, BackendError> {
        let url = format!("{}/bertscore", self.base_url);
        debug!("Requesting similarity scores from {url}");
        let response = self
            .client
            .post(&url)
            .json(&BertScoreRequest {
                candidates,
                references,
                lang,
                rescale_with_baseline,
            })
            .send()?;
        decode(response)
    }
}

#[derive(Debug, Clone)]
pub struct HttpModelHub {
    client: Client,
    base_url: String,
}

impl HttpModelHub {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: trim_base(base_url),
        }
    }
}

impl LanguageModelHub for HttpModelHub {
    fn load(&self, model_name: &str) -> Result<Box<dyn LanguageModel>, BackendError> {
        let model_url = format!("{}/models/{}", self.base_url, model_name);
        debug!("Loading language model from {model_url}");
        let response = self.client.get(&model_url).send()?;
        check_status(response)?;
        Ok(Box::new(HttpLanguageModel {
            client: self.client.clone(),
            model_url,
            name: model_name.to_string(),
        }))
    }
}

#[derive(Debug, Clone)]
pub struct HttpLanguageModel {
    client: Client,
    model_url: String,
    name: String,
}

impl LanguageModel for HttpLanguageModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn tokenize(&self, text: &str, max_length: usize) -> Result<Vec<u32>, BackendError> {
        let response = self
            .client
            .post(format!("{}/tokenize", self.model_url))
            .json(&TokenizeRequest {
                text,
                truncation: true,
                max_length,
            })
            .send()?;
        let reply: TokenizeReply = decode(response)?;
        let mut ids = reply.input_ids;
        // Servers that ignore the truncation flag still get cut here.
        ids.truncate(max_length);
        Ok(ids)
    }

    fn loss(&self, input_ids: &[u32]) -> Result<f64, BackendError> {
        let response = self
            .client
            .post(format!("{}/loss", self.model_url))
            .json(&LossRequest {
                input_ids,
                labels: input_ids,
            })
            .send()?;
        // JSON has no infinity, so a diverged loss surfaces as Malformed.
        let reply: LossReply = decode(response)?;
        Ok(reply.loss)
    }
}

fn trim_base(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

fn check_status(response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(BackendError::Status {
        status: status.as_u16(),
        body,
    })
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
    let body = check_status(response)?.text()?;
    serde_json::from_str(&body).map_err(|e| BackendError::Malformed(e.to_string()))
}

#[cfg(test)]
#[path = "../../tests/src_inline/backend/http.rs"]
mod tests;
