use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::chatbot::{ChatRequest, FetchError, NO_RESPONSE};

pub fn fetch_response(client: &Client, url: &str, query: &str) -> Result<String, FetchError> {
    let response = client
        .post(url)
        .json(&ChatRequest { user_input: query })
        .send()?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.text()?;
    let value: Value =
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;
    let text = extract_reply(&value);
    if text.is_empty() {
        return Err(FetchError::EmptyResponse);
    }
    Ok(text.to_string())
}

pub fn extract_reply(value: &Value) -> &str {
    value
        .get("response")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("")
}

pub fn fetch_outcomes(
    client: &Client,
    url: &str,
    queries: &[String],
) -> Vec<Result<String, FetchError>> {
    debug!("Fetching responses from chatbot at {url}");
    let mut outcomes = Vec::with_capacity(queries.len());

    for query in queries {
        let outcome = fetch_response(client, url, query);
        match &outcome {
            Ok(text) => debug!("Query: {query}, Response: {text}"),
            Err(FetchError::Status(code)) => {
                warn!("Failed to fetch response for query '{query}': HTTP {code}")
            }
            Err(FetchError::EmptyResponse) => debug!("Query: {query}, Response: <empty>"),
            Err(err) => error!("Error fetching response for query '{query}': {err}"),
        }
        outcomes.push(outcome);
    }

    outcomes
}

pub fn reply_or_placeholder(outcome: Result<String, FetchError>) -> (String, Option<String>) {
    match outcome {
        Ok(text) => (text, None),
        Err(err) => (NO_RESPONSE.to_string(), Some(err.to_string())),
    }
}

pub fn fetch_responses(client: &Client, url: &str, queries: &[String]) -> Vec<String> {
    fetch_outcomes(client, url, queries)
        .into_iter()
        .map(|outcome| reply_or_placeholder(outcome).0)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/chatbot/fetch.rs"]
mod tests;
