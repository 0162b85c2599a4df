pub mod client;
pub mod fetch;

use serde::Serialize;

pub use client::new_blocking_client;
pub use fetch::{fetch_outcomes, fetch_response, fetch_responses, reply_or_placeholder};

pub const DEFAULT_CHAT_URL: &str = "http://localhost:3000/chat";
pub const NO_RESPONSE: &str = "No response.";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("undecodable response body: {0}")]
    Decode(String),
    #[error("empty response field")]
    EmptyResponse,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest<'a> {
    pub user_input: &'a str,
}
