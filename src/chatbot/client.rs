use std::time::Duration;

use reqwest::blocking::Client;

// Calls wait as long as the peer takes; no timeout is applied.
pub fn new_blocking_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(None::<Duration>)
        .user_agent(concat!("chatbot-eval/", env!("CARGO_PKG_VERSION")))
        .build()
}
