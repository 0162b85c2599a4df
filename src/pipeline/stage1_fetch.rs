use reqwest::blocking::Client;

use crate::chatbot::{fetch_outcomes, reply_or_placeholder};

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub candidates: Vec<String>,
    pub failures: Vec<Option<String>>,
}

impl Stage1Output {
    pub fn n_failed(&self) -> usize {
        self.failures.iter().filter(|f| f.is_some()).count()
    }
}

pub fn run_stage1(client: &Client, url: &str, queries: &[String]) -> Stage1Output {
    let (candidates, failures) = fetch_outcomes(client, url, queries)
        .into_iter()
        .map(reply_or_placeholder)
        .unzip();
    Stage1Output {
        candidates,
        failures,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_fetch.rs"]
mod tests;
