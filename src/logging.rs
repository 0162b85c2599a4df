use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter '{filter}': {reason}")]
    Filter { filter: String, reason: String },
    #[error("logging already initialised: {0}")]
    AlreadyInitialised(String),
}

pub fn init_logging(default_level: &str) -> Result<(), LoggingError> {
    let filter = build_filter(default_level, std::env::var("RUST_LOG").ok().as_deref())?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialised(e.to_string()))
}

pub fn build_filter(default_level: &str, env_override: Option<&str>) -> Result<EnvFilter, LoggingError> {
    let directive = match env_override {
        Some(env) if !env.trim().is_empty() => env.to_string(),
        _ => format!("chatbot_eval={default_level},warn"),
    };
    EnvFilter::try_new(&directive).map_err(|e| LoggingError::Filter {
        filter: directive.clone(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/logging.rs"]
mod tests;
