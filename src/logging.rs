use crate::error::{Result, ScoringError};
use tracing_subscriber::EnvFilter;

/// Installs a compact `fmt` subscriber. `RUST_LOG` wins when set and valid;
/// otherwise `default_filter` is used. Fails if a global subscriber is
/// already installed.
pub fn init(default_filter: &str) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(default_filter)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|e| ScoringError::Logging(e.to_string()))
}

fn build_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| {
        ScoringError::Logging(format!("invalid log filter '{directives}': {e}"))
    })
}
