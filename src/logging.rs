use std::time::Instant;
use tracing::{info, warn, Level};

use crate::config::LoggingConfig;
use crate::error::{AppError, AppResult};

/// Install the global fmt subscriber at the configured level
pub fn init(config: &LoggingConfig) -> AppResult<()> {
    let level = parse_level(&config.level)?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .try_init()
        .map_err(|e| AppError::Internal(format!("Failed to install log subscriber: {}", e)))
}

pub fn parse_level(level: &str) -> AppResult<Level> {
    level
        .parse::<Level>()
        .map_err(|_| AppError::Configuration(format!("Unknown log level: {}", level)))
}

/// One line per service call, in the spirit of an access log
pub fn log_operation<T>(operation: &str, started: Instant, outcome: &AppResult<T>) {
    let elapsed_ms = started.elapsed().as_millis() as u64;
    match outcome {
        Ok(_) => info!(target: "user_service", operation, elapsed_ms, "ok"),
        Err(e) => warn!(
            target: "user_service",
            operation,
            elapsed_ms,
            kind = ?e.kind(),
            error = %e,
            "failed"
        ),
    }
}
