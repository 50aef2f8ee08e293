//! Error types for the battery health client

/// Errors that can occur in the battery health client
#[derive(Debug, thiserror::Error)]
pub enum BatteryHealthError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for battery health client operations
pub type Result<T> = std::result::Result<T, BatteryHealthError>;
