//! Failure taxonomy for a prediction attempt

use std::time::Duration;

use serde::Deserialize;

/// Why a prediction attempt failed after passing validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The request could not complete (connection refused, DNS, reset)
    #[error("Network error: {0}")]
    Network(String),

    /// The request did not complete within the attempt's time budget
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The service answered with a non-success status
    #[error("Server error: {status}{}", server_detail(.message))]
    Server { status: u16, message: Option<String> },

    /// Success status, but the body is not a prediction
    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Error body emitted by the prediction service alongside non-success statuses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl SubmitError {
    /// Build a server error from a non-success response, keeping the service's own
    /// explanation when the body carries one.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|b| b.error)
            .filter(|m| !m.is_empty());
        SubmitError::Server { status, message }
    }
}

fn server_detail(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(" ({})", m),
        None => String::new(),
    }
}
