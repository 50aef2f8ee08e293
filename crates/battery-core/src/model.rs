//! Data exchanged with the user and with the prediction service

use serde::{Deserialize, Serialize};

use crate::error::SubmitError;

/// Field values exactly as entered, before any parsing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFields {
    pub voltage: String,
    pub current: String,
    pub temperature: String,
    pub age_months: String,
    pub resistance: String,
}

impl RawFields {
    pub fn new(
        voltage: impl Into<String>,
        current: impl Into<String>,
        temperature: impl Into<String>,
        age_months: impl Into<String>,
        resistance: impl Into<String>,
    ) -> Self {
        Self {
            voltage: voltage.into(),
            current: current.into(),
            temperature: temperature.into(),
            age_months: age_months.into(),
            resistance: resistance.into(),
        }
    }
}

/// Validated telemetry, serialized as the `/api/predict` request body.
///
/// Built by [`crate::validator::parse`]; never retained after the request is issued.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormInput {
    pub voltage: f64,
    pub current: f64,
    pub temperature: f64,
    pub age_months: u32,
    pub resistance: f64,
}

/// Three-way class probabilities, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Probabilities {
    pub healthy: f64,
    pub weak: f64,
    pub failed: f64,
}

/// Successful `/api/predict` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Free text; classified by substring, see [`crate::render::Classification`]
    pub status: String,
    pub confidence: f64,
    pub probabilities: Probabilities,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
    /// Class index (0 healthy, 1 weak, 2 failed) when the service reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<u8>,
}

impl PredictionResult {
    /// Parse a response body, mapping any shape mismatch to [`SubmitError::Malformed`]
    pub fn from_json(body: &str) -> Result<Self, SubmitError> {
        serde_json::from_str(body).map_err(|e| {
            SubmitError::Malformed(format!("could not parse prediction response: {}", e))
        })
    }
}

/// Optional body of `/api/health`. The poller ignores it; the CLI reports it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub model_loaded: Option<bool>,
}
