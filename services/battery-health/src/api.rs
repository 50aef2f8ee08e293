//! Prediction service client

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use battery_core::{
    FormInput, HealthReport, PredictionResult, ProbeOutcome, SubmitError, HEALTH_PATH,
    PREDICT_PATH,
};

use crate::io::HttpClient;
use crate::BatteryHealthError;

/// The two calls the client makes against the prediction service
#[async_trait]
pub trait PredictionService: Send + Sync + std::fmt::Debug {
    /// Request a classification for validated telemetry
    async fn predict(&self, input: &FormInput) -> Result<PredictionResult, SubmitError>;

    /// Check whether the service is reachable. Never fails; failures are `Unreachable`.
    async fn probe(&self) -> ProbeOutcome;
}

/// [`PredictionService`] speaking JSON over HTTP
pub struct HttpPredictionService {
    base_url: String,
    probe_timeout: Duration,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for HttpPredictionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpPredictionService")
            .field("base_url", &self.base_url)
            .field("probe_timeout", &self.probe_timeout)
            .finish()
    }
}

impl HttpPredictionService {
    pub fn new(base_url: &str, probe_timeout: Duration, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        tracing::debug!("Created HttpPredictionService at {}", base_url);
        Self {
            base_url,
            probe_timeout,
            http,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl PredictionService for HttpPredictionService {
    async fn predict(&self, input: &FormInput) -> Result<PredictionResult, SubmitError> {
        let url = self.url(PREDICT_PATH);
        let body = serde_json::to_value(input)
            .map_err(|e| SubmitError::Network(format!("could not encode request: {}", e)))?;
        tracing::debug!("Requesting prediction from {}: {}", url, body);

        let response = self
            .http
            .post_json(&url, &body)
            .await
            .map_err(|e| match e {
                BatteryHealthError::Http(msg) => SubmitError::Network(msg),
                other => SubmitError::Network(other.to_string()),
            })?;

        if !(200..300).contains(&response.status) {
            tracing::debug!(
                "Non-success response from {}: status={}",
                url,
                response.status
            );
            return Err(SubmitError::from_status(response.status, &response.body));
        }

        PredictionResult::from_json(&response.body)
    }

    async fn probe(&self) -> ProbeOutcome {
        let url = self.url(HEALTH_PATH);
        tracing::debug!("Probing {}", url);

        match tokio::time::timeout(self.probe_timeout, self.http.get(&url)).await {
            Err(_) => {
                tracing::debug!(
                    "Probe of {} timed out after {:?}",
                    url,
                    self.probe_timeout
                );
                ProbeOutcome::Unreachable(format!("timed out after {:?}", self.probe_timeout))
            }
            Ok(Err(e)) => {
                tracing::debug!("Failed to probe {}: {}", url, e);
                ProbeOutcome::Unreachable(e.to_string())
            }
            Ok(Ok(response)) => {
                let outcome = ProbeOutcome::from_status(response.status);
                if outcome == ProbeOutcome::Reachable {
                    if let Ok(report) = serde_json::from_str::<HealthReport>(&response.body) {
                        tracing::debug!(
                            "Service {:?} version {:?} model_loaded={:?}",
                            report.service,
                            report.version,
                            report.model_loaded
                        );
                    }
                }
                outcome
            }
        }
    }
}
