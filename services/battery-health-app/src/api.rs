//! Client-side calls to the prediction service
//!
//! Requests go to the page's own origin. Outside the browser both calls fail
//! immediately, so server-side rendering never blocks on them.

use battery_core::{FormInput, PredictionResult, ProbeOutcome, SubmitError};

/// POST validated readings to the prediction endpoint
pub async fn predict(input: &FormInput) -> Result<PredictionResult, SubmitError> {
    #[cfg(feature = "browser")]
    {
        let url = endpoint(battery_core::PREDICT_PATH).map_err(SubmitError::Network)?;

        let response = gloo_net::http::Request::post(&url)
            .json(input)
            .map_err(|e| SubmitError::Network(format!("could not encode request: {}", e)))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(format!("{}", e)))?;

        let ok = response.ok();
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::Network(format!("{}", e)))?;

        if !ok {
            return Err(SubmitError::from_status(status, &body));
        }
        PredictionResult::from_json(&body)
    }

    #[cfg(not(feature = "browser"))]
    {
        let _ = input;
        Err(SubmitError::Network(
            "prediction requests are only made from the browser".to_string(),
        ))
    }
}

/// GET the liveness endpoint. Only the status code matters.
pub async fn probe() -> ProbeOutcome {
    #[cfg(feature = "browser")]
    {
        let url = match endpoint(battery_core::HEALTH_PATH) {
            Ok(url) => url,
            Err(e) => return ProbeOutcome::Unreachable(e),
        };
        match gloo_net::http::Request::get(&url).send().await {
            Ok(response) => ProbeOutcome::from_status(response.status()),
            Err(e) => ProbeOutcome::Unreachable(format!("{}", e)),
        }
    }

    #[cfg(not(feature = "browser"))]
    {
        ProbeOutcome::Unreachable("not running in a browser".to_string())
    }
}

#[cfg(feature = "browser")]
fn endpoint(path: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or("no window")?;
    let origin = window.location().origin().map_err(|e| format!("{:?}", e))?;
    Ok(format!("{}{}", origin, path))
}
