//! Result rendering
//!
//! Turns a prediction, a bare status string, or an error message into a
//! [`DisplayState`]. All functions here are pure.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::PredictionResult;

/// Battery classification derived from a free-text status.
///
/// Matching is by substring, in the order Healthy, Weak, Failed; the first token found
/// wins. A status containing none of them is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Healthy,
    Weak,
    Failed,
    Unknown,
}

impl Classification {
    pub fn classify(status: &str) -> Self {
        if status.contains("Healthy") {
            Classification::Healthy
        } else if status.contains("Weak") {
            Classification::Weak
        } else if status.contains("Failed") {
            Classification::Failed
        } else {
            Classification::Unknown
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Classification::Healthy => Tone::Healthy,
            Classification::Weak => Tone::Weak,
            Classification::Failed => Tone::Failed,
            Classification::Unknown => Tone::Error,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Classification::Healthy => "✅",
            Classification::Weak => "⚠️",
            Classification::Failed => "🔋",
            Classification::Unknown => ERROR_ICON,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Classification::Healthy => "Battery Healthy",
            Classification::Weak => "Battery Weak",
            Classification::Failed => "Battery Failed",
            Classification::Unknown => "Unknown Status",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Healthy => write!(f, "Healthy"),
            Classification::Weak => write!(f, "Weak"),
            Classification::Failed => write!(f, "Failed"),
            Classification::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Visual styling of a result card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Healthy,
    Weak,
    Failed,
    Error,
}

impl Tone {
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Healthy => "result-healthy",
            Tone::Weak => "result-weak",
            Tone::Failed => "result-failed",
            Tone::Error => "result-error",
        }
    }
}

const ERROR_ICON: &str = "❌";
const ERROR_TITLE: &str = "Error";

/// One row of the probability breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbabilityRow {
    pub label: &'static str,
    pub tone: Tone,
    /// Percentage as displayed, e.g. `72%`
    pub value: String,
}

/// The detail sections of an enhanced result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionDetails {
    pub probabilities: Vec<ProbabilityRow>,
    /// `None` when the service reported no risk factors; the section is not shown
    pub risk_factors: Option<Vec<String>>,
    /// Always shown, even when empty
    pub recommendations: Vec<String>,
}

/// Everything a display surface needs to draw a result card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub classification: Option<Classification>,
    pub tone: Tone,
    pub icon: &'static str,
    pub title: &'static str,
    pub status: String,
    pub confidence: Option<String>,
    pub details: Option<PredictionDetails>,
}

/// Render a bare status with an optional confidence fraction (0.0 - 1.0)
pub fn render_basic(status: &str, confidence: Option<f64>) -> DisplayState {
    let classification = Classification::classify(status);
    DisplayState {
        classification: Some(classification),
        tone: classification.tone(),
        icon: classification.icon(),
        title: classification.title(),
        status: status.to_string(),
        confidence: confidence.map(|c| format!("Confidence: {:.1}%", c * 100.0)),
        details: None,
    }
}

/// Render a full prediction with probabilities, risk factors and recommendations
pub fn render_enhanced(result: &PredictionResult) -> DisplayState {
    let classification = Classification::classify(&result.status);
    let probabilities = vec![
        ProbabilityRow {
            label: "Healthy",
            tone: Tone::Healthy,
            value: percent(result.probabilities.healthy),
        },
        ProbabilityRow {
            label: "Weak",
            tone: Tone::Weak,
            value: percent(result.probabilities.weak),
        },
        ProbabilityRow {
            label: "Failed",
            tone: Tone::Failed,
            value: percent(result.probabilities.failed),
        },
    ];
    let risk_factors = if result.risk_factors.is_empty() {
        None
    } else {
        Some(result.risk_factors.clone())
    };

    DisplayState {
        classification: Some(classification),
        tone: classification.tone(),
        icon: classification.icon(),
        title: classification.title(),
        status: result.status.clone(),
        confidence: Some(format!("Confidence: {}", percent(result.confidence))),
        details: Some(PredictionDetails {
            probabilities,
            risk_factors,
            recommendations: result.recommendations.clone(),
        }),
    }
}

/// Render an error card showing `message` verbatim
pub fn render_error(message: &str) -> DisplayState {
    DisplayState {
        classification: None,
        tone: Tone::Error,
        icon: ERROR_ICON,
        title: ERROR_TITLE,
        status: message.to_string(),
        confidence: None,
        details: None,
    }
}

fn percent(value: f64) -> String {
    format!("{}%", value)
}
