//! API status polling
//!
//! The poller owns only the status indicator. Each probe completion overwrites the
//! indicator with what that probe observed, so overlapping probes resolve as last
//! write wins.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Interval between liveness probes
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

pub const OFFLINE_HINT: &str = "Check deployment status";

/// Remediation steps offered when the service is unreachable
pub const OFFLINE_INSTRUCTIONS: &str = "The prediction API is managed by its deployment platform.
If it stays offline:
1. Check your internet connection
2. Verify the deployment is active
3. Contact support if issues persist";

/// Reachability of the prediction service as last observed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiStatus {
    /// No probe has completed yet
    #[default]
    Checking,
    Online,
    Offline,
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiStatus::Checking => write!(f, "Checking"),
            ApiStatus::Online => write!(f, "Online"),
            ApiStatus::Offline => write!(f, "Offline"),
        }
    }
}

/// Result of one liveness probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Reachable,
    Unreachable(String),
}

impl ProbeOutcome {
    /// Any 2xx status counts as reachable
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            ProbeOutcome::Reachable
        } else {
            ProbeOutcome::Unreachable(format!("HTTP {}", status))
        }
    }

    pub fn status(&self) -> ApiStatus {
        match self {
            ProbeOutcome::Reachable => ApiStatus::Online,
            ProbeOutcome::Unreachable(_) => ApiStatus::Offline,
        }
    }
}

/// What the status region shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusIndicator {
    pub status: ApiStatus,
    pub label: &'static str,
    pub hint: Option<&'static str>,
}

impl StatusIndicator {
    pub fn for_status(status: ApiStatus) -> Self {
        match status {
            ApiStatus::Checking => Self {
                status,
                label: "⏳ Checking API...",
                hint: None,
            },
            ApiStatus::Online => Self {
                status,
                label: "✅ API Online",
                hint: None,
            },
            ApiStatus::Offline => Self {
                status,
                label: "❌ API Offline",
                hint: Some(OFFLINE_HINT),
            },
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.status {
            ApiStatus::Checking => "api-status",
            ApiStatus::Online => "api-status api-online",
            ApiStatus::Offline => "api-status api-offline",
        }
    }
}

#[derive(Debug)]
pub struct StatusPoller {
    status: ApiStatus,
    interval: Duration,
    probes_sent: u64,
}

impl Default for StatusPoller {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}

impl StatusPoller {
    pub fn new(interval: Duration) -> Self {
        Self {
            status: ApiStatus::Checking,
            interval,
            probes_sent: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn status(&self) -> ApiStatus {
        self.status
    }

    pub fn probes_sent(&self) -> u64 {
        self.probes_sent
    }

    /// Record that a probe is being issued
    pub fn tick(&mut self) {
        self.probes_sent += 1;
    }

    /// Apply a probe outcome; returns true if the indicator changed
    pub fn observe(&mut self, outcome: &ProbeOutcome) -> bool {
        let next = outcome.status();
        let changed = self.status != next;
        self.status = next;
        changed
    }

    pub fn indicator(&self) -> StatusIndicator {
        StatusIndicator::for_status(self.status)
    }
}
