//! Submission lifecycle
//!
//! At most one prediction attempt is in flight. While it is, the submit trigger is
//! disabled and further submits are inert. Every attempt carries an id, and only the
//! outcome of the in-flight attempt is applied; anything else (a response that lost
//! the race against its timeout) is dropped.

use std::time::Duration;

use crate::error::SubmitError;
use crate::model::{FormInput, PredictionResult, RawFields};
use crate::render::{render_enhanced, render_error, DisplayState};
use crate::validator;

/// Identifies one submission attempt
pub type AttemptId = u64;

/// Joins validation messages into a single error card
pub const VALIDATION_SEPARATOR: &str = "\n";

/// What a submit trigger resolved to
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitDecision {
    /// An attempt is already in flight; nothing happened
    Busy,
    /// Validation failed; no request is made
    Rejected(DisplayState),
    /// Validation passed; issue exactly one request for this attempt
    Dispatch {
        attempt: AttemptId,
        input: FormInput,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    InFlight(AttemptId),
}

#[derive(Debug, Default)]
pub struct SubmissionController {
    phase: Phase,
    last_attempt: AttemptId,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The trigger is enabled whenever no attempt is in flight
    pub fn trigger_enabled(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn in_flight(&self) -> Option<AttemptId> {
        match self.phase {
            Phase::Idle => None,
            Phase::InFlight(attempt) => Some(attempt),
        }
    }

    pub fn submit(&mut self, fields: &RawFields) -> SubmitDecision {
        if let Phase::InFlight(_) = self.phase {
            return SubmitDecision::Busy;
        }

        match validator::parse(fields) {
            Err(errors) => SubmitDecision::Rejected(render_error(&errors.join(VALIDATION_SEPARATOR))),
            Ok(input) => {
                self.last_attempt += 1;
                self.phase = Phase::InFlight(self.last_attempt);
                SubmitDecision::Dispatch {
                    attempt: self.last_attempt,
                    input,
                }
            }
        }
    }

    /// Apply the outcome of `attempt`. Returns the display to show, or `None` when
    /// `attempt` is not the one in flight.
    pub fn resolve(
        &mut self,
        attempt: AttemptId,
        outcome: Result<PredictionResult, SubmitError>,
    ) -> Option<DisplayState> {
        if self.phase != Phase::InFlight(attempt) {
            return None;
        }
        self.phase = Phase::Idle;

        Some(match outcome {
            Ok(result) => render_enhanced(&result),
            Err(e) => render_error(&failure_message(&e)),
        })
    }

    /// Fail `attempt` because it exceeded `budget`
    pub fn time_out(&mut self, attempt: AttemptId, budget: Duration) -> Option<DisplayState> {
        self.resolve(attempt, Err(SubmitError::Timeout(budget)))
    }
}

/// User-facing text for a failed attempt
pub fn failure_message(error: &SubmitError) -> String {
    format!("Failed to analyze battery: {}", error)
}
