//! Combined UI state machine
//!
//! `Ui::update` is the only way state changes. It takes one [`Event`], mutates the
//! display state, and returns the [`Effect`]s an adapter has to perform. Adapters
//! report effect completions back as further events.
//!
//! The result area and the submit trigger belong to the submission flow. The status
//! indicator belongs to the poller. No event from one flow touches the other's state.

use std::time::Duration;

use crate::controller::{AttemptId, SubmissionController, SubmitDecision};
use crate::error::SubmitError;
use crate::model::{FormInput, PredictionResult, RawFields};
use crate::poller::{ApiStatus, ProbeOutcome, StatusIndicator, StatusPoller};
use crate::render::DisplayState;

/// Default time budget for one prediction attempt
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Contents of the result area
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultView {
    #[default]
    Idle,
    Loading,
    Result(DisplayState),
    Error(DisplayState),
}

impl ResultView {
    pub fn display(&self) -> Option<&DisplayState> {
        match self {
            ResultView::Result(d) | ResultView::Error(d) => Some(d),
            ResultView::Idle | ResultView::Loading => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The user pressed submit with these field values
    Submit(RawFields),
    PredictionFinished {
        attempt: AttemptId,
        outcome: Result<PredictionResult, SubmitError>,
    },
    PredictionTimedOut {
        attempt: AttemptId,
    },
    /// The poll timer fired
    PollTick,
    ProbeFinished(ProbeOutcome),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// POST the input to the prediction endpoint and report `PredictionFinished`
    Predict {
        attempt: AttemptId,
        input: FormInput,
    },
    /// Report `PredictionTimedOut` for `attempt` once `after` has elapsed
    ScheduleTimeout {
        attempt: AttemptId,
        after: Duration,
    },
    /// GET the liveness endpoint and report `ProbeFinished`
    Probe,
}

#[derive(Debug)]
pub struct Ui {
    controller: SubmissionController,
    poller: StatusPoller,
    result: ResultView,
    request_timeout: Duration,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new(DEFAULT_REQUEST_TIMEOUT, StatusPoller::default())
    }
}

impl Ui {
    pub fn new(request_timeout: Duration, poller: StatusPoller) -> Self {
        Self {
            controller: SubmissionController::new(),
            poller,
            result: ResultView::Idle,
            request_timeout,
        }
    }

    /// Effects to run once when the surface comes up: the initial status check
    pub fn start(&mut self) -> Vec<Effect> {
        self.update(Event::PollTick)
    }

    pub fn update(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Submit(fields) => self.on_submit(&fields),
            Event::PredictionFinished { attempt, outcome } => {
                let failed = outcome.is_err();
                if let Some(display) = self.controller.resolve(attempt, outcome) {
                    self.show(display, failed);
                }
                Vec::new()
            }
            Event::PredictionTimedOut { attempt } => {
                if let Some(display) = self.controller.time_out(attempt, self.request_timeout) {
                    self.show(display, true);
                }
                Vec::new()
            }
            Event::PollTick => {
                self.poller.tick();
                vec![Effect::Probe]
            }
            Event::ProbeFinished(outcome) => {
                self.poller.observe(&outcome);
                Vec::new()
            }
        }
    }

    fn on_submit(&mut self, fields: &RawFields) -> Vec<Effect> {
        if !self.controller.trigger_enabled() {
            return Vec::new();
        }
        self.result = ResultView::Idle;

        match self.controller.submit(fields) {
            SubmitDecision::Busy => Vec::new(),
            SubmitDecision::Rejected(display) => {
                self.result = ResultView::Error(display);
                Vec::new()
            }
            SubmitDecision::Dispatch { attempt, input } => {
                self.result = ResultView::Loading;
                vec![
                    Effect::Predict { attempt, input },
                    Effect::ScheduleTimeout {
                        attempt,
                        after: self.request_timeout,
                    },
                ]
            }
        }
    }

    fn show(&mut self, display: DisplayState, failed: bool) {
        self.result = if failed {
            ResultView::Error(display)
        } else {
            ResultView::Result(display)
        };
    }

    pub fn result(&self) -> &ResultView {
        &self.result
    }

    pub fn submit_enabled(&self) -> bool {
        self.controller.trigger_enabled()
    }

    pub fn in_flight(&self) -> Option<AttemptId> {
        self.controller.in_flight()
    }

    pub fn api_status(&self) -> ApiStatus {
        self.poller.status()
    }

    pub fn status(&self) -> StatusIndicator {
        self.poller.indicator()
    }

    pub fn poll_interval(&self) -> Duration {
        self.poller.interval()
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}
