//! Battery Health Analyzer core
//!
//! Pure logic shared by the native client and the browser frontend: input
//! validation, result rendering, the submission lifecycle, and API status polling.
//! Nothing in this crate performs I/O. Adapters feed [`Event`]s into [`Ui::update`],
//! execute the returned [`Effect`]s, and commit the resulting state to a display.

pub mod controller;
pub mod error;
pub mod model;
pub mod poller;
pub mod render;
pub mod ui;
pub mod validator;

pub use controller::{AttemptId, SubmissionController, SubmitDecision};
pub use error::SubmitError;
pub use model::{FormInput, HealthReport, PredictionResult, Probabilities, RawFields};
pub use poller::{ApiStatus, ProbeOutcome, StatusIndicator, StatusPoller};
pub use render::{render_basic, render_enhanced, render_error, Classification, DisplayState, Tone};
pub use ui::{Effect, Event, ResultView, Ui};
pub use validator::{parse, validate, ValidationResult};

/// Path of the liveness endpoint, relative to the service origin
pub const HEALTH_PATH: &str = "/api/health";

/// Path of the prediction endpoint, relative to the service origin
pub const PREDICT_PATH: &str = "/api/predict";
