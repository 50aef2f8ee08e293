//! BDD test world for the battery health client

use battery_core::{
    AttemptId, DisplayState, Effect, PredictionResult, RawFields, Ui, ValidationResult,
};
use cucumber::World;

#[derive(Debug, Default, World)]
pub struct BatteryWorld {
    // Validation
    pub fields: RawFields,
    pub validation: Option<ValidationResult>,

    // Rendering
    pub prediction: Option<PredictionResult>,
    pub display: Option<DisplayState>,

    // Submission and polling, driven through the UI state machine
    pub ui: Ui,
    pub effects: Vec<Effect>,
    pub attempts: Vec<AttemptId>,
}

impl BatteryWorld {
    /// Feed an event and keep every effect the UI asked for
    pub fn apply(&mut self, event: battery_core::Event) {
        let effects = self.ui.update(event);
        for effect in &effects {
            if let Effect::Predict { attempt, .. } = effect {
                self.attempts.push(*attempt);
            }
        }
        self.effects.extend(effects);
    }

    pub fn last_attempt(&self) -> AttemptId {
        *self.attempts.last().expect("no prediction request issued")
    }

    pub fn predict_requests(&self) -> usize {
        self.effects
            .iter()
            .filter(|e| matches!(e, Effect::Predict { .. }))
            .count()
    }

    pub fn probe_requests(&self) -> usize {
        self.effects
            .iter()
            .filter(|e| matches!(e, Effect::Probe))
            .count()
    }
}
