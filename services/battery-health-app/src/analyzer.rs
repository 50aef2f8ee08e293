//! Reactive wrapper around the UI state machine
//!
//! The `Ui` lives in one signal. Components read it; only [`Analyzer::dispatch`]
//! writes it. Effects run as local tasks and timers that dispatch their completion.

use battery_core::{Effect, Event, RawFields, ResultView, StatusIndicator, Ui};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;

#[derive(Debug, Clone, Copy)]
pub struct Analyzer {
    ui: RwSignal<Ui>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            ui: RwSignal::new(Ui::default()),
        }
    }

    pub fn dispatch(self, event: Event) {
        let effects = self.ui.try_update(|ui| ui.update(event)).unwrap_or_default();
        for effect in effects {
            self.run(effect);
        }
    }

    pub fn submit(self, fields: RawFields) {
        self.dispatch(Event::Submit(fields));
    }

    /// Initial status check plus the repeating poll timer. Browser only.
    pub fn start(self) {
        let effects = self.ui.try_update(|ui| ui.start()).unwrap_or_default();
        for effect in effects {
            self.run(effect);
        }

        let interval = self.ui.with_untracked(|ui| ui.poll_interval());
        match set_interval_with_handle(move || self.dispatch(Event::PollTick), interval) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => leptos::logging::error!("Failed to start status polling: {:?}", e),
        }
    }

    fn run(self, effect: Effect) {
        match effect {
            Effect::Predict { attempt, input } => spawn_local(async move {
                let outcome = api::predict(&input).await;
                self.dispatch(Event::PredictionFinished { attempt, outcome });
            }),
            Effect::ScheduleTimeout { attempt, after } => {
                set_timeout(
                    move || self.dispatch(Event::PredictionTimedOut { attempt }),
                    after,
                );
            }
            Effect::Probe => spawn_local(async move {
                let outcome = api::probe().await;
                self.dispatch(Event::ProbeFinished(outcome));
            }),
        }
    }

    pub fn result(self) -> ResultView {
        self.ui.with(|ui| ui.result().clone())
    }

    pub fn status(self) -> StatusIndicator {
        self.ui.with(|ui| ui.status())
    }

    pub fn submit_enabled(self) -> bool {
        self.ui.with(|ui| ui.submit_enabled())
    }
}
