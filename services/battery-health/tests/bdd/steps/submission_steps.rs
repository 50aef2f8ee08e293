//! BDD step definitions for the submission lifecycle

use cucumber::{given, then, when};

use battery_core::{
    Event, PredictionResult, Probabilities, RawFields, ResultView, SubmitError, Tone,
};

use crate::world::BatteryWorld;

fn valid_readings() -> RawFields {
    RawFields::new("12.6", "1.5", "25", "12", "0.03")
}

fn prediction(status: &str) -> PredictionResult {
    PredictionResult {
        status: status.to_string(),
        confidence: 72.3,
        probabilities: Probabilities {
            healthy: 10.0,
            weak: 72.0,
            failed: 18.0,
        },
        risk_factors: vec![],
        recommendations: vec!["Consider replacement soon".to_string()],
        prediction: None,
    }
}

#[given("a fresh analyzer")]
fn fresh_analyzer(world: &mut BatteryWorld) {
    world.ui = Default::default();
    world.effects.clear();
    world.attempts.clear();
}

#[given("a prediction is in flight")]
fn prediction_in_flight(world: &mut BatteryWorld) {
    world.apply(Event::Submit(valid_readings()));
    assert!(world.ui.in_flight().is_some());
}

#[when("the user submits valid readings")]
fn submit_valid(world: &mut BatteryWorld) {
    world.apply(Event::Submit(valid_readings()));
}

#[when("the user submits valid readings again")]
fn submit_again(world: &mut BatteryWorld) {
    world.apply(Event::Submit(valid_readings()));
}

#[when("the user submits an empty form")]
fn submit_empty(world: &mut BatteryWorld) {
    world.apply(Event::Submit(RawFields::default()));
}

#[when(expr = "the service answers with a {string} prediction")]
fn service_answers(world: &mut BatteryWorld, status: String) {
    let attempt = world.last_attempt();
    world.apply(Event::PredictionFinished {
        attempt,
        outcome: Ok(prediction(&status)),
    });
}

#[when(expr = "the service fails with status {int}")]
fn service_fails(world: &mut BatteryWorld, status: u16) {
    let attempt = world.last_attempt();
    world.apply(Event::PredictionFinished {
        attempt,
        outcome: Err(SubmitError::from_status(status, "")),
    });
}

#[when("the request cannot reach the service")]
fn service_unreachable(world: &mut BatteryWorld) {
    let attempt = world.last_attempt();
    world.apply(Event::PredictionFinished {
        attempt,
        outcome: Err(SubmitError::Network("connection refused".to_string())),
    });
}

#[when("the attempt times out")]
fn attempt_times_out(world: &mut BatteryWorld) {
    let attempt = world.last_attempt();
    world.apply(Event::PredictionTimedOut { attempt });
}

#[when(expr = "a late {string} response arrives for the first attempt")]
fn late_response(world: &mut BatteryWorld, status: String) {
    let attempt = *world.attempts.first().expect("no prediction request issued");
    world.apply(Event::PredictionFinished {
        attempt,
        outcome: Ok(prediction(&status)),
    });
}

#[then(expr = "{int} prediction request(s) should have been issued")]
fn requests_issued(world: &mut BatteryWorld, expected: usize) {
    assert_eq!(world.predict_requests(), expected);
}

#[then("a timeout should be scheduled for the attempt")]
fn timeout_scheduled(world: &mut BatteryWorld) {
    let attempt = world.last_attempt();
    assert!(world.effects.iter().any(|e| matches!(
        e,
        battery_core::Effect::ScheduleTimeout { attempt: a, .. } if *a == attempt
    )));
}

#[then("the submit control should be disabled")]
fn submit_disabled(world: &mut BatteryWorld) {
    assert!(!world.ui.submit_enabled());
}

#[then("the submit control should be enabled")]
fn submit_enabled(world: &mut BatteryWorld) {
    assert!(world.ui.submit_enabled());
}

#[then("the result area should show the loading indicator")]
fn result_loading(world: &mut BatteryWorld) {
    assert_eq!(world.ui.result(), &ResultView::Loading);
}

#[then(expr = "the result area should show {string}")]
fn result_title(world: &mut BatteryWorld, title: String) {
    match world.ui.result() {
        ResultView::Result(display) => assert_eq!(display.title, title),
        other => panic!("expected a result card, got {other:?}"),
    }
}

#[then(expr = "the result area should show an error containing {string}")]
fn result_error(world: &mut BatteryWorld, text: String) {
    match world.ui.result() {
        ResultView::Error(display) => {
            assert_eq!(display.tone, Tone::Error);
            assert!(display.status.contains(&text), "status: {}", display.status);
        }
        other => panic!("expected an error card, got {other:?}"),
    }
}
