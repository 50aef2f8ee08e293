//! BDD step definitions for API status polling

use cucumber::{then, when};

use battery_core::{ApiStatus, Event, ProbeOutcome, ResultView};

use crate::world::BatteryWorld;

#[when("the analyzer starts")]
fn analyzer_starts(world: &mut BatteryWorld) {
    let effects = world.ui.start();
    world.effects.extend(effects);
}

#[when("the poll timer fires")]
fn poll_timer_fires(world: &mut BatteryWorld) {
    world.apply(Event::PollTick);
}

#[when("the probe succeeds")]
fn probe_succeeds(world: &mut BatteryWorld) {
    world.apply(Event::ProbeFinished(ProbeOutcome::Reachable));
}

#[when(expr = "the probe fails with {string}")]
fn probe_fails(world: &mut BatteryWorld, reason: String) {
    world.apply(Event::ProbeFinished(ProbeOutcome::Unreachable(reason)));
}

#[when(expr = "the liveness endpoint answers status {int}")]
fn probe_answers(world: &mut BatteryWorld, status: u16) {
    world.apply(Event::ProbeFinished(ProbeOutcome::from_status(status)));
}

#[then(expr = "{int} probe(s) should have been issued")]
fn probes_issued(world: &mut BatteryWorld, expected: usize) {
    assert_eq!(world.probe_requests(), expected);
}

#[then(expr = "the API status should be {string}")]
fn api_status(world: &mut BatteryWorld, expected: String) {
    let status = match expected.as_str() {
        "checking" => ApiStatus::Checking,
        "online" => ApiStatus::Online,
        "offline" => ApiStatus::Offline,
        other => panic!("unknown status {other}"),
    };
    assert_eq!(world.ui.api_status(), status);
}

#[then(expr = "the status indicator should read {string}")]
fn indicator_label(world: &mut BatteryWorld, label: String) {
    assert_eq!(world.ui.status().label, label);
}

#[then(expr = "the status indicator hint should be {string}")]
fn indicator_hint(world: &mut BatteryWorld, hint: String) {
    assert_eq!(world.ui.status().hint, Some(hint.as_str()));
}

#[then("the status indicator should have no hint")]
fn indicator_no_hint(world: &mut BatteryWorld) {
    assert_eq!(world.ui.status().hint, None);
}

#[then("the result area should still be idle")]
fn result_idle(world: &mut BatteryWorld) {
    assert_eq!(world.ui.result(), &ResultView::Idle);
}
