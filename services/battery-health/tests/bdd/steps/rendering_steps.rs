//! BDD step definitions for result rendering

use cucumber::{given, then, when};

use battery_core::{render_basic, render_enhanced, PredictionResult, Probabilities};

use crate::world::BatteryWorld;

#[given(expr = "a prediction with status {string} and confidence {float}")]
fn prediction(world: &mut BatteryWorld, status: String, confidence: f64) {
    world.prediction = Some(PredictionResult {
        status,
        confidence,
        probabilities: Probabilities {
            healthy: 10.0,
            weak: 72.0,
            failed: 18.0,
        },
        risk_factors: Vec::new(),
        recommendations: vec!["Monitor battery performance closely".to_string()],
        prediction: None,
    });
}

#[given(expr = "the prediction lists risk factor {string}")]
fn risk_factor(world: &mut BatteryWorld, factor: String) {
    let prediction = world.prediction.as_mut().expect("prediction not set");
    prediction.risk_factors.push(factor);
}

#[given("the prediction has no recommendations")]
fn no_recommendations(world: &mut BatteryWorld) {
    let prediction = world.prediction.as_mut().expect("prediction not set");
    prediction.recommendations.clear();
}

#[when("the prediction is rendered")]
fn render_prediction(world: &mut BatteryWorld) {
    let prediction = world.prediction.as_ref().expect("prediction not set");
    world.display = Some(render_enhanced(prediction));
}

#[when(expr = "the status {string} is rendered with confidence fraction {float}")]
fn render_status(world: &mut BatteryWorld, status: String, fraction: f64) {
    world.display = Some(render_basic(&status, Some(fraction)));
}

#[then(expr = "the card should be titled {string} with icon {string}")]
fn card_title(world: &mut BatteryWorld, title: String, icon: String) {
    let display = world.display.as_ref().expect("nothing rendered");
    assert_eq!(display.title, title);
    assert_eq!(display.icon, icon);
}

#[then(expr = "the card should use the {string} style")]
fn card_style(world: &mut BatteryWorld, class: String) {
    let display = world.display.as_ref().expect("nothing rendered");
    assert_eq!(display.tone.css_class(), class);
}

#[then(expr = "the card should show {string}")]
fn card_confidence(world: &mut BatteryWorld, confidence: String) {
    let display = world.display.as_ref().expect("nothing rendered");
    assert_eq!(display.confidence.as_deref(), Some(confidence.as_str()));
}

#[then(expr = "the probabilities should read {string}")]
fn card_probabilities(world: &mut BatteryWorld, expected: String) {
    let display = world.display.as_ref().expect("nothing rendered");
    let details = display.details.as_ref().expect("no detail sections");
    let rows: Vec<String> = details
        .probabilities
        .iter()
        .map(|row| format!("{} {}", row.label, row.value))
        .collect();
    assert_eq!(rows.join(" | "), expected);
}

#[then("the risk factor section should be hidden")]
fn risk_hidden(world: &mut BatteryWorld) {
    let display = world.display.as_ref().expect("nothing rendered");
    let details = display.details.as_ref().expect("no detail sections");
    assert!(details.risk_factors.is_none());
}

#[then(expr = "the risk factor section should list {string}")]
fn risk_listed(world: &mut BatteryWorld, factor: String) {
    let display = world.display.as_ref().expect("nothing rendered");
    let details = display.details.as_ref().expect("no detail sections");
    let factors = details.risk_factors.as_ref().expect("risk factors hidden");
    assert!(factors.contains(&factor), "factors: {factors:?}");
}

#[then(expr = "the recommendation section should be shown with {int} entries")]
fn recommendations_shown(world: &mut BatteryWorld, count: usize) {
    let display = world.display.as_ref().expect("nothing rendered");
    let details = display.details.as_ref().expect("no detail sections");
    assert_eq!(details.recommendations.len(), count);
}
