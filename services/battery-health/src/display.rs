//! Terminal display surface
//!
//! Commits the two display regions, status indicator and result card, as text.

use std::io::Write;

use battery_core::render::PredictionDetails;
use battery_core::{DisplayState, ResultView, StatusIndicator};

/// Somewhere the session commits its display regions to
pub trait Surface: Send {
    fn show_status(&mut self, indicator: &StatusIndicator);

    fn show_result(&mut self, view: &ResultView);
}

/// Writes each region update to a terminal stream
pub struct TerminalSurface<W: Write + Send> {
    out: W,
}

impl TerminalSurface<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write + Send> Surface for TerminalSurface<W> {
    fn show_status(&mut self, indicator: &StatusIndicator) {
        let text = format_status(indicator);
        self.write(&text);
    }

    fn show_result(&mut self, view: &ResultView) {
        match view {
            ResultView::Idle => {}
            ResultView::Loading => self.write("⏳ Analyzing battery..."),
            ResultView::Result(display) | ResultView::Error(display) => {
                let text = format_card(display);
                self.write(&text);
            }
        }
    }
}

pub fn format_status(indicator: &StatusIndicator) -> String {
    match indicator.hint {
        Some(hint) => format!("{} ({})", indicator.label, hint),
        None => indicator.label.to_string(),
    }
}

/// Lay out a result card as plain text
pub fn format_card(display: &DisplayState) -> String {
    let mut lines = vec![format!("{} {}", display.icon, display.title)];
    lines.extend(display.status.lines().map(|l| format!("   {}", l)));
    if let Some(confidence) = &display.confidence {
        lines.push(format!("   {}", confidence));
    }
    if let Some(details) = &display.details {
        format_details(details, &mut lines);
    }
    lines.join("\n")
}

fn format_details(details: &PredictionDetails, lines: &mut Vec<String>) {
    let probabilities: Vec<String> = details
        .probabilities
        .iter()
        .map(|p| format!("{} {}", p.label, p.value))
        .collect();
    lines.push(format!("   Probabilities: {}", probabilities.join(" | ")));

    if let Some(risk_factors) = &details.risk_factors {
        lines.push("   ⚠️ Risk Factors".to_string());
        lines.extend(risk_factors.iter().map(|r| format!("     - {}", r)));
    }

    lines.push("   💡 Recommendations".to_string());
    lines.extend(details.recommendations.iter().map(|r| format!("     - {}", r)));
}
