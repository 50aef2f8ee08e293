//! Result area component

use battery_core::render::PredictionDetails;
use battery_core::{DisplayState, ResultView};
use leptos::prelude::*;

use crate::analyzer::Analyzer;

/// Loading indicator, result card, error card, or nothing
#[component]
pub fn ResultArea(analyzer: Analyzer) -> impl IntoView {
    view! {
        <section class="result-section">
            {move || match analyzer.result() {
                ResultView::Idle => ().into_any(),
                ResultView::Loading => {
                    view! { <div class="loading">"⏳ Analyzing battery..."</div> }.into_any()
                }
                ResultView::Result(display) | ResultView::Error(display) => {
                    view! { <ResultCard display=display /> }.into_any()
                }
            }}
        </section>
    }
}

/// CSS classes for a card, e.g. `result-card result-weak`
pub fn card_class(display: &DisplayState) -> String {
    format!("result-card {}", display.tone.css_class())
}

#[component]
fn ResultCard(display: DisplayState) -> impl IntoView {
    let class = card_class(&display);
    let status_lines = display
        .status
        .lines()
        .map(|line| view! { <div>{line.to_string()}</div> })
        .collect::<Vec<_>>();

    view! {
        <div class=class>
            <div class="result-icon">{display.icon}</div>
            <div class="result-title">{display.title}</div>
            <div class="result-status">{status_lines}</div>
            {display.confidence.map(|c| view! { <div class="confidence">{c}</div> })}
            {display.details.map(|details| view! { <Details details=details /> })}
        </div>
    }
}

#[component]
fn Details(details: PredictionDetails) -> impl IntoView {
    view! {
        <div class="probabilities-grid">
            {details
                .probabilities
                .into_iter()
                .map(|row| {
                    let class = format!("prob-item {}", row.label.to_lowercase());
                    view! {
                        <div class=class>
                            <span class="prob-label">{row.label}</span>
                            <span class="prob-value">{row.value}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
        {details.risk_factors.map(|factors| {
            view! {
                <div class="risk-factors">
                    <h4>"⚠️ Risk Factors"</h4>
                    <ul>{factors.into_iter().map(|f| view! { <li>{f}</li> }).collect::<Vec<_>>()}</ul>
                </div>
            }
        })}
        <div class="recommendations">
            <h4>"💡 Recommendations"</h4>
            <ul>
                {details
                    .recommendations
                    .into_iter()
                    .map(|r| view! { <li>{r}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
