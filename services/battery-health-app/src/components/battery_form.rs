//! Telemetry input form

use battery_core::RawFields;
use leptos::prelude::*;

use crate::analyzer::Analyzer;

/// The five reading inputs and the submit trigger.
///
/// Values are passed to the analyzer as typed; validation happens there.
#[component]
pub fn BatteryForm(analyzer: Analyzer) -> impl IntoView {
    let voltage = RwSignal::new(String::new());
    let current = RwSignal::new(String::new());
    let temperature = RwSignal::new(String::new());
    let age_months = RwSignal::new(String::new());
    let resistance = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        analyzer.submit(RawFields {
            voltage: voltage.get_untracked(),
            current: current.get_untracked(),
            temperature: temperature.get_untracked(),
            age_months: age_months.get_untracked(),
            resistance: resistance.get_untracked(),
        });
    };

    view! {
        <form class="battery-form" on:submit=on_submit>
            <ReadingInput label="Voltage (V)" placeholder="12.6" value=voltage />
            <ReadingInput label="Current (A)" placeholder="1.5" value=current />
            <ReadingInput label="Temperature (°C)" placeholder="25" value=temperature />
            <ReadingInput label="Age (months)" placeholder="12" value=age_months />
            <ReadingInput label="Internal Resistance (Ω)" placeholder="0.03" value=resistance />
            <button type="submit" disabled=move || !analyzer.submit_enabled()>
                "Analyze Battery"
            </button>
        </form>
    }
}

#[component]
fn ReadingInput(
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label>
            {label}
            <input type="text" inputmode="decimal" placeholder=placeholder bind:value=value />
        </label>
    }
}
