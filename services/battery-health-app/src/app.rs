//! Main App component

use crate::analyzer::Analyzer;
use crate::components::battery_form::BatteryForm;
use crate::components::result_card::ResultArea;
use crate::components::status_indicator::ApiStatusIndicator;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let analyzer = Analyzer::new();
    // Effects only run in the browser, so polling never starts during SSR
    Effect::new(move |_| analyzer.start());

    view! {
        <Title text="Battery Health Analyzer" />
        <main>
            <h1>"🔋 Battery Health Analyzer"</h1>
            <ApiStatusIndicator analyzer=analyzer />
            <BatteryForm analyzer=analyzer />
            <ResultArea analyzer=analyzer />
        </main>
    }
}
