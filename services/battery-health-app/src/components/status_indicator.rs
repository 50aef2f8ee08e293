//! API status indicator component

use battery_core::ApiStatus;
use leptos::prelude::*;

use crate::analyzer::Analyzer;

/// Shows the last observed reachability of the prediction service
#[component]
pub fn ApiStatusIndicator(analyzer: Analyzer) -> impl IntoView {
    view! {
        <div class="api-status">
            {move || {
                let indicator = analyzer.status();
                view! {
                    <span class=indicator.css_class()>{indicator.label}</span>
                    {indicator.hint.map(|hint| view! { <br /><small>{hint}</small> })}
                    {(indicator.status == ApiStatus::Offline).then(|| {
                        view! {
                            <details>
                                <summary>"What can I do?"</summary>
                                <pre>{battery_core::poller::OFFLINE_INSTRUCTIONS}</pre>
                            </details>
                        }
                    })}
                }
            }}
        </div>
    }
}
