//! Analysis page.

use leptos::prelude::*;

#[component]
pub fn AnalysisPage() -> impl IntoView {
    view! {
        <div class="page page--analysis">
            <h1>"Analysis"</h1>
        </div>
    }
}
