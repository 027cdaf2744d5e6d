//! Operator landing page.

use leptos::prelude::*;

#[component]
pub fn OperatorDashboardPage() -> impl IntoView {
    view! {
        <div class="page page--operator">
            <h1>"Operator Dashboard"</h1>
        </div>
    }
}
