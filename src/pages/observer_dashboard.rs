//! Observer landing page.

use leptos::prelude::*;

#[component]
pub fn ObserverDashboardPage() -> impl IntoView {
    view! {
        <div class="page page--observer">
            <h1>"Observer Dashboard"</h1>
        </div>
    }
}
