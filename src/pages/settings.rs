//! Settings page.

use leptos::prelude::*;

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <div class="page page--settings">
            <h1>"Settings"</h1>
        </div>
    }
}
