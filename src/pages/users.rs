//! User management page. Admin-only via the route table.

use leptos::prelude::*;

#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <div class="page page--users">
            <h1>"Users"</h1>
        </div>
    }
}
