//! Top navigation bar.
//!
//! Links only appear once a session exists, which also keeps the bar empty
//! on the login page. Logout clears the persisted session; the route guard
//! reacts to the signal change and redirects off any protected page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::SessionState;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let logged_in = move || session.get().session.is_some();
    let email = move || {
        session
            .get()
            .session
            .map(|s| s.email)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        crate::net::api::logout();
        session.update(|s| s.session = None);
    };

    view! {
        <nav class="navbar">
            <span class="navbar__brand">"Sentinel"</span>
            <Show when=logged_in>
                <div class="navbar__links">
                    <A href="/home">"Home"</A>
                    <A href="/analysis">"Analysis"</A>
                    <A href="/settings">"Settings"</A>
                    <A href="/users">"Users"</A>
                </div>
                <span class="navbar__user">{email}</span>
                <button class="navbar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
