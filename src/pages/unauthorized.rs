//! Redirect target for denied navigation attempts.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="page page--unauthorized">
            <h1>"Unauthorized"</h1>
            <p>"Your access level does not permit this page."</p>
            <A href="/">"Back to login"</A>
        </div>
    }
}
