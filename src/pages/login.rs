//! Login page driving the session-establishment protocol.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{self, AuthError, Credentials};
use crate::state::session::SessionState;

/// Login form. On full success the user lands on their role's page; a
/// failed role resolution sends them silently back here, everything else
/// is inline error text.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let navigate = use_navigate();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        // One attempt in flight at a time; a double submit is ignored.
        if pending.get_untracked() {
            return;
        }

        let user_email = email.get_untracked();
        let user_password = password.get_untracked();
        if user_email.trim().is_empty() || user_password.is_empty() {
            error_message.set("Email and password are required.".to_owned());
            return;
        }

        error_message.set(String::new());
        pending.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let credentials = Credentials { email: user_email, password: user_password };
            let result = api::authenticate(&credentials).await;
            pending.set(false);

            match result {
                Ok(established) => {
                    let landing = established.role.landing_path();
                    session.update(|s| {
                        s.session = Some(established);
                        s.loading = false;
                    });
                    navigate(landing, NavigateOptions::default());
                }
                Err(AuthError::RoleResolutionFailed) => {
                    // Credentials were accepted but no session was
                    // persisted; back to the entry point, no error text.
                    password.set(String::new());
                    navigate("/", NavigateOptions::default());
                }
                Err(err) => error_message.set(err.to_string()),
            }
        });
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <h3 class="login-title">"LOGIN"</h3>

            <div class="form-group">
                <label class="form-label">"Email:"</label>
                <input
                    class="form-input"
                    type="text"
                    id="userEmail"
                    prop:value=email
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label class="form-label">"Password:"</label>
                <input
                    class="form-input"
                    type="password"
                    id="password"
                    prop:value=password
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <Show when=move || !error_message.get().is_empty()>
                    <p class="error-message">{error_message}</p>
                </Show>
            </div>

            <button class="form-button" type="submit" prop:disabled=pending>
                {move || if pending.get() { "Signing in..." } else { "Login" }}
            </button>
        </form>
    }
}
