//! Route wrapper enforcing the access decision.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::guard::decide;
use crate::state::session::{Role, SessionState};

/// Wraps a protected route: renders children when the pure access decision
/// allows, otherwise redirects. Renders nothing while the persisted session
/// is still being read, so hydration cannot bounce a logged-in user.
#[component]
pub fn RequireSession(
    /// Roles admitted to this route; unset admits any authenticated role.
    #[prop(optional, into)]
    allowed: Option<Vec<Role>>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    move || {
        let state = session.get();
        if state.loading {
            return ().into_any();
        }
        let decision = decide(state.session.as_ref(), allowed.as_deref());
        match decision.redirect_to {
            Some(path) => view! { <Redirect path=path/> }.into_any(),
            None => children().into_any(),
        }
    }
}
