//! Pure route-access decision.
//!
//! Called once per navigation attempt, synchronously, before a protected
//! view mounts. Never errors and never mutates session state; denials are
//! expressed as redirects.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::{Role, Session};

/// Outcome of a navigation attempt against a protected route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessDecision {
    pub allow: bool,
    pub redirect_to: Option<&'static str>,
}

impl AccessDecision {
    const ALLOW: Self = Self { allow: true, redirect_to: None };

    const fn deny(redirect_to: &'static str) -> Self {
        Self { allow: false, redirect_to: Some(redirect_to) }
    }
}

/// Decide whether the current session may render a protected view.
///
/// No session sends the user to the unauthenticated entry point. A session
/// whose role is outside `allowed` (when a restriction is given) goes to
/// `/unauthorized`. `allowed = None` means any authenticated role.
pub fn decide(session: Option<&Session>, allowed: Option<&[Role]>) -> AccessDecision {
    let Some(session) = session else {
        return AccessDecision::deny("/");
    };

    if let Some(allowed) = allowed {
        if !allowed.contains(&session.role) {
            return AccessDecision::deny("/unauthorized");
        }
    }

    AccessDecision::ALLOW
}
