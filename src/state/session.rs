//! Typed session model and validated `localStorage` persistence.
//!
//! The backend identifies users by a server-issued HttpOnly cookie; the
//! client only persists the resolved role and email so the UI can gate
//! routes across reloads. Keys match what the backend-facing login flow
//! has always written (`userRole` / `userEmail`).

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Storage key for the persisted role.
pub const ROLE_KEY: &str = "userRole";
/// Storage key for the persisted email.
pub const EMAIL_KEY: &str = "userEmail";

/// Access level of an authenticated user. Closed set; anything else coming
/// back from the server is a contract violation, not a fourth role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Operator,
    Observer,
}

impl Role {
    /// Wire/storage spelling of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Operator => "operator",
            Role::Observer => "observer",
        }
    }

    /// Post-login landing page for this role. Total over the closed set.
    pub fn landing_path(self) -> &'static str {
        match self {
            Role::Admin => "/home",
            Role::Operator => "/operator-dashboard",
            Role::Observer => "/observer-dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a role string outside the closed set.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0:?}")]
pub struct UnknownRoleError(pub String);

impl FromStr for Role {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "operator" => Ok(Role::Operator),
            "observer" => Ok(Role::Observer),
            other => Err(UnknownRoleError(other.to_owned())),
        }
    }
}

/// Authenticated outcome persisted across reloads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub role: Role,
    pub email: String,
}

/// Reactive session state provided as context from the app root.
///
/// `loading` is true until the persisted session has been read from storage
/// on the client, so guards can hold off redirecting during hydration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Read the persisted session, validating the role on every read.
///
/// A role value outside the closed set is discarded (with a warning) rather
/// than surfaced, so stale or tampered storage can never mint an access
/// level the guard does not know about.
pub fn load() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let storage = storage()?;
        let raw_role = storage.get_item(ROLE_KEY).ok()??;
        let email = storage.get_item(EMAIL_KEY).ok()?.unwrap_or_default();
        match raw_role.parse::<Role>() {
            Ok(role) => Some(Session { role, email }),
            Err(err) => {
                leptos::logging::warn!("discarding persisted session: {err}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a session. Only the login flow calls this.
pub fn store(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(ROLE_KEY, session.role.as_str());
            let _ = storage.set_item(EMAIL_KEY, &session.email);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Remove the persisted session (logout).
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(ROLE_KEY);
            let _ = storage.remove_item(EMAIL_KEY);
        }
    }
}
