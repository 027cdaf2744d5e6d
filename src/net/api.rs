//! Session establishment against the identity endpoints.
//!
//! Login is a two-call protocol: `POST /user_authen/` submits credentials
//! and lets the server set its session cookie; `GET /api/protected` then
//! resolves the role under that cookie. The second call is mandatory — a
//! session is persisted only when both succeed and the returned role is in
//! the closed set.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into `AuthError` at the request site; nothing
//! propagates as an unhandled fault. Rejected credentials are neither
//! logged nor persisted. The observed system had no client-side timeouts;
//! a 10 s bound is applied here so a hung backend degrades to `Unavailable`
//! instead of a spinner that never resolves.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};

use crate::state::session::{Role, Session};

/// Identity endpoint: accepts credentials, sets the session cookie.
pub const LOGIN_URL: &str = "/user_authen/";
/// Protected whoami endpoint: resolves the role under the session cookie.
pub const WHOAMI_URL: &str = "/api/protected";

#[cfg(feature = "hydrate")]
const REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Transient login input. Field names match the backend's request body;
/// never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    #[serde(rename = "userEmail")]
    pub email: String,
    #[serde(rename = "userPassword")]
    pub password: String,
}

/// `{message}` body both endpoints use for human-readable outcomes.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct MessageBody {
    pub message: Option<String>,
}

/// `{role}` body returned by the whoami endpoint.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct RoleBody {
    pub role: Option<String>,
}

/// Authentication failure taxonomy. `Display` is the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Credentials refused by the server; user-correctable, shown inline.
    #[error("{0}")]
    Rejected(String),
    /// Credentials accepted but the role lookup failed; the caller returns
    /// to the unauthenticated entry point without error text.
    #[error("failed to fetch user information after login")]
    RoleResolutionFailed,
    /// Server returned a role outside the closed set — a contract
    /// violation, not something the user can fix.
    #[error("cannot determine access level")]
    UnknownRole,
    /// Network or transport failure; transient, retry later.
    #[error("network error or server unavailable, please try again later")]
    Unavailable,
}

/// Classify the credential-submission response.
pub(crate) fn classify_login(status: u16, message: Option<String>) -> Result<(), AuthError> {
    if status == 200 {
        Ok(())
    } else {
        Err(AuthError::Rejected(
            message.unwrap_or_else(|| "Invalid email or password.".to_owned()),
        ))
    }
}

/// Classify the role-resolution response against the closed role set.
pub(crate) fn classify_role(status: u16, role: Option<&str>) -> Result<Role, AuthError> {
    if status != 200 {
        return Err(AuthError::RoleResolutionFailed);
    }
    role.ok_or(AuthError::UnknownRole)?
        .parse::<Role>()
        .map_err(|_| AuthError::UnknownRole)
}

/// Submit credentials and resolve the role, persisting the session only on
/// full success.
///
/// # Errors
///
/// Returns the `AuthError` variant matching the first step that failed; no
/// partial session is ever left behind.
pub async fn authenticate(credentials: &Credentials) -> Result<Session, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        use web_sys::RequestCredentials;

        // Step 1: submit credentials. The server answers with a Set-Cookie
        // the browser holds on to; `credentials: include` forwards it on
        // everything that follows.
        let request = gloo_net::http::Request::post(LOGIN_URL)
            .credentials(RequestCredentials::Include)
            .json(credentials)
            .map_err(|_| AuthError::Unavailable)?;
        let response = send_with_timeout(request).await?;
        let message = response
            .json::<MessageBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        classify_login(response.status(), message)?;

        // Step 2: resolve the role under the fresh cookie. Strictly ordered
        // after step 1; never issued concurrently.
        let request = gloo_net::http::Request::get(WHOAMI_URL)
            .credentials(RequestCredentials::Include)
            .build()
            .map_err(|_| AuthError::Unavailable)?;
        let response = send_with_timeout(request).await?;
        let status = response.status();
        let role = if status == 200 {
            response
                .json::<RoleBody>()
                .await
                .ok()
                .and_then(|body| body.role)
        } else {
            None
        };
        let role = classify_role(status, role.as_deref())?;

        let established = Session { role, email: credentials.email.clone() };
        crate::state::session::store(&established);
        leptos::logging::log!("session established with role {role}");
        Ok(established)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(AuthError::Unavailable)
    }
}

/// Clear the persisted session and reset auth state.
///
/// The backend exposes no logout endpoint and its cookie is HttpOnly, so
/// invalidation is client-side; the cookie expires server-side.
pub fn logout() {
    crate::state::session::clear();
    leptos::logging::log!("session cleared");
}

/// Send a request with the shared timeout bound. Timeouts and transport
/// errors both surface as `Unavailable`.
#[cfg(feature = "hydrate")]
async fn send_with_timeout(
    request: gloo_net::http::Request,
) -> Result<gloo_net::http::Response, AuthError> {
    use futures::future::{Either, select};

    let timeout = gloo_timers::future::sleep(std::time::Duration::from_millis(REQUEST_TIMEOUT_MS));
    match select(Box::pin(request.send()), Box::pin(timeout)).await {
        Either::Left((result, _)) => result.map_err(|_| AuthError::Unavailable),
        Either::Right(((), _)) => Err(AuthError::Unavailable),
    }
}
