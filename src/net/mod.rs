//! Network layer: authentication HTTP calls and the realtime channel.
//!
//! Everything that touches the browser network stack is gated behind the
//! `hydrate` feature; SSR builds get inert stubs. The server-issued
//! `access_token_cookie` is HttpOnly, so the client never reads it — both
//! the HTTP calls and the WebSocket rely on the browser forwarding it.

pub mod api;
pub mod channel;
