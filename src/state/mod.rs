//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The persisted session is single-writer (login/logout), multi-reader
//! (route guard, navbar). Storage content is never trusted directly: every
//! read goes through `session::load`, which re-validates the role against
//! the closed set.

pub mod guard;
pub mod session;
