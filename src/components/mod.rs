//! Reusable components outside the page tree.

pub mod navbar;
pub mod realtime_provider;
pub mod route_guard;
