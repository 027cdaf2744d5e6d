//! Route-level page components. Everything except `login` is a thin shell;
//! the gating itself happens in the route table.

pub mod analysis;
pub mod home;
pub mod login;
pub mod observer_dashboard;
pub mod operator_dashboard;
pub mod settings;
pub mod unauthorized;
pub mod users;
