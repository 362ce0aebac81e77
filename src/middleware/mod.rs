//! Request interception.
//!
//! - [`matchers`]: Which paths the gate looks at
//! - [`gate`]: The [`gate::route_gate`] middleware turning guard decisions
//!   into pass-through, `307` redirects, or `401` JSON for API paths

pub mod gate;
pub mod matchers;
