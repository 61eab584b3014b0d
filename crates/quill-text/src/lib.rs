//! Quill Text — string helpers for backend services.
//!
//! Exposes two independent, stateless operations: code-point-safe string
//! reversal and a current-time accessor that delegates to the injected
//! [`Clock`](quill_core::clock::Clock) capability.

pub mod reverse;
pub mod time;

pub use reverse::reverse;
pub use time::current_time;
