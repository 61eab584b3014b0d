//! Quill Core — shared capability abstractions.
//!
//! This crate defines the capability traits that the utility contexts depend
//! on, together with their production implementations. It contains no
//! infrastructure code.

pub mod clock;
