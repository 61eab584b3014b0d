//! Shared test doubles for the Quill utility toolkit.

mod clock;

pub use clock::{FixedClock, SteppingClock};
