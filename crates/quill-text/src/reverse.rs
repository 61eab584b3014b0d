//! Code-point-safe string reversal.

/// Returns a new string whose code points are `s`'s code points in reverse
/// order.
///
/// Reversal operates on whole `char`s, never on raw bytes, so multi-byte
/// characters survive intact and the result is always valid UTF-8. The input
/// is not mutated.
#[must_use]
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}
