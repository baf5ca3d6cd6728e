//! The cover query result value.

use std::fmt;

/// Outcome of one cover query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoverResult {
    /// Final cover tier after modifiers and clamping. Always a valid
    /// index into the tier table the query was run with.
    pub tier: usize,
    /// Attack modifier for the observer: the negated defense bonus of
    /// `tier`.
    pub defense_delta: i32,
    /// Number of sightline rays cast. Diagnostic only; never feeds back
    /// into the decision.
    pub ray_count: u32,
}

impl fmt::Display for CoverResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tier {} (delta {:+}, {} rays)",
            self.tier, self.defense_delta, self.ray_count
        )
    }
}
