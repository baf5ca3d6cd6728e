//! Error types for cover computation.

use crate::id::OccupantId;
use std::error::Error;
use std::fmt;

/// Errors detected at the query or configuration boundary.
///
/// The engine fails fast: none of these leave a partially-computed
/// result behind. Geometric degeneracies (zero-length rays, coincident
/// corners) are *not* errors — they resolve to "no intersection" inside
/// the pipeline, because identical footprint corners produce them
/// routinely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoverError {
    /// Observer and target are the same occupant.
    IdenticalPair {
        /// The shared occupant id.
        id: OccupantId,
    },
    /// A tier table must define at least the "no cover" tier.
    EmptyTierTable,
    /// A quorum table slice did not hold exactly 5 entries.
    MalformedQuorumTable {
        /// The length that was supplied.
        len: usize,
    },
    /// The engine configuration is unusable.
    InvalidConfig {
        /// What was wrong with it.
        reason: String,
    },
}

impl fmt::Display for CoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdenticalPair { id } => {
                write!(f, "observer and target are the same occupant ({id})")
            }
            Self::EmptyTierTable => write!(f, "tier table has no tiers"),
            Self::MalformedQuorumTable { len } => {
                write!(f, "quorum table must have exactly 5 entries, got {len}")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid engine config: {reason}"),
        }
    }
}

impl Error for CoverError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_descriptive() {
        let e = CoverError::IdenticalPair {
            id: OccupantId(7),
        };
        assert_eq!(
            e.to_string(),
            "observer and target are the same occupant (7)"
        );
        assert_eq!(
            CoverError::MalformedQuorumTable { len: 2 }.to_string(),
            "quorum table must have exactly 5 entries, got 2"
        );
    }
}
