//! Strongly-typed identifiers for map occupants, tiles, and walls.

use std::fmt;

/// Identifies an occupant (token) on the map.
///
/// The engine uses occupant identity for two things: rejecting queries
/// where observer and target are the same occupant, and excluding the
/// two query endpoints from the occupant obstacle registry per ray.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OccupantId(pub u64);

impl fmt::Display for OccupantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OccupantId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies a map overlay tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u64);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TileId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies a wall segment on the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WallId(pub u64);

impl fmt::Display for WallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for WallId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
