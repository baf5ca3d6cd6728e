//! Obstacle and occupant descriptions.
//!
//! These are plain snapshots of map state, resolved by an adapter layer
//! outside the engine: each carries its footprint and (optionally) an
//! explicitly assigned blocking power. Where a power is unassigned the
//! per-category defaults documented on each type apply — the engine
//! never invents one beyond those.

use crate::geometry::{Point, Rect};
use crate::id::{OccupantId, TileId, WallId};

/// Blocking power assumed for an occupant with no explicit assignment.
///
/// A body on the map obstructs sightlines even when nobody configured
/// it, so occupants default to power 1 (the lowest real tier). Tiles
/// default to 0 (decorative until assigned).
pub const DEFAULT_OCCUPANT_POWER: usize = 1;

/// A map occupant (token): a query endpoint or an intervening body.
///
/// `ignore_threshold` and `reduce_by` only matter when the occupant is
/// the observer of a query; `blocking_power` only matters when it is
/// listed as an obstacle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Occupant {
    /// Identity, used to reject observer==target and to exclude the
    /// query endpoints from the obstacle registry.
    pub id: OccupantId,
    /// Occupied area in pixels.
    pub footprint: Rect,
    /// Cover at or below this tier is ignored entirely by this observer.
    pub ignore_threshold: usize,
    /// Tiers subtracted from any cover this observer faces.
    pub reduce_by: usize,
    /// Explicitly assigned blocking power, if any.
    pub blocking_power: Option<usize>,
}

impl Occupant {
    /// Create an occupant with no modifiers and no explicit power.
    pub fn new(id: OccupantId, footprint: Rect) -> Self {
        Self {
            id,
            footprint,
            ignore_threshold: 0,
            reduce_by: 0,
            blocking_power: None,
        }
    }

    /// Resolved blocking power: the explicit assignment, else
    /// [`DEFAULT_OCCUPANT_POWER`].
    pub fn power(&self) -> usize {
        self.blocking_power.unwrap_or(DEFAULT_OCCUPANT_POWER)
    }
}

/// A rectangular map overlay that can grant cover.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    /// Identity within the obstacle registry.
    pub id: TileId,
    /// Covered area in pixels.
    pub footprint: Rect,
    /// Explicitly assigned blocking power, if any.
    pub blocking_power: Option<usize>,
}

impl Tile {
    /// Create a tile with no explicit power.
    pub fn new(id: TileId, footprint: Rect) -> Self {
        Self {
            id,
            footprint,
            blocking_power: None,
        }
    }

    /// Resolved blocking power: the explicit assignment, else 0.
    pub fn power(&self) -> usize {
        self.blocking_power.unwrap_or(0)
    }
}

/// How a wall treats sight, from the map editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum WallSight {
    /// Sight passes freely.
    None,
    /// Partial obstruction (foliage, fog, arrow slits); subject to the
    /// odd/even parity-drop rule during ray resolution.
    Limited,
    /// Fully opaque.
    Normal,
}

/// A linear barrier: wall, door, or window edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wall {
    /// Identity within the obstacle registry.
    pub id: WallId,
    /// One endpoint in pixels.
    pub from: Point,
    /// The other endpoint in pixels.
    pub to: Point,
    /// Explicitly assigned blocking power, if any.
    pub blocking_power: Option<usize>,
    /// Sight behavior configured on the wall.
    pub sight: WallSight,
    /// An open door blocks nothing regardless of its other settings.
    pub open: bool,
}

impl Wall {
    /// Create a fully-opaque, closed wall with no explicit power.
    pub fn new(id: WallId, from: Point, to: Point) -> Self {
        Self {
            id,
            from,
            to,
            blocking_power: None,
            sight: WallSight::Normal,
            open: false,
        }
    }

    /// Resolved blocking power.
    ///
    /// An explicit assignment wins. Otherwise the wall's sight setting
    /// decides: anything at [`WallSight::Limited`] or above blocks at
    /// the map's best tier (`max_tier`), while see-through walls block
    /// nothing.
    pub fn power(&self, max_tier: usize) -> usize {
        match self.blocking_power {
            Some(p) => p,
            None if self.sight >= WallSight::Limited => max_tier,
            None => 0,
        }
    }

    /// Whether the limited-sight parity rule applies to this wall.
    pub fn limited(&self) -> bool {
        self.sight == WallSight::Limited
    }

    /// Whether this wall participates in cover at all: closed and with
    /// non-zero resolved power.
    pub fn blocks(&self, max_tier: usize) -> bool {
        !self.open && self.power(max_tier) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupant_power_defaults_to_one() {
        let mut o = Occupant::new(OccupantId(1), Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(o.power(), 1);
        o.blocking_power = Some(3);
        assert_eq!(o.power(), 3);
        o.blocking_power = Some(0);
        assert_eq!(o.power(), 0);
    }

    #[test]
    fn tile_power_defaults_to_zero() {
        let t = Tile::new(TileId(1), Rect::new(0.0, 0.0, 200.0, 200.0));
        assert_eq!(t.power(), 0);
    }

    #[test]
    fn unassigned_wall_power_follows_sight() {
        let mut w = Wall::new(WallId(1), Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert_eq!(w.power(3), 3);
        w.sight = WallSight::Limited;
        assert_eq!(w.power(3), 3);
        w.sight = WallSight::None;
        assert_eq!(w.power(3), 0);
    }

    #[test]
    fn explicit_wall_power_wins_over_sight() {
        let mut w = Wall::new(WallId(1), Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        w.sight = WallSight::None;
        w.blocking_power = Some(2);
        assert_eq!(w.power(3), 2);
    }

    #[test]
    fn open_walls_never_block() {
        let mut w = Wall::new(WallId(1), Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(w.blocks(3));
        w.open = true;
        assert!(!w.blocks(3));
    }

    #[test]
    fn only_limited_sight_is_limited() {
        let mut w = Wall::new(WallId(1), Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(!w.limited());
        w.sight = WallSight::Limited;
        assert!(w.limited());
    }
}
