//! Per-category obstacle shape registries.

use crate::shape::Shape;
use indexmap::IndexMap;
use pavise_core::{Occupant, OccupantId, Tile, TileId, Wall, WallId};

/// The three obstacle categories, resolved independently per ray.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Rectangular map overlays.
    Tiles,
    /// Other bodies on the map.
    Occupants,
    /// Linear barriers.
    Walls,
}

impl Category {
    /// All categories, in their fixed resolution order.
    pub const ALL: [Category; 3] = [Category::Tiles, Category::Occupants, Category::Walls];
}

/// The obstacle shapes for one map snapshot.
///
/// Built once per map state and reused across queries; the caller
/// rebuilds it whenever obstacles move, appear, or change assignment.
/// Registries are `IndexMap`s so rays always meet shapes in insertion
/// order — the limited-sight parity rule drops the *first* limited hit,
/// so iteration order is part of the engine's determinism contract.
///
/// Construction applies the upstream exclusions: obstacles whose
/// resolved power is 0 and open walls never become shapes. Query
/// endpoints are *not* excluded here (the set outlives any one query);
/// the resolver skips the observer's and target's own shapes by id.
#[derive(Clone, Debug, Default)]
pub struct ObstacleSet {
    tiles: IndexMap<TileId, Shape>,
    occupants: IndexMap<OccupantId, Shape>,
    walls: IndexMap<WallId, Shape>,
}

impl ObstacleSet {
    /// Build the shape registries for a map snapshot.
    ///
    /// `max_tier` resolves unassigned wall powers; `padding` is the
    /// pixel amount body shapes grow outward by.
    pub fn build(
        occupants: &[Occupant],
        tiles: &[Tile],
        walls: &[Wall],
        max_tier: usize,
        padding: f64,
    ) -> Self {
        let tiles = tiles
            .iter()
            .filter(|t| t.power() > 0)
            .map(|t| (t.id, Shape::cross(&t.footprint, padding, t.power())))
            .collect();

        let occupants = occupants
            .iter()
            .filter(|o| o.power() > 0)
            .map(|o| (o.id, Shape::cross(&o.footprint, padding, o.power())))
            .collect();

        let walls = walls
            .iter()
            .filter(|w| w.blocks(max_tier))
            .map(|w| {
                (
                    w.id,
                    Shape::barrier(w.from, w.to, w.power(max_tier), w.limited()),
                )
            })
            .collect();

        Self {
            tiles,
            occupants,
            walls,
        }
    }

    /// An empty set: open ground.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Tile shapes in insertion order.
    pub fn tiles(&self) -> impl Iterator<Item = &Shape> {
        self.tiles.values()
    }

    /// Occupant shapes with their ids, in insertion order.
    pub fn occupants(&self) -> impl Iterator<Item = (OccupantId, &Shape)> {
        self.occupants.iter().map(|(id, shape)| (*id, shape))
    }

    /// Wall shapes in insertion order.
    pub fn walls(&self) -> impl Iterator<Item = &Shape> {
        self.walls.values()
    }

    /// Number of shapes in `category`.
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Tiles => self.tiles.len(),
            Category::Occupants => self.occupants.len(),
            Category::Walls => self.walls.len(),
        }
    }

    /// Whether no category holds any shape.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty() && self.occupants.is_empty() && self.walls.is_empty()
    }
}
