//! Shared fixtures for pavise tests and benchmarks.
//!
//! Everything here works in grid-cell units on a 100px grid so test
//! scenarios read as map sketches: `occupant_at(1, 0, 0)` is a token in
//! the top-left cell, `wall_between` drops a barrier at pixel
//! coordinates.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use pavise_core::{
    Occupant, OccupantId, Point, Rect, Tile, TileId, Wall, WallId, WallSight,
};

/// Grid cell size all fixtures assume, matching the engine default.
pub const GRID: f64 = 100.0;

/// A single-cell occupant at grid cell `(col, row)`, no modifiers, no
/// explicit blocking power.
pub fn occupant_at(id: u64, col: i64, row: i64) -> Occupant {
    occupant_sized(id, col, row, 1, 1)
}

/// An occupant covering `w x h` grid cells from `(col, row)`.
pub fn occupant_sized(id: u64, col: i64, row: i64, w: u32, h: u32) -> Occupant {
    Occupant::new(
        OccupantId(id),
        Rect::new(
            col as f64 * GRID,
            row as f64 * GRID,
            f64::from(w) * GRID,
            f64::from(h) * GRID,
        ),
    )
}

/// A closed, fully-opaque wall between two pixel coordinates.
pub fn wall_between(id: u64, x1: f64, y1: f64, x2: f64, y2: f64) -> Wall {
    Wall::new(WallId(id), Point::new(x1, y1), Point::new(x2, y2))
}

/// A limited-sight barrier (hedge, fog bank edge) with an explicit
/// blocking power.
pub fn hedge_between(id: u64, x1: f64, y1: f64, x2: f64, y2: f64, power: usize) -> Wall {
    let mut wall = wall_between(id, x1, y1, x2, y2);
    wall.sight = WallSight::Limited;
    wall.blocking_power = Some(power);
    wall
}

/// A tile covering `w x h` grid cells from `(col, row)` with an
/// explicit blocking power.
pub fn tile_at(id: u64, col: i64, row: i64, w: u32, h: u32, power: usize) -> Tile {
    Tile {
        id: TileId(id),
        footprint: Rect::new(
            col as f64 * GRID,
            row as f64 * GRID,
            f64::from(w) * GRID,
            f64::from(h) * GRID,
        ),
        blocking_power: Some(power),
    }
}
