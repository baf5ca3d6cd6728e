//! Benchmark profiles for the pavise cover engine.
//!
//! Provides pre-built map snapshots at two densities:
//!
//! - [`skirmish_profile`]: a handful of walls and bodies, the common
//!   interactive case
//! - [`siege_profile`]: a dense map (dozens of obstacles per category)
//!   for worst-case query cost

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use pavise_core::{Occupant, Tile, TierTable, Wall};
use pavise_engine::EngineConfig;
use pavise_geom::ObstacleSet;
use pavise_test_utils::{hedge_between, occupant_at, tile_at, wall_between};

/// A benchmark map: snapshot plus the tier table and config it assumes.
pub struct Profile {
    /// Obstacle shapes, prebuilt as a caller would per map.
    pub obstacles: ObstacleSet,
    /// Tier table the map was authored against.
    pub tiers: TierTable,
    /// Engine options.
    pub config: EngineConfig,
    /// Query observer.
    pub observer: Occupant,
    /// Query target.
    pub target: Occupant,
}

/// A light map: 4 walls, 2 hedges, 3 bystanders, 2 tiles.
pub fn skirmish_profile(config: EngineConfig) -> Profile {
    let tiers = TierTable::dnd5e();

    let walls: Vec<Wall> = (0..4)
        .map(|i| wall_between(i, 150.0 + 100.0 * i as f64, 0.0, 150.0 + 100.0 * i as f64, 300.0))
        .chain((0..2).map(|i| hedge_between(10 + i, 0.0, 250.0 + 50.0 * i as f64, 800.0, 250.0 + 50.0 * i as f64, 2)))
        .collect();

    let bystanders: Vec<Occupant> = (0..3).map(|i| occupant_at(10 + i, 2 + i as i64, 3)).collect();
    let tiles: Vec<Tile> = (0..2).map(|i| tile_at(i, 3, 1 + i as i64, 2, 1, 2)).collect();

    let obstacles = ObstacleSet::build(
        &bystanders,
        &tiles,
        &walls,
        tiers.max_tier(),
        config.padding_px(),
    );

    Profile {
        obstacles,
        tiers,
        config,
        observer: occupant_at(1, 0, 0),
        target: occupant_at(2, 7, 5),
    }
}

/// A dense map: a 10x10 lattice of walls plus 20 bodies and 10 tiles.
pub fn siege_profile(config: EngineConfig) -> Profile {
    let tiers = TierTable::dnd5e();

    let mut walls = Vec::new();
    for i in 0..10u64 {
        let offset = 100.0 * i as f64;
        walls.push(wall_between(i, offset, 0.0, offset, 1000.0));
        walls.push(wall_between(100 + i, 0.0, offset, 1000.0, offset));
    }

    let bystanders: Vec<Occupant> = (0..20)
        .map(|i| occupant_at(10 + i, (i % 8) as i64 + 1, (i / 8) as i64 + 1))
        .collect();
    let tiles: Vec<Tile> = (0..10).map(|i| tile_at(i, (i % 5) as i64, (i / 5) as i64 + 3, 1, 1, 2)).collect();

    let obstacles = ObstacleSet::build(
        &bystanders,
        &tiles,
        &walls,
        tiers.max_tier(),
        config.padding_px(),
    );

    Profile {
        obstacles,
        tiers,
        config,
        observer: occupant_at(1, 0, 0),
        target: occupant_at(2, 9, 9),
    }
}
