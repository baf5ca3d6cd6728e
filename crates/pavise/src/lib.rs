//! Pavise: cover computation for 2D grid battle-maps.
//!
//! Given an observer and a target on a gridded map, pavise determines
//! how much physical cover the target benefits from — a discrete tier
//! in a caller-defined, ordered list — by sampling sightlines between
//! the two footprints, resolving each ray against the map's obstacles
//! (bodies, overlay tiles, and walls), and aggregating per-ray blocking
//! through quorum tables.
//!
//! This is the top-level facade crate re-exporting the public API from
//! the pavise sub-crates; for most users it is the only dependency
//! needed.
//!
//! # Quick start
//!
//! ```rust
//! use pavise::prelude::*;
//!
//! // A 100px grid. Observer in the top-left cell, target four cells
//! // to the right, an opaque wall in between.
//! let observer = Occupant::new(OccupantId(1), Rect::new(0.0, 0.0, 100.0, 100.0));
//! let target = Occupant::new(OccupantId(2), Rect::new(400.0, 0.0, 100.0, 100.0));
//! let wall = Wall::new(
//!     WallId(1),
//!     Point::new(250.0, -500.0),
//!     Point::new(250.0, 600.0),
//! );
//!
//! let tiers = TierTable::dnd5e();
//! let config = EngineConfig::default();
//! let obstacles = ObstacleSet::build(&[], &[], &[wall], tiers.max_tier(), config.padding_px());
//!
//! let result = compute_cover(&observer, &target, &tiers, &obstacles, &config).unwrap();
//! assert_eq!(result.tier, 3);
//! assert_eq!(result.defense_delta, -40);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `pavise-core` | Primitives, tiers, obstacles, errors |
//! | [`geom`] | `pavise-geom` | Obstacle shapes and the shape registry |
//! | [`engine`] | `pavise-engine` | Sampling, resolution, aggregation |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: primitives, tiers and quorum tables, obstacle
/// descriptions, errors (`pavise-core`).
pub use pavise_core as types;

/// Obstacle geometry: shapes and the per-map registry (`pavise-geom`).
pub use pavise_geom as geom;

/// The query pipeline: configuration, sampling, resolution, and the
/// `compute_cover` entry points (`pavise-engine`).
pub use pavise_engine as engine;

/// The types most callers need, importable in one line.
pub mod prelude {
    pub use pavise_core::{
        CoverError, CoverResult, CoverTier, Occupant, OccupantId, Point, QuorumTable, Rect,
        Segment, Tile, TileId, TierTable, Wall, WallId, WallSight,
    };
    pub use pavise_engine::{
        compute_cover, compute_cover_traced, CoverTrace, EngineConfig, OriginSampling, RayRecord,
    };
    pub use pavise_geom::{Category, ObstacleSet, Shape};
}
