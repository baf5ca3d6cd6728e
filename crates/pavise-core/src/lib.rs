//! Core types for the pavise cover-computation engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the pavise workspace:
//! 2D primitives, cover tiers and quorum tables, obstacle descriptions,
//! error types, and the query result value.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod id;
pub mod obstacle;
pub mod result;
pub mod tier;

pub use error::CoverError;
pub use geometry::{Point, Rect, Segment};
pub use id::{OccupantId, TileId, WallId};
pub use obstacle::{Occupant, Tile, Wall, WallSight, DEFAULT_OCCUPANT_POWER};
pub use result::CoverResult;
pub use tier::{CoverTier, QuorumTable, TierTable, QUORUM_LEN, RAYS_PER_CELL};
