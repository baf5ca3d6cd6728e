//! Obstacle geometry for the pavise cover engine.
//!
//! Converts map obstacle descriptions into the shapes the visibility
//! resolver intersects rays against, and holds them in per-category
//! registries with deterministic iteration order.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod set;
pub mod shape;

pub use set::{Category, ObstacleSet};
pub use shape::{Hit, Shape};
