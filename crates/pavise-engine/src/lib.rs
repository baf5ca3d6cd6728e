//! The pavise cover-computation pipeline.
//!
//! One query flows strictly downward through:
//!
//! 1. [`sampler`] — observer sample points and target sub-squares
//! 2. [`resolve`] — per-ray, per-category collision resolution with the
//!    limited-sight parity filter
//! 3. [`aggregate`] — quorum lookup per sub-square and the two-level
//!    minimum across sub-squares and observer points
//! 4. modifier and clamp stage inside [`query`]
//!
//! The engine is stateless and synchronous: a query is pure computation
//! over caller-supplied snapshots ([`TierTable`](pavise_core::TierTable),
//! [`ObstacleSet`](pavise_geom::ObstacleSet), [`EngineConfig`]). Queries
//! over shared immutable snapshots may run concurrently without locks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod aggregate;
pub mod config;
pub mod query;
pub mod resolve;
pub mod sampler;
pub mod trace;

pub use config::{EngineConfig, OriginSampling};
pub use query::{compute_cover, compute_cover_traced};
pub use trace::{CoverTrace, RayRecord};
