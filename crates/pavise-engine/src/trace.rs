//! Per-ray diagnostics for debugging and overlay rendering.

use pavise_core::Point;

/// One resolved sightline, as recorded by
/// [`compute_cover_traced`](crate::compute_cover_traced).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayRecord {
    /// Observer sample point the ray started from.
    pub origin: Point,
    /// Target sub-square corner the ray ended at.
    pub corner: Point,
    /// Raw tile-category power on this ray.
    pub tiles: usize,
    /// Raw occupant-category power on this ray.
    pub occupants: usize,
    /// Raw wall-category power on this ray.
    pub walls: usize,
    /// Max across the three categories.
    pub total: usize,
}

/// Every ray cast by one traced query, in cast order.
///
/// Callers use this for debug overlays (drawing rays tinted by their
/// blocking tier) or telemetry; it never influences the result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoverTrace {
    /// The recorded rays.
    pub rays: Vec<RayRecord>,
}

impl CoverTrace {
    /// Rays that no obstacle blocked.
    pub fn clear_rays(&self) -> impl Iterator<Item = &RayRecord> {
        self.rays.iter().filter(|r| r.total == 0)
    }

    /// Rays blocked at `power` or higher.
    pub fn blocked_at(&self, power: usize) -> impl Iterator<Item = &RayRecord> {
        self.rays.iter().filter(move |r| r.total >= power)
    }
}
