//! Footprint sampling: observer sample points and target sub-squares.

use crate::config::{EngineConfig, OriginSampling};
use pavise_core::{Point, Rect};
use smallvec::{smallvec, SmallVec};

/// One unit-cell sub-square of the target's footprint.
///
/// Corners are deduplicated within the cell only; adjacent cells keep
/// their own copies so every sub-square always aggregates over its own
/// ray fan.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetCell {
    /// The cell's corner points, ray endpoints for this sub-square.
    pub corners: SmallVec<[Point; 4]>,
}

/// Cells covered along one footprint axis: rounded occupancy, but a
/// footprint always samples at least one cell even when its extent
/// rounds to zero.
fn cells_per_axis(extent: f64, grid_size: f64) -> usize {
    let cells = (extent / grid_size).round() as usize;
    cells.max(1)
}

fn push_deduped(points: &mut SmallVec<[Point; 8]>, p: Point) {
    if !points.contains(&p) {
        points.push(p);
    }
}

/// Observer sample points for `footprint` under the configured mode.
///
/// `Center` yields the single footprint center. `Corners` yields the
/// corner points of every grid cell the footprint covers, deduplicated
/// by exact point equality, iterating columns outer and rows inner.
pub fn origin_points(footprint: &Rect, config: &EngineConfig) -> SmallVec<[Point; 8]> {
    match config.origin_sampling {
        OriginSampling::Center => smallvec![footprint.center()],
        OriginSampling::Corners => {
            let grid = config.grid_size;
            let cols = cells_per_axis(footprint.w, grid);
            let rows = cells_per_axis(footprint.h, grid);
            let mut points = SmallVec::new();
            for a in 0..cols {
                for b in 0..rows {
                    let cell = Rect::new(
                        footprint.x + a as f64 * grid,
                        footprint.y + b as f64 * grid,
                        grid,
                        grid,
                    );
                    for corner in cell.corners() {
                        push_deduped(&mut points, corner);
                    }
                }
            }
            points
        }
    }
}

/// Target sub-squares for `footprint`: one per covered grid cell,
/// shrunk inward by the padding amount so corner rays start inside the
/// cell rather than on edges shared with walls.
pub fn target_cells(footprint: &Rect, config: &EngineConfig) -> Vec<TargetCell> {
    let grid = config.grid_size;
    let padding = config.padding_px();
    let cols = cells_per_axis(footprint.w, grid);
    let rows = cells_per_axis(footprint.h, grid);

    let mut cells = Vec::with_capacity(cols * rows);
    for a in 0..cols {
        for b in 0..rows {
            let cell = Rect::new(
                footprint.x + a as f64 * grid,
                footprint.y + b as f64 * grid,
                grid,
                grid,
            )
            .shrunk(padding);

            let mut corners: SmallVec<[Point; 4]> = SmallVec::new();
            for corner in cell.corners() {
                if !corners.contains(&corner) {
                    corners.push(corner);
                }
            }
            cells.push(TargetCell { corners });
        }
    }
    cells
}
