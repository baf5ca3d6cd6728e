//! The cover query entry points.

use crate::aggregate::cell_cover;
use crate::config::EngineConfig;
use crate::resolve::{resolve_ray, RayRaw};
use crate::sampler::{origin_points, target_cells};
use crate::trace::{CoverTrace, RayRecord};
use pavise_core::{CoverError, CoverResult, Occupant, Segment, TierTable};
use pavise_geom::ObstacleSet;
use smallvec::SmallVec;

/// Compute how much cover `target` has against `observer`.
///
/// Pure computation over the supplied snapshots; fails fast when the
/// two occupants are the same or the configuration is unusable. The
/// returned tier indexes into `tiers` and already includes the
/// observer's `reduce_by` and `ignore_threshold` modifiers.
pub fn compute_cover(
    observer: &Occupant,
    target: &Occupant,
    tiers: &TierTable,
    obstacles: &ObstacleSet,
    config: &EngineConfig,
) -> Result<CoverResult, CoverError> {
    run(observer, target, tiers, obstacles, config, None)
}

/// [`compute_cover`], additionally recording every ray cast.
pub fn compute_cover_traced(
    observer: &Occupant,
    target: &Occupant,
    tiers: &TierTable,
    obstacles: &ObstacleSet,
    config: &EngineConfig,
) -> Result<(CoverResult, CoverTrace), CoverError> {
    let mut trace = CoverTrace::default();
    let result = run(observer, target, tiers, obstacles, config, Some(&mut trace))?;
    Ok((result, trace))
}

fn run(
    observer: &Occupant,
    target: &Occupant,
    tiers: &TierTable,
    obstacles: &ObstacleSet,
    config: &EngineConfig,
    mut trace: Option<&mut CoverTrace>,
) -> Result<CoverResult, CoverError> {
    if observer.id == target.id {
        return Err(CoverError::IdenticalPair { id: observer.id });
    }
    config.validate()?;

    let origins = origin_points(&observer.footprint, config);
    let cells = target_cells(&target.footprint, config);
    let exclude = (observer.id, target.id);
    let max_tier = tiers.max_tier();

    let mut ray_count: u32 = 0;

    // Two-level minimum: cover holds only if every sampled sightline is
    // obstructed to at least that degree. Any single clear corner-to-
    // sub-square fan from any origin point pulls the result down.
    let mut raw = max_tier;
    for origin in &origins {
        let mut origin_cover = max_tier;
        for cell in &cells {
            let rays: SmallVec<[RayRaw; 4]> = cell
                .corners
                .iter()
                .map(|corner| {
                    ray_count += 1;
                    let ray = Segment::new(*origin, *corner);
                    let resolved = resolve_ray(&ray, obstacles, exclude);
                    if let Some(trace) = trace.as_deref_mut() {
                        trace.rays.push(RayRecord {
                            origin: *origin,
                            corner: *corner,
                            tiles: resolved.tiles,
                            occupants: resolved.occupants,
                            walls: resolved.walls,
                            total: resolved.total(),
                        });
                    }
                    resolved
                })
                .collect();
            origin_cover = origin_cover.min(cell_cover(&rays, tiers));
        }
        raw = raw.min(origin_cover);
    }

    // Modifier and clamp stage.
    let mut tier = raw.saturating_sub(observer.reduce_by).min(max_tier);
    if tier <= observer.ignore_threshold {
        tier = 0;
    }

    Ok(CoverResult {
        tier,
        defense_delta: -tiers.defense_bonus(tier),
        ray_count,
    })
}
