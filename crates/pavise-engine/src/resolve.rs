//! Per-ray collision resolution and the limited-sight parity filter.

use pavise_core::{OccupantId, Segment};
use pavise_geom::{Category, Hit, ObstacleSet};
use smallvec::SmallVec;

/// Raw per-category blocking powers for one ray.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RayRaw {
    /// Max surviving tile power.
    pub tiles: usize,
    /// Max surviving occupant power.
    pub occupants: usize,
    /// Max surviving wall power.
    pub walls: usize,
}

impl RayRaw {
    /// The raw result for one category.
    pub fn of(&self, category: Category) -> usize {
        match category {
            Category::Tiles => self.tiles,
            Category::Occupants => self.occupants,
            Category::Walls => self.walls,
        }
    }

    /// The ray's overall raw result: the max across categories.
    pub fn total(&self) -> usize {
        self.tiles.max(self.occupants).max(self.walls)
    }
}

/// Reduce one category's hit list to its raw blocking power.
///
/// The parity rule: an odd number of limited hits drops exactly one —
/// the first limited hit in registry order. Two limited barriers on a
/// ray obstruct; one alone does not ("you can see through one hedge,
/// not two"). Non-limited hits always survive. The remaining max is
/// taken with an explicit 0 seed so an empty hit list yields power 0
/// rather than an undefined max.
pub fn category_power(hits: &[Hit]) -> usize {
    let limited = hits.iter().filter(|h| h.limited).count();
    let mut to_drop = limited % 2;

    let mut power = 0;
    for hit in hits {
        if hit.limited && to_drop > 0 {
            to_drop -= 1;
            continue;
        }
        power = power.max(hit.power);
    }
    power
}

/// Resolve one ray against every obstacle category.
///
/// `exclude` holds the query's observer and target ids: their own
/// bodies never grant cover against themselves.
pub fn resolve_ray(
    ray: &Segment,
    obstacles: &ObstacleSet,
    exclude: (OccupantId, OccupantId),
) -> RayRaw {
    let tile_hits: SmallVec<[Hit; 4]> = obstacles
        .tiles()
        .filter_map(|shape| shape.intersect(ray))
        .collect();

    let occupant_hits: SmallVec<[Hit; 4]> = obstacles
        .occupants()
        .filter(|(id, _)| *id != exclude.0 && *id != exclude.1)
        .filter_map(|(_, shape)| shape.intersect(ray))
        .collect();

    let wall_hits: SmallVec<[Hit; 4]> = obstacles
        .walls()
        .filter_map(|shape| shape.intersect(ray))
        .collect();

    RayRaw {
        tiles: category_power(&tile_hits),
        occupants: category_power(&occupant_hits),
        walls: category_power(&wall_hits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pavise_core::{Occupant, Point, Rect, Wall, WallId, WallSight};

    fn hit(power: usize, limited: bool) -> Hit {
        Hit { power, limited }
    }

    #[test]
    fn empty_hit_list_yields_zero() {
        assert_eq!(category_power(&[]), 0);
    }

    #[test]
    fn max_of_plain_hits() {
        assert_eq!(category_power(&[hit(1, false), hit(3, false), hit(2, false)]), 3);
    }

    #[test]
    fn single_limited_hit_is_dropped() {
        assert_eq!(category_power(&[hit(3, true)]), 0);
    }

    #[test]
    fn paired_limited_hits_survive() {
        assert_eq!(category_power(&[hit(3, true), hit(3, true)]), 3);
    }

    #[test]
    fn odd_count_drops_first_limited_in_order() {
        // The dropped hit is the first *limited* one; the plain hit
        // ahead of it is untouched.
        assert_eq!(category_power(&[hit(1, false), hit(3, true)]), 1);
        assert_eq!(
            category_power(&[hit(1, false), hit(3, true), hit(2, true), hit(2, true)]),
            2
        );
    }

    #[test]
    fn resolve_ray_skips_query_endpoints() {
        let observer = OccupantId(1);
        let target = OccupantId(2);
        let bystander = Occupant {
            id: OccupantId(3),
            footprint: Rect::new(100.0, 0.0, 100.0, 100.0),
            ignore_threshold: 0,
            reduce_by: 0,
            blocking_power: Some(2),
        };
        // The observer's own body sits on the ray too; it must not count.
        let own_body = Occupant {
            id: observer,
            footprint: Rect::new(0.0, 0.0, 100.0, 100.0),
            ignore_threshold: 0,
            reduce_by: 0,
            blocking_power: Some(3),
        };
        let set = ObstacleSet::build(&[own_body, bystander], &[], &[], 3, 5.0);

        let ray = Segment::new(Point::new(50.0, 50.0), Point::new(250.0, 50.0));
        let raw = resolve_ray(&ray, &set, (observer, target));
        assert_eq!(raw.occupants, 2);
        assert_eq!(raw.tiles, 0);
        assert_eq!(raw.walls, 0);
        assert_eq!(raw.total(), 2);
    }

    #[test]
    fn resolve_ray_applies_parity_per_category() {
        let mut hedge = Wall::new(WallId(1), Point::new(100.0, 0.0), Point::new(100.0, 100.0));
        hedge.sight = WallSight::Limited;
        hedge.blocking_power = Some(2);
        let mut hedge2 = hedge;
        hedge2.id = WallId(2);
        hedge2.from = Point::new(150.0, 0.0);
        hedge2.to = Point::new(150.0, 100.0);

        let ray = Segment::new(Point::new(0.0, 50.0), Point::new(300.0, 50.0));
        let exclude = (OccupantId(1), OccupantId(2));

        let one = ObstacleSet::build(&[], &[], &[hedge], 3, 5.0);
        assert_eq!(resolve_ray(&ray, &one, exclude).walls, 0);

        let two = ObstacleSet::build(&[], &[], &[hedge, hedge2], 3, 5.0);
        assert_eq!(resolve_ray(&ray, &two, exclude).walls, 2);
    }
}
