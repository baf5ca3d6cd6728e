//! Obstacle shapes and ray intersection.

use pavise_core::{Point, Rect, Segment};

/// One shape collision: the obstacle's blocking power and whether the
/// limited-sight parity rule applies to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit {
    /// Blocking power (tier index) the obstacle contributes.
    pub power: usize,
    /// Whether the obstacle is a limited-sight barrier.
    pub limited: bool,
}

/// An obstacle's collision geometry.
///
/// Shapes are cheap value objects built from live obstacle state; they
/// carry their resolved blocking power so ray resolution needs nothing
/// else. Door/open and zero-power exclusion happens upstream in
/// [`ObstacleSet`](crate::ObstacleSet) construction — a constructed
/// shape always participates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// A body obstacle (occupant or tile): its bounding box grown
    /// outward by the padding amount and reduced to the two diagonals
    /// of the padded box.
    ///
    /// The X gives any passing ray a deterministic number of crossings
    /// (a ray through a solid box would cross 0 or 2 edges; it crosses
    /// the X's diagonals 0 or 1 times near-everywhere), while the
    /// outward padding stops rays slipping through exact corners.
    Cross {
        /// The two diagonals of the padded bounding box.
        diagonals: [Segment; 2],
        /// Resolved blocking power.
        power: usize,
    },
    /// A wall segment.
    Barrier {
        /// The wall's span.
        segment: Segment,
        /// Resolved blocking power.
        power: usize,
        /// Whether the parity-drop rule applies.
        limited: bool,
    },
}

impl Shape {
    /// Build the padded "X" shape for a body obstacle.
    pub fn cross(bounds: &Rect, padding: f64, power: usize) -> Self {
        let [tl, tr, br, bl] = bounds.grown(padding).corners();
        Shape::Cross {
            diagonals: [Segment::new(tl, br), Segment::new(tr, bl)],
            power,
        }
    }

    /// Build a wall-segment shape.
    pub fn barrier(from: Point, to: Point, power: usize, limited: bool) -> Self {
        Shape::Barrier {
            segment: Segment::new(from, to),
            power,
            limited,
        }
    }

    /// Resolve a ray against this shape.
    ///
    /// A cross hits when the ray crosses at least one diagonal; a
    /// barrier hits when the ray crosses the wall span. Misses return
    /// `None` — they contribute nothing downstream, not a power-0 hit.
    pub fn intersect(&self, ray: &Segment) -> Option<Hit> {
        match self {
            Shape::Cross { diagonals, power } => diagonals
                .iter()
                .any(|d| ray.crosses(d))
                .then_some(Hit {
                    power: *power,
                    limited: false,
                }),
            Shape::Barrier {
                segment,
                power,
                limited,
            } => ray.crosses(segment).then_some(Hit {
                power: *power,
                limited: *limited,
            }),
        }
    }

    /// The blocking power this shape was built with.
    pub fn power(&self) -> usize {
        match self {
            Shape::Cross { power, .. } | Shape::Barrier { power, .. } => *power,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell_cross(power: usize) -> Shape {
        // A 100x100 obstacle at (100, 100) with 5px padding.
        Shape::cross(&Rect::new(100.0, 100.0, 100.0, 100.0), 5.0, power)
    }

    #[test]
    fn ray_through_box_center_hits_cross() {
        let shape = cell_cross(2);
        let ray = Segment::new(Point::new(0.0, 150.0), Point::new(300.0, 150.0));
        assert_eq!(
            shape.intersect(&ray),
            Some(Hit {
                power: 2,
                limited: false
            })
        );
    }

    #[test]
    fn ray_past_box_misses_cross() {
        let shape = cell_cross(2);
        let ray = Segment::new(Point::new(0.0, 300.0), Point::new(300.0, 300.0));
        assert_eq!(shape.intersect(&ray), None);
    }

    #[test]
    fn padding_widens_the_cross() {
        // A ray grazing 2px outside the box: misses unpadded, hits padded.
        let bounds = Rect::new(100.0, 100.0, 100.0, 100.0);
        let ray = Segment::new(Point::new(98.0, 0.0), Point::new(98.0, 300.0));
        assert_eq!(Shape::cross(&bounds, 0.0, 1).intersect(&ray), None);
        assert!(Shape::cross(&bounds, 5.0, 1).intersect(&ray).is_some());
    }

    #[test]
    fn barrier_reports_its_limited_flag() {
        let wall = Shape::barrier(Point::new(50.0, 0.0), Point::new(50.0, 100.0), 3, true);
        let ray = Segment::new(Point::new(0.0, 50.0), Point::new(100.0, 50.0));
        assert_eq!(
            wall.intersect(&ray),
            Some(Hit {
                power: 3,
                limited: true
            })
        );
    }

    #[test]
    fn barrier_parallel_to_ray_misses() {
        let wall = Shape::barrier(Point::new(0.0, 10.0), Point::new(100.0, 10.0), 3, false);
        let ray = Segment::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert_eq!(wall.intersect(&ray), None);
    }

    #[test]
    fn zero_length_ray_misses_everything() {
        let p = Point::new(150.0, 150.0);
        let ray = Segment::new(p, p);
        assert_eq!(cell_cross(3).intersect(&ray), None);
        let wall = Shape::barrier(Point::new(0.0, 0.0), Point::new(300.0, 300.0), 3, false);
        assert_eq!(wall.intersect(&ray), None);
    }
}
