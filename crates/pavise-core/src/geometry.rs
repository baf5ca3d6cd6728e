//! Minimal 2D primitives: points, segments, and axis-aligned rectangles.
//!
//! Coordinates are map pixels. Point equality is exact floating-point
//! equality — obstacle corners and grid-cell corners are produced by the
//! same arithmetic, so identical points compare bit-identical and no
//! epsilon tolerance is introduced.

use std::fmt;

/// A point in map-pixel coordinates.
///
/// Equality is exact; see the module docs for why no tolerance is used.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Horizontal pixel coordinate.
    pub x: f64,
    /// Vertical pixel coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point at `(x, y)`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An ordered pair of points.
///
/// Used both as a visibility ray (observer sample point → target corner)
/// and as an obstacle edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Start point.
    pub a: Point,
    /// End point.
    pub b: Point,
}

impl Segment {
    /// Create a segment from `a` to `b`.
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Whether this segment crosses `other`.
    ///
    /// Parametric line intersection: both parameters must fall in the
    /// inclusive `[0, 1]` range. Parallel and degenerate (zero-length)
    /// segments never cross — a zero denominator reports no intersection,
    /// which is what the sampler relies on when footprint corners
    /// coincide and a ray collapses to a point.
    pub fn crosses(&self, other: &Segment) -> bool {
        let rx = self.b.x - self.a.x;
        let ry = self.b.y - self.a.y;
        let sx = other.b.x - other.a.x;
        let sy = other.b.y - other.a.y;

        let denom = rx * sy - ry * sx;
        if denom == 0.0 {
            return false;
        }

        let qpx = other.a.x - self.a.x;
        let qpy = other.a.y - self.a.y;
        let t = (qpx * sy - qpy * sx) / denom;
        let u = (qpx * ry - qpy * rx) / denom;

        (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
    }
}

/// An axis-aligned rectangle: a footprint or bounding box in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Rect {
    /// Create a rectangle from its top-left corner and extents.
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// The four corners in top-left, top-right, bottom-right,
    /// bottom-left order.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.x + self.w, self.y),
            Point::new(self.x + self.w, self.y + self.h),
            Point::new(self.x, self.y + self.h),
        ]
    }

    /// This rectangle grown outward by `by` pixels on every side.
    ///
    /// A negative `by` shrinks inward instead.
    pub fn grown(&self, by: f64) -> Rect {
        Rect::new(
            self.x - by,
            self.y - by,
            self.w + 2.0 * by,
            self.h + 2.0 * by,
        )
    }

    /// This rectangle shrunk inward by `by` pixels on every side.
    pub fn shrunk(&self, by: f64) -> Rect {
        self.grown(-by)
    }
}
