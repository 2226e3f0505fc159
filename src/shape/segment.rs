use crate::error::{GeometryError, Result};
use crate::point::Point;
use crate::shape::{AABB, Intersect, Shape};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A finite line segment going from `src` to `dst`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    pub src: Point,
    pub dst: Point,
}

impl Segment {
    pub fn new(src: Point, dst: Point) -> Self {
        Self { src, dst }
    }

    /// Strict crossing test, see [`segments_intersect`].
    pub fn crosses(&self, s: &Segment) -> bool {
        segments_intersect(self.src, self.dst, s.src, s.dst)
    }

    /// See [`intersection_point`].
    pub fn intersection(&self, s: &Segment) -> Result<Point> {
        intersection_point(self.src, self.dst, s.src, s.dst)
    }
}

impl Shape for Segment {
    fn bbox(&self) -> AABB {
        AABB::new(self.src, self.dst)
    }
}

impl Intersect<Segment> for Segment {
    fn intersects(&self, s: Segment) -> bool {
        self.crosses(&s)
    }
}

/// Twice the signed area of the triangle `(p1, p2, p3)`.
/// Positive when `p3` lies to the left of the line `p1 -> p2`, negative to the right.
pub fn cross_product(p1: Point, p2: Point, p3: Point) -> f64 {
    (p2.x - p1.x) * (p3.y - p1.y) - (p2.y - p1.y) * (p3.x - p1.x)
}

/// Returns true iff `ab` and `cd` properly cross: each segment has the endpoints
/// of the other strictly on opposite sides.
///
/// Collinear, overlapping and endpoint-touching segments never cross.
///
/// # Example
/// ```rust
/// use bounding_volume::{shape::segments_intersect, Point};
/// let (a, b) = (Point::new(0.0, 0.0), Point::new(10.0, 10.0));
/// let (c, d) = (Point::new(0.0, 10.0), Point::new(10.0, 0.0));
/// assert!(segments_intersect(a, b, c, d));
/// ```
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    let d1 = cross_product(a, b, c);
    let d2 = cross_product(a, b, d);
    let d3 = cross_product(c, d, a);
    let d4 = cross_product(c, d, b);

    d1 * d2 < 0.0 && d3 * d4 < 0.0
}

/// Solves `a + t * (b - a) = c + u * (d - c)` and returns the point on `ab`.
///
/// Meant to be called once [`segments_intersect`] confirmed a crossing.
/// Parallel or collinear segments give [`GeometryError::ParallelSegments`] and
/// parameters outside of `[0, 1]` give [`GeometryError::NoIntersection`].
/// Both failures are logged once here, callers don't need to log them again.
pub fn intersection_point(a: Point, b: Point, c: Point, d: Point) -> Result<Point> {
    let r = b - a;
    let s = d - c;
    let det = r.x * s.y - r.y * s.x;

    if det == 0.0 {
        log::warn!("no intersection between parallel segments {:?} and {:?}", (a, b), (c, d));
        return Err(GeometryError::ParallelSegments);
    }

    let ac = c - a;
    let t = (ac.x * s.y - ac.y * s.x) / det;
    let u = (ac.x * r.y - ac.y * r.x) / det;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Ok(a + r * t)
    } else {
        log::warn!("no intersection between segments: t = {}, u = {}", t, u);
        Err(GeometryError::NoIntersection { t, u })
    }
}
