use crate::error::{GeometryError, Result};
use crate::point::Point;
use crate::shape::{Intersect, Segment, Shape};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box. `ll.x <= ur.x` and `ll.y <= ur.y` always hold.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AABB {
    /// Lower left of the AABB
    pub ll: Point,
    /// Upper right of the AABB
    pub ur: Point,
}

impl AABB {
    /// Builds the box spanned by two arbitrary points.
    pub fn new(p1: Point, p2: Point) -> Self {
        AABB {
            ll: Point {
                x: p1.x.min(p2.x),
                y: p1.y.min(p2.y),
            },
            ur: Point {
                x: p1.x.max(p2.x),
                y: p1.y.max(p2.y),
            },
        }
    }

    /// Tightest box around `points`, in a single scan.
    ///
    /// The box is undefined for an empty slice, which is reported as
    /// [`GeometryError::EmptyPointSet`]. A single point gives a degenerate box.
    ///
    /// # Example
    /// ```rust
    /// use bounding_volume::{shape::AABB, Point};
    /// let b = AABB::from_points(&[Point::new(1.0, 5.0), Point::new(-2.0, 3.0)]).unwrap();
    /// assert_eq!(b.ll, Point::new(-2.0, 3.0));
    /// assert_eq!(b.ur, Point::new(1.0, 5.0));
    /// ```
    pub fn from_points(points: &[Point]) -> Result<Self> {
        if points.is_empty() {
            return Err(GeometryError::EmptyPointSet);
        }

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Ok(AABB {
            ll: Point::new(min_x, min_y),
            ur: Point::new(max_x, max_y),
        })
    }

    /// Rebuilds a box from a raw `[BL, BR, TL, TR]` corner list.
    pub fn try_from_corners(corners: &[Point]) -> Result<Self> {
        match corners {
            [bl, _, _, tr] => Ok(AABB::new(*bl, *tr)),
            _ => Err(GeometryError::MalformedAABB {
                corners: corners.len(),
            }),
        }
    }

    /// Corners in canonical order: bottom-left, bottom-right, top-left, top-right.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.ll,
            Point::new(self.ur.x, self.ll.y),
            Point::new(self.ll.x, self.ur.y),
            self.ur,
        ]
    }

    /// Edges in order left, right, top, bottom.
    pub fn edges(&self) -> [Segment; 4] {
        let [bl, br, tl, tr] = self.corners();
        [
            Segment::new(bl, tl),
            Segment::new(br, tr),
            Segment::new(tl, tr),
            Segment::new(bl, br),
        ]
    }

    /// Inclusive containment, points on an edge are inside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.ll.x && p.y >= self.ll.y && p.x <= self.ur.x && p.y <= self.ur.y
    }

    pub fn width(&self) -> f64 {
        self.ur.x - self.ll.x
    }

    pub fn height(&self) -> f64 {
        self.ur.y - self.ll.y
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &AABB) -> AABB {
        AABB {
            ll: Point::new(self.ll.x.min(other.ll.x), self.ll.y.min(other.ll.y)),
            ur: Point::new(self.ur.x.max(other.ur.x), self.ur.y.max(other.ur.y)),
        }
    }
}

/// Free-function form of [`AABB::contains`].
pub fn point_in_aabb(p: Point, aabb: &AABB) -> bool {
    aabb.contains(p)
}

impl Shape for AABB {
    fn bbox(&self) -> AABB {
        *self
    }
}

impl Intersect<AABB> for AABB {
    /// Inclusive overlap, boxes sharing only an edge or a corner intersect.
    fn intersects(&self, b: AABB) -> bool {
        let a = self;
        // Plain comparisons, sums of coordinates would round away ulp-wide overlaps
        let x = a.ll.x <= b.ur.x && b.ll.x <= a.ur.x;
        let y = a.ll.y <= b.ur.y && b.ll.y <= a.ur.y;

        x && y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rand_points(n: usize) -> Vec<Point> {
        (0..n)
            .map(|_| {
                Point::new(
                    fastrand::f64() * 200.0 - 100.0,
                    fastrand::f64() * 200.0 - 100.0,
                )
            })
            .collect()
    }

    #[test]
    fn test_empty() {
        assert_eq!(AABB::from_points(&[]), Err(GeometryError::EmptyPointSet));
    }

    #[test]
    fn test_single_point() {
        let p = Point::new(3.0, -7.0);
        let b = AABB::from_points(&[p]).unwrap();
        assert_eq!(b.corners(), [p; 4]);
        assert!(b.contains(p));
        assert_eq!(b.width(), 0.0);
        assert_eq!(b.height(), 0.0);
    }

    #[test]
    fn test_corner_order() {
        let b = AABB::from_points(&[
            Point::new(2.0, 8.0),
            Point::new(-4.0, 1.0),
            Point::new(6.0, 3.0),
        ])
        .unwrap();

        assert_eq!(
            b.corners(),
            [
                Point::new(-4.0, 1.0),
                Point::new(6.0, 1.0),
                Point::new(-4.0, 8.0),
                Point::new(6.0, 8.0),
            ]
        );
    }

    #[test]
    fn test_tightest_box() {
        fastrand::seed(0);
        for _ in 0..100 {
            let pts = rand_points(1 + fastrand::usize(..30));
            let b = AABB::from_points(&pts).unwrap();

            for p in &pts {
                assert!(b.contains(*p));
            }

            // Every side of the box touches at least one input point
            assert!(pts.iter().any(|p| p.x == b.ll.x));
            assert!(pts.iter().any(|p| p.x == b.ur.x));
            assert!(pts.iter().any(|p| p.y == b.ll.y));
            assert!(pts.iter().any(|p| p.y == b.ur.y));
        }
    }

    #[test]
    fn test_corners_contained() {
        fastrand::seed(1);
        for _ in 0..50 {
            let b = AABB::from_points(&rand_points(5)).unwrap();
            for c in b.corners() {
                assert!(point_in_aabb(c, &b));
            }
        }
    }

    #[test]
    fn test_contains_inclusive() {
        let b = AABB::new(Point::new(0.0, 0.0), Point::new(10.0, 5.0));

        assert!(b.contains(Point::new(0.0, 2.0)));
        assert!(b.contains(Point::new(10.0, 5.0)));
        assert!(b.contains(Point::new(4.0, 0.0)));
        assert!(!b.contains(Point::new(10.000001, 2.0)));
        assert!(!b.contains(Point::new(4.0, -0.5)));
    }

    #[test]
    fn test_try_from_corners() {
        let b = AABB::new(Point::new(-1.0, -2.0), Point::new(3.0, 4.0));
        assert_eq!(AABB::try_from_corners(&b.corners()), Ok(b));

        assert_eq!(
            AABB::try_from_corners(&b.corners()[..3]),
            Err(GeometryError::MalformedAABB { corners: 3 })
        );
        assert_eq!(
            AABB::try_from_corners(&[]),
            Err(GeometryError::MalformedAABB { corners: 0 })
        );
    }

    #[test]
    fn test_edges() {
        let b = AABB::new(Point::new(0.0, 0.0), Point::new(2.0, 1.0));
        let [left, right, top, bottom] = b.edges();

        assert_eq!((left.src, left.dst), (Point::new(0.0, 0.0), Point::new(0.0, 1.0)));
        assert_eq!((right.src, right.dst), (Point::new(2.0, 0.0), Point::new(2.0, 1.0)));
        assert_eq!((top.src, top.dst), (Point::new(0.0, 1.0), Point::new(2.0, 1.0)));
        assert_eq!((bottom.src, bottom.dst), (Point::new(0.0, 0.0), Point::new(2.0, 0.0)));
    }

    #[test]
    fn test_aabb_intersects() {
        let a = AABB::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let b = AABB::new(Point::new(5.0, 5.0), Point::new(15.0, 15.0));
        let c = AABB::new(Point::new(11.0, 11.0), Point::new(15.0, 15.0));

        assert!(a.intersects(b));
        assert!(b.intersects(a));
        assert!(!a.intersects(c));
        assert!(b.intersects(c));
    }

    #[test]
    fn test_aabb_intersects_ulp_overlap() {
        let a = AABB::new(
            Point::new(20.25335517762126, 4.433680692779074),
            Point::new(49.922157713552906, 86.82398646696355),
        );
        let b = AABB::new(
            Point::new(49.9221577135529, 45.62883357987131),
            Point::new(137.97296622812544, 110.33159452669926),
        );

        assert!(a.intersects(b));
        assert!(b.intersects(a));

        let touching = AABB::new(Point::new(49.922157713552906, 10.0), Point::new(60.0, 20.0));
        assert!(a.intersects(touching));
        let apart = AABB::new(
            Point::new(f64::from_bits(49.922157713552906f64.to_bits() + 1), 10.0),
            Point::new(60.0, 20.0),
        );
        assert!(!a.intersects(apart));
    }

    #[test]
    fn test_union() {
        let a = AABB::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let b = AABB::new(Point::new(-3.0, 0.5), Point::new(0.5, 4.0));
        assert_eq!(
            a.union(&b),
            AABB::new(Point::new(-3.0, 0.0), Point::new(1.0, 4.0))
        );
    }
}
