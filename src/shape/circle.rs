use crate::error::{GeometryError, Result};
use crate::point::Point;
use crate::shape::{AABB, Shape};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An enclosing circle centered on the centroid of a point set.
///
/// The radius is the distance to the farthest point, so every point is inside
/// but the circle is generally larger than the minimum enclosing circle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingCircle {
    pub center: Point,
    pub radius: f64,
}

impl BoundingCircle {
    /// Builds the centroid + farthest-point circle of `points`.
    ///
    /// Returns [`GeometryError::EmptyPointSet`] for an empty slice, the centroid is undefined there.
    pub fn from_points(points: &[Point]) -> Result<Self> {
        if points.is_empty() {
            return Err(GeometryError::EmptyPointSet);
        }

        let sum = points.iter().fold(Point::ORIGIN, |acc, &p| acc + p);
        let n = points.len() as f64;
        let center = Point::new(sum.x / n, sum.y / n);

        let radius = points
            .iter()
            .map(|&p| center.distance(p))
            .fold(0.0, f64::max);

        Ok(Self { center, radius })
    }

    pub fn contains(&self, p: Point) -> bool {
        self.center.distance(p) <= self.radius
    }
}

impl Shape for BoundingCircle {
    fn bbox(&self) -> AABB {
        AABB {
            ll: Point {
                x: self.center.x - self.radius,
                y: self.center.y - self.radius,
            },
            ur: Point {
                x: self.center.x + self.radius,
                y: self.center.y + self.radius,
            },
        }
    }
}
