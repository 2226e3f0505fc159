//! Overlap points between axis-aligned boxes.
//!
//! Two boxes overlap when one of their edges strictly crosses an edge of the other.
//! Every crossing is reported as a point, which is what a viewer draws.

use crate::point::Point;
use crate::shape::AABB;
use fnv::FnvHashSet;

/// Finds every edge-edge crossing between distinct boxes.
///
/// `boxes` is indexed like the subsets that produced them, `None` entries are
/// skipped. Each ordered pair `(i, j)` with `i != j` is visited, testing the 4 edges
/// of `i` against the 4 edges of `j` (left, right, top, bottom), so each crossing
/// between two boxes appears once per direction. Duplicates are kept, see
/// [`unique_points`] to drop them.
///
/// # Example
/// ```rust
/// use bounding_volume::{overlap::overlap_points, shape::AABB, Point};
/// let a = AABB::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
/// let b = AABB::new(Point::new(5.0, 5.0), Point::new(15.0, 15.0));
///
/// let pts = overlap_points(&[Some(a), Some(b)]);
/// assert!(pts.contains(&Point::new(10.0, 5.0)));
/// assert!(pts.contains(&Point::new(5.0, 10.0)));
/// ```
pub fn overlap_points(boxes: &[Option<AABB>]) -> Vec<Point> {
    let mut points = vec![];

    for (i, a) in boxes.iter().enumerate() {
        let a = match a {
            Some(a) => a,
            None => {
                log::debug!("skipping subset {}: no AABB computed", i);
                continue;
            }
        };

        for (j, b) in boxes.iter().enumerate() {
            if i == j {
                continue;
            }
            let b = match b {
                Some(b) => b,
                None => continue,
            };
            edge_crossings(a, b, &mut points);
        }
    }

    points
}

fn edge_crossings(a: &AABB, b: &AABB, out: &mut Vec<Point>) {
    for ea in a.edges() {
        for eb in b.edges() {
            if !ea.crosses(&eb) {
                continue;
            }
            // The solver already warns when it fails
            if let Ok(p) = ea.intersection(&eb) {
                out.push(p);
            }
        }
    }
}

/// Removes exact duplicates (same bit pattern), keeping the first occurrence of each point.
pub fn unique_points(points: &[Point]) -> Vec<Point> {
    let mut seen = FnvHashSet::default();
    points
        .iter()
        .copied()
        .filter(|p| seen.insert((p.x.to_bits(), p.y.to_bits())))
        .collect()
}
