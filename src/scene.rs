use crate::error::{GeometryError, Result};
use crate::overlap::{overlap_points, unique_points};
use crate::point::Point;
use crate::shape::{AABB, BoundingCircle, Intersect, Shape};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slotmapd::new_key_type;
use slotmapd::SlotMap;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

new_key_type! {
    /// Identifies a subset inside its Scene.
    /// It is returned when adding a subset and stops resolving once the scene is cleared.
    pub struct SubsetHandle;
}

/// Display color of a subset, each channel in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// A group of points sharing a color, with its lazily derived bounding volumes.
///
/// `aabb` and `circle` are only set by [`Scene::recompute_aabbs`] and
/// [`Scene::recompute_circles`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Subset {
    pub points: Vec<Point>,
    pub color: Color,
    pub aabb: Option<AABB>,
    pub circle: Option<BoundingCircle>,
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    /// World coordinate span, points are generated inside of it.
    pub world: AABB,
    /// Number of points generated by [`Scene::add_default_subset`].
    pub subset_size: usize,
    /// Seed of the point generator, entropy is used when `None`.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            world: AABB::new(Point::new(-100.0, -100.0), Point::new(100.0, 100.0)),
            subset_size: 10,
            seed: None,
        }
    }
}

/// Scene owns every subset and probe point of the viewer.
///
/// Derived data is never kept in sync automatically: after adding subsets,
/// call [`Scene::recompute_aabbs`] / [`Scene::recompute_circles`] to refresh it.
///
/// ## Example
/// ```rust
/// use bounding_volume::{scene::Scene, Point};
///
/// let mut s = Scene::new();
/// s.add_random_subset(10, -100.0..100.0, -100.0..100.0).unwrap();
/// assert!(s.aabbs()[0].is_none()); // Nothing computed yet
///
/// s.recompute_aabbs();
/// s.add_probe_point(Point::new(500.0, 500.0));
/// assert_eq!(s.probe_containment(), vec![false]);
///
/// s.clear();
/// assert!(s.is_cleared());
/// ```
#[derive(Clone, Debug)]
pub struct Scene {
    config: SceneConfig,
    subsets: SlotMap<SubsetHandle, Subset>,
    // SlotMap reuses slots after a clear, insertion order is kept here
    order: Vec<SubsetHandle>,
    probes: Vec<Point>,
    rng: StdRng,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    pub fn with_config(config: SceneConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            subsets: SlotMap::with_key(),
            order: vec![],
            probes: vec![],
            rng,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Appends a subset made of the given points. Derived data is not computed.
    pub fn add_subset(&mut self, points: Vec<Point>, color: Color) -> SubsetHandle {
        let h = self.subsets.insert(Subset {
            points,
            color,
            aabb: None,
            circle: None,
        });
        self.order.push(h);
        h
    }

    /// Appends a subset of `count` points uniformly sampled in `x_range` x `y_range`
    /// (end excluded), with a random color. Derived data is not computed.
    pub fn add_random_subset(
        &mut self,
        count: usize,
        x_range: Range<f64>,
        y_range: Range<f64>,
    ) -> Result<SubsetHandle> {
        check_range(&x_range)?;
        check_range(&y_range)?;

        let rng = &mut self.rng;
        let points = (0..count)
            .map(|_| {
                Point::new(
                    rng.gen_range(x_range.clone()),
                    rng.gen_range(y_range.clone()),
                )
            })
            .collect();
        let color = Color::new(rng.gen(), rng.gen(), rng.gen());

        let h = self.add_subset(points, color);
        log::debug!("added random subset {:?} with {} points", h, count);
        Ok(h)
    }

    /// Appends a random subset using the configured size and world span.
    pub fn add_default_subset(&mut self) -> Result<SubsetHandle> {
        let AABB { ll, ur } = self.config.world;
        self.add_random_subset(self.config.subset_size, ll.x..ur.x, ll.y..ur.y)
    }

    /// Removes every subset and probe point.
    pub fn clear(&mut self) {
        log::debug!(
            "clearing scene: {} subsets, {} probes",
            self.order.len(),
            self.probes.len()
        );
        self.subsets.clear();
        self.order.clear();
        self.probes.clear();
    }

    /// Rebuilds the AABB of every non-empty subset.
    pub fn recompute_aabbs(&mut self) {
        for &h in &self.order {
            let subset = &mut self.subsets[h];
            match AABB::from_points(&subset.points) {
                Ok(aabb) => subset.aabb = Some(aabb),
                Err(e) => log::debug!("skipping AABB of subset {:?}: {}", h, e),
            }
        }
    }

    /// Rebuilds the bounding circle of every non-empty subset.
    pub fn recompute_circles(&mut self) {
        for &h in &self.order {
            let subset = &mut self.subsets[h];
            match BoundingCircle::from_points(&subset.points) {
                Ok(circle) => subset.circle = Some(circle),
                Err(e) => log::debug!("skipping circle of subset {:?}: {}", h, e),
            }
        }
    }

    pub fn add_probe_point(&mut self, p: Point) {
        self.probes.push(p);
    }

    /// Whether `p` lies in at least one subset's AABB, edges included.
    pub fn point_in_any_aabb(&self, p: Point) -> bool {
        self.subsets()
            .filter_map(|(_, s)| s.aabb)
            .any(|aabb| p.intersects(aabb))
    }

    /// Every subset whose AABB contains `p`, in insertion order.
    pub fn containing_subsets(&self, p: Point) -> Vec<SubsetHandle> {
        self.subsets()
            .filter(|(_, s)| s.aabb.map_or(false, |aabb| p.intersects(aabb)))
            .map(|(h, _)| h)
            .collect()
    }

    /// Containment of every probe point, in probe order.
    pub fn probe_containment(&self) -> Vec<bool> {
        self.probes
            .iter()
            .map(|&p| self.point_in_any_aabb(p))
            .collect()
    }

    /// Edge crossings between the current AABBs, duplicates included.
    pub fn compute_overlaps(&self) -> Vec<Point> {
        overlap_points(&self.aabbs())
    }

    /// Same as [`Scene::compute_overlaps`] with exact duplicates removed.
    pub fn compute_unique_overlaps(&self) -> Vec<Point> {
        unique_points(&self.compute_overlaps())
    }

    /// Box enclosing every derived AABB and circle, `None` when nothing was computed.
    pub fn extent(&self) -> Option<AABB> {
        self.subsets()
            .flat_map(|(_, s)| {
                s.aabb
                    .map(|b| b.bbox())
                    .into_iter()
                    .chain(s.circle.map(|c| c.bbox()))
            })
            .reduce(|acc, b| acc.union(&b))
    }

    /// Iterate over all subsets in insertion order
    pub fn subsets(&self) -> impl Iterator<Item = (SubsetHandle, &Subset)> + '_ {
        self.order.iter().map(move |&h| (h, &self.subsets[h]))
    }

    /// Current AABB of every subset, in insertion order
    pub fn aabbs(&self) -> Vec<Option<AABB>> {
        self.subsets().map(|(_, s)| s.aabb).collect()
    }

    pub fn get(&self, h: SubsetHandle) -> Option<&Subset> {
        self.subsets.get(h)
    }

    pub fn probe_points(&self) -> &[Point] {
        &self.probes
    }

    /// Returns the number of subsets
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Checks if the scene contains no subsets, probe points are not counted (like `len`)
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Checks if the scene holds neither subsets nor probe points, as right after `clear`
    pub fn is_cleared(&self) -> bool {
        self.order.is_empty() && self.probes.is_empty()
    }
}

fn check_range(r: &Range<f64>) -> Result<()> {
    if r.start.is_finite() && r.end.is_finite() && r.start < r.end {
        Ok(())
    } else {
        Err(GeometryError::InvalidRange {
            start: r.start,
            end: r.end,
        })
    }
}
