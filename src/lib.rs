//!
//! bounding_volume is the geometry engine of a 2D bounding volume viewer.
//!
//! Points are grouped in subsets owned by a [`Scene`]. For each subset the scene derives
//! an axis-aligned bounding box and a bounding circle (centroid + farthest point), tests
//! free-floating probe points against the boxes and reports the points where boxes of
//! different subsets cross each other.
//!
//! Derived data is recomputed on request only, drawing is left to the caller.
//!

pub mod error;
pub mod overlap;
pub mod point;
pub mod scene;
pub mod shape;

pub use error::{GeometryError, Result};
pub use point::Point;
pub use scene::{Color, Scene, SceneConfig, Subset, SubsetHandle};
