use crate::point::Point;

mod aabb;
mod circle;
mod segment;

pub use aabb::*;
pub use circle::*;
pub use segment::*;

pub trait Intersect<T: Shape> {
    fn intersects(&self, shape: T) -> bool;
}

/// Anything that can be enclosed in an axis-aligned box.
pub trait Shape: Copy {
    fn bbox(&self) -> AABB;
}

impl Shape for Point {
    fn bbox(&self) -> AABB {
        AABB { ll: *self, ur: *self }
    }
}

impl Intersect<AABB> for Point {
    fn intersects(&self, aabb: AABB) -> bool {
        aabb.contains(*self)
    }
}
