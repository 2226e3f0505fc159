use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeometryError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A builder was handed no points. AABBs and bounding circles are undefined for empty sets.
    #[error("cannot build a bounding volume from an empty point set")]
    EmptyPointSet,
    /// The two segments are parallel or collinear (`det == 0`), the solver has no unique answer.
    #[error("segments are parallel, no unique intersection point")]
    ParallelSegments,
    /// The solved parameters fall outside of both segments.
    #[error("segments do not intersect (t = {t}, u = {u})")]
    NoIntersection { t: f64, u: f64 },
    #[error("an AABB needs exactly 4 corners, got {corners}")]
    MalformedAABB { corners: usize },
    #[error("invalid sampling range {start}..{end}")]
    InvalidRange { start: f64, end: f64 },
}
