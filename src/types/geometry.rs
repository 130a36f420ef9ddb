//! Geometric types shared by the caster and the scene driver.

use glam::{DVec2, IVec2};

/// A point in continuous world space.
pub type Point2D = DVec2;

/// A ray direction. Expected to be unit length; only the degenerate zero
/// vector is rejected.
pub type Direction2D = DVec2;

/// Unit direction from `from` towards `to`, or zero if the points coincide.
#[inline]
pub fn direction_towards(from: Point2D, to: Point2D) -> Direction2D {
    (to - from).normalize_or_zero()
}

/// One cell crossed by a grid traversal.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CellCrossing {
    /// Cell entered by this step. May lie outside the grid.
    pub cell: IVec2,
    /// Ray distance at which the boundary into `cell` was crossed.
    pub distance: f64,
}
