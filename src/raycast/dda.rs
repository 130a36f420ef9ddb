use log::{debug, warn};

use crate::grid::OccupancyGrid;
use crate::iterators::GridTraversal;
use crate::raycast::RayHit2D;
use crate::types::{Direction2D, GridCastError, Point2D};

/// Grid traversal (DDA) that returns the first occupied cell the ray enters.
///
/// Only cells entered by crossing a boundary are tested, so a ray starting
/// inside a wall does not hit that wall. Cells outside the grid count as open
/// space. The hit distance never exceeds `max_distance`.
///
/// Errors on a zero or non-finite direction, a non-finite origin, and a
/// negative or NaN `max_distance`. The direction should be unit length;
/// distances are measured along the line in world units either way.
pub fn raycast_dda(
    grid: &OccupancyGrid,
    origin: Point2D,
    dir: Direction2D,
    max_distance: f64,
) -> Result<Option<RayHit2D>, GridCastError> {
    let mut traversal = GridTraversal::new(grid, origin, dir, max_distance)
        .inspect_err(|err| warn!("rejected ray cast: {err}"))?;

    let hit = traversal
        .find(|step| grid.is_occupied(step.cell))
        .map(|step| RayHit2D {
            cell: step.cell,
            hit_distance: step.distance,
        });

    match &hit {
        Some(hit) => debug!("ray hit cell {:?} at {}", hit.cell, hit.hit_distance),
        None => debug!("ray missed within {max_distance}"),
    }

    Ok(hit)
}

/// Distance the ray travels before entering an occupied cell, or exactly
/// `max_distance` if it never does.
pub fn cast_ray(
    grid: &OccupancyGrid,
    origin: Point2D,
    dir: Direction2D,
    max_distance: f64,
) -> Result<f64, GridCastError> {
    let hit = raycast_dda(grid, origin, dir, max_distance)?;
    Ok(RayHit2D::distance_or(hit, max_distance))
}
