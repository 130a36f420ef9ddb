use glam::{DVec2, IVec2};
use log::trace;

use crate::grid::OccupancyGrid;
use crate::types::{CellCrossing, Direction2D, GridCastError, Point2D};

/// Walks a ray through the uniform grid one cell boundary at a time (DDA).
///
/// Each step crosses the nearer of the next vertical or horizontal grid line
/// and yields the cell entered together with the ray distance of that
/// boundary. The start cell is never yielded. Cells outside the grid are
/// yielded too, since a ray may leave and re-enter the mapped area.
///
/// Iteration ends once the next boundary lies beyond `max_distance`, or once
/// the ray is outside the grid and heading away from it.
#[derive(Debug, Clone)]
pub struct GridTraversal<'a> {
    grid: &'a OccupancyGrid,
    max_distance: f64,
    /// Per-axis cell step, -1 or +1.
    step: IVec2,
    /// Ray distance needed to cross one whole cell along each axis.
    t_delta: DVec2,
    /// Ray distance to the next unreached grid line along each axis.
    ray_len: DVec2,
    /// Current cell being processed.
    cell: IVec2,
    start: IVec2,
    done: bool,
}

impl<'a> GridTraversal<'a> {
    pub fn new(
        grid: &'a OccupancyGrid,
        origin: Point2D,
        dir: Direction2D,
        max_distance: f64,
    ) -> Result<Self, GridCastError> {
        check_ray(origin, dir, max_distance)?;

        let cell_size = grid.cell_size();
        let cell = grid.world_to_cell(origin);

        let (step_x, t_delta_x, ray_len_x) = axis_params(origin.x, dir.x, dir.y, cell.x, cell_size);
        let (step_y, t_delta_y, ray_len_y) = axis_params(origin.y, dir.y, dir.x, cell.y, cell_size);

        trace!(
            "traversal from {:?} (cell {:?}) along {:?}, budget {}",
            origin, cell, dir, max_distance
        );

        Ok(Self {
            grid,
            max_distance,
            step: IVec2::new(step_x, step_y),
            t_delta: DVec2::new(t_delta_x, t_delta_y),
            ray_len: DVec2::new(ray_len_x, ray_len_y),
            cell,
            start: cell,
            done: false,
        })
    }

    /// Cell containing the ray origin.
    pub fn start_cell(&self) -> IVec2 {
        self.start
    }

    pub fn grid(&self) -> &'a OccupancyGrid {
        self.grid
    }

    /// True once the ray sits outside the grid on an axis it can no longer
    /// move back along. No later cell can be inside the grid.
    fn escaped(&self) -> bool {
        let cols = self.grid.cols() as i64;
        let rows = self.grid.rows() as i64;
        axis_escaped(self.cell.x as i64, cols, self.step.x, self.t_delta.x)
            || axis_escaped(self.cell.y as i64, rows, self.step.y, self.t_delta.y)
    }
}

impl Iterator for GridTraversal<'_> {
    type Item = CellCrossing;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.escaped() {
            self.done = true;
            return None;
        }

        // Ties step y first; x follows on the next call at the same distance.
        let step_x = self.ray_len.x < self.ray_len.y;
        let distance = if step_x { self.ray_len.x } else { self.ray_len.y };

        if distance > self.max_distance {
            self.done = true;
            return None;
        }

        if step_x {
            self.cell.x += self.step.x;
            self.ray_len.x += self.t_delta.x;
        } else {
            self.cell.y += self.step.y;
            self.ray_len.y += self.t_delta.y;
        }

        Some(CellCrossing {
            cell: self.cell,
            distance,
        })
    }
}

/// Reject rays the traversal cannot walk.
pub(crate) fn check_ray(
    origin: Point2D,
    dir: Direction2D,
    max_distance: f64,
) -> Result<(), GridCastError> {
    if !origin.is_finite() {
        return Err(GridCastError::InvalidOrigin {
            x: origin.x,
            y: origin.y,
        });
    }
    if !dir.is_finite() || dir == DVec2::ZERO {
        return Err(GridCastError::DegenerateDirection { x: dir.x, y: dir.y });
    }
    if max_distance.is_nan() || max_distance < 0.0 {
        return Err(GridCastError::InvalidMaxDistance(max_distance));
    }
    Ok(())
}

/// Returns `(step, t_delta, ray_len)` for one axis.
///
/// `t_delta` is `sqrt(1 + (other / dir)^2) * cell_size`, the ray length that
/// advances one cell along this axis. An axis the ray does not move along
/// gets infinite lengths so it never wins the nearest-boundary comparison.
fn axis_params(origin: f64, dir: f64, other: f64, cell: i32, cell_size: f64) -> (i32, f64, f64) {
    let step = if dir < 0.0 { -1 } else { 1 };
    if dir == 0.0 {
        return (step, f64::INFINITY, f64::INFINITY);
    }

    let ratio = other / dir;
    let step_len = (1.0 + ratio * ratio).sqrt();
    let dist_to_boundary = if step < 0 {
        origin - cell as f64 * cell_size
    } else {
        (cell as f64 + 1.0) * cell_size - origin
    };

    (step, step_len * cell_size, dist_to_boundary * step_len)
}

fn axis_escaped(cell: i64, len: i64, step: i32, t_delta: f64) -> bool {
    let stuck = t_delta.is_infinite();
    (cell < 0 && (step < 0 || stuck)) || (cell >= len && (step > 0 || stuck))
}
