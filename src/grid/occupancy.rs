use glam::{DVec2, IVec2, UVec2};

use crate::types::{FREE, GridCastError, GridInfo, OCCUPIED};

/// Uniform grid of wall flags stored row-major in a single buffer.
///
/// Cell `(x, y)` is column `x`, row `y`. Its lower corner sits at world
/// `(x * cell_size, y * cell_size)`.
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyGrid {
    info: GridInfo,
    data: Vec<bool>,
}

impl OccupancyGrid {
    pub fn new(info: GridInfo, data: Vec<bool>) -> Result<Self, GridCastError> {
        info.validate()?;

        let expected_len = info.len();
        if data.len() != expected_len {
            return Err(GridCastError::InvalidMetadata(format!(
                "data length {} does not match grid size {}",
                data.len(),
                expected_len
            )));
        }

        Ok(Self { info, data })
    }

    /// Grid with every cell free.
    pub fn empty(info: GridInfo) -> Result<Self, GridCastError> {
        let data = vec![FREE; info.len()];
        Self::new(info, data)
    }

    pub fn info(&self) -> &GridInfo {
        &self.info
    }

    pub fn cols(&self) -> u32 {
        self.info.cols
    }

    pub fn rows(&self) -> u32 {
        self.info.rows
    }

    pub fn cell_size(&self) -> f64 {
        self.info.cell_size
    }

    pub fn get(&self, cell: UVec2) -> Option<bool> {
        if !self.contains(cell.as_ivec2()) {
            return None;
        }
        Some(self.data[self.index(cell)])
    }

    pub fn set(&mut self, cell: UVec2, occupied: bool) -> Result<(), GridCastError> {
        if !self.contains(cell.as_ivec2()) {
            return Err(GridCastError::OutOfBounds(format!(
                "cell ({}, {}) out of bounds for grid {}x{}",
                cell.x, cell.y, self.info.cols, self.info.rows
            )));
        }
        let idx = self.index(cell);
        self.data[idx] = occupied;
        Ok(())
    }

    /// Whether a signed cell lies inside the grid.
    #[inline]
    pub fn contains(&self, cell: IVec2) -> bool {
        // equivalent to (x >= 0 && x < cols) for signed x
        (cell.x as u32) < self.info.cols && (cell.y as u32) < self.info.rows
    }

    /// Signed lookup; anything outside the grid is open space.
    #[inline]
    pub fn is_occupied(&self, cell: IVec2) -> bool {
        self.contains(cell) && self.data[self.index(cell.as_uvec2())] == OCCUPIED
    }

    /// Cell containing a world point. Points on a grid line belong to the cell
    /// with the larger coordinate.
    #[inline]
    pub fn world_to_cell(&self, pos: DVec2) -> IVec2 {
        (pos / self.info.cell_size).floor().as_ivec2()
    }

    /// Lower corner of a cell in world coordinates.
    #[inline]
    pub fn cell_to_world(&self, cell: IVec2) -> DVec2 {
        cell.as_dvec2() * self.info.cell_size
    }

    /// Set the cell under a world point. Returns `false` when the point is
    /// outside the grid and nothing was changed.
    pub fn set_world(&mut self, pos: DVec2, occupied: bool) -> bool {
        if !pos.is_finite() {
            return false;
        }
        let cell = self.world_to_cell(pos);
        if !self.contains(cell) {
            return false;
        }
        let idx = self.index(cell.as_uvec2());
        self.data[idx] = occupied;
        true
    }

    /// Mark every cell free.
    pub fn clear(&mut self) {
        self.data.fill(FREE);
    }

    pub fn occupied_count(&self) -> usize {
        self.data.iter().filter(|&&cell| cell == OCCUPIED).count()
    }

    pub fn data(&self) -> &[bool] {
        &self.data
    }

    #[inline]
    fn index(&self, cell: UVec2) -> usize {
        (cell.y as usize) * (self.info.cols as usize) + (cell.x as usize)
    }
}
