//! Grid metadata.

use glam::DVec2;

use crate::types::{DEFAULT_CELL_SIZE, DEFAULT_COLS, DEFAULT_ROWS, GridCastError};

#[derive(Debug, Clone, PartialEq)]
pub struct GridInfo {
    /// Number of cells along x.
    pub cols: u32,
    /// Number of cells along y.
    pub rows: u32,
    /// Side length of one square cell in world units.
    pub cell_size: f64,
}

impl Default for GridInfo {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl GridInfo {
    pub fn new(cols: u32, rows: u32, cell_size: f64) -> Self {
        Self {
            cols,
            rows,
            cell_size,
        }
    }

    pub fn square(size: u32, cell_size: f64) -> Self {
        Self::new(size, size, cell_size)
    }

    /// Number of cells in the grid.
    #[inline]
    pub fn len(&self) -> usize {
        (self.cols as usize) * (self.rows as usize)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Width of the grid in world units.
    #[inline]
    pub fn world_width(&self) -> f64 {
        self.cols as f64 * self.cell_size
    }

    /// Height of the grid in world units.
    #[inline]
    pub fn world_height(&self) -> f64 {
        self.rows as f64 * self.cell_size
    }

    /// Center of the grid in world coordinates.
    #[inline]
    pub fn world_center(&self) -> DVec2 {
        DVec2::new(0.5 * self.world_width(), 0.5 * self.world_height())
    }

    pub fn validate(&self) -> Result<(), GridCastError> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(GridCastError::InvalidMetadata(format!(
                "cell size must be finite and positive, got {}",
                self.cell_size
            )));
        }
        Ok(())
    }
}
