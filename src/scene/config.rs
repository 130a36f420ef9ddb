//! Configuration for the headless scene driver.

use std::path::Path;

use glam::DVec2;
use log::info;
use serde::{Deserialize, Serialize};

use crate::types::{
    DEFAULT_CELL_SIZE, DEFAULT_COLS, DEFAULT_DASH_LENGTH, DEFAULT_MAX_RAY_DISTANCE,
    DEFAULT_ORIGIN, DEFAULT_ORIGIN_SPEED, DEFAULT_OVERLAY_EXTENT, DEFAULT_ROWS, GridCastError,
    GridInfo,
};

/// Scene parameters. Keys missing from a YAML file fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Grid rows.
    /// Default: 80
    pub rows: u32,

    /// Grid columns.
    /// Default: 80
    pub cols: u32,

    /// Side length of one cell in world units.
    /// Default: 20.0
    pub cell_size: f64,

    /// Initial ray origin in world units.
    /// Default: [400.0, 400.0]
    pub origin: DVec2,

    /// Distance the origin moves per frame along each input axis.
    /// Default: 8.0
    pub origin_speed: f64,

    /// Distance budget handed to every cast.
    /// Default: 1000.0
    pub max_ray_distance: f64,

    /// Length of one dash in the continuation overlay.
    /// Default: 4.0
    pub dash_length: f64,

    /// The dashed continuation runs `overlay_extent * max_ray_distance` past
    /// the target.
    /// Default: 100.0
    pub overlay_extent: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cell_size: DEFAULT_CELL_SIZE,
            origin: DEFAULT_ORIGIN,
            origin_speed: DEFAULT_ORIGIN_SPEED,
            max_ray_distance: DEFAULT_MAX_RAY_DISTANCE,
            dash_length: DEFAULT_DASH_LENGTH,
            overlay_extent: DEFAULT_OVERLAY_EXTENT,
        }
    }
}

impl SceneConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, GridCastError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, GridCastError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&yaml)?;
        info!(
            "loaded scene config from {}: {}x{} cells of {}",
            path.display(),
            config.cols,
            config.rows,
            config.cell_size
        );
        Ok(config)
    }

    pub fn grid_info(&self) -> GridInfo {
        GridInfo::new(self.cols, self.rows, self.cell_size)
    }

    pub fn validate(&self) -> Result<(), GridCastError> {
        self.grid_info().validate()?;

        if !self.origin.is_finite() {
            return Err(invalid("origin", self.origin));
        }
        if !self.origin_speed.is_finite() || self.origin_speed < 0.0 {
            return Err(invalid("origin_speed", self.origin_speed));
        }
        if self.max_ray_distance.is_nan() || self.max_ray_distance < 0.0 {
            return Err(invalid("max_ray_distance", self.max_ray_distance));
        }
        if !self.dash_length.is_finite() || self.dash_length <= 0.0 {
            return Err(invalid("dash_length", self.dash_length));
        }
        if !self.overlay_extent.is_finite() || self.overlay_extent < 0.0 {
            return Err(invalid("overlay_extent", self.overlay_extent));
        }
        Ok(())
    }
}

fn invalid(field: &str, value: impl std::fmt::Debug) -> GridCastError {
    GridCastError::InvalidMetadata(format!("invalid {field}: {value:?}"))
}
