use glam::DVec2;

pub const FREE: bool = false;
pub const OCCUPIED: bool = true;

pub const DEFAULT_ROWS: u32 = 80;
pub const DEFAULT_COLS: u32 = 80;
pub const DEFAULT_CELL_SIZE: f64 = 20.0;
pub const DEFAULT_MAX_RAY_DISTANCE: f64 = 1000.0;
/// Centre of the 800x800 view the demo grid is drawn in.
pub const DEFAULT_ORIGIN: DVec2 = DVec2::new(400.0, 400.0);
pub const DEFAULT_ORIGIN_SPEED: f64 = 8.0;
pub const DEFAULT_DASH_LENGTH: f64 = 4.0;
pub const DEFAULT_OVERLAY_EXTENT: f64 = 100.0;
