pub mod constants;
pub mod error;
pub mod geometry;
pub mod info;

pub use constants::*;
pub use error::GridCastError;
pub use geometry::{CellCrossing, Direction2D, Point2D, direction_towards};
pub use info::GridInfo;
