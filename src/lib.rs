//! Ray casting through uniform 2D occupancy grids.
//!
//! [`cast_ray`] walks a ray cell by cell (DDA) and reports how far it travels
//! before entering an occupied cell. [`GridTraversal`] exposes the walk
//! itself, [`dashed_segments`] cuts a segment into dashes for overlays, and
//! [`Scene`] drives the whole thing one frame at a time without a window.

pub mod grid;
pub mod iterators;
pub mod raycast;
pub mod scene;
pub mod types;

pub use grid::OccupancyGrid;
pub use iterators::{DashedSegments, GridTraversal, dashed_segments};
pub use raycast::{RayHit2D, cast_ray, raycast_dda};
pub use scene::{Brush, Frame, FrameInput, Scene, SceneConfig};
pub use types::{GridCastError, GridInfo};
