use glam::IVec2;

pub mod dda;

pub use dda::{cast_ray, raycast_dda};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RayHit2D {
    /// Occupied grid cell the ray entered.
    pub cell: IVec2,
    /// Distance from the ray origin to the cell boundary hit (world units).
    pub hit_distance: f64,
}

impl RayHit2D {
    /// Extract hit distance, or return `default` if miss.
    pub fn distance_or(hit: Option<Self>, default: f64) -> f64 {
        hit.map(|h| h.hit_distance).unwrap_or(default)
    }
}
