pub mod occupancy;

pub use occupancy::OccupancyGrid;
