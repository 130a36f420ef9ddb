pub mod dashed;
pub mod traversal;

pub use dashed::{DashedSegments, dashed_segments};
pub use traversal::GridTraversal;
