pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod session;

pub use error::{Result, WallgridError};
pub use geometry::{Direction, Segment};
pub use math::Point2;
pub use operations::engine::{IntersectionRegistry, SegmentEngine};
pub use operations::grid_snap::GridSnap;
pub use session::DrawingSession;
