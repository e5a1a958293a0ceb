pub mod segment;

pub use segment::{Direction, Segment};
