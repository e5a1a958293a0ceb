use std::cmp::Ordering;

pub mod distance_2d;
pub mod intersect_2d;

/// 2D point on the ground plane.
///
/// `y` holds the world's horizontal depth axis; height is never modelled.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for on-segment tests and degenerate lengths.
pub const TOLERANCE: f64 = 1e-4;

/// Largest sine of the angle between two lines still treated as parallel.
///
/// Absorbs rounding in pieces cut at solved crossing points; distinct
/// integer grid directions are many orders of magnitude further apart.
pub const PARALLEL_TOLERANCE: f64 = 1e-9;

/// Orders points by `x`, then by `y`.
#[must_use]
pub fn cmp_points(a: &Point2, b: &Point2) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}
