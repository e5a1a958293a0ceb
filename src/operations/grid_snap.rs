use crate::error::{OperationError, Result};
use crate::math::Point2;

/// Snaps raw pointer positions onto a square drawing grid.
///
/// Grid points are the multiples of `grid_size` in `[0, length)` on both
/// axes; snapped points are clamped to the last grid line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSnap {
    length: u32,
    grid_size: u32,
}

impl GridSnap {
    /// Creates a grid `length` units wide with points every `grid_size` units.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if either value is zero.
    pub fn new(length: u32, grid_size: u32) -> Result<Self> {
        if grid_size == 0 {
            return Err(
                OperationError::InvalidInput("grid size must be positive".to_owned()).into(),
            );
        }
        if length == 0 {
            return Err(
                OperationError::InvalidInput("grid length must be positive".to_owned()).into(),
            );
        }
        Ok(Self { length, grid_size })
    }

    /// Returns the grid width in world units.
    #[must_use]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Returns the spacing between grid points.
    #[must_use]
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// Returns the grid spacing, which is also the shortest drawable segment.
    #[must_use]
    pub fn min_length(&self) -> f64 {
        f64::from(self.grid_size)
    }

    /// Number of grid points along one axis.
    #[must_use]
    pub fn points_per_axis(&self) -> u32 {
        self.length.div_ceil(self.grid_size)
    }

    /// Coordinate of the last grid line on either axis.
    #[must_use]
    pub fn max_extent(&self) -> f64 {
        f64::from(self.points_per_axis() - 1) * self.min_length()
    }

    /// Returns the grid point nearest to `point`.
    ///
    /// Halfway cases round to the even multiple.
    #[must_use]
    pub fn snap(&self, point: &Point2) -> Point2 {
        Point2::new(self.snap_coord(point.x), self.snap_coord(point.y))
    }

    fn snap_coord(&self, v: f64) -> f64 {
        let max = self.max_extent();
        let size = self.min_length();
        let clamped = if v.is_nan() { 0.0 } else { v.clamp(0.0, max) };
        ((clamped / size).round_ties_even() * size).clamp(0.0, max)
    }

    /// Returns every grid point, `x`-major.
    pub fn points(&self) -> impl Iterator<Item = Point2> + '_ {
        let n = self.points_per_axis();
        let size = self.min_length();
        (0..n).flat_map(move |i| {
            (0..n).map(move |j| Point2::new(f64::from(i) * size, f64::from(j) * size))
        })
    }
}
