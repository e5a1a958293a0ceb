use crate::math::{Point2, TOLERANCE};

/// Junction points recorded over one drawing session.
///
/// Points are kept in insertion order. A point within [`TOLERANCE`] of a
/// recorded one is the same junction: solving the same crossing from
/// different pieces can differ in the last bits.
/// The engine only ever appends; clearing belongs to the session owner.
#[derive(Debug, Clone, Default)]
pub struct IntersectionRegistry {
    points: Vec<Point2>,
}

impl IntersectionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `point`, returning `true` if it was not already present.
    pub fn record(&mut self, point: Point2) -> bool {
        if self.contains(&point) {
            return false;
        }
        self.points.push(point);
        true
    }

    /// Returns `true` if `point` was recorded before.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        self.find(point).is_some()
    }

    /// Returns the recorded junction lying within [`TOLERANCE`] of `point`.
    #[must_use]
    pub fn find(&self, point: &Point2) -> Option<Point2> {
        self.points
            .iter()
            .find(|p| nalgebra::distance(*p, point) <= TOLERANCE)
            .copied()
    }

    /// Returns the recorded points in insertion order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Iterates over the recorded points in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Point2> {
        self.points.iter()
    }

    /// Number of recorded junctions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no junction has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Forgets every recorded point.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}
