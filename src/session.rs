use tracing::{debug, info};

use crate::error::{OperationError, Result};
use crate::geometry::Segment;
use crate::math::Point2;
use crate::operations::engine::SegmentEngine;
use crate::operations::grid_snap::GridSnap;

/// One drawing session: the segment collection, its junctions and the grid
/// that new segments are snapped to.
///
/// Each submitted segment is appended to the collection and the engine's
/// result replaces it. Resetting clears the collection and the junctions
/// together.
#[derive(Debug, Clone)]
pub struct DrawingSession {
    engine: SegmentEngine,
    segments: Vec<Segment>,
    grid: GridSnap,
    combine: bool,
}

impl DrawingSession {
    /// Creates an empty session on `grid` that merges and splits.
    #[must_use]
    pub fn new(grid: GridSnap) -> Self {
        Self {
            engine: SegmentEngine::new(),
            segments: Vec::new(),
            grid,
            combine: true,
        }
    }

    /// Chooses between merge-then-split (`true`) and split only (`false`).
    #[must_use]
    pub fn with_combine(mut self, combine: bool) -> Self {
        self.combine = combine;
        self
    }

    /// Snaps `start` and `end` to the grid and adds the segment between them.
    ///
    /// Returns the updated collection.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::SegmentTooShort` if the snapped segment is
    /// shorter than the grid spacing, including when both points snap to
    /// the same grid point. The collection is left untouched.
    pub fn submit(&mut self, start: Point2, end: Point2) -> Result<&[Segment]> {
        let (start, end) = (self.grid.snap(&start), self.grid.snap(&end));
        let length = (end - start).norm();
        let min_length = self.grid.min_length();
        if length < min_length {
            return Err(OperationError::SegmentTooShort { length, min_length }.into());
        }
        let segment = Segment::new(start, end)?;

        if self.segments.contains(&segment) {
            debug!(%segment, "segment already drawn");
            return Ok(&self.segments);
        }

        self.segments.push(segment);
        self.segments = if self.combine {
            self.engine.combine(&self.segments, &segment, min_length)
        } else {
            self.engine.split(&self.segments, &segment, min_length)
        };

        debug!(
            %segment,
            segments = self.segments.len(),
            junctions = self.engine.intersections().len(),
            "segment submitted"
        );
        Ok(&self.segments)
    }

    /// Removes the most recently stored segment.
    ///
    /// Junctions stay recorded until [`reset`](Self::reset).
    pub fn undo_last(&mut self) -> Option<Segment> {
        let removed = self.segments.pop();
        if let Some(segment) = &removed {
            debug!(%segment, "undo");
        }
        removed
    }

    /// Clears the collection and every recorded junction.
    pub fn reset(&mut self) {
        info!(
            segments = self.segments.len(),
            junctions = self.engine.intersections().len(),
            "session reset"
        );
        self.segments.clear();
        self.engine.clear_intersections();
    }

    /// Returns the current segment collection.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the recorded junctions in insertion order.
    #[must_use]
    pub fn intersections(&self) -> &[Point2] {
        self.engine.intersections()
    }

    /// Returns the grid that submitted points are snapped to.
    #[must_use]
    pub fn grid(&self) -> &GridSnap {
        &self.grid
    }

    /// Returns `true` if submissions merge before splitting.
    #[must_use]
    pub fn combine_enabled(&self) -> bool {
        self.combine
    }
}
