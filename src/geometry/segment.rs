use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{GeometryError, Result};
use crate::math::distance_2d::{point_in_bounds, point_to_line_dist};
use crate::math::intersect_2d::{determinant_2d, line_line_intersect_2d};
use crate::math::{Point2, Vector2, PARALLEL_TOLERANCE, TOLERANCE};

/// Coarse orientation of a segment.
///
/// `Forward` segments point toward `+x`, or toward `+y` when they have no
/// `x` extent. Two collinear segments share a direction exactly when they
/// point the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[allow(clippy::float_cmp)]
    fn of(v: &Vector2) -> Self {
        if v.x > 0.0 || (v.x == 0.0 && v.y > 0.0) {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}

/// An immutable wall segment on the ground plane.
///
/// Midpoint, length and direction are derived once at construction.
/// Equality ignores orientation: `a -> b` equals `b -> a`.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    start: Point2,
    end: Point2,
    midpoint: Point2,
    length: f64,
    direction: Direction,
}

impl Segment {
    /// Creates a segment from two endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] if a coordinate is NaN or
    /// infinite, and [`GeometryError::CoincidentEndpoints`] if the segment
    /// would have no length.
    pub fn new(start: Point2, end: Point2) -> Result<Self> {
        for p in [&start, &end] {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(GeometryError::NonFinite { x: p.x, y: p.y }.into());
            }
        }

        let direction_vector = end - start;
        let length = direction_vector.norm();
        if start == end || length <= 0.0 {
            return Err(GeometryError::CoincidentEndpoints {
                x: start.x,
                y: start.y,
            }
            .into());
        }

        Ok(Self {
            start,
            end,
            midpoint: nalgebra::center(&start, &end),
            length,
            direction: Direction::of(&direction_vector),
        })
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns the midpoint.
    #[must_use]
    pub fn midpoint(&self) -> &Point2 {
        &self.midpoint
    }

    /// Returns the Euclidean length, always positive.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the coarse orientation.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn direction_vector(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns the same segment traversed from `end` to `start`.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
            midpoint: self.midpoint,
            length: self.length,
            direction: Direction::of(&(self.start - self.end)),
        }
    }

    /// Returns the point where this segment crosses `other`, if any.
    ///
    /// The infinite lines are intersected first; the point is accepted only
    /// if it lies on both segments. Parallel segments never intersect, even
    /// when they overlap. The result does not depend on argument order.
    #[must_use]
    pub fn intersect(&self, other: &Segment) -> Option<Point2> {
        if self.parallel_to(other) {
            return None;
        }
        let point = line_line_intersect_2d(&self.start, &self.end, &other.start, &other.end)?;
        (self.contains_point(&point) && other.contains_point(&point)).then_some(point)
    }

    /// Returns `true` if the two supporting lines are parallel.
    ///
    /// The determinant is compared against the product of the lengths, so
    /// only rounding noise is tolerated: a piece cut at a solved crossing
    /// stays parallel to the line it came from.
    #[must_use]
    pub fn parallel_to(&self, other: &Segment) -> bool {
        determinant_2d(&self.start, &self.end, &other.start, &other.end).abs()
            <= PARALLEL_TOLERANCE * self.length * other.length
    }

    /// Returns `true` if `point` lies on the segment within [`TOLERANCE`].
    #[must_use]
    pub fn contains_point(&self, point: &Point2) -> bool {
        point_in_bounds(point, &self.start, &self.end, TOLERANCE)
            && point_to_line_dist(point, &self.start, &self.end) <= TOLERANCE
    }

    /// Returns `true` if every point lies on the segment.
    #[must_use]
    pub fn contains_points(&self, points: &[Point2]) -> bool {
        points.iter().all(|p| self.contains_point(p))
    }

    /// Returns `true` if both endpoints of `other` lie on this segment.
    #[must_use]
    pub fn contains_segment(&self, other: &Segment) -> bool {
        self.contains_point(&other.start) && self.contains_point(&other.end)
    }

    /// Returns `true` if `point` lies on the segment but is not one of its endpoints.
    fn contains_point_strictly(&self, point: &Point2) -> bool {
        *point != self.start && *point != self.end && self.contains_point(point)
    }

    /// Splits this segment and `other` at `at`.
    ///
    /// Produces up to four pieces: `start -> at` and `at -> end` for each
    /// segment. Pieces no longer than [`TOLERANCE`] are dropped, which
    /// happens when `at` is an endpoint.
    #[must_use]
    pub fn split(&self, other: &Segment, at: Point2) -> Vec<Segment> {
        [
            (self.start, at),
            (at, self.end),
            (other.start, at),
            (at, other.end),
        ]
        .into_iter()
        .filter_map(|(a, b)| Segment::new(a, b).ok())
        .filter(|piece| piece.length > TOLERANCE)
        .collect()
    }

    /// Fuses this segment with a collinear `other`, if they touch or overlap.
    ///
    /// Relations are tried in order:
    /// 1. `other` lies on this longer segment: the result is `self`.
    ///    Symmetrically, if this segment lies on `other`, the result is `other`.
    /// 2. One endpoint of this segment is strictly inside `other`: the result
    ///    runs from the far end of `other` to the far end of this segment.
    ///    Which end of `other` is far depends on whether both share a
    ///    [`Direction`].
    /// 3. The segments share an endpoint: the result spans the two
    ///    non-shared endpoints.
    ///
    /// The result keeps this segment's orientation. Returns `None` for
    /// non-parallel segments or when no relation applies.
    #[must_use]
    pub fn merge(&self, other: &Segment) -> Option<Segment> {
        if !self.parallel_to(other) {
            return None;
        }

        if self.contains_segment(other) && self.length > other.length {
            return Some(*self);
        }
        if other.contains_segment(self) {
            return Some(*other);
        }

        let same_direction = self.direction == other.direction;
        let (start, end) = if other.contains_point_strictly(&self.start) {
            let far = if same_direction { other.start } else { other.end };
            (far, self.end)
        } else if other.contains_point_strictly(&self.end) {
            let far = if same_direction { other.end } else { other.start };
            (self.start, far)
        } else if self.start == other.end {
            (other.start, self.end)
        } else if self.start == other.start {
            (other.end, self.end)
        } else if self.end == other.end {
            (self.start, other.start)
        } else if self.end == other.start {
            (self.start, other.end)
        } else {
            return None;
        };

        Segment::new(start, end)
            .ok()
            .filter(|merged| merged.length > TOLERANCE)
    }
}

/// Bit pattern of a coordinate with `-0.0` folded into `0.0`.
fn coord_bits(v: f64) -> u64 {
    (v + 0.0).to_bits()
}

fn point_key(p: &Point2) -> (u64, u64) {
    (coord_bits(p.x), coord_bits(p.y))
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }
}

// Coordinates are finite by construction.
impl Eq for Segment {}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let a = point_key(&self.start);
        let b = point_key(&self.end);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        lo.hash(state);
        hi.hash(state);
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) -> ({}, {}) [{:.3}m {:?}]",
            self.start.x, self.start.y, self.end.x, self.end.y, self.length, self.direction
        )
    }
}
