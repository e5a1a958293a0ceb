mod combine;
mod merge;
mod registry;
mod split;

pub use combine::Combine;
pub use merge::Merge;
pub use registry::IntersectionRegistry;
pub use split::Split;

use crate::geometry::Segment;
use crate::math::Point2;

/// Keeps a segment collection non-redundant as segments are drawn one at a time.
///
/// Owns the session's [`IntersectionRegistry`]. Every operation takes the
/// full current collection, which must already contain the new segment,
/// and returns a replacement collection; the caller's slice is never
/// mutated. A new segment missing from the collection counts as already
/// consumed: the collection comes back unchanged.
#[derive(Debug, Clone, Default)]
pub struct SegmentEngine {
    registry: IntersectionRegistry,
}

impl SegmentEngine {
    /// Creates an engine with an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cuts `new_segment` and the segments it crosses at their intersections.
    ///
    /// Returns `segments` unchanged if `new_segment` is not one of them.
    pub fn split(&mut self, segments: &[Segment], new_segment: &Segment, min_length: f64) -> Vec<Segment> {
        Split::new(*new_segment, min_length).execute(segments, &mut self.registry)
    }

    /// Fuses `new_segment` with a collinear neighbour.
    ///
    /// Returns `segments` unchanged if `new_segment` is not one of them or
    /// touches a recorded junction.
    #[must_use]
    pub fn merge(&self, segments: &[Segment], new_segment: &Segment) -> Vec<Segment> {
        Merge::new(*new_segment).execute(segments, &self.registry)
    }

    /// Runs [`merge`](Self::merge) and then [`split`](Self::split).
    ///
    /// Append `new_segment` to `segments` before calling; running it again
    /// with the same segment changes nothing.
    pub fn combine(&mut self, segments: &[Segment], new_segment: &Segment, min_length: f64) -> Vec<Segment> {
        Combine::new(*new_segment, min_length).execute(segments, &mut self.registry)
    }

    /// Returns every junction recorded so far, in insertion order.
    #[must_use]
    pub fn intersections(&self) -> &[Point2] {
        self.registry.points()
    }

    /// Returns the junction registry.
    #[must_use]
    pub fn registry(&self) -> &IntersectionRegistry {
        &self.registry
    }

    /// Forgets every recorded junction.
    pub fn clear_intersections(&mut self) {
        self.registry.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::math::TOLERANCE;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new(Point2::new(x0, y0), Point2::new(x1, y1)).unwrap()
    }

    fn assert_no_duplicates(segments: &[Segment]) {
        for (i, a) in segments.iter().enumerate() {
            for b in &segments[i + 1..] {
                assert_ne!(a, b, "duplicate segment {a}");
            }
        }
    }

    #[test]
    fn crossing_is_recorded_once() {
        let mut engine = SegmentEngine::new();
        let existing = seg(0.0, 0.0, 10.0, 0.0);
        let new = seg(5.0, -5.0, 5.0, 5.0);
        let result = engine.split(&[existing, new], &new, 1.0);

        assert_eq!(result.len(), 4);
        assert_eq!(engine.intersections(), &[Point2::new(5.0, 0.0)]);

        // The new segment was consumed, so a second pass changes nothing.
        let again = engine.split(&result, &new, 1.0);
        assert_eq!(again, result);
        assert_eq!(engine.intersections().len(), 1);
    }

    #[test]
    fn merge_does_not_touch_registry() {
        let engine = SegmentEngine::new();
        let existing = seg(0.0, 0.0, 5.0, 0.0);
        let new = seg(5.0, 0.0, 10.0, 0.0);
        let result = engine.merge(&[existing, new], &new);
        assert_eq!(result, vec![seg(0.0, 0.0, 10.0, 0.0)]);
        assert!(engine.registry().is_empty());
    }

    #[test]
    fn junction_is_never_merged_through() {
        let mut engine = SegmentEngine::new();
        let wall = seg(0.0, 0.0, 10.0, 0.0);
        let stem = seg(4.0, 0.0, 4.0, 6.0);
        let segments = engine.combine(&[wall, stem], &stem, 1.0);
        assert_eq!(engine.intersections(), &[Point2::new(4.0, 0.0)]);

        // Continue the stem straight through the junction.
        let below = seg(4.0, 0.0, 4.0, -3.0);
        let mut input = segments.clone();
        input.push(below);
        let result = engine.combine(&input, &below, 1.0);

        assert!(result.contains(&stem));
        assert!(result.contains(&below));
        assert!(!result.contains(&seg(4.0, -3.0, 4.0, 6.0)));
        assert_no_duplicates(&result);
    }

    #[test]
    fn incremental_grid_session_stays_consistent() {
        let mut engine = SegmentEngine::new();
        let strokes = [
            seg(0.0, 0.0, 10.0, 0.0),
            seg(10.0, 0.0, 10.0, 10.0),
            seg(10.0, 10.0, 0.0, 10.0),
            seg(0.0, 10.0, 0.0, 0.0),
            seg(5.0, -2.0, 5.0, 12.0),
            seg(-2.0, 5.0, 12.0, 5.0),
        ];

        let mut segments: Vec<Segment> = Vec::new();
        for stroke in strokes {
            segments.push(stroke);
            segments = engine.combine(&segments, &stroke, 1.0);
            assert_no_duplicates(&segments);
        }

        // Square corners plus the four edge crossings and the centre.
        assert_eq!(engine.intersections().len(), 9);
        for point in [
            Point2::new(5.0, 0.0),
            Point2::new(5.0, 10.0),
            Point2::new(0.0, 5.0),
            Point2::new(10.0, 5.0),
            Point2::new(5.0, 5.0),
        ] {
            assert!(engine.intersections().contains(&point), "missing {point}");
        }

        let total: f64 = segments.iter().map(Segment::length).sum();
        assert!((total - 68.0).abs() < 1e-9, "total={total}");
    }

    #[test]
    fn randomized_grid_sessions_stay_consistent() {
        const SEED: u64 = 0x5EED_CAFE;
        const SESSIONS: usize = 300;
        const STROKES: usize = 16;
        const MIN_LENGTH: f64 = 1.0;

        fn grid_point(rng: &mut StdRng) -> Point2 {
            Point2::new(
                f64::from(rng.gen_range(0..=6_i32)),
                f64::from(rng.gen_range(0..=6_i32)),
            )
        }

        let mut rng = StdRng::seed_from_u64(SEED);

        for session in 0..SESSIONS {
            let mut engine = SegmentEngine::new();
            let mut segments: Vec<Segment> = Vec::new();

            for _ in 0..STROKES {
                let (start, end) = (grid_point(&mut rng), grid_point(&mut rng));
                let Ok(stroke) = Segment::new(start, end) else {
                    continue;
                };
                if segments.contains(&stroke) {
                    continue;
                }
                segments.push(stroke);
                segments = engine.combine(&segments, &stroke, MIN_LENGTH);

                let junctions = engine.intersections().len();
                let again = engine.combine(&segments, &stroke, MIN_LENGTH);
                assert_eq!(again, segments, "session {session}, stroke {stroke}");
                assert_eq!(engine.intersections().len(), junctions, "session {session}");

                assert_no_duplicates(&segments);
                for segment in &segments {
                    assert!(
                        segment.length() >= MIN_LENGTH / 2.0,
                        "session {session}: short piece {segment}"
                    );
                }
                let points = engine.intersections();
                for (i, a) in points.iter().enumerate() {
                    for b in &points[i + 1..] {
                        assert!(
                            nalgebra::distance(a, b) > TOLERANCE,
                            "session {session}: junctions {a} and {b} coincide"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn clear_intersections_resets_registry() {
        let mut engine = SegmentEngine::new();
        let existing = seg(0.0, 0.0, 10.0, 0.0);
        let new = seg(5.0, -5.0, 5.0, 5.0);
        let _ = engine.combine(&[existing, new], &new, 1.0);
        assert!(!engine.intersections().is_empty());
        engine.clear_intersections();
        assert!(engine.intersections().is_empty());
    }
}
