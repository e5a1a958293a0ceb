use crate::geometry::Segment;

use super::{IntersectionRegistry, Merge, Split};

/// The edit applied each time a segment is drawn: merge, then split.
///
/// If the merge fuses the new segment into a longer one, the split cuts
/// with that longer segment so it is divided at every crossing too.
#[derive(Debug, Clone)]
pub struct Combine {
    new_segment: Segment,
    min_length: f64,
}

impl Combine {
    /// Creates a new `Combine` operation.
    #[must_use]
    pub fn new(new_segment: Segment, min_length: f64) -> Self {
        Self {
            new_segment,
            min_length,
        }
    }

    /// Executes both passes and returns the replacement collection.
    pub fn execute(&self, segments: &[Segment], registry: &mut IntersectionRegistry) -> Vec<Segment> {
        let merged = Merge::new(self.new_segment).run(segments, registry);
        Split::new(merged.cutter, self.min_length).execute(&merged.segments, registry)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new(Point2::new(x0, y0), Point2::new(x1, y1)).unwrap()
    }

    #[test]
    fn unrelated_segment_is_left_in_place() {
        let mut registry = IntersectionRegistry::new();
        let a = seg(0.0, 0.0, 2.0, 0.0);
        let b = seg(0.0, 5.0, 2.0, 5.0);
        let new = seg(10.0, 10.0, 12.0, 14.0);
        let result = Combine::new(new, 1.0).execute(&[a, b, new], &mut registry);
        assert_eq!(result, vec![a, b, new]);
        assert!(registry.is_empty());
    }

    #[test]
    fn missing_new_segment_returns_input() {
        let mut registry = IntersectionRegistry::new();
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let new = seg(5.0, -5.0, 5.0, 5.0);
        let result = Combine::new(new, 1.0).execute(&[a], &mut registry);
        assert_eq!(result, vec![a]);

        let b = seg(0.0, 3.0, 10.0, 3.0);
        let result = Combine::new(new, 1.0).execute(&[a, b], &mut registry);
        assert_eq!(result, vec![a, b]);
        assert!(registry.is_empty());
    }

    #[test]
    fn fused_segment_is_split_at_crossings() {
        let mut registry = IntersectionRegistry::new();
        let left = seg(0.0, 0.0, 5.0, 0.0);
        let post = seg(8.0, -3.0, 8.0, 3.0);
        let new = seg(5.0, 0.0, 10.0, 0.0);
        let result = Combine::new(new, 1.0).execute(&[left, post, new], &mut registry);

        assert_eq!(
            result,
            vec![
                seg(0.0, 0.0, 8.0, 0.0),
                seg(8.0, 0.0, 10.0, 0.0),
                seg(8.0, -3.0, 8.0, 0.0),
                seg(8.0, 0.0, 8.0, 3.0),
            ]
        );
        assert_eq!(registry.points(), &[Point2::new(8.0, 0.0)]);
    }

    #[test]
    fn second_combine_is_a_no_op() {
        let cases = [
            vec![seg(0.0, 0.0, 10.0, 0.0), seg(5.0, -5.0, 5.0, 5.0)],
            vec![seg(0.0, 0.0, 5.0, 0.0), seg(5.0, 0.0, 10.0, 0.0)],
            vec![
                seg(0.0, 0.0, 5.0, 0.0),
                seg(8.0, -3.0, 8.0, 3.0),
                seg(5.0, 0.0, 10.0, 0.0),
            ],
            vec![seg(0.0, 0.0, 10.0, 0.0), seg(4.0, 0.0, 4.0, 6.0)],
            vec![seg(0.0, 0.0, 10.0, 0.0), seg(2.0, 0.0, 6.0, 0.0)],
            vec![seg(0.0, 0.0, 4.0, 0.0), seg(4.0, 0.0, 4.0, 4.0)],
        ];

        for input in cases {
            let mut registry = IntersectionRegistry::new();
            let new = *input.last().unwrap();
            let combine = Combine::new(new, 1.0);

            let first = combine.execute(&input, &mut registry);
            let junctions = registry.len();
            let second = combine.execute(&first, &mut registry);

            assert_eq!(first, second, "new segment {new}");
            assert_eq!(registry.len(), junctions, "new segment {new}");
        }
    }
}
