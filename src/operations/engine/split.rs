use tracing::{debug, trace};

use crate::geometry::Segment;
use crate::math::{cmp_points, Point2, TOLERANCE};

use super::IntersectionRegistry;

/// Cuts a newly drawn segment and every segment it crosses at their
/// intersection points.
///
/// Pieces shorter than half of `min_length` are dropped: a segment drawn
/// diagonally across a grid cell may legitimately be half the spacing.
/// Every crossing that yields at least one piece is recorded as a junction.
#[derive(Debug, Clone)]
pub struct Split {
    new_segment: Segment,
    min_length: f64,
}

impl Split {
    /// Creates a new `Split` operation.
    #[must_use]
    pub fn new(new_segment: Segment, min_length: f64) -> Self {
        Self {
            new_segment,
            min_length,
        }
    }

    /// Executes the split pass and returns the replacement collection.
    ///
    /// Returns `segments` unchanged when it has fewer than two members or
    /// when the new segment is no longer one of them.
    pub fn execute(&self, segments: &[Segment], registry: &mut IntersectionRegistry) -> Vec<Segment> {
        let cutter = self.new_segment;
        if segments.len() <= 1 {
            return segments.to_vec();
        }
        let Some(cutter_index) = segments.iter().position(|s| *s == cutter) else {
            debug!(segment = %cutter, "split: segment not in collection, nothing to do");
            return segments.to_vec();
        };

        let min_piece = self.min_length / 2.0;
        let mut remove = vec![false; segments.len()];
        let mut created: Vec<Segment> = Vec::new();
        let mut crossings: Vec<Point2> = Vec::new();

        for (i, other) in segments.iter().enumerate() {
            if i == cutter_index {
                continue;
            }
            let Some(raw) = cutter.intersect(other) else {
                continue;
            };
            let point = settle(raw, &cutter, other, &crossings, registry);

            let pieces: Vec<Segment> = cutter
                .split(other, point)
                .into_iter()
                .filter(|piece| piece.length() >= min_piece)
                .collect();
            if pieces.is_empty() {
                trace!(x = point.x, y = point.y, "split: every piece too short");
                continue;
            }

            if registry.record(point) {
                debug!(x = point.x, y = point.y, "split: new junction");
            }
            if !crossings
                .iter()
                .any(|c| nalgebra::distance(c, &point) <= TOLERANCE)
            {
                crossings.push(point);
            }

            // A crossing on an endpoint leaves that segment whole and in place.
            for (index, parent) in [(cutter_index, &cutter), (i, other)] {
                if point != *parent.start() && point != *parent.end() {
                    remove[index] = true;
                }
            }
            created.extend(
                pieces
                    .into_iter()
                    .filter(|piece| piece != &cutter && piece != other),
            );
        }

        let mut working: Vec<Segment> = segments
            .iter()
            .zip(&remove)
            .filter(|(_, removed)| !**removed)
            .map(|(segment, _)| *segment)
            .collect();

        if crossings.len() > 1 {
            bridge_crossings(&cutter, &mut crossings, &mut created, min_piece);
        }

        let removed = segments.len() - working.len();
        let mut added = 0_usize;
        for segment in created {
            if !working.contains(&segment) {
                working.push(segment);
                added += 1;
            }
        }

        debug!(
            crossings = crossings.len(),
            removed,
            added,
            total = working.len(),
            "split pass"
        );
        working
    }
}

/// Snaps a solved crossing onto a point already known to lie there.
///
/// Endpoints of the two segments win, then crossings found earlier in this
/// pass, then recorded junctions. Re-solving a junction against pieces cut
/// at it lands a few ULPs away, and those copies must not become distinct
/// points.
fn settle(
    raw: Point2,
    cutter: &Segment,
    other: &Segment,
    crossings: &[Point2],
    registry: &IntersectionRegistry,
) -> Point2 {
    [cutter.start(), cutter.end(), other.start(), other.end()]
        .into_iter()
        .chain(crossings)
        .find(|p| nalgebra::distance(*p, &raw) <= TOLERANCE)
        .copied()
        .or_else(|| registry.find(&raw))
        .unwrap_or(raw)
}

/// Replaces overlapping pieces of the cutter with one piece per gap
/// between consecutive crossings.
///
/// Each crossing contributes a `start -> point` and `point -> end` piece, so
/// with several crossings those pieces overlap. Walking the sorted crossings
/// from the far end, every piece of the cutter spanning a gap is dropped in
/// favour of a single segment bridging it. Gaps shorter than `min_piece`
/// get no bridge.
fn bridge_crossings(
    cutter: &Segment,
    crossings: &mut [Point2],
    created: &mut Vec<Segment>,
    min_piece: f64,
) {
    crossings.sort_by(cmp_points);

    for k in (1..crossings.len()).rev() {
        let gap = [crossings[k - 1], crossings[k]];
        if !cutter.contains_points(&gap) {
            continue;
        }
        created.retain(|piece| !(cutter.contains_segment(piece) && piece.contains_points(&gap)));
        match Segment::new(gap[0], gap[1]) {
            Ok(bridge) if bridge.length() >= min_piece => created.push(bridge),
            _ => trace!(x = gap[0].x, y = gap[0].y, "split: gap too short to bridge"),
        }
    }
}
