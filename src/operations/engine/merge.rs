use tracing::{debug, trace};

use crate::geometry::Segment;

use super::IntersectionRegistry;

/// Result of a merge pass.
pub(super) struct MergeOutcome {
    pub segments: Vec<Segment>,
    /// The segment that now stands in for the new one: the fused result,
    /// the existing segment that swallowed it, or the new segment itself.
    pub cutter: Segment,
}

/// Fuses a newly drawn segment with collinear neighbours it touches or overlaps.
///
/// The new segment must already be a member of the collection. A new
/// segment with an endpoint on a recorded junction is never merged. At most
/// one fusion happens per pass; the fused segment then absorbs every
/// collinear member it covers.
#[derive(Debug, Clone)]
pub struct Merge {
    new_segment: Segment,
}

impl Merge {
    /// Creates a new `Merge` operation for `new_segment`.
    #[must_use]
    pub fn new(new_segment: Segment) -> Self {
        Self { new_segment }
    }

    /// Executes the merge pass and returns the replacement collection.
    #[must_use]
    pub fn execute(&self, segments: &[Segment], registry: &IntersectionRegistry) -> Vec<Segment> {
        self.run(segments, registry).segments
    }

    pub(super) fn run(&self, segments: &[Segment], registry: &IntersectionRegistry) -> MergeOutcome {
        let new = self.new_segment;
        let unchanged = || MergeOutcome {
            segments: segments.to_vec(),
            cutter: new,
        };

        if segments.len() <= 1 {
            return unchanged();
        }
        let Some(new_index) = segments.iter().position(|s| *s == new) else {
            debug!(segment = %new, "merge: segment not in collection, nothing to do");
            return unchanged();
        };
        if registry.contains(new.start()) || registry.contains(new.end()) {
            debug!(segment = %new, "merge: endpoint on a junction, skipped");
            return unchanged();
        }

        // Call-scoped consumption marks, indexed like `segments`.
        let mut skip = vec![false; segments.len()];
        let mut fused: Option<Segment> = None;
        let mut cutter = new;

        for (i, other) in segments.iter().enumerate() {
            if i == new_index || skip[i] || !new.parallel_to(other) {
                continue;
            }
            let Some(result) = new.merge(other) else {
                continue;
            };

            if result == new {
                // `other` lies on the new segment; drop it and keep scanning.
                trace!(absorbed = %other, "merge: swallowed collinear piece");
                skip[i] = true;
                continue;
            }

            skip[new_index] = true;
            if result == *other {
                trace!(by = %other, "merge: new segment already covered");
            } else {
                trace!(with = %other, into = %result, "merge: fused");
                skip[i] = true;
                fused = Some(result);
            }
            cutter = result;
            break;
        }

        // Whatever now stands in for the new segment absorbs every other
        // collinear member lying on it, wherever it sits in the list.
        if cutter != new {
            for (i, other) in segments.iter().enumerate() {
                if !skip[i]
                    && *other != cutter
                    && cutter.parallel_to(other)
                    && cutter.contains_segment(other)
                {
                    trace!(absorbed = %other, "merge: swallowed collinear piece");
                    skip[i] = true;
                }
            }
        }

        let mut working: Vec<Segment> = segments
            .iter()
            .zip(&skip)
            .filter(|(_, consumed)| !**consumed)
            .map(|(segment, _)| *segment)
            .collect();
        let removed = segments.len() - working.len();
        if let Some(segment) = fused {
            if !working.contains(&segment) {
                working.push(segment);
            }
        }

        debug!(removed, cutter = %cutter, total = working.len(), "merge pass");
        MergeOutcome {
            segments: working,
            cutter,
        }
    }
}
