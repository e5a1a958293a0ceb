use super::Point2;

/// Returns the perpendicular distance from `point` to the infinite line
/// through `a` and `b`.
///
/// Falls back to the point-to-point distance when `a` and `b` coincide.
#[must_use]
pub fn point_to_line_dist(point: &Point2, a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let len = d.norm();
    if len < 1e-20 {
        return (point - a).norm();
    }
    ((point.x - a.x) * d.y - (point.y - a.y) * d.x).abs() / len
}

/// Checks whether `point` lies in the closed axis-aligned box spanned by
/// `a` and `b`, grown by `eps` on every side.
#[must_use]
pub fn point_in_bounds(point: &Point2, a: &Point2, b: &Point2, eps: f64) -> bool {
    let (min_x, max_x) = (a.x.min(b.x), a.x.max(b.x));
    let (min_y, max_y) = (a.y.min(b.y), a.y.max(b.y));
    point.x >= min_x - eps
        && point.x <= max_x + eps
        && point.y >= min_y - eps
        && point.y <= max_y + eps
}
