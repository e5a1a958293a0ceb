use super::Point2;

/// Coefficients `(a, b, c)` of the line `a * x + b * y = c` through `p0` and `p1`.
#[must_use]
pub fn line_coefficients(p0: &Point2, p1: &Point2) -> (f64, f64, f64) {
    let a = p1.y - p0.y;
    let b = p0.x - p1.x;
    let c = a * p0.x + b * p0.y;
    (a, b, c)
}

/// Determinant of the 2x2 system formed by the lines through `p0`-`p1`
/// and `q0`-`q1`.
///
/// Exactly zero when the lines are parallel.
#[must_use]
pub fn determinant_2d(p0: &Point2, p1: &Point2, q0: &Point2, q1: &Point2) -> f64 {
    let (a1, b1, _) = line_coefficients(p0, p1);
    let (a2, b2, _) = line_coefficients(q0, q1);
    a1 * b2 - a2 * b1
}

/// Unbounded line-line intersection in 2D, solved with Cramer's rule.
///
/// Returns `None` if the determinant is exactly zero. Swapping the two
/// lines yields a bit-identical point; negative zero is folded into zero.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn line_line_intersect_2d(
    p0: &Point2,
    p1: &Point2,
    q0: &Point2,
    q1: &Point2,
) -> Option<Point2> {
    let (a1, b1, c1) = line_coefficients(p0, p1);
    let (a2, b2, c2) = line_coefficients(q0, q1);

    let det = a1 * b2 - a2 * b1;
    if det == 0.0 {
        return None;
    }

    let x = (b2 * c1 - b1 * c2) / det;
    let y = (a1 * c2 - a2 * c1) / det;
    Some(Point2::new(x + 0.0, y + 0.0))
}
