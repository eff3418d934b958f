use crate::core::data::point::Point;
use crate::core::data::polyline::Polyline;

/// One corner-cutting refinement step of Chaikin's algorithm, in the
/// open-curve variant: every edge (p1, p2) is replaced by the two points
/// at its 1/4 and 3/4 positions, and the two extreme endpoints are kept
/// exactly, so the curve's ends never move.
///
/// Coordinates are integer pixels; the interpolation divides by 4 with
/// truncation toward zero. For fewer than two points refinement is
/// undefined and the input is returned as an identical copy.
#[must_use]
pub fn subdivide_polyline(polyline: &Polyline) -> Polyline {
    let points = polyline.points();

    let [first, .., last] = points else {
        return polyline.clone();
    };

    let mut refined = Vec::with_capacity(2 * (points.len() - 1) + 2);
    refined.push(*first);

    for pair in points.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);

        refined.push(Point {
            x: (3 * p1.x + p2.x) / 4,
            y: (3 * p1.y + p2.y) / 4,
        });
        refined.push(Point {
            x: (p1.x + 3 * p2.x) / 4,
            y: (p1.y + 3 * p2.y) / 4,
        });
    }

    refined.push(*last);
    Polyline::from_points(refined)
}

/// Applies the refinement step `steps` times.
#[must_use]
pub fn subdivide_polyline_n(polyline: &Polyline, steps: u32) -> Polyline {
    let mut current = polyline.clone();
    for _ in 0..steps {
        current = subdivide_polyline(&current);
    }
    current
}
