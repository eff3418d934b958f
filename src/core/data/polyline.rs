use crate::core::data::point::Point;

/// An ordered sequence of points; insertion order defines connectivity.
///
/// `Polyline` has value semantics: cloning produces an independently owned
/// sequence, so the current animation curve can never alias the control
/// polygon it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    #[must_use]
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    #[must_use]
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }
}

impl FromIterator<Point> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
