/// A pixel coordinate. No identity beyond its coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[cfg(test)]
mod tests {
    use super::Point;

    #[test]
    fn points_compare_by_coordinates() {
        assert_eq!(Point { x: 3, y: -7 }, Point { x: 3, y: -7 });
        assert_ne!(Point { x: 3, y: -7 }, Point { x: -7, y: 3 });
    }
}
