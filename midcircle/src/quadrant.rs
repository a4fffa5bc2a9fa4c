use crate::point::Point;

/// Reflect one stepping offset into the four quadrants around `center`.
///
/// The order is fixed: `(cx - ox, cy + oy)`, `(cx - oy, cy - ox)`,
/// `(cx + ox, cy - oy)`, `(cx + oy, cy + ox)`. Each point is the previous one
/// rotated a quarter turn about the center.
pub fn reflect_quadrants(center: Point, offset: Point) -> [Point; 4] {
    let (cx, cy) = (center.x, center.y);
    let (ox, oy) = (offset.x, offset.y);
    [
        Point::new(cx - ox, cy + oy),
        Point::new(cx - oy, cy - ox),
        Point::new(cx + ox, cy - oy),
        Point::new(cx + oy, cy + ox),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(i64, i64)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn axis_offset_radius_two() {
        let got = reflect_quadrants(Point::new(50, 50), Point::new(-2, 0));
        assert_eq!(got.to_vec(), pts(&[(52, 50), (50, 52), (48, 50), (50, 48)]));
    }

    #[test]
    fn axis_offset_radius_one() {
        let got = reflect_quadrants(Point::new(50, 50), Point::new(-1, 0));
        assert_eq!(got.to_vec(), pts(&[(51, 50), (50, 51), (49, 50), (50, 49)]));
    }

    #[test]
    fn diagonal_offset() {
        let got = reflect_quadrants(Point::new(0, 0), Point::new(-2, 1));
        assert_eq!(got.to_vec(), pts(&[(2, 1), (-1, 2), (-2, -1), (1, -2)]));
    }

    #[test]
    fn reflections_are_equidistant() {
        let center = Point::new(-7, 13);
        let offset = Point::new(-5, 3);
        let d = offset.distance_squared(&Point::new(0, 0));
        for p in reflect_quadrants(center, offset) {
            assert_eq!(p.distance_squared(&center), d, "{p}");
        }
    }

    #[test]
    fn zero_offset_collapses_to_center() {
        let center = Point::new(4, 9);
        assert_eq!(reflect_quadrants(center, Point::new(0, 0)), [center; 4]);
    }
}
