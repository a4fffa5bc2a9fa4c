use std::fmt::Debug;

use crate::error::CoordError;
use crate::point::Point;
use crate::validate::{validate_radius, IntegerLike};

/// All grid points within the closed disk of `radius` around `center`.
///
/// Points come in row-major order: `dy` ascending in the outer loop, `dx`
/// ascending in the inner loop, both over `-radius..=radius`. Radius 0 yields
/// the center alone; a negative radius yields nothing.
///
/// Squares are compared in `i128`, so a fill radius derived from a radius up
/// to `MAX_RADIUS` cannot overflow.
pub fn interior_points(center: Point, radius: i64) -> Vec<Point> {
    if radius < 0 {
        return Vec::new();
    }
    let r2 = i128::from(radius).pow(2);
    let mut points = Vec::new();
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if i128::from(dx).pow(2) + i128::from(dy).pow(2) <= r2 {
                points.push(Point::new(center.x + dx, center.y + dy));
            }
        }
    }
    points
}

/// Like [`interior_points`], validating an untyped radius first.
pub fn interior_points_checked<R: IntegerLike + Debug + ?Sized>(
    center: Point,
    radius: &R,
) -> Result<Vec<Point>, CoordError> {
    let radius = validate_radius(radius)?;
    Ok(interior_points(center, radius))
}
