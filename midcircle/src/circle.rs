use std::fmt::Debug;

use tracing::debug;

use crate::error::CoordError;
use crate::interior::interior_points;
use crate::point::Point;
use crate::quadrant::reflect_quadrants;
use crate::validate::{validate_pair, validate_radius, IntegerLike};

/// A circle to rasterize: center, radius and whether to append the fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub center: Point,
    pub radius: i64,
    pub fill: bool,
}

/// Result of rasterizing one [`Circle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Perimeter points followed by fill points, in generation order.
    pub points: Vec<Point>,
    /// Number of leading perimeter points in `points` (a multiple of 4).
    pub perimeter_len: usize,
    /// Radius of the appended fill disk, if fill was requested.
    ///
    /// This is the stepping loop's terminal error value, not the circle's
    /// radius; it equals the radius only when the loop never ran.
    pub fill_radius: Option<i64>,
}

impl Raster {
    pub fn perimeter(&self) -> &[Point] {
        &self.points[..self.perimeter_len]
    }

    pub fn interior(&self) -> &[Point] {
        &self.points[self.perimeter_len..]
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl Circle {
    pub fn new(center: impl Into<Point>, radius: i64) -> Self {
        Circle {
            center: center.into(),
            radius,
            fill: false,
        }
    }

    /// Set whether the interior fill is appended after the perimeter.
    pub fn filled(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    /// Run the midpoint stepping loop and, if requested, the fill scan.
    pub fn rasterize(&self) -> Raster {
        let mut steps = MidpointSteps::new(self.radius);
        let mut points = Vec::new();
        for offset in steps.by_ref() {
            points.extend(reflect_quadrants(self.center, offset));
        }
        let perimeter_len = points.len();

        let fill_radius = self.fill.then_some(steps.step_error);
        if let Some(radius) = fill_radius {
            points.extend(interior_points(self.center, radius));
        }

        debug!(
            center = %self.center,
            radius = self.radius,
            fill = self.fill,
            perimeter = perimeter_len,
            total = points.len(),
            "rasterized circle"
        );

        Raster {
            points,
            perimeter_len,
            fill_radius,
        }
    }

    pub fn points(&self) -> Vec<Point> {
        self.rasterize().into_points()
    }
}

/// Stepping offsets of the midpoint circle loop.
///
/// Yields `(x, y)` starting at `(-radius, 0)` until `x` reaches 0. After the
/// iterator is exhausted `step_error` holds the value the loop last decided
/// on, which doubles as the fill radius. A radius of 0 or less yields nothing
/// and leaves `step_error` at the radius.
///
/// Positive radii are expected to be at most [`MAX_RADIUS`](crate::validate::MAX_RADIUS).
struct MidpointSteps {
    x: i64,
    y: i64,
    error: i64,
    step_error: i64,
}

impl MidpointSteps {
    fn new(radius: i64) -> Self {
        if radius <= 0 {
            return MidpointSteps {
                x: 0,
                y: 0,
                error: 0,
                step_error: radius,
            };
        }
        MidpointSteps {
            x: -radius,
            y: 0,
            error: 2 - 2 * radius,
            step_error: radius,
        }
    }
}

impl Iterator for MidpointSteps {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.x >= 0 {
            return None;
        }
        let offset = Point::new(self.x, self.y);

        self.step_error = self.error;
        if self.step_error <= self.y {
            self.y += 1;
            self.error += 2 * self.y + 1;
        }
        if self.step_error > self.x || self.error > self.y {
            self.x += 1;
            self.error += 2 * self.x + 1;
        }
        Some(offset)
    }
}

/// Rasterize a circle given typed arguments.
///
/// Any non-positive radius is accepted and yields no perimeter points; the
/// fill of a negative radius is empty as well. Positive radii above
/// [`MAX_RADIUS`](crate::validate::MAX_RADIUS) are out of range.
pub fn circle_points(center: Point, radius: i64, fill: bool) -> Vec<Point> {
    Circle::new(center, radius).filled(fill).points()
}

/// Rasterize a circle from untyped arguments.
///
/// `center` must hold exactly two integer-like items and `radius` must be
/// integer-like within `-MAX_RADIUS..=MAX_RADIUS`; otherwise the validation
/// error is returned unchanged.
pub fn get_circle_points<C, R>(
    center: &[C],
    radius: &R,
    fill: bool,
) -> Result<Vec<Point>, CoordError>
where
    C: IntegerLike + Debug,
    R: IntegerLike + Debug + ?Sized,
{
    let center = validate_pair("center", center)?;
    let radius = validate_radius(radius)?;
    Ok(circle_points(center, radius, fill))
}
