pub mod point;
pub mod error;
pub mod validate;
pub mod quadrant;
pub mod interior;
pub mod circle;
#[cfg(feature = "serde")]
pub mod config;

pub use circle::{circle_points, get_circle_points, Circle, Raster};
pub use error::CoordError;
pub use point::Point;
