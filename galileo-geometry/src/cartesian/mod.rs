//! Points, vectors and rectangles in 2d cartesian coordinates.

mod point;
mod rect;

pub use point::{CartesianPoint2d, NewCartesianPoint2d, Point2, Vector2};
pub use rect::Rect;
