//! Outline points and the [`GeometryPoint`] trait, which is what a point type must provide to be stored in a
//! [`GeneralGeometry`](crate::GeneralGeometry).

use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianPoint2d, NewCartesianPoint2d, Point2};

/// Role of a point in an outline.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointType {
    /// A point on the curve.
    #[default]
    OnCurve,
    /// Control point of a quadratic bezier spline.
    Quadratic,
    /// Control point of a cubic bezier spline.
    Cubic,
}

/// Outline point with floating point coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutlinePointFp {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Role of the point.
    pub point_type: PointType,
}

impl OutlinePointFp {
    /// Creates a new point.
    pub const fn new(x: f64, y: f64, point_type: PointType) -> Self {
        Self { x, y, point_type }
    }

    /// Creates a new on-curve point.
    pub const fn on_curve(x: f64, y: f64) -> Self {
        Self::new(x, y, PointType::OnCurve)
    }
}

/// Outline point with integer (fixed-point) coordinates, as consumed by renderers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutlinePoint {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Role of the point.
    pub point_type: PointType,
}

impl OutlinePoint {
    /// Creates a new point.
    pub const fn new(x: i32, y: i32, point_type: PointType) -> Self {
        Self { x, y, point_type }
    }
}

impl From<OutlinePoint> for OutlinePointFp {
    fn from(value: OutlinePoint) -> Self {
        Self::new(value.x.into(), value.y.into(), value.point_type)
    }
}

impl From<Point2<f64>> for OutlinePointFp {
    fn from(value: Point2<f64>) -> Self {
        Self::on_curve(value.x(), value.y())
    }
}

impl From<OutlinePointFp> for Point2<f64> {
    fn from(value: OutlinePointFp) -> Self {
        Point2::new(value.x, value.y)
    }
}

impl From<OutlinePoint> for Point2<f64> {
    fn from(value: OutlinePoint) -> Self {
        Point2::new(value.x.into(), value.y.into())
    }
}

impl CartesianPoint2d for OutlinePointFp {
    type Num = f64;

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl NewCartesianPoint2d for OutlinePointFp {
    fn new(x: f64, y: f64) -> Self {
        Self::on_curve(x, y)
    }
}

/// Point that can be stored in a [`GeneralGeometry`](crate::GeneralGeometry).
///
/// Construction from bare coordinates comes from [`NewCartesianPoint2d::new`].
pub trait GeometryPoint: NewCartesianPoint2d<f64> + Copy {
    /// Creates a point with the given point type. Types that cannot store the point type ignore it.
    fn new_typed(x: f64, y: f64, point_type: PointType) -> Self;

    /// Converts the point into the floating point outline representation.
    fn to_outline_point(&self) -> OutlinePointFp;

    /// Mutable references to the x and y coordinates.
    fn coords_mut(&mut self) -> (&mut f64, &mut f64);
}

impl GeometryPoint for OutlinePointFp {
    fn new_typed(x: f64, y: f64, point_type: PointType) -> Self {
        Self::new(x, y, point_type)
    }

    fn to_outline_point(&self) -> OutlinePointFp {
        *self
    }

    fn coords_mut(&mut self) -> (&mut f64, &mut f64) {
        (&mut self.x, &mut self.y)
    }
}

impl GeometryPoint for Point2<f64> {
    fn new_typed(x: f64, y: f64, _point_type: PointType) -> Self {
        Point2::new(x, y)
    }

    fn to_outline_point(&self) -> OutlinePointFp {
        OutlinePointFp::on_curve(self.x(), self.y())
    }

    fn coords_mut(&mut self) -> (&mut f64, &mut f64) {
        self.xy_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point2_drops_point_type() {
        let p = Point2::new_typed(1.5, 2.5, PointType::Cubic);
        assert_eq!(p, Point2::new(1.5, 2.5));
        assert_eq!(p.to_outline_point(), OutlinePointFp::on_curve(1.5, 2.5));
    }

    #[test]
    fn outline_point_keeps_point_type() {
        let p = OutlinePointFp::new_typed(1.0, -1.0, PointType::Quadratic);
        assert_eq!(p.to_outline_point().point_type, PointType::Quadratic);

        let fixed = OutlinePoint::new(3, -4, PointType::Cubic);
        assert_eq!(
            OutlinePointFp::from(fixed),
            OutlinePointFp::new(3.0, -4.0, PointType::Cubic)
        );
    }
}
