use num_traits::Num;
use serde::{Deserialize, Serialize};

use crate::cartesian::point::{CartesianPoint2d, Point2};

/// Axis aligned rectangle.
///
/// Corner accessors follow the display convention: the *top* edge is the one with the smaller `y`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect<N = f64> {
    /// Minimum x coordinate.
    pub x_min: N,
    /// Minimum y coordinate.
    pub y_min: N,
    /// Maximum x coordinate.
    pub x_max: N,
    /// Maximum y coordinate.
    pub y_max: N,
}

impl<N: Num + Copy + PartialOrd> Rect<N> {
    /// Creates a new rectangle.
    pub fn new(x_min: N, y_min: N, x_max: N, y_max: N) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Creates a zero-size rectangle at the given point.
    pub fn from_point(p: &impl CartesianPoint2d<Num = N>) -> Self {
        Self {
            x_min: p.x(),
            x_max: p.x(),
            y_min: p.y(),
            y_max: p.y(),
        }
    }

    /// Bounding rectangle of the points, or `None` if the iterator is empty.
    pub fn from_points<'a, P: CartesianPoint2d<Num = N> + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Option<Self> {
        let first = points.next()?;
        let mut rect = Self::from_point(first);
        for p in points {
            rect.combine(p);
        }

        Some(rect)
    }

    /// Minimum x coordinate.
    pub fn x_min(&self) -> N {
        self.x_min
    }

    /// Maximum x coordinate.
    pub fn x_max(&self) -> N {
        self.x_max
    }

    /// Minimum y coordinate.
    pub fn y_min(&self) -> N {
        self.y_min
    }

    /// Maximum y coordinate.
    pub fn y_max(&self) -> N {
        self.y_max
    }

    /// Width of the rectangle.
    pub fn width(&self) -> N {
        self.x_max - self.x_min
    }

    /// Height of the rectangle.
    pub fn height(&self) -> N {
        self.y_max - self.y_min
    }

    /// Corner with minimum x and minimum y.
    pub fn top_left(&self) -> Point2<N> {
        Point2::new(self.x_min, self.y_min)
    }

    /// Corner with minimum x and maximum y.
    pub fn bottom_left(&self) -> Point2<N> {
        Point2::new(self.x_min, self.y_max)
    }

    /// Corner with maximum x and maximum y.
    pub fn bottom_right(&self) -> Point2<N> {
        Point2::new(self.x_max, self.y_max)
    }

    /// Corner with maximum x and minimum y.
    pub fn top_right(&self) -> Point2<N> {
        Point2::new(self.x_max, self.y_min)
    }

    /// Corners in the order: top left, bottom left, bottom right, top right.
    pub fn into_quadrangle(self) -> [Point2<N>; 4] {
        [
            self.top_left(),
            self.bottom_left(),
            self.bottom_right(),
            self.top_right(),
        ]
    }

    /// Grows the rectangle so that it contains the point.
    pub fn combine(&mut self, point: &impl CartesianPoint2d<Num = N>) {
        if self.x_min > point.x() {
            self.x_min = point.x();
        }
        if self.y_min > point.y() {
            self.y_min = point.y();
        }
        if self.x_max < point.x() {
            self.x_max = point.x();
        }
        if self.y_max < point.y() {
            self.y_max = point.y();
        }
    }

    /// Smallest rectangle containing both rectangles.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: if self.x_min < other.x_min {
                self.x_min
            } else {
                other.x_min
            },
            y_min: if self.y_min < other.y_min {
                self.y_min
            } else {
                other.y_min
            },
            x_max: if self.x_max > other.x_max {
                self.x_max
            } else {
                other.x_max
            },
            y_max: if self.y_max > other.y_max {
                self.y_max
            } else {
                other.y_max
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points() {
        let points = [
            Point2::new(1.0, 5.0),
            Point2::new(-2.0, 3.0),
            Point2::new(4.0, -1.0),
        ];
        assert_eq!(
            Rect::from_points(points.iter()),
            Some(Rect::new(-2.0, -1.0, 4.0, 5.0))
        );

        let empty: [Point2; 0] = [];
        assert_eq!(Rect::from_points(empty.iter()), None);
    }

    #[test]
    fn corners() {
        let rect = Rect::new(0.0, 0.0, 2.0, 1.0);
        assert_eq!(
            rect.into_quadrangle(),
            [
                Point2::new(0.0, 0.0),
                Point2::new(0.0, 1.0),
                Point2::new(2.0, 1.0),
                Point2::new(2.0, 0.0),
            ]
        );
        assert_eq!(rect.width(), 2.0);
        assert_eq!(rect.height(), 1.0);
    }

    #[test]
    fn combine() {
        let mut rect = Rect::default();
        rect.combine(&Point2::new(3.0, -2.0));
        assert_eq!(rect, Rect::new(0.0, -2.0, 3.0, 0.0));
        rect.combine(&Point2::new(1.0, -1.0));
        assert_eq!(rect, Rect::new(0.0, -2.0, 3.0, 0.0));
    }

    #[test]
    fn merge() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let b = Rect::new(-1.0, 0.5, 0.5, 3.0);
        assert_eq!(a.merge(b), Rect::new(-1.0, 0.0, 1.0, 3.0));
    }
}
