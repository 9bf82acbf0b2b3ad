//! See documentation for [`Path`] trait.

use crate::outline::Outline;
use crate::point::OutlinePoint;

/// Geometry consisting of several contours, each an ordered sequence of points.
///
/// This is the input for [`GeneralGeometry::from_path`](crate::GeneralGeometry::from_path).
pub trait Path {
    /// Type of the points of the contours.
    type Point;

    /// Iterates over contours in their order.
    fn contours(&self) -> impl Iterator<Item = &[Self::Point]>;

    /// Number of contours.
    fn contour_count(&self) -> usize {
        self.contours().count()
    }
}

impl Path for Outline {
    type Point = OutlinePoint;

    fn contours(&self) -> impl Iterator<Item = &[OutlinePoint]> {
        Outline::contours(self).map(|c| c.points())
    }

    fn contour_count(&self) -> usize {
        Outline::contour_count(self)
    }
}

impl<P> Path for Vec<Vec<P>> {
    type Point = P;

    fn contours(&self) -> impl Iterator<Item = &[P]> {
        self.iter().map(Vec::as_slice)
    }

    fn contour_count(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::OutlineContour;
    use crate::point::PointType;

    #[test]
    fn outline_as_path() {
        let outline = Outline::from(vec![
            OutlineContour::open(vec![OutlinePoint::new(1, 1, PointType::OnCurve)]),
            OutlineContour::closed(vec![]),
        ]);

        assert_eq!(Path::contour_count(&outline), 2);
        let lengths: Vec<_> = Path::contours(&outline).map(|c| c.len()).collect();
        assert_eq!(lengths, vec![1, 0]);
    }
}
