//! Views over the coordinates of a single contour.
//!
//! A view borrows the geometry it was taken from, so the contour cannot be changed or dropped while the view is in
//! use.

use crate::cartesian::{CartesianPoint2d, Vector2};
use crate::point::GeometryPoint;

/// Read-only view of the `(x, y)` pairs of a contour.
#[derive(Debug, Clone, Copy)]
pub struct CoordSet<'a, P> {
    points: &'a [P],
}

impl<'a, P: CartesianPoint2d<Num = f64>> CoordSet<'a, P> {
    pub(crate) fn new(points: &'a [P]) -> Self {
        Self { points }
    }

    /// Number of coordinate pairs.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the view has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// X coordinate of the point at `index`. Panics if the index is out of range.
    pub fn x(&self, index: usize) -> f64 {
        self.points[index].x()
    }

    /// Y coordinate of the point at `index`. Panics if the index is out of range.
    pub fn y(&self, index: usize) -> f64 {
        self.points[index].y()
    }

    /// Coordinates of the point at `index`.
    pub fn get(&self, index: usize) -> Option<(f64, f64)> {
        self.points.get(index).map(|p| (p.x(), p.y()))
    }

    /// Iterates over the coordinate pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + 'a {
        self.points.iter().map(|p| (p.x(), p.y()))
    }
}

/// Mutable view of the `(x, y)` pairs of a contour.
#[derive(Debug)]
pub struct CoordSetMut<'a, P> {
    points: &'a mut [P],
}

impl<'a, P: GeometryPoint> CoordSetMut<'a, P> {
    pub(crate) fn new(points: &'a mut [P]) -> Self {
        Self { points }
    }

    /// Number of coordinate pairs.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the view has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// X coordinate of the point at `index`. Panics if the index is out of range.
    pub fn x(&self, index: usize) -> f64 {
        self.points[index].x()
    }

    /// Y coordinate of the point at `index`. Panics if the index is out of range.
    pub fn y(&self, index: usize) -> f64 {
        self.points[index].y()
    }

    /// Read-only view of the same coordinates.
    pub fn as_coord_set(&self) -> CoordSet<'_, P> {
        CoordSet::new(&self.points[..])
    }

    /// Replaces the coordinates of the point at `index`, keeping the rest of the point intact. Panics if the index
    /// is out of range.
    pub fn set(&mut self, index: usize, x: f64, y: f64) {
        let (px, py) = self.points[index].coords_mut();
        *px = x;
        *py = y;
    }

    /// Iterates over mutable references to the coordinates.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&mut f64, &mut f64)> {
        self.points.iter_mut().map(|p| p.coords_mut())
    }

    /// Moves all the points by the vector.
    pub fn translate(&mut self, vector: Vector2) {
        for (x, y) in self.iter_mut() {
            *x += vector.dx();
            *y += vector.dy();
        }
    }
}
