//! Fixed-point outlines consumed by the rendering pipeline.

use serde::{Deserialize, Serialize};

use crate::point::OutlinePoint;

#[cfg(feature = "lyon")]
mod path_builder;

/// Rounds a coordinate to the nearest integer, with halves rounded away from zero.
///
/// Values outside of `i32` range saturate to `i32::MIN` / `i32::MAX`, `NaN` becomes `0`.
pub fn round_coordinate(value: f64) -> i32 {
    value.round() as i32
}

/// Sequence of outline points that is either open or closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutlineContour {
    points: Vec<OutlinePoint>,
    is_closed: bool,
}

impl std::ops::Deref for OutlineContour {
    type Target = [OutlinePoint];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl OutlineContour {
    /// Creates a new contour.
    pub fn new(points: Vec<OutlinePoint>, is_closed: bool) -> Self {
        Self { points, is_closed }
    }

    /// Creates a new open contour.
    pub fn open(points: Vec<OutlinePoint>) -> Self {
        Self::new(points, false)
    }

    /// Creates a new closed contour.
    pub fn closed(points: Vec<OutlinePoint>) -> Self {
        Self::new(points, true)
    }

    /// Whether the last point is connected to the first one.
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    /// Sets the closed flag.
    pub fn set_closed(&mut self, is_closed: bool) {
        self.is_closed = is_closed;
    }

    /// Adds a point to the end of the contour.
    pub fn append_point(&mut self, point: OutlinePoint) {
        self.points.push(point);
    }

    /// Points of the contour.
    pub fn points(&self) -> &[OutlinePoint] {
        &self.points
    }
}

/// Ordered set of contours.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outline {
    contours: Vec<OutlineContour>,
}

impl Outline {
    /// Creates an outline without contours.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new empty open contour and returns it.
    pub fn append_contour(&mut self) -> &mut OutlineContour {
        self.contours.push(OutlineContour::default());
        let last = self.contours.len() - 1;
        &mut self.contours[last]
    }

    /// Number of contours.
    pub fn contour_count(&self) -> usize {
        self.contours.len()
    }

    /// Iterates over the contours.
    pub fn contours(&self) -> impl Iterator<Item = &OutlineContour> {
        self.contours.iter()
    }

    /// True if none of the contours has any points.
    pub fn is_empty(&self) -> bool {
        self.contours.iter().all(|c| c.points.is_empty())
    }
}

impl From<Vec<OutlineContour>> for Outline {
    fn from(contours: Vec<OutlineContour>) -> Self {
        Self { contours }
    }
}
