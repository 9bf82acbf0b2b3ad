//! Multi-contour geometry container.
//!
//! [`GeneralGeometry`] stores one or more contours of points. All the contours share the same *closed* flag and the
//! same [`CoordType`] tag, so a single geometry is either a set of polylines or a set of polygon rings. There is
//! always at least one contour: the last contour is the one new points are appended to, and a freshly created
//! geometry has one empty contour.
//!
//! ```
//! use galileo_geometry::{CoordType, Geometry, PointType};
//!
//! let mut geometry = Geometry::with_coord_type(CoordType::Display, true);
//! geometry.append_xy(0.0, 0.0);
//! geometry.append_xy_typed(5.0, 10.0, PointType::Quadratic);
//! geometry.append_xy(10.0, 0.0);
//!
//! let outline = geometry.to_outline();
//! assert_eq!(outline.contour_count(), 1);
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::cartesian::{CartesianPoint2d, Rect};
use crate::coord_set::{CoordSet, CoordSetMut};
use crate::coord_type::CoordType;
use crate::error::GeometryError;
use crate::map_object::MapObject;
use crate::outline::{round_coordinate, Outline};
use crate::path::Path;
use crate::point::{GeometryPoint, OutlinePoint, OutlinePointFp, PointType};

/// Set of open or closed contours of points of type `P`. See module documentation for details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneralGeometry<P> {
    contours: Vec<Vec<P>>,
    coord_type: CoordType,
    closed: bool,
}

/// Geometry with floating point outline points, used to create map objects and to specify view areas.
pub type Geometry = GeneralGeometry<OutlinePointFp>;

impl<P> Default for GeneralGeometry<P> {
    fn default() -> Self {
        Self {
            contours: vec![Vec::new()],
            coord_type: CoordType::Map,
            closed: false,
        }
    }
}

impl<P> GeneralGeometry<P> {
    /// Creates an empty open geometry in map coordinates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty geometry with the given coordinate type and closed flag.
    pub fn with_coord_type(coord_type: CoordType, closed: bool) -> Self {
        Self {
            coord_type,
            closed,
            ..Default::default()
        }
    }

    /// Creates a geometry from already built contours.
    ///
    /// Returns an error if `contours` is empty.
    pub fn from_contours(
        contours: Vec<Vec<P>>,
        coord_type: CoordType,
        closed: bool,
    ) -> Result<Self, GeometryError> {
        if contours.is_empty() {
            return Err(GeometryError::NoContours);
        }

        Ok(Self {
            contours,
            coord_type,
            closed,
        })
    }

    /// Coordinate type of the points.
    pub fn coord_type(&self) -> CoordType {
        self.coord_type
    }

    /// Number of contours. Never less than 1.
    pub fn contour_count(&self) -> usize {
        self.contours.len()
    }

    /// Number of points in the contour. Panics if `contour_index` is out of range.
    pub fn point_count(&self, contour_index: usize) -> usize {
        self.contours[contour_index].len()
    }

    /// Point at the given position. Panics if either index is out of range.
    pub fn point(&self, contour_index: usize, point_index: usize) -> &P {
        &self.contours[contour_index][point_index]
    }

    /// Mutable point at the given position. Panics if either index is out of range.
    pub fn point_mut(&mut self, contour_index: usize, point_index: usize) -> &mut P {
        &mut self.contours[contour_index][point_index]
    }

    /// Point at the given position, or `None` if either index is out of range.
    pub fn get_point(&self, contour_index: usize, point_index: usize) -> Option<&P> {
        self.contours.get(contour_index)?.get(point_index)
    }

    /// Mutable point at the given position, or `None` if either index is out of range.
    pub fn get_point_mut(&mut self, contour_index: usize, point_index: usize) -> Option<&mut P> {
        self.contours.get_mut(contour_index)?.get_mut(point_index)
    }

    /// Points of the contour. Panics if `contour_index` is out of range.
    pub fn contour(&self, contour_index: usize) -> &[P] {
        &self.contours[contour_index]
    }

    /// Iterates over the contours.
    pub fn contours(&self) -> impl Iterator<Item = &[P]> {
        self.contours.iter().map(Vec::as_slice)
    }

    /// Returns true if the **first** contour has no points.
    ///
    /// Other contours are not checked: a geometry with an empty first contour is reported as empty even if later
    /// contours contain points.
    pub fn is_empty(&self) -> bool {
        self.contours[0].is_empty()
    }

    /// Whether the contours are closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Sets the closed flag for all the contours.
    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    /// Adds a point to the end of the last contour.
    pub fn append_point(&mut self, point: P) {
        self.last_contour_mut().push(point);
    }

    /// Starts a new contour, unless the last contour is still empty.
    pub fn begin_contour(&mut self) {
        if !self.last_contour_mut().is_empty() {
            self.contours.push(Vec::new());
        }
    }

    /// Resets the geometry to a single empty contour. The coordinate type is reset to [`CoordType::Map`] and the
    /// geometry becomes open.
    pub fn clear(&mut self) {
        self.contours.truncate(1);
        self.contours[0].clear();
        self.coord_type = CoordType::Map;
        self.closed = false;
    }

    /// Reverses the order of the contours and the order of points in every contour.
    pub fn reverse(&mut self) {
        self.contours.reverse();
        for contour in &mut self.contours {
            contour.reverse();
        }
    }

    fn last_contour_mut(&mut self) -> &mut Vec<P> {
        let last = self.contours.len() - 1;
        &mut self.contours[last]
    }
}

impl<P: GeometryPoint> GeneralGeometry<P> {
    /// Creates a geometry with a copy of every contour of the path.
    ///
    /// Empty contours of the path are not copied.
    pub fn from_path<T>(path: &T, coord_type: CoordType, closed: bool) -> Self
    where
        T: Path,
        T::Point: Copy + Into<P>,
    {
        let mut geometry = Self::with_coord_type(coord_type, closed);
        for contour in path.contours() {
            geometry.begin_contour();
            geometry
                .last_contour_mut()
                .extend(contour.iter().map(|&p| p.into()));
        }

        log::trace!(
            "Created geometry with {} contours from a path",
            geometry.contour_count()
        );

        geometry
    }

    /// Creates a closed geometry with the corners of the rectangle: top left, bottom left, bottom right, top right.
    pub fn from_rect(rect: &Rect, coord_type: CoordType) -> Self {
        let mut geometry = Self::with_coord_type(coord_type, true);
        for corner in rect.into_quadrangle() {
            geometry.append_xy(corner.x(), corner.y());
        }

        geometry
    }

    /// Creates an open geometry with one point.
    pub fn from_point(point: P, coord_type: CoordType) -> Self {
        let mut geometry = Self::with_coord_type(coord_type, false);
        geometry.append_point(point);
        geometry
    }

    /// Creates a geometry in map coordinates from the contours of a map object.
    ///
    /// The geometry is closed for polygons and arrays, and open for other object types.
    pub fn from_map_object<O>(object: &O) -> Self
    where
        O: MapObject,
        O::Point: Copy + Into<P>,
    {
        let object_type = object.object_type();
        log::trace!("Creating geometry from a map object of type {object_type:?}");
        Self::from_path(object, CoordType::Map, object_type.has_closed_geometry())
    }

    /// Converts the geometry into a fixed-point outline.
    ///
    /// Every contour is kept, including empty ones, and gets the closed flag of the geometry. Coordinates are rounded
    /// to the nearest integer with [`round_coordinate`].
    pub fn to_outline(&self) -> Outline {
        let mut outline = Outline::new();
        for contour in &self.contours {
            let target = outline.append_contour();
            target.set_closed(self.closed);
            for point in contour {
                let p = point.to_outline_point();
                target.append_point(OutlinePoint::new(
                    round_coordinate(p.x),
                    round_coordinate(p.y),
                    p.point_type,
                ));
            }
        }

        log::trace!(
            "Converted geometry with {} contours into outline",
            outline.contour_count()
        );

        outline
    }

    /// Bounding rectangle of all the points.
    ///
    /// The rectangle starts from the first point of the first contour, or from the zero rectangle if the first
    /// contour is empty, and is then extended to include every point. A geometry without points has zero bounds.
    pub fn bounds(&self) -> Rect {
        let Some(bounds) = Rect::from_points(self.contours.iter().flatten()) else {
            return Rect::default();
        };

        if self.contours[0].is_empty() {
            bounds.merge(Rect::default())
        } else {
            bounds
        }
    }

    /// Adds a point with the given coordinates to the end of the last contour.
    pub fn append_xy(&mut self, x: f64, y: f64) {
        self.append_point(P::new(x, y));
    }

    /// Adds a point with the given coordinates and point type to the end of the last contour.
    pub fn append_xy_typed(&mut self, x: f64, y: f64, point_type: PointType) {
        self.append_point(P::new_typed(x, y, point_type));
    }

    /// Read-only view of the coordinates of the contour. Panics if `contour_index` is out of range.
    pub fn coord_set(&self, contour_index: usize) -> CoordSet<'_, P> {
        CoordSet::new(&self.contours[contour_index])
    }

    /// Mutable view of the coordinates of the contour. Panics if `contour_index` is out of range.
    pub fn coord_set_mut(&mut self, contour_index: usize) -> CoordSetMut<'_, P> {
        CoordSetMut::new(&mut self.contours[contour_index])
    }
}

impl<P> Path for GeneralGeometry<P> {
    type Point = P;

    fn contours(&self) -> impl Iterator<Item = &[P]> {
        GeneralGeometry::contours(self)
    }

    fn contour_count(&self) -> usize {
        GeneralGeometry::contour_count(self)
    }
}

impl<P: GeometryPoint> From<&GeneralGeometry<P>> for Outline {
    fn from(value: &GeneralGeometry<P>) -> Self {
        value.to_outline()
    }
}

impl<'de, P: Deserialize<'de>> Deserialize<'de> for GeneralGeometry<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct GeometryData<T> {
            contours: Vec<Vec<T>>,
            coord_type: CoordType,
            closed: bool,
        }

        let data = GeometryData::deserialize(deserializer)?;
        Self::from_contours(data.contours, data.coord_type, data.closed)
            .map_err(serde::de::Error::custom)
    }
}
