//! Geometry container used to build map objects and to specify view areas.
//!
//! The main type of the crate is [`GeneralGeometry`], a set of contours that are either all open (polylines) or all
//! closed (polygon rings), tagged with the [`CoordType`] of their points. [`Geometry`] is the geometry over
//! floating point outline points, and is what most code should use.
//!
//! A geometry can be built point by point, or from a [`Path`], a [`Rect`](cartesian::Rect), a single point or a
//! [`MapObject`]. It is handed over to renderers as a fixed-point [`Outline`]
//! (see [`GeneralGeometry::to_outline`]). With the `lyon` feature an outline can be turned into a `lyon` path for
//! tessellation.

pub mod cartesian;
mod coord_set;
mod coord_type;
pub mod error;
mod geometry;
mod map_object;
mod outline;
mod path;
mod point;

pub use coord_set::{CoordSet, CoordSetMut};
pub use coord_type::CoordType;
pub use error::GeometryError;
pub use geometry::{GeneralGeometry, Geometry};
pub use map_object::{MapObject, MapObjectType};
pub use outline::{round_coordinate, Outline, OutlineContour};
pub use path::Path;
pub use point::{GeometryPoint, OutlinePoint, OutlinePointFp, PointType};
