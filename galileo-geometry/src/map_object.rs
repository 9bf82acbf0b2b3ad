use serde::{Deserialize, Serialize};

use crate::path::Path;

/// Kind of a map object.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapObjectType {
    /// A point object, such as a point of interest.
    Point,
    /// A linear object, such as a road or a river.
    Line,
    /// An area, such as a lake or a building.
    Polygon,
    /// A generic array of values stored as points.
    Array,
}

impl MapObjectType {
    /// Whether the contours of an object of this type are closed.
    pub fn has_closed_geometry(&self) -> bool {
        matches!(self, Self::Polygon | Self::Array)
    }
}

/// A map data item that exposes its geometry as a set of contours.
pub trait MapObject: Path {
    /// Kind of the object.
    fn object_type(&self) -> MapObjectType;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_geometry() {
        assert!(MapObjectType::Polygon.has_closed_geometry());
        assert!(MapObjectType::Array.has_closed_geometry());
        assert!(!MapObjectType::Line.has_closed_geometry());
        assert!(!MapObjectType::Point.has_closed_geometry());
    }
}
