use serde::{Deserialize, Serialize};

/// Coordinate space the points of a geometry are expressed in.
///
/// The tag is descriptive: geometry operations never check or convert coordinates based on it. It tells the code
/// consuming the geometry (map object builders, view setup etc) how the numbers should be interpreted.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoordType {
    /// Map coordinates in the units of the map projection.
    #[default]
    Map,
    /// Display (screen) pixels with the origin in the top left corner.
    Display,
    /// Latitude and longitude in degrees.
    Degree,
    /// Map coordinates in meters.
    MapMeter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_is_default() {
        assert_eq!(CoordType::default(), CoordType::Map);
    }
}
