//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A geometry must always have at least one contour.
    #[error("geometry must contain at least one contour")]
    NoContours,
}
