//! Error types for critfumble-hexgrid.

use thiserror::Error;

/// Result type for hex grid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the edges of the engine.
///
/// The geometry itself is total; these only arise when parsing caller input
/// or when a caller-imposed search budget runs out.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A cell key was not of the form `"col,row"`.
    #[error("invalid cell key {0:?}: expected \"col,row\"")]
    InvalidKey(String),

    /// A cell key named a cell beyond the supported extent.
    #[error("cell {0} lies outside the supported grid extent")]
    OutOfRange(String),

    /// A range or radius was negative.
    #[error("range must be non-negative, got {0}")]
    NegativeRange(i64),

    /// A layout was given a non-positive or non-finite hex size.
    #[error("hex size must be positive and finite, got {0}")]
    InvalidLayoutSize(f64),

    /// Pathfinding gave up after expanding the configured number of nodes.
    #[error("pathfinding gave up after {expansions} expansions")]
    SearchLimitExceeded {
        expansions: usize,
    },
}
