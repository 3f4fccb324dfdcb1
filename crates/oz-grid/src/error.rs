//! Geometry error type.

use thiserror::Error;

use oz_core::TileId;

/// Errors produced by `oz-grid`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    /// A direction was requested between tiles that are neither identical
    /// nor edge-adjacent.  Indicates a malformed plan or a grid mismatch.
    #[error("tiles {from} and {to} are not adjacent")]
    NotAdjacent { from: TileId, to: TileId },

    #[error("tile {0} is outside the grid")]
    TileNotFound(TileId),

    #[error("invalid grid dimensions: {0}")]
    InvalidGrid(String),
}

pub type GeometryResult<T> = Result<T, GeometryError>;
