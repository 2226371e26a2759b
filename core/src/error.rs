use crate::types::Coord;
use thiserror::Error;

/// Errors raised when a board or an agent is described incorrectly.
///
/// `EmptyBoard` and `OutOfBounds` are configuration errors caught at
/// construction; `UnknownRole` and `InvalidCoord` are bad caller arguments.
/// None of them are retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid configuration: board must be at least 1x1, got {rows}x{cols}")]
    EmptyBoard { rows: u16, cols: u16 },

    #[error("invalid configuration: {position} is outside the {rows}x{cols} board")]
    OutOfBounds { position: Coord, rows: u16, cols: u16 },

    #[error("invalid argument: unknown agent {0:?}, expected \"evader\" or \"pursuer\"")]
    UnknownRole(String),

    #[error("invalid argument: {0:?} is not a coordinate, expected \"row,col\"")]
    InvalidCoord(String),
}

impl GridError {
    /// Returns true for errors describing an impossible board setup.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GridError::EmptyBoard { .. } | GridError::OutOfBounds { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GridError>;
