//! Error types for board and square operations.

use std::fmt;

use super::types::Square;

/// Error raised when a well-typed value breaks a board invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessToolsError {
    /// Column or row below 1
    InvalidCoordinate { column: i64, row: i64 },
    /// Board side length below 1
    InvalidDimension { dimension: usize },
    /// `put` onto a square that already holds a piece
    SquareOccupied { square: Square },
    /// `remove` from a square that holds nothing
    SquareNotOccupied { square: Square },
    /// Algebraic notation only covers files a-h
    NotationUnavailable { column: u32 },
}

impl fmt::Display for ChessToolsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessToolsError::InvalidCoordinate { column, row } => {
                write!(
                    f,
                    "Square ({column}, {row}): row and column must be greater than or equal to 1"
                )
            }
            ChessToolsError::InvalidDimension { dimension } => {
                write!(f, "Value {dimension} is not valid as board dimension")
            }
            ChessToolsError::SquareOccupied { square } => {
                write!(f, "Square {square} is currently occupied")
            }
            ChessToolsError::SquareNotOccupied { square } => {
                write!(f, "Square {square} is not occupied")
            }
            ChessToolsError::NotationUnavailable { column } => {
                write!(f, "Column {column} has no algebraic file letter (must be 1-8)")
            }
        }
    }
}

impl std::error::Error for ChessToolsError {}
