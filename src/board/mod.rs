//! Chess board representation.
//!
//! Squares, pieces and a sparse board holding which piece stands where.
//! There is no move generation here; callers place and lift pieces
//! directly.
//!
//! # Example
//! ```
//! use chess_tools::board::{Board, Color, Piece, Square};
//!
//! let mut board = Board::new(8).unwrap();
//! let e1 = Square::new(5, 1).unwrap();
//! board.put(Piece::king(Color::White), e1).unwrap();
//! assert!(board.put(Piece::queen(Color::White), e1).is_err());
//! assert_eq!(board.remove(e1).unwrap(), Piece::king(Color::White));
//! ```

mod builder;
mod error;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::ChessToolsError;
pub use state::{Board, STANDARD_DIMENSION};
pub use types::{Color, GameResult, Piece, PieceKind, Square};
