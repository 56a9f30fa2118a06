//! Core chess types.
//!
//! This module contains the value types used by the board:
//! - `Piece`, `PieceKind` and `Color` - chess pieces and colors
//! - `Square` - 1-based (column, row) coordinate
//! - `GameResult` - game outcome encoding

mod piece;
mod result;
mod square;

pub use piece::{Color, Piece, PieceKind};
pub use result::GameResult;
pub use square::Square;
