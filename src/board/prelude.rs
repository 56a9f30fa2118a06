//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_tools::board::prelude::*;
//! ```

pub use super::{Board, BoardBuilder, ChessToolsError, Color, GameResult, Piece, PieceKind, Square};
