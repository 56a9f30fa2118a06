//! Fluent builder for setting up boards.
//!
//! Allows laying out a position piece by piece before validating it once.
//!
//! # Example
//! ```
//! use chess_tools::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::new(5, 1).unwrap(), Piece::king(Color::White))
//!     .piece(Square::new(5, 8).unwrap(), Piece::king(Color::Black))
//!     .piece(Square::new(1, 2).unwrap(), Piece::pawn(Color::White))
//!     .build()
//!     .unwrap();
//! assert_eq!(board.len(), 3);
//! ```

use super::state::STANDARD_DIMENSION;
use super::{Board, ChessToolsError, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` setups.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    dimension: usize,
    pieces: Vec<(Square, Piece)>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a builder for an empty 8x8 board.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            dimension: STANDARD_DIMENSION,
            pieces: Vec::new(),
        }
    }

    /// Create a builder holding the standard initial position.
    pub fn starting_position() -> Result<Self, ChessToolsError> {
        let mut builder = Self::new();

        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (column, kind) in (1..).zip(back_rank) {
            builder
                .pieces
                .push((Square::new(column, 1)?, Piece::new(kind, Color::White)));
            builder
                .pieces
                .push((Square::new(column, 8)?, Piece::new(kind, Color::Black)));
        }
        for column in 1..=8 {
            builder
                .pieces
                .push((Square::new(column, 2)?, Piece::pawn(Color::White)));
            builder
                .pieces
                .push((Square::new(column, 7)?, Piece::pawn(Color::Black)));
        }

        Ok(builder)
    }

    /// Set the board side length. Validated in [`build`](Self::build).
    #[must_use]
    pub const fn dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Place a piece, replacing whatever was queued on that square.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    /// Remove a queued piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Build the board.
    pub fn build(self) -> Result<Board, ChessToolsError> {
        let mut board = Board::new(self.dimension)?;
        for (square, piece) in self.pieces {
            board.put(piece, square)?;
        }
        Ok(board)
    }
}
