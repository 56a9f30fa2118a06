pub mod board;

pub use board::{Board, ChessToolsError, Color, GameResult, Piece, PieceKind, Square};
