use std::collections::HashMap;

use super::{ChessToolsError, Color, Piece, Square};

/// Side length of a standard chess board.
pub const STANDARD_DIMENSION: usize = 8;

/// Sparse occupancy map from squares to pieces.
///
/// A square is present in the map exactly when a piece stands on it.
/// `put` and `remove` do not check squares against `dimension`; use
/// [`Board::contains`] when bounds matter to the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    dimension: usize,
    squares: HashMap<Square, Piece>,
}

impl Board {
    /// Create an empty board with the given side length.
    pub fn new(dimension: usize) -> Result<Self, ChessToolsError> {
        if dimension < 1 {
            return Err(ChessToolsError::InvalidDimension { dimension });
        }
        Ok(Board {
            dimension,
            squares: HashMap::new(),
        })
    }

    /// Empty 8x8 board.
    #[must_use]
    pub fn standard() -> Self {
        Board {
            dimension: STANDARD_DIMENSION,
            squares: HashMap::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Place `piece` on `square`.
    ///
    /// Fails with [`ChessToolsError::SquareOccupied`] if the square already
    /// holds a piece; the existing occupant is left in place.
    pub fn put(&mut self, piece: Piece, square: Square) -> Result<(), ChessToolsError> {
        if self.squares.contains_key(&square) {
            #[cfg(feature = "logging")]
            log::debug!("rejected put of {} on occupied square {}", piece.name(), square);
            return Err(ChessToolsError::SquareOccupied { square });
        }
        self.squares.insert(square, piece);
        #[cfg(feature = "logging")]
        log::trace!("put {} {} on {}", piece.color(), piece.name(), square);
        Ok(())
    }

    /// Take the piece off `square` and return it.
    ///
    /// Fails with [`ChessToolsError::SquareNotOccupied`] if the square is empty.
    pub fn remove(&mut self, square: Square) -> Result<Piece, ChessToolsError> {
        match self.squares.remove(&square) {
            Some(piece) => {
                #[cfg(feature = "logging")]
                log::trace!("removed {} {} from {}", piece.color(), piece.name(), square);
                Ok(piece)
            }
            None => {
                #[cfg(feature = "logging")]
                log::debug!("rejected remove from empty square {}", square);
                Err(ChessToolsError::SquareNotOccupied { square })
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares.get(&square).copied()
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.squares.contains_key(&square)
    }

    /// Number of occupied squares
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Whether `square` lies inside the `dimension x dimension` grid.
    #[must_use]
    pub fn contains(&self, square: Square) -> bool {
        square.column() as usize <= self.dimension && square.row() as usize <= self.dimension
    }

    /// Occupied squares with their pieces, ordered a1, b1, ..., a2, ...
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        let mut occupied: Vec<(Square, Piece)> =
            self.squares.iter().map(|(&sq, &piece)| (sq, piece)).collect();
        occupied.sort_unstable_by_key(|&(sq, _)| sq);
        occupied.into_iter()
    }

    /// Total material value of `color`'s pieces.
    #[must_use]
    pub fn material(&self, color: Color) -> f64 {
        self.squares
            .values()
            .filter(|piece| piece.color() == color)
            .map(|piece| piece.value())
            .sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(column: u32, row: u32) -> Square {
        Square::new(column, row).unwrap()
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(8).unwrap();
        assert_eq!(board.dimension(), 8);
        assert!(board.is_empty());
        assert_eq!(board.len(), 0);
    }

    #[test]
    fn zero_dimension_rejected() {
        assert_eq!(
            Board::new(0),
            Err(ChessToolsError::InvalidDimension { dimension: 0 })
        );
    }

    #[test]
    fn default_is_standard() {
        assert_eq!(Board::default(), Board::new(STANDARD_DIMENSION).unwrap());
    }

    #[test]
    fn contains_checks_dimension() {
        let board = Board::new(5).unwrap();
        assert!(board.contains(sq(5, 5)));
        assert!(!board.contains(sq(6, 1)));
        assert!(!board.contains(sq(1, 6)));
    }

    #[test]
    fn iter_is_sorted() {
        let mut board = Board::standard();
        board.put(Piece::rook(Color::White), sq(1, 2)).unwrap();
        board.put(Piece::king(Color::White), sq(5, 1)).unwrap();
        board.put(Piece::pawn(Color::Black), sq(2, 1)).unwrap();

        let squares: Vec<Square> = board.iter().map(|(s, _)| s).collect();
        assert_eq!(squares, vec![sq(2, 1), sq(5, 1), sq(1, 2)]);
    }

    #[test]
    fn material_per_color() {
        let mut board = Board::standard();
        board.put(Piece::queen(Color::White), sq(4, 1)).unwrap();
        board.put(Piece::pawn(Color::White), sq(4, 2)).unwrap();
        board.put(Piece::knight(Color::Black), sq(2, 8)).unwrap();

        assert_eq!(board.material(Color::White), 10.0);
        assert_eq!(board.material(Color::Black), 3.0);
    }
}
