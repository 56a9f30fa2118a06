//! Square types and utilities.

use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Color;
use crate::board::error::ChessToolsError;

/// File letters available for algebraic notation.
const FILES: &[u8; 8] = b"abcdefgh";

/// A square on the board, addressed by 1-based (column, row).
///
/// Columns map to files (`1` = a) and rows map to ranks (`1` = rank 1).
/// Both coordinates are at least 1; there is no upper bound here, the
/// board dimension is a property of [`Board`](crate::board::Board).
///
/// # Example
/// ```
/// use chess_tools::board::{Color, Square};
///
/// let sq = Square::new(7, 7).unwrap();
/// assert_eq!(sq.notation().unwrap(), "g7");
/// assert_eq!(sq.color(), Color::Black);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SquareRepr", into = "SquareRepr"))]
pub struct Square {
    column: u32,
    row: u32,
}

impl Square {
    /// Create a square, rejecting a zero column or row.
    pub fn new(column: u32, row: u32) -> Result<Self, ChessToolsError> {
        if column < 1 || row < 1 {
            return Err(ChessToolsError::InvalidCoordinate {
                column: i64::from(column),
                row: i64::from(row),
            });
        }
        Ok(Square { column, row })
    }

    /// 1-based column (file index)
    #[inline]
    #[must_use]
    pub const fn column(self) -> u32 {
        self.column
    }

    /// 1-based row (rank index)
    #[inline]
    #[must_use]
    pub const fn row(self) -> u32 {
        self.row
    }

    /// Square color: black when `column + row` is even, so (1, 1) is black.
    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        // Parity of the sum without risking overflow
        if self.column % 2 == self.row % 2 {
            Color::Black
        } else {
            Color::White
        }
    }

    /// Display glyph for the square's color.
    #[inline]
    #[must_use]
    pub const fn icon(self) -> char {
        match self.color() {
            Color::White => '□',
            Color::Black => '■',
        }
    }

    /// Algebraic notation, e.g. `"a1"` or `"h8"`.
    ///
    /// Only files a-h exist, so columns beyond 8 fail with
    /// [`ChessToolsError::NotationUnavailable`].
    pub fn notation(self) -> Result<String, ChessToolsError> {
        let file = FILES
            .get(self.column as usize - 1)
            .ok_or(ChessToolsError::NotationUnavailable {
                column: self.column,
            })?;
        Ok(format!("{}{}", *file as char, self.row))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.notation() {
            Ok(notation) => f.write_str(&notation),
            Err(_) => write!(f, "({}, {})", self.column, self.row),
        }
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> Ordering {
        // Row-major: a1, b1, ..., h1, a2, ...
        self.row
            .cmp(&other.row)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl TryFrom<(i64, i64)> for Square {
    type Error = ChessToolsError;

    fn try_from((column, row): (i64, i64)) -> Result<Self, Self::Error> {
        let invalid = || ChessToolsError::InvalidCoordinate { column, row };
        let c = u32::try_from(column).map_err(|_| invalid())?;
        let r = u32::try_from(row).map_err(|_| invalid())?;
        Square::new(c, r)
    }
}

/// Wire shape used by the serde impls; validated on the way in.
#[cfg(feature = "serde")]
#[derive(Clone, Copy, Serialize, Deserialize)]
struct SquareRepr {
    column: i64,
    row: i64,
}

#[cfg(feature = "serde")]
impl From<Square> for SquareRepr {
    fn from(sq: Square) -> Self {
        SquareRepr {
            column: i64::from(sq.column),
            row: i64::from(sq.row),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<SquareRepr> for Square {
    type Error = ChessToolsError;

    fn try_from(repr: SquareRepr) -> Result<Self, Self::Error> {
        Square::try_from((repr.column, repr.row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn new_accepts_positive_coordinates() {
        let sq = Square::new(1, 1).unwrap();
        assert_eq!(sq.column(), 1);
        assert_eq!(sq.row(), 1);
        assert_eq!(sq.color(), Color::Black);
    }

    #[test]
    fn new_rejects_zero() {
        assert_eq!(
            Square::new(0, 1),
            Err(ChessToolsError::InvalidCoordinate { column: 0, row: 1 })
        );
        assert_eq!(
            Square::new(1, 0),
            Err(ChessToolsError::InvalidCoordinate { column: 1, row: 0 })
        );
    }

    #[test]
    fn try_from_signed() {
        assert_eq!(Square::try_from((3, 4)), Square::new(3, 4));
        assert_eq!(
            Square::try_from((-1, 4)),
            Err(ChessToolsError::InvalidCoordinate { column: -1, row: 4 })
        );
        assert!(Square::try_from((1, i64::from(u32::MAX) + 1)).is_err());
    }

    #[test]
    fn color_parity() {
        assert_eq!(Square::new(1, 1).unwrap().color(), Color::Black);
        assert_eq!(Square::new(2, 1).unwrap().color(), Color::White);
        assert_eq!(Square::new(1, 2).unwrap().color(), Color::White);
        assert_eq!(Square::new(8, 8).unwrap().color(), Color::Black);
    }

    #[test]
    fn icon_follows_color() {
        assert_eq!(Square::new(1, 1).unwrap().icon(), '■');
        assert_eq!(Square::new(2, 1).unwrap().icon(), '□');
    }

    #[test]
    fn notation() {
        let cases = [(1, 1, "a1"), (8, 1, "h1"), (7, 7, "g7"), (8, 8, "h8"), (1, 12, "a12")];
        for (column, row, expected) in cases {
            assert_eq!(Square::new(column, row).unwrap().notation().unwrap(), expected);
        }
    }

    #[test]
    fn notation_stops_at_h_file() {
        assert_eq!(
            Square::new(9, 1).unwrap().notation(),
            Err(ChessToolsError::NotationUnavailable { column: 9 })
        );
    }

    #[test]
    fn display() {
        assert_eq!(Square::new(5, 2).unwrap().to_string(), "e2");
        assert_eq!(Square::new(10, 3).unwrap().to_string(), "(10, 3)");
    }

    #[test]
    fn equality_and_hash() {
        let a = Square::new(3, 5).unwrap();
        let b = Square::new(3, 5).unwrap();
        let c = Square::new(5, 3).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Square> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn ordering_is_row_major() {
        let a2 = Square::new(1, 2).unwrap();
        let h1 = Square::new(8, 1).unwrap();
        let b1 = Square::new(2, 1).unwrap();
        let mut squares = vec![a2, h1, b1];
        squares.sort();
        assert_eq!(squares, vec![b1, h1, a2]);
    }
}
