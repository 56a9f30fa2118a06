//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Knight,
    Bishop,
    Pawn,
}

/// Per-kind constants, icons indexed by `Color::index`.
struct KindInfo {
    value: f64,
    symbol: &'static str,
    name: &'static str,
    icons: [char; 2],
}

static KIND_INFO: [KindInfo; 6] = [
    KindInfo { value: 4.0, symbol: "K", name: "King", icons: ['♔', '♚'] },
    KindInfo { value: 9.0, symbol: "Q", name: "Queen", icons: ['♕', '♛'] },
    KindInfo { value: 5.0, symbol: "R", name: "Rook", icons: ['♖', '♜'] },
    KindInfo { value: 3.0, symbol: "N", name: "Knight", icons: ['♘', '♞'] },
    KindInfo { value: 3.0, symbol: "B", name: "Bishop", icons: ['♗', '♝'] },
    KindInfo { value: 1.0, symbol: "", name: "Pawn", icons: ['♙', '♟'] },
];

impl PieceKind {
    /// All piece kinds in table order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Pawn,
    ];

    #[inline]
    const fn index(self) -> usize {
        match self {
            PieceKind::King => 0,
            PieceKind::Queen => 1,
            PieceKind::Rook => 2,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 4,
            PieceKind::Pawn => 5,
        }
    }

    #[inline]
    fn info(self) -> &'static KindInfo {
        &KIND_INFO[self.index()]
    }

    /// Conventional material worth.
    ///
    /// King=4, Queen=9, Rook=5, Knight=3, Bishop=3, Pawn=1.
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.info().value
    }

    /// Uppercase notation letter; empty for pawns.
    #[inline]
    #[must_use]
    pub fn symbol(self) -> &'static str {
        self.info().symbol
    }

    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Unicode glyph for this kind in the given color.
    #[inline]
    #[must_use]
    pub fn icon(self, color: Color) -> char {
        self.info().icons[color.index()]
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A colored chess piece.
///
/// # Example
/// ```
/// use chess_tools::board::{Color, Piece};
///
/// let king = Piece::king(Color::White);
/// assert_eq!(king.value(), 4.0);
/// assert_eq!(king.symbol(), "K");
/// assert_eq!(king.icon(), '♔');
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    kind: PieceKind,
    color: Color,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    #[must_use]
    pub const fn king(color: Color) -> Self {
        Piece::new(PieceKind::King, color)
    }

    #[must_use]
    pub const fn queen(color: Color) -> Self {
        Piece::new(PieceKind::Queen, color)
    }

    #[must_use]
    pub const fn rook(color: Color) -> Self {
        Piece::new(PieceKind::Rook, color)
    }

    #[must_use]
    pub const fn knight(color: Color) -> Self {
        Piece::new(PieceKind::Knight, color)
    }

    #[must_use]
    pub const fn bishop(color: Color) -> Self {
        Piece::new(PieceKind::Bishop, color)
    }

    #[must_use]
    pub const fn pawn(color: Color) -> Self {
        Piece::new(PieceKind::Pawn, color)
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.kind.value()
    }

    #[inline]
    #[must_use]
    pub fn symbol(self) -> &'static str {
        self.kind.symbol()
    }

    /// Kind name, e.g. `"Knight"`.
    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        self.kind.name()
    }

    /// Glyph for this piece, white or black depending on its color.
    #[inline]
    #[must_use]
    pub fn icon(self) -> char {
        self.kind.icon(self.color)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.icon())
    }
}
