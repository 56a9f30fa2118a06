//! Game outcome encoding.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Color;

/// Outcome of a game in score notation ("1-0", "0-1", "0.5-0.5").
///
/// Nothing in the crate assigns a result yet; it is carried for callers that
/// record finished games.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    #[default]
    Undefined,
    White,
    Black,
    Draw,
}

impl GameResult {
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameResult::Undefined => "",
            GameResult::White => "1-0",
            GameResult::Black => "0-1",
            GameResult::Draw => "0.5-0.5",
        }
    }

    /// Winning color, if the game was won.
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::White => Some(Color::White),
            GameResult::Black => Some(Color::Black),
            GameResult::Undefined | GameResult::Draw => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_decided(self) -> bool {
        !matches!(self, GameResult::Undefined)
    }
}

impl From<Color> for GameResult {
    fn from(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::White,
            Color::Black => GameResult::Black,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
