//! Board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PositionError;

/// Number of files and ranks on the board.
pub const BOARD_SIZE: usize = 8;

/// A square on the board, represented as (file, rank).
///
/// The origin is the top-left corner as seen by White: file 0 is the a-file
/// and rank 0 is Black's back rank, so White's pieces start on ranks 6 and 7.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "(usize, usize)")
)]
pub struct Position(pub usize, pub usize); // (file, rank)

impl Position {
    /// Create a new position with bounds checking
    #[must_use]
    pub fn new(file: usize, rank: usize) -> Option<Self> {
        let pos = Position(file, rank);
        pos.is_on_board().then_some(pos)
    }

    /// Whether both coordinates lie on the board
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 < BOARD_SIZE && self.1 < BOARD_SIZE
    }

    /// Build a position from signed coordinates, `None` if either axis is off the board
    #[inline]
    #[must_use]
    pub fn from_coords(file: isize, rank: isize) -> Option<Self> {
        if (0..BOARD_SIZE as isize).contains(&file) && (0..BOARD_SIZE as isize).contains(&rank) {
            Some(Position(file as usize, rank as usize))
        } else {
            None
        }
    }

    /// File index (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.0
    }

    /// Rank index (0-7, where 0 = rank 8)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.1
    }

    /// Signed coordinates, for offset arithmetic
    #[inline]
    #[must_use]
    pub const fn coords(self) -> (isize, isize) {
        (self.0 as isize, self.1 as isize)
    }

    /// The square `(df, dr)` away, if it is still on the board
    #[inline]
    #[must_use]
    pub fn offset(self, df: isize, dr: isize) -> Option<Self> {
        let (f, r) = self.coords();
        Position::from_coords(f + df, r + dr)
    }

    /// All 64 squares, rank by rank from the top
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Position(file, rank)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "({}, {})", self.0, self.1);
        }
        write!(
            f,
            "{}{}",
            (self.0 as u8 + b'a') as char,
            BOARD_SIZE - self.1
        )
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = PositionError;

    fn try_from((file, rank): (usize, usize)) -> Result<Self, Self::Error> {
        if file >= BOARD_SIZE {
            return Err(PositionError::FileOutOfBounds { file });
        }
        if rank >= BOARD_SIZE {
            return Err(PositionError::RankOutOfBounds { rank });
        }
        Ok(Position(file, rank))
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PositionError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file = match bytes[0] {
            b @ b'a'..=b'h' => (b - b'a') as usize,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b @ b'1'..=b'8' => BOARD_SIZE - (b - b'0') as usize,
            _ => return Err(invalid()),
        };

        Ok(Position(file, rank))
    }
}
