//! Stable piece identifiers.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, PieceKind};
use crate::board::error::PieceIdError;

/// Identifies one piece for its whole life on the board.
///
/// The token form is a type letter followed by a disambiguating index:
/// uppercase letters are White, lowercase are Black (`"P4"`, `"n1"`).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct PieceId {
    color: Color,
    kind: PieceKind,
    index: u8,
}

impl PieceId {
    #[must_use]
    pub const fn new(color: Color, kind: PieceKind, index: u8) -> Self {
        PieceId { color, kind, index }
    }

    /// The identifier every standard layout gives the king of `color`
    #[must_use]
    pub const fn king(color: Color) -> Self {
        PieceId::new(color, PieceKind::King, 0)
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    #[inline]
    #[must_use]
    pub fn is_white(self) -> bool {
        self.color.is_white()
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.to_token_char(self.color), self.index)
    }
}

impl FromStr for PieceId {
    type Err = PieceIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let type_char = chars.next().ok_or(PieceIdError::Empty)?;
        let kind = PieceKind::from_char(type_char)
            .ok_or(PieceIdError::UnknownPieceType { token: type_char })?;
        let color = if type_char.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        let rest = chars.as_str();
        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PieceIdError::InvalidIndex {
                token: s.to_string(),
            });
        }
        let index = rest.parse::<u8>().map_err(|_| PieceIdError::InvalidIndex {
            token: s.to_string(),
        })?;

        Ok(PieceId::new(color, kind, index))
    }
}

impl TryFrom<String> for PieceId {
    type Error = PieceIdError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        token.parse()
    }
}

impl From<PieceId> for String {
    fn from(id: PieceId) -> Self {
        id.to_string()
    }
}
