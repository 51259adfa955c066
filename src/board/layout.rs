//! Starting layouts.
//!
//! A `Layout` lists which piece stands where before the first move. The
//! standard layout is fixed; custom layouts can be parsed from identifier
//! tokens or, with the `serde` feature, loaded from JSON shaped like
//! `{"K0": [4, 7], "k0": [4, 0], ...}`.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, LayoutError, PieceId, PieceKind, Position, BOARD_SIZE};

const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

static STANDARD_LAYOUT: Lazy<Layout> = Lazy::new(|| {
    let mut pieces = Vec::with_capacity(32);
    for color in [Color::Black, Color::White] {
        let mut seen = [0u8; 6];
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            let slot = &mut seen[kind as usize];
            pieces.push((
                PieceId::new(color, kind, *slot),
                Position(file, color.back_rank()),
            ));
            *slot += 1;
        }
        for file in 0..BOARD_SIZE {
            pieces.push((
                PieceId::new(color, PieceKind::Pawn, file as u8),
                Position(file, color.pawn_start_rank()),
            ));
        }
    }
    Layout { pieces }
});

/// An ordered set of piece placements.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        try_from = "BTreeMap<String, (usize, usize)>",
        into = "BTreeMap<String, (usize, usize)>"
    )
)]
pub struct Layout {
    pieces: Vec<(PieceId, Position)>,
}

impl Layout {
    /// The standard chess starting position.
    #[must_use]
    pub fn standard() -> Self {
        STANDARD_LAYOUT.clone()
    }

    /// Parse placements from `(token, (file, rank))` pairs.
    ///
    /// A repeated identifier keeps its last placement. Two different pieces
    /// on one square is an error.
    pub fn from_tokens<'a, I>(entries: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = (&'a str, (usize, usize))>,
    {
        let mut pieces: Vec<(PieceId, Position)> = Vec::new();
        for (token, coords) in entries {
            let id: PieceId = token.parse().map_err(|source| LayoutError::InvalidPiece {
                token: token.to_string(),
                source,
            })?;
            let pos =
                Position::try_from(coords).map_err(|source| LayoutError::InvalidPosition {
                    token: token.to_string(),
                    source,
                })?;

            pieces.retain(|(existing, _)| *existing != id);
            if let Some(&(first, _)) = pieces.iter().find(|(_, p)| *p == pos) {
                return Err(LayoutError::DuplicateSquare {
                    square: pos,
                    first,
                    second: id,
                });
            }
            pieces.push((id, pos));
        }
        Ok(Layout { pieces })
    }

    pub fn pieces(&self) -> &[(PieceId, Position)] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::standard()
    }
}

impl TryFrom<BTreeMap<String, (usize, usize)>> for Layout {
    type Error = LayoutError;

    fn try_from(map: BTreeMap<String, (usize, usize)>) -> Result<Self, Self::Error> {
        Layout::from_tokens(map.iter().map(|(token, &coords)| (token.as_str(), coords)))
    }
}

impl From<Layout> for BTreeMap<String, (usize, usize)> {
    fn from(layout: Layout) -> Self {
        layout
            .pieces
            .into_iter()
            .map(|(id, pos)| (id.to_string(), (pos.file(), pos.rank())))
            .collect()
    }
}
