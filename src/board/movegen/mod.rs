//! Pseudo-legal move generation.
//!
//! Each generator emits raw signed candidates for one piece; clipping to the
//! board is a single shared pass in [`clip_to_board`]. King safety is not
//! considered here (see `legality`).

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{BoardState, PieceId, PieceKind, Position};

use sliders::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};

/// Raw destination coordinates, possibly off the board.
pub(crate) type Candidates = Vec<(isize, isize)>;

fn clip_to_board(candidates: Candidates) -> Vec<Position> {
    candidates
        .into_iter()
        .filter_map(|(file, rank)| Position::from_coords(file, rank))
        .collect()
}

impl BoardState {
    /// Destinations reachable by `piece` under its movement pattern.
    ///
    /// `en_passant` is the square a pawn may capture into this turn, if any.
    /// Returns an empty list when `piece` is not on the board.
    pub fn pseudo_legal_moves(&self, piece: PieceId, en_passant: Option<Position>) -> Vec<Position> {
        let Some(from) = self.position_of(piece) else {
            return Vec::new();
        };
        let color = piece.color();

        let candidates = match piece.kind() {
            PieceKind::Pawn => self.pawn_candidates(from, color, en_passant),
            PieceKind::Knight => self.knight_candidates(from, color),
            PieceKind::Bishop => self.sliding_candidates(from, color, &BISHOP_DIRECTIONS),
            PieceKind::Rook => self.sliding_candidates(from, color, &ROOK_DIRECTIONS),
            PieceKind::Queen => self.sliding_candidates(from, color, &QUEEN_DIRECTIONS),
            PieceKind::King => self.king_candidates(from, color),
        };

        clip_to_board(candidates)
    }
}
