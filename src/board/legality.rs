//! King-safety filtering.
//!
//! Every candidate is tried on its own clone of the board, so a rejected
//! hypothesis never touches the live state.

use log::trace;

use super::{BoardState, Color, PieceId, Position};

impl BoardState {
    /// The subsequence of `candidates` that does not leave `piece`'s own king attacked.
    ///
    /// Each hypothesis applies the move in full, including removal of the
    /// captured piece (or en-passant victim), before opposing moves are
    /// regenerated against it. If `piece`'s side has no king, nothing is filtered.
    pub fn legal_moves(
        &self,
        piece: PieceId,
        candidates: &[Position],
        en_passant: Option<Position>,
    ) -> Vec<Position> {
        candidates
            .iter()
            .copied()
            .filter(|&to| {
                let mut scratch = self.clone();
                scratch.make_move(piece, to, en_passant);
                let safe = !scratch.king_attacked_after(piece.color(), to);
                if !safe {
                    trace!("rejecting {piece} to {to}: king left attacked");
                }
                safe
            })
            .collect()
    }

    /// Pseudo-legal moves of `piece` passed through [`BoardState::legal_moves`].
    pub fn legal_moves_of(&self, piece: PieceId, en_passant: Option<Position>) -> Vec<Position> {
        let candidates = self.pseudo_legal_moves(piece, en_passant);
        self.legal_moves(piece, &candidates, en_passant)
    }

    /// Whether any piece of color `by` has `square` among its pseudo-legal moves.
    ///
    /// For a square held by the other color this is exactly "attacked"; for an
    /// empty square pawn pushes count and pawn diagonals do not.
    pub(crate) fn is_attacked(&self, square: Position, by: Color) -> bool {
        self.pieces_of_color(by)
            .into_iter()
            .any(|attacker| self.pseudo_legal_moves(attacker, None).contains(&square))
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_position(color)
            .is_some_and(|king| self.is_attacked(king, color.opponent()))
    }

    /// King test on a hypothetical board where the mover just arrived on `landed`.
    fn king_attacked_after(&self, mover: Color, landed: Position) -> bool {
        let Some(king) = self.king_position(mover) else {
            return false;
        };
        self.pieces()
            .filter(|p| p.color() != mover && p.position != landed)
            .any(|attacker| self.pseudo_legal_moves(attacker.id, None).contains(&king))
    }
}
