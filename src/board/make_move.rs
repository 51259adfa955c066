#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{BoardState, PieceId, Position};

/// A piece taken off the board by a move, and the square it stood on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Capture {
    pub piece: PieceId,
    pub square: Position,
}

impl BoardState {
    /// Relocate `piece` to `to`, removing whatever it captures.
    ///
    /// An en-passant capture removes the pawn behind `to`; any other move
    /// removes the occupant of `to`. Legality is not checked.
    pub fn make_move(
        &mut self,
        piece: PieceId,
        to: Position,
        en_passant: Option<Position>,
    ) -> Option<Capture> {
        let victim_square = self
            .en_passant_victim(piece, to, en_passant)
            .unwrap_or(to);

        let captured = self
            .piece_at(victim_square)
            .filter(|&occupant| occupant != piece)
            .map(|occupant| {
                self.remove(occupant);
                Capture {
                    piece: occupant,
                    square: victim_square,
                }
            });

        self.move_piece(piece, to);
        captured
    }
}
