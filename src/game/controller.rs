//! Square-selection state machine.
//!
//! The caller feeds one selected square per input event. A second selection
//! on one of the highlighted destinations applies the move; anything else
//! is treated as a fresh selection attempt, so an illegal destination never
//! produces an error.

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Game, SelectionEvent};
use crate::board::{PieceId, Position};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Selection {
    AwaitingSelection,
    PieceSelected {
        piece: PieceId,
        from: Position,
        destinations: Vec<Position>,
    },
    GameOver,
}

impl Game {
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Handle one selected square.
    pub fn select(&mut self, square: Position) -> SelectionEvent {
        match &self.selection {
            Selection::GameOver => return SelectionEvent::Ignored,
            Selection::PieceSelected {
                piece,
                from,
                destinations,
            } if destinations.contains(&square) => {
                let (piece, from) = (*piece, *from);
                return SelectionEvent::Moved(self.apply(piece, from, square));
            }
            _ => {}
        }
        self.select_piece(square)
    }

    fn select_piece(&mut self, square: Position) -> SelectionEvent {
        let candidate = self
            .board
            .piece_at(square)
            .filter(|piece| piece.color() == self.turn)
            .map(|piece| (piece, self.legal_moves(piece)))
            .filter(|(_, destinations)| !destinations.is_empty());

        match candidate {
            Some((piece, destinations)) => {
                debug!("selected {piece} on {square}: {} moves", destinations.len());
                self.selection = Selection::PieceSelected {
                    piece,
                    from: square,
                    destinations: destinations.clone(),
                };
                SelectionEvent::Selected {
                    piece,
                    from: square,
                    destinations,
                }
            }
            None => {
                self.selection = Selection::AwaitingSelection;
                SelectionEvent::Cleared { square }
            }
        }
    }
}
