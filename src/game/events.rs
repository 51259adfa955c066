//! Plain-data notifications for whatever draws the board.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Capture, Color, PieceId, Position};

/// Whether the game is still running, and who won if not.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameOutcome {
    InProgress,
    /// The side to move had no legal move; `winner` is its opponent.
    /// `checkmate` is false when that side was not in check.
    GameOver { winner: Color, checkmate: bool },
}

impl GameOutcome {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameOutcome::GameOver { .. })
    }

    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::InProgress => None,
            GameOutcome::GameOver { winner, .. } => Some(winner),
        }
    }
}

/// Everything that changed when a move was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveApplied {
    pub piece: PieceId,
    pub from: Position,
    pub to: Position,
    pub captured: Option<Capture>,
    /// The capture (if any) was en passant
    pub en_passant: bool,
    /// Side to move after this move
    pub turn: Color,
    /// En-passant target for the reply, if the move was a double pawn step
    pub en_passant_target: Option<Position>,
    pub outcome: GameOutcome,
}

impl MoveApplied {
    /// Distinguishes the "capture" sound from the plain "move" sound
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_over()
    }
}

/// Result of one `Game::select` call.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SelectionEvent {
    /// A piece of the side to move was picked; highlight its destinations
    Selected {
        piece: PieceId,
        from: Position,
        destinations: Vec<Position>,
    },
    /// The previously selected piece moved
    Moved(MoveApplied),
    /// Nothing actionable on the square; any selection was dropped
    Cleared { square: Position },
    /// The game is over and input is no longer accepted
    Ignored,
}
