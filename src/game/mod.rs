//! Turn order, move application and game termination.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Position};
//! use chess_rules::game::Game;
//!
//! let mut game = Game::new();
//! let applied = game.play(Position(4, 6), Position(4, 4)).unwrap();
//! assert_eq!(applied.turn, Color::Black);
//! assert_eq!(game.en_passant_target(), Some(Position(4, 5)));
//! ```

mod builder;
mod controller;
mod events;
mod perft;

use log::{debug, info};

use crate::board::{BoardState, Color, Layout, MoveError, PieceId, Position};

pub use builder::GameBuilder;
pub use controller::Selection;
pub use events::{GameOutcome, MoveApplied, SelectionEvent};

/// One game session: the board plus whose turn it is.
#[derive(Clone, Debug)]
pub struct Game {
    board: BoardState,
    turn: Color,
    en_passant: Option<Position>,
    outcome: GameOutcome,
    selection: Selection,
}

impl Game {
    /// Standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Game::from_parts(BoardState::standard(), Color::White, None)
    }

    #[must_use]
    pub fn from_layout(layout: &Layout, turn: Color) -> Self {
        Game::from_parts(BoardState::from_layout(layout), turn, None)
    }

    pub(crate) fn from_parts(board: BoardState, turn: Color, en_passant: Option<Position>) -> Self {
        let mut game = Game {
            board,
            turn,
            en_passant,
            outcome: GameOutcome::InProgress,
            selection: Selection::AwaitingSelection,
        };
        game.refresh_outcome();
        game
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn en_passant_target(&self) -> Option<Position> {
        self.en_passant
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Legal destinations of `piece`. The en-passant target only applies to
    /// the side to move.
    pub fn legal_moves(&self, piece: PieceId) -> Vec<Position> {
        let en_passant = if piece.color() == self.turn {
            self.en_passant
        } else {
            None
        };
        self.board.legal_moves_of(piece, en_passant)
    }

    /// Every piece of `color` that can move, with its legal destinations.
    pub fn legal_moves_for(&self, color: Color) -> Vec<(PieceId, Vec<Position>)> {
        self.board
            .pieces_of_color(color)
            .into_iter()
            .map(|piece| (piece, self.legal_moves(piece)))
            .filter(|(_, moves)| !moves.is_empty())
            .collect()
    }

    pub fn has_legal_move(&self, color: Color) -> bool {
        self.board
            .pieces_of_color(color)
            .into_iter()
            .any(|piece| !self.legal_moves(piece).is_empty())
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    /// Validate and apply the move of the piece on `from` to `to`.
    pub fn play(&mut self, from: Position, to: Position) -> Result<MoveApplied, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::NoPieceAt { square: from })?;
        if piece.color() != self.turn {
            return Err(MoveError::NotYourTurn { piece });
        }
        if !self.legal_moves(piece).contains(&to) {
            return Err(MoveError::IllegalDestination { piece, to });
        }
        Ok(self.apply(piece, from, to))
    }

    /// Apply an already validated move and hand the turn over.
    fn apply(&mut self, piece: PieceId, from: Position, to: Position) -> MoveApplied {
        let en_passant = self.board.en_passant_victim(piece, to, self.en_passant).is_some();
        let captured = self.board.make_move(piece, to, self.en_passant);

        self.en_passant = BoardState::double_step_target(piece, from, to);
        self.turn = self.turn.opponent();
        self.selection = Selection::AwaitingSelection;
        self.refresh_outcome();

        match captured {
            Some(capture) => debug!(
                "{piece} {from}->{to} captures {} on {}{}",
                capture.piece,
                capture.square,
                if en_passant { " en passant" } else { "" }
            ),
            None => debug!("{piece} {from}->{to}"),
        }

        MoveApplied {
            piece,
            from,
            to,
            captured,
            en_passant,
            turn: self.turn,
            en_passant_target: self.en_passant,
            outcome: self.outcome,
        }
    }

    fn refresh_outcome(&mut self) {
        if self.has_legal_move(self.turn) {
            self.outcome = GameOutcome::InProgress;
            return;
        }
        let checkmate = self.board.is_in_check(self.turn);
        let winner = self.turn.opponent();
        self.outcome = GameOutcome::GameOver { winner, checkmate };
        self.selection = Selection::GameOver;
        info!(
            "{} has no legal moves ({}), {winner} wins",
            self.turn,
            if checkmate { "checkmate" } else { "not in check" }
        );
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
