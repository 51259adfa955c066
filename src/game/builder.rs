//! Fluent builder for constructing game positions.
//!
//! Allows creating positions piece by piece instead of starting from the
//! standard layout.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, PieceId, PieceKind, Position};
//! use chess_rules::game::GameBuilder;
//!
//! let game = GameBuilder::new()
//!     .piece(PieceId::king(Color::White), Position(4, 7))
//!     .piece(PieceId::king(Color::Black), Position(4, 0))
//!     .piece(PieceId::new(Color::White, PieceKind::Pawn, 0), Position(0, 6))
//!     .side_to_move(Color::White)
//!     .build();
//! assert!(!game.is_over());
//! ```

use super::Game;
use crate::board::{BoardState, Color, Layout, PieceId, Position};

/// A fluent builder for constructing `Game` positions.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    pieces: Vec<(PieceId, Position)>,
    side_to_move: Color,
    en_passant_target: Option<Position>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    /// Create a new empty game builder.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            en_passant_target: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        Self::new().layout(&Layout::standard())
    }

    /// Place every piece of `layout`.
    #[must_use]
    pub fn layout(self, layout: &Layout) -> Self {
        layout
            .pieces()
            .iter()
            .fold(self, |builder, &(id, pos)| builder.piece(id, pos))
    }

    /// Place a piece on the board.
    ///
    /// Replaces whatever stood on `square`, and moves `id` if it was already placed.
    /// An off-board `square` is skipped.
    #[must_use]
    pub fn piece(mut self, id: PieceId, square: Position) -> Self {
        if !square.is_on_board() {
            return self;
        }
        self.pieces
            .retain(|&(existing, sq)| sq != square && existing != id);
        self.pieces.push((id, square));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Position) -> Self {
        self.pieces.retain(|&(_, sq)| sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set the en passant target square for the side to move.
    #[must_use]
    pub const fn en_passant(mut self, target: Position) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Clear the en passant target.
    #[must_use]
    pub const fn clear_en_passant(mut self) -> Self {
        self.en_passant_target = None;
        self
    }

    /// Build the game and evaluate whether the side to move can move at all.
    ///
    /// The position is taken as given. If the side not to move is already in
    /// check, its king is among the captures offered to the side to move, and
    /// taking it leaves the loser with no legal move.
    #[must_use]
    pub fn build(self) -> Game {
        let mut board = BoardState::empty();
        for (id, square) in self.pieces {
            board.insert(id, square);
        }
        Game::from_parts(board, self.side_to_move, self.en_passant_target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;
    use crate::game::GameOutcome;

    #[test]
    fn test_starting_position() {
        let built = GameBuilder::starting_position().build();
        let standard = Game::new();
        assert_eq!(built.board(), standard.board());
        assert_eq!(built.turn(), Color::White);
    }

    #[test]
    fn test_piece_replaces_square_and_id() {
        let king = PieceId::king(Color::White);
        let game = GameBuilder::new()
            .piece(king, Position(4, 7))
            .piece(king, Position(5, 7))
            .piece(PieceId::king(Color::Black), Position(4, 0))
            .piece(PieceId::new(Color::Black, PieceKind::Rook, 0), Position(4, 0))
            .build();

        assert_eq!(game.board().len(), 2);
        assert_eq!(game.board().position_of(king), Some(Position(5, 7)));
        assert_eq!(game.board().king_position(Color::Black), None);
    }

    #[test]
    fn test_clear_square() {
        let game = GameBuilder::starting_position()
            .clear(Position(0, 7))
            .build();

        assert!(game.board().piece_at(Position(0, 7)).is_none());
        assert!(game.board().piece_at(Position(1, 7)).is_some());
    }

    #[test]
    fn test_off_board_piece_is_skipped() {
        let game = GameBuilder::new()
            .piece(PieceId::king(Color::White), Position(3, 8))
            .piece(PieceId::king(Color::Black), Position(4, 0))
            .build();

        assert_eq!(game.board().len(), 1);
        assert_eq!(game.board().king_position(Color::White), None);
    }

    #[test]
    fn test_king_left_in_check_can_be_taken() {
        let mut game = GameBuilder::new()
            .piece(PieceId::king(Color::White), Position(4, 7))
            .piece(PieceId::new(Color::White, PieceKind::Rook, 0), Position(4, 4))
            .piece(PieceId::king(Color::Black), Position(4, 0))
            .side_to_move(Color::White)
            .build();

        assert!(game.is_in_check(Color::Black));
        assert!(game
            .legal_moves(PieceId::new(Color::White, PieceKind::Rook, 0))
            .contains(&Position(4, 0)));

        let applied = game.play(Position(4, 4), Position(4, 0)).unwrap();
        assert_eq!(
            applied.captured.map(|c| c.piece),
            Some(PieceId::king(Color::Black))
        );
        assert_eq!(
            applied.outcome,
            GameOutcome::GameOver {
                winner: Color::White,
                checkmate: false,
            }
        );
    }

    #[test]
    fn test_side_to_move_and_en_passant() {
        let game = GameBuilder::starting_position()
            .side_to_move(Color::Black)
            .en_passant(Position(4, 5))
            .build();

        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.en_passant_target(), Some(Position(4, 5)));
    }
}
