pub mod board;
pub mod game;

pub use board::{BoardState, Color, Layout, PieceId, PieceKind, Position};
pub use game::{Game, GameBuilder, GameOutcome, MoveApplied, SelectionEvent};
