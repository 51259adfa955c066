//! Board representation and move rules.
//!
//! `BoardState` maps piece identifiers to positions. Move generation,
//! king-safety filtering and move application are implemented on it in the
//! submodules; none of them know about turns or selection (see `game`).
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardState, PieceId, Position};
//!
//! let board = BoardState::standard();
//! let knight: PieceId = "N0".parse().unwrap();
//! let moves = board.legal_moves_of(knight, None);
//! assert_eq!(moves.len(), 2);
//! assert!(moves.contains(&Position(2, 5)));
//! ```

mod error;
mod layout;
mod legality;
mod make_move;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{LayoutError, MoveError, PieceIdError, PositionError};
pub use layout::Layout;
pub use make_move::Capture;
pub use state::{BoardState, PieceRecord};
pub use types::{Color, PieceId, PieceKind, Position, BOARD_SIZE};
