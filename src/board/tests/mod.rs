//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece pseudo-legal move generation
//! - `legality.rs` - King-safety filtering and attack queries
//! - `edge_cases.rs` - Game termination and en passant corner cases
//! - `perft.rs` - Leaf counts against known totals
//! - `proptest.rs` - Property-based tests over random playouts


use crate::board::{BoardState, PieceId, Position};

/// Build a board from `(identifier, square name)` pairs.
pub(super) fn board_with(pieces: &[(&str, &str)]) -> BoardState {
    let mut board = BoardState::empty();
    for &(id, square) in pieces {
        board.insert(id_of(id), sq(square));
    }
    board
}

pub(super) fn id_of(token: &str) -> PieceId {
    token.parse().expect("valid piece token")
}

pub(super) fn sq(name: &str) -> Position {
    name.parse().expect("valid square name")
}

pub(super) fn sorted(mut moves: Vec<Position>) -> Vec<Position> {
    moves.sort();
    moves
}
