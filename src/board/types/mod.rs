//! Core board types.
//!
//! - `Color` and `PieceKind` - piece colors and kinds
//! - `PieceId` - stable per-piece identifier
//! - `Position` - (file, rank) board coordinate

mod piece;
mod piece_id;
mod position;

pub use piece::{Color, PieceKind};
pub use piece_id::PieceId;
pub use position::{Position, BOARD_SIZE};
