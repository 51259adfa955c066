//! Error types for board setup and move application.

use std::error::Error;
use std::fmt;

use super::{PieceId, Position};

/// Error type for board coordinate failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// Invalid square name
    InvalidNotation { notation: String },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            PositionError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            PositionError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl Error for PositionError {}

/// Error type for piece identifier parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceIdError {
    /// Empty identifier
    Empty,
    /// First character is not one of p, n, b, r, q, k (either case)
    UnknownPieceType { token: char },
    /// Index after the type letter is missing or not a small decimal number
    InvalidIndex { token: String },
}

impl fmt::Display for PieceIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceIdError::Empty => write!(f, "Empty piece identifier"),
            PieceIdError::UnknownPieceType { token } => {
                write!(f, "Unknown piece type '{token}'")
            }
            PieceIdError::InvalidIndex { token } => {
                write!(f, "Invalid piece index in '{token}'")
            }
        }
    }
}

impl Error for PieceIdError {}

/// Error type for starting layout failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A piece identifier could not be parsed
    InvalidPiece { token: String, source: PieceIdError },
    /// A piece was placed off the board
    InvalidPosition { token: String, source: PositionError },
    /// Two pieces were placed on the same square
    DuplicateSquare {
        square: Position,
        first: PieceId,
        second: PieceId,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::InvalidPiece { token, source } => {
                write!(f, "Invalid piece '{token}': {source}")
            }
            LayoutError::InvalidPosition { token, source } => {
                write!(f, "Invalid position for '{token}': {source}")
            }
            LayoutError::DuplicateSquare {
                square,
                first,
                second,
            } => {
                write!(f, "Pieces {first} and {second} both placed on {square}")
            }
        }
    }
}

impl Error for LayoutError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LayoutError::InvalidPiece { source, .. } => Some(source),
            LayoutError::InvalidPosition { source, .. } => Some(source),
            LayoutError::DuplicateSquare { .. } => None,
        }
    }
}

/// Error type for rejected moves on the direct `Game::play` API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game has already ended
    GameOver,
    /// No piece stands on the origin square
    NoPieceAt { square: Position },
    /// The piece belongs to the side not on move
    NotYourTurn { piece: PieceId },
    /// The destination is not among the piece's legal moves
    IllegalDestination { piece: PieceId, to: Position },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "Game is over"),
            MoveError::NoPieceAt { square } => write!(f, "No piece on {square}"),
            MoveError::NotYourTurn { piece } => {
                write!(f, "Piece {piece} cannot move on the opponent's turn")
            }
            MoveError::IllegalDestination { piece, to } => {
                write!(f, "Illegal move for {piece} to {to}")
            }
        }
    }
}

impl Error for MoveError {}
