//! Error types for the rules engine
//!
//! Every failure is local: the position involved is left untouched and the
//! caller decides what to do next.

use std::fmt;

use thiserror::Error;

use crate::types::{Move, Side, Square};

/// Why a move was rejected by `Position::apply`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// No piece stands on the origin square.
    EmptyOrigin,
    /// The origin piece belongs to the other side.
    WrongSide { owner: Side },
    /// The destination is not among the piece's legal destinations.
    IllegalDestination,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMoveReason::EmptyOrigin => f.write_str("no piece on the origin square"),
            InvalidMoveReason::WrongSide { owner } => {
                write!(f, "origin piece belongs to {owner}")
            }
            InvalidMoveReason::IllegalDestination => f.write_str("destination is not legal"),
        }
    }
}

/// Errors that can occur in the rules engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckersError {
    /// Coordinates outside the 8x8 grid
    #[error("square ({row}, {col}) is outside the 8x8 board")]
    OutOfRange { row: i8, col: i8 },

    /// Move rejected for the stated side
    #[error("invalid move {mv} for {side}: {reason}")]
    InvalidMove {
        mv: Move,
        side: Side,
        reason: InvalidMoveReason,
    },

    /// Piece placed on a light square
    #[error("square {square} is not a playable dark square")]
    UnplayableSquare { square: Square },

    #[error("square {square} is already occupied")]
    SquareOccupied { square: Square },

    #[error("{side} would own more than {max} pieces")]
    TooManyPieces { side: Side, max: usize },

    /// Malformed text diagram
    #[error("invalid diagram: {message}")]
    InvalidDiagram { message: String },
}

/// Result type alias for rules engine operations
pub type CheckersResult<T> = Result<T, CheckersError>;
