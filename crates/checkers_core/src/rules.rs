//! Terminal-state detection.
//!
//! Every predicate is evaluated from the perspective of the side about to
//! move. The draw rule is deliberately narrow: it only fires when every piece
//! left on the board is a king and both sides hold the same number of them.

use crate::{board::Position, movegen::has_legal_move, types::Side};

/// The opponent of `side` has no pieces left.
pub fn is_win(pos: &Position, side: Side) -> bool {
    pos.count(side.opponent()) == 0
}

/// `side` has no legal move.
pub fn is_lose(pos: &Position, side: Side) -> bool {
    !has_legal_move(pos, side)
}

pub fn is_draw(pos: &Position, side: Side) -> bool {
    if is_win(pos, side) || is_lose(pos, side) {
        return false;
    }
    let them = side.opponent();
    let my_kings = pos.king_count(side);
    let their_kings = pos.king_count(them);
    my_kings == their_kings && pos.count(side) == my_kings && pos.count(them) == their_kings
}

pub fn is_terminal(pos: &Position, side: Side) -> bool {
    is_win(pos, side) || is_lose(pos, side) || is_draw(pos, side)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WinReason {
    /// The loser has no pieces left.
    OpponentEliminated,
    /// The loser is to move and cannot.
    NoLegalMoves,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { winner: Side, reason: WinReason },
    Drawn,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Classifies the position for the side about to move, checking win before
/// lose before draw.
pub fn status(pos: &Position, side_to_move: Side) -> GameStatus {
    if is_win(pos, side_to_move) {
        GameStatus::Won {
            winner: side_to_move,
            reason: WinReason::OpponentEliminated,
        }
    } else if is_lose(pos, side_to_move) {
        let reason = if pos.count(side_to_move) == 0 {
            WinReason::OpponentEliminated
        } else {
            WinReason::NoLegalMoves
        };
        GameStatus::Won {
            winner: side_to_move.opponent(),
            reason,
        }
    } else if is_draw(pos, side_to_move) {
        GameStatus::Drawn
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
