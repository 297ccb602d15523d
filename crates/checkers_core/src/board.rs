use std::fmt;

use crate::error::{CheckersError, CheckersResult, InvalidMoveReason};
use crate::movegen::piece_moves_into;
use crate::types::*;

/// Snapshot of piece placement. Transitions never mutate a position; they
/// produce a fresh copy (see [`Position::successor`] and [`Position::apply`]).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    board: [Option<Piece>; 64],
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub fn empty() -> Self {
        Position { board: [None; 64] }
    }

    /// Standard 24-piece setup: Dark on rows 0-2, Light on rows 5-7.
    pub fn startpos() -> Self {
        let mut p = Position::empty();
        for square in Square::playable() {
            let side = match square.row() {
                0..=2 => Side::Dark,
                5..=7 => Side::Light,
                _ => continue,
            };
            p.board[square.index()] = Some(Piece {
                square,
                side,
                is_king: false,
            });
        }
        p
    }

    /// Returns a copy with one more piece, rejecting placements that would
    /// break the board invariants.
    pub fn with_piece(&self, square: Square, side: Side, is_king: bool) -> CheckersResult<Self> {
        if !square.is_playable() {
            return Err(CheckersError::UnplayableSquare { square });
        }
        if self.piece_at(square).is_some() {
            return Err(CheckersError::SquareOccupied { square });
        }
        if self.count(side) >= MAX_PIECES_PER_SIDE {
            return Err(CheckersError::TooManyPieces {
                side,
                max: MAX_PIECES_PER_SIDE,
            });
        }
        let mut next = self.clone();
        next.board[square.index()] = Some(Piece {
            square,
            side,
            is_king,
        });
        Ok(next)
    }

    /// Parses a text diagram: eight rows (row 0 first) of eight cells.
    /// `.` is empty, `d`/`D` a Dark man/king, `l`/`L` a Light man/king.
    /// Whitespace inside a row is ignored and blank lines are skipped.
    pub fn from_diagram(diagram: &str) -> CheckersResult<Self> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|cells| !cells.is_empty())
            .collect();
        if rows.len() != 8 {
            return Err(CheckersError::InvalidDiagram {
                message: format!("expected 8 rows, found {}", rows.len()),
            });
        }

        let mut pos = Position::empty();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != 8 {
                return Err(CheckersError::InvalidDiagram {
                    message: format!("row {row} has {} cells, expected 8", cells.len()),
                });
            }
            for (col, &ch) in cells.iter().enumerate() {
                let (side, is_king) = match ch {
                    '.' => continue,
                    'd' => (Side::Dark, false),
                    'D' => (Side::Dark, true),
                    'l' => (Side::Light, false),
                    'L' => (Side::Light, true),
                    other => {
                        return Err(CheckersError::InvalidDiagram {
                            message: format!("unknown glyph '{other}' at ({row}, {col})"),
                        });
                    }
                };
                let square = Square::new(row as i8, col as i8)?;
                pos = pos.with_piece(square, side, is_king)?;
            }
        }
        Ok(pos)
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.index()]
    }

    /// All pieces in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.board.iter().filter_map(|slot| *slot)
    }

    pub fn count(&self, side: Side) -> usize {
        self.pieces().filter(|p| p.side == side).count()
    }

    pub fn king_count(&self, side: Side) -> usize {
        self.pieces().filter(|p| p.side == side && p.is_king).count()
    }

    /// Whether playing `mv` crowns the moving piece.
    pub fn promotes(&self, mv: Move) -> bool {
        match self.piece_at(mv.from) {
            Some(pc) => !pc.is_king && mv.to.row() == pc.side.promotion_row(),
            None => false,
        }
    }

    /// Copy of this position with `mv` played. Trusts the caller: the move
    /// must come from `legal_moves` for the moving piece's side.
    pub fn successor(&self, mv: Move) -> Position {
        let mut next = self.clone();

        if let Some(captured) = mv.captured_square() {
            next.board[captured.index()] = None;
        }

        let moved = next.board[mv.from.index()].take();
        debug_assert!(moved.is_some(), "no piece on from-square {}", mv.from);
        if let Some(mut pc) = moved {
            pc.square = mv.to;
            if mv.to.row() == pc.side.promotion_row() {
                pc.is_king = true;
            }
            next.board[mv.to.index()] = Some(pc);
        }
        next
    }

    /// Validating form of [`Position::successor`]: `side` must own the origin
    /// piece and `mv.to` must be one of its legal destinations.
    pub fn apply(&self, side: Side, mv: Move) -> CheckersResult<Position> {
        let invalid = |reason| CheckersError::InvalidMove { mv, side, reason };

        let pc = self
            .piece_at(mv.from)
            .ok_or_else(|| invalid(InvalidMoveReason::EmptyOrigin))?;
        if pc.side != side {
            return Err(invalid(InvalidMoveReason::WrongSide { owner: pc.side }));
        }

        let mut moves = Vec::with_capacity(8);
        piece_moves_into(self, pc, &mut moves);
        if !moves.contains(&mv) {
            return Err(invalid(InvalidMoveReason::IllegalDestination));
        }
        Ok(self.successor(mv))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            for col in 0..8 {
                let glyph = self.board[row * 8 + col].map_or('.', Piece::glyph);
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
