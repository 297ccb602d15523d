use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CheckersError, CheckersResult};

pub const BOARD_SIZE: i8 = 8;

/// Maximum number of pieces a side can ever own.
pub const MAX_PIECES_PER_SIDE: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Starts on rows 0-2 and advances toward row 7.
    Dark,
    /// Starts on rows 5-7 and advances toward row 0.
    Light,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Dark, Side::Light];

    pub fn opponent(self) -> Side {
        match self {
            Side::Dark => Side::Light,
            Side::Light => Side::Dark,
        }
    }

    /// Row delta of a forward step.
    pub fn forward(self) -> i8 {
        match self {
            Side::Dark => 1,
            Side::Light => -1,
        }
    }

    /// Row on which a man of this side is crowned.
    pub fn promotion_row(self) -> u8 {
        match self {
            Side::Dark => 7,
            Side::Light => 0,
        }
    }

    /// Rows advanced from this side's own starting edge.
    pub fn advancement(self, row: u8) -> u8 {
        match self {
            Side::Dark => row,
            Side::Light => 7 - row,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Dark => f.write_str("Dark"),
            Side::Light => f.write_str("Light"),
        }
    }
}

/// A square on the 8x8 grid. Always in range once constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(i8, i8)", into = "(i8, i8)")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: i8, col: i8) -> CheckersResult<Square> {
        if (0..BOARD_SIZE).contains(&row) && (0..BOARD_SIZE).contains(&col) {
            Ok(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(CheckersError::OutOfRange { row, col })
        }
    }

    /// Square at slot `idx` of a row-major 64-slot board.
    pub(crate) fn from_index(idx: usize) -> Square {
        debug_assert!(idx < 64);
        Square {
            row: (idx / 8) as u8,
            col: (idx % 8) as u8,
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Dark squares, the only ones pieces ever stand on.
    pub fn is_playable(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// The square `(dr, dc)` away, or `None` when that leaves the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        Square::new(self.row as i8 + dr, self.col as i8 + dc).ok()
    }

    /// All 32 playable squares in row-major order.
    pub fn playable() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index).filter(|s| s.is_playable())
    }
}

impl TryFrom<(i8, i8)> for Square {
    type Error = CheckersError;

    fn try_from((row, col): (i8, i8)) -> CheckersResult<Square> {
        Square::new(row, col)
    }
}

impl From<Square> for (i8, i8) {
    fn from(sq: Square) -> (i8, i8) {
        (sq.row as i8, sq.col as i8)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub square: Square,
    pub side: Side,
    pub is_king: bool,
}

impl Piece {
    /// Material weight used by evaluation: kings count one and a half men.
    pub fn value(self) -> f64 {
        if self.is_king { 1.5 } else { 1.0 }
    }

    pub fn glyph(self) -> char {
        match (self.side, self.is_king) {
            (Side::Dark, false) => 'd',
            (Side::Dark, true) => 'D',
            (Side::Light, false) => 'l',
            (Side::Light, true) => 'L',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    fn delta(self) -> (i8, i8) {
        (
            self.to.row as i8 - self.from.row as i8,
            self.to.col as i8 - self.from.col as i8,
        )
    }

    pub fn is_simple(self) -> bool {
        let (dr, dc) = self.delta();
        dr.abs() == 1 && dc.abs() == 1
    }

    pub fn is_jump(self) -> bool {
        let (dr, dc) = self.delta();
        dr.abs() == 2 && dc.abs() == 2
    }

    /// Midpoint square removed by a jump.
    pub fn captured_square(self) -> Option<Square> {
        if !self.is_jump() {
            return None;
        }
        Some(Square {
            row: (self.from.row + self.to.row) / 2,
            col: (self.from.col + self.to.col) / 2,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
