//! Five-term heuristic position evaluation.

use checkers_core::{legal_moves_into, Piece, Position, Side, Square};

const MATERIAL_WEIGHT: f64 = 10.0;
const ADVANCE_WEIGHT: f64 = 0.5;
const KING_WEIGHT: f64 = 5.0;
const MOBILITY_WEIGHT: f64 = 0.5;
const CENTER_WEIGHT: f64 = 2.0;

/// Central squares as (row, col).
const CENTER: [(u8, u8); 4] = [(3, 3), (3, 4), (4, 3), (4, 4)];

/// Individual terms of an evaluation, each already weighted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EvalBreakdown {
    pub material: f64,
    pub positional: f64,
    pub kings: f64,
    pub mobility: f64,
    pub center: f64,
}

impl EvalBreakdown {
    pub fn total(&self) -> f64 {
        self.material + self.positional + self.kings + self.mobility + self.center
    }
}

fn in_center(sq: Square) -> bool {
    CENTER.contains(&(sq.row(), sq.col()))
}

/// Evaluates the position from `side`'s perspective.
///
/// Returns a score where:
/// - Positive = good for `side`
/// - Negative = good for the opponent
/// - 0 = balanced position
///
/// The magnitude stays far below the search's win score of 1000.
pub fn evaluate(pos: &Position, side: Side) -> f64 {
    evaluate_breakdown(pos, side).total()
}

/// Same as [`evaluate`], term by term.
pub fn evaluate_breakdown(pos: &Position, side: Side) -> EvalBreakdown {
    let mut e = EvalBreakdown::default();

    let mut my_kings = 0i32;
    let mut their_kings = 0i32;
    for pc in pos.pieces() {
        let sign = if pc.side == side { 1.0 } else { -1.0 };
        e.material += sign * pc.value() * MATERIAL_WEIGHT;
        if pc.is_king {
            if pc.side == side {
                my_kings += 1;
            } else {
                their_kings += 1;
            }
        } else {
            e.positional += sign * advancement(pc) * ADVANCE_WEIGHT;
        }
        if in_center(pc.square) {
            e.center += sign * CENTER_WEIGHT;
        }
    }
    e.kings = (my_kings - their_kings) as f64 * KING_WEIGHT;

    let mut buf = Vec::with_capacity(32);
    legal_moves_into(pos, side, &mut buf);
    let mine = buf.len() as i32;
    legal_moves_into(pos, side.opponent(), &mut buf);
    let theirs = buf.len() as i32;
    e.mobility = (mine - theirs) as f64 * MOBILITY_WEIGHT;

    e
}

fn advancement(pc: Piece) -> f64 {
    pc.side.advancement(pc.square.row()) as f64
}
