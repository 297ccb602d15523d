use crate::{board::Position, types::*};

/// Column deltas, left (decreasing column) first.
const LATERAL: [i8; 2] = [-1, 1];

/// All pieces of `side` in row-major order.
pub fn enumerate_pieces(pos: &Position, side: Side) -> Vec<Piece> {
    pos.pieces().filter(|p| p.side == side).collect()
}

/// Generate all legal moves for `side`, returning a freshly allocated vector.
pub fn legal_moves(pos: &Position, side: Side) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    legal_moves_into(pos, side, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
/// Moves are grouped by origin square in row-major order.
pub fn legal_moves_into(pos: &Position, side: Side, out: &mut Vec<Move>) {
    out.clear();
    for pc in pos.pieces().filter(|p| p.side == side) {
        piece_moves_into(pos, pc, out);
    }
}

/// Destinations reachable by the piece on `sq`; empty when the square is empty.
pub fn legal_destinations(pos: &Position, sq: Square) -> Vec<Square> {
    let mut moves = Vec::with_capacity(8);
    if let Some(pc) = pos.piece_at(sq) {
        piece_moves_into(pos, pc, &mut moves);
    }
    moves.into_iter().map(|mv| mv.to).collect()
}

/// Early-exit check used by terminal detection.
pub fn has_legal_move(pos: &Position, side: Side) -> bool {
    let mut buf = Vec::with_capacity(8);
    pos.pieces().filter(|p| p.side == side).any(|pc| {
        buf.clear();
        piece_moves_into(pos, pc, &mut buf);
        !buf.is_empty()
    })
}

/// Appends the moves of a single piece: forward steps, forward jumps, then
/// for kings backward steps and backward jumps.
pub(crate) fn piece_moves_into(pos: &Position, pc: Piece, out: &mut Vec<Move>) {
    let fwd = pc.side.forward();
    gen_direction(pos, pc, fwd, out);
    if pc.is_king {
        gen_direction(pos, pc, -fwd, out);
    }
}

fn gen_direction(pos: &Position, pc: Piece, dr: i8, out: &mut Vec<Move>) {
    let from = pc.square;

    for dc in LATERAL {
        if let Some(to) = from.offset(dr, dc) {
            if pos.piece_at(to).is_none() {
                out.push(Move::new(from, to));
            }
        }
    }

    for dc in LATERAL {
        let over = match from.offset(dr, dc) {
            Some(s) => s,
            None => continue,
        };
        let land = match from.offset(2 * dr, 2 * dc) {
            Some(s) => s,
            None => continue,
        };
        let jumps_enemy = pos.piece_at(over).is_some_and(|p| p.side != pc.side);
        if jumps_enemy && pos.piece_at(land).is_none() {
            out.push(Move::new(from, land));
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
