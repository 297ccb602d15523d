use crate::{board::Position, movegen::legal_moves_into, types::Move, types::Side};

/// Pure perft node count.
/// Counts the leaves of the successor tree `depth` plies below `pos`, with
/// `side` moving first and sides alternating. A side without moves ends its
/// branch early and contributes no leaves.
pub fn perft(pos: &Position, side: Side, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(pos: &Position, side: Side, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 0;
        };

        legal_moves_into(pos, side, buf);

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let next = pos.successor(mv);
            nodes += inner(&next, side.opponent(), depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(32); depth as usize];
    inner(pos, side, depth, &mut layers[..])
}
