//! Property tests for the rules engine over random positions.

use checkers_core::{Piece, Position, Side, Square, is_draw, is_lose, is_win, legal_moves};
use proptest::prelude::*;

fn arb_position() -> impl Strategy<Value = Position> {
    prop::collection::vec((0usize..32, any::<bool>(), any::<bool>()), 0..20).prop_map(|slots| {
        let squares: Vec<Square> = Square::playable().collect();
        slots
            .into_iter()
            .fold(Position::empty(), |pos, (idx, dark, king)| {
                let side = if dark { Side::Dark } else { Side::Light };
                pos.with_piece(squares[idx], side, king).unwrap_or(pos)
            })
    })
}

fn arb_side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Dark), Just(Side::Light)]
}

proptest! {
    #[test]
    fn successors_keep_or_drop_one_piece(pos in arb_position(), side in arb_side()) {
        let before = pos.clone();
        let total = pos.pieces().count();

        for mv in legal_moves(&pos, side) {
            let next = pos.successor(mv);
            let expected = if mv.is_jump() { total - 1 } else { total };
            prop_assert_eq!(next.pieces().count(), expected);
            prop_assert_eq!(next.count(side), pos.count(side));
            prop_assert!(next.piece_at(mv.from).is_none());
            prop_assert_eq!(next.piece_at(mv.to).map(|p| p.side), Some(side));
        }
        prop_assert_eq!(pos, before);
    }

    #[test]
    fn moves_land_on_playable_squares(pos in arb_position(), side in arb_side()) {
        for mv in legal_moves(&pos, side) {
            prop_assert!(mv.is_simple() || mv.is_jump());
            prop_assert!(mv.to.is_playable());
            prop_assert!(pos.piece_at(mv.to).is_none());
            let next = pos.successor(mv);
            for pc in next.pieces() {
                prop_assert_eq!(next.piece_at(pc.square), Some(pc));
            }
        }
    }

    #[test]
    fn kings_stay_kings(pos in arb_position(), side in arb_side()) {
        let kings: Vec<Piece> = pos.pieces().filter(|p| p.side == side && p.is_king).collect();
        for mv in legal_moves(&pos, side) {
            let next = pos.successor(mv);
            if kings.iter().any(|k| k.square == mv.from) {
                prop_assert!(next.piece_at(mv.to).is_some_and(|p| p.is_king));
            }
            prop_assert!(next.king_count(side) >= pos.king_count(side));
        }
    }

    #[test]
    fn validated_apply_agrees_with_successor(pos in arb_position(), side in arb_side()) {
        for mv in legal_moves(&pos, side) {
            prop_assert_eq!(pos.apply(side, mv), Ok(pos.successor(mv)));
            prop_assert!(pos.apply(side.opponent(), mv).is_err());
        }
    }

    #[test]
    fn terminal_predicates_are_consistent(pos in arb_position(), side in arb_side()) {
        if is_draw(&pos, side) {
            prop_assert!(!is_win(&pos, side));
            prop_assert!(!is_lose(&pos, side));
            prop_assert!(pos.pieces().all(|p| p.is_king));
        }
        prop_assert_eq!(is_lose(&pos, side), legal_moves(&pos, side).is_empty());
    }
}
