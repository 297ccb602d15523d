use super::*;
use checkers_core::{legal_moves, Square};
use proptest::prelude::*;

fn sq(row: i8, col: i8) -> Square {
    Square::new(row, col).unwrap()
}

fn mv(from: (i8, i8), to: (i8, i8)) -> Move {
    Move::new(sq(from.0, from.1), sq(to.0, to.1))
}

fn diagram(text: &str) -> Position {
    Position::from_diagram(text).unwrap()
}

/// Plain minimax without pruning, sharing the terminal and leaf rules of
/// the real search.
fn full_minimax(pos: &Position, depth: u8, to_move: Side, root: Side) -> f64 {
    match status(pos, to_move) {
        GameStatus::Won { winner, .. } => {
            return if winner == root { WIN_SCORE } else { -WIN_SCORE };
        }
        GameStatus::Drawn => return DRAW_SCORE,
        GameStatus::InProgress => {}
    }
    if depth == 0 {
        return evaluate(pos, root);
    }
    let scores = legal_moves(pos, to_move)
        .into_iter()
        .map(|m| full_minimax(&pos.successor(m), depth - 1, to_move.opponent(), root));
    if to_move == root {
        scores.fold(f64::NEG_INFINITY, f64::max)
    } else {
        scores.fold(f64::INFINITY, f64::min)
    }
}

/// Root expansion of `full_minimax` with first-best tie breaking.
fn full_best_move(pos: &Position, side: Side, depth: u8) -> Option<(Move, f64)> {
    let mut best: Option<(Move, f64)> = None;
    for m in legal_moves(pos, side) {
        let score = full_minimax(&pos.successor(m), depth.saturating_sub(1), side.opponent(), side);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((m, score));
        }
    }
    best
}

#[test]
fn test_get_best_move_start_position() {
    let pos = Position::startpos();
    let result = get_best_move(&pos, Side::Dark, 3);
    let best = result.best_move.expect("start position has moves");
    assert!(legal_moves(&pos, Side::Dark).contains(&best));
    assert!(result.stats.nodes > 0);
    assert!(result.score.abs() < WIN_SCORE);
}

#[test]
fn test_search_is_deterministic() {
    let pos = Position::startpos();
    let first = get_best_move(&pos, Side::Light, 4);
    let second = get_best_move(&pos, Side::Light, 4);
    assert_eq!(first, second);
}

#[test]
fn test_depth_zero_searches_one_ply() {
    let pos = Position::startpos();
    let shallow = get_best_move(&pos, Side::Dark, 0);
    assert_eq!(shallow, get_best_move(&pos, Side::Dark, 1));
    assert_eq!(shallow.stats.nodes, 7);
    assert!(shallow.best_move.is_some());
}

#[test]
fn test_takes_winning_capture() {
    let pos = diagram(
        "
        ........
        ........
        .d......
        ..l.....
        ........
        ........
        ........
        ........
        ",
    );
    let result = get_best_move(&pos, Side::Dark, 1);
    assert_eq!(result.best_move, Some(mv((2, 1), (4, 3))));
    assert_eq!(result.score, WIN_SCORE);
}

#[test]
fn test_avoids_stepping_into_capture() {
    // Stepping to (3, 4) lets Light jump the only Dark piece
    let pos = diagram(
        "
        ........
        ........
        ...d....
        ........
        .....l..
        ........
        ........
        ........
        ",
    );
    let result = get_best_move(&pos, Side::Dark, 2);
    assert_eq!(result.best_move, Some(mv((2, 3), (3, 2))));
    assert!(result.score > -WIN_SCORE);
    assert_eq!(full_best_move(&pos, Side::Dark, 2).map(|(_, s)| s), Some(result.score));
}

#[test]
fn test_ties_go_to_first_move() {
    let pos = diagram(
        "
        ...d....
        ........
        ........
        ........
        ........
        ........
        ........
        l.......
        ",
    );
    let result = get_best_move(&pos, Side::Dark, 1);
    assert_eq!(result.best_move, Some(mv((0, 3), (1, 2))));
    assert_eq!(result.score, 1.0);
}

#[test]
fn test_all_kings_draw_scores_zero() {
    let pos = diagram(
        "
        ........
        ........
        ........
        ..D.....
        ........
        ......L.
        ........
        ........
        ",
    );
    let result = get_best_move(&pos, Side::Dark, 4);
    assert_eq!(result.score, DRAW_SCORE);
    assert_eq!(result.best_move, legal_moves(&pos, Side::Dark).first().copied());
}

#[test]
fn test_depleted_side_gets_no_move() {
    let pos = diagram(
        "
        ........
        ........
        ........
        ....d...
        ........
        ........
        ........
        ........
        ",
    );
    let result = get_best_move(&pos, Side::Light, 3);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, -WIN_SCORE);
    assert_eq!(result.stats, SearchStats::default());
}

#[test]
fn test_pruning_visits_fewer_nodes() {
    let pos = Position::startpos();
    let result = get_best_move(&pos, Side::Dark, 5);
    assert!(result.stats.cutoffs > 0);
    assert_eq!(
        full_best_move(&pos, Side::Dark, 5),
        result.best_move.map(|m| (m, result.score))
    );
}

fn arb_position() -> impl Strategy<Value = Position> {
    prop::collection::vec((0usize..32, any::<bool>(), any::<bool>()), 1..9).prop_map(|slots| {
        let squares: Vec<Square> = Square::playable().collect();
        slots
            .into_iter()
            .fold(Position::empty(), |pos, (idx, dark, king)| {
                let side = if dark { Side::Dark } else { Side::Light };
                pos.with_piece(squares[idx], side, king).unwrap_or(pos)
            })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn alpha_beta_matches_full_minimax(
        pos in arb_position(),
        dark in any::<bool>(),
        depth in 1u8..=4,
    ) {
        let side = if dark { Side::Dark } else { Side::Light };
        let pruned = get_best_move(&pos, side, depth);
        match full_best_move(&pos, side, depth) {
            Some((m, score)) => {
                prop_assert_eq!(pruned.score, score);
                prop_assert_eq!(pruned.best_move, Some(m));
            }
            None => {
                prop_assert_eq!(pruned.best_move, None);
                prop_assert_eq!(pruned.score, -WIN_SCORE);
            }
        }
    }
}
