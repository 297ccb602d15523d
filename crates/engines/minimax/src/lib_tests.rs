use super::*;
use checkers_core::{legal_moves, Square};

#[test]
fn minimax_engine_returns_legal_move() {
    let mut engine = MinimaxEngine::new();
    let pos = Position::startpos();

    let result = engine.search(&pos, Side::Dark, 3);

    let best = result.best_move.expect("start position has moves");
    assert!(legal_moves(&pos, Side::Dark).contains(&best));
    assert_eq!(result.depth, 3);
    assert_eq!(result.nodes, engine.last_stats().nodes);
    assert!(result.nodes > 0);
}

#[test]
fn minimax_engine_reset_clears_stats() {
    let mut engine = MinimaxEngine::new();
    engine.search(&Position::startpos(), Side::Light, 2);
    assert!(engine.last_stats().nodes > 0);

    engine.new_game();
    assert_eq!(engine.last_stats(), SearchStats::default());
}

#[test]
fn evaluation_of_start_position_is_balanced() {
    let pos = Position::startpos();
    assert_eq!(evaluate(&pos, Side::Dark), 0.0);
    assert_eq!(evaluate(&pos, Side::Light), 0.0);
}

#[test]
fn evaluation_breakdown_terms() {
    // Dark king in the centre against a Light man one row off its edge
    let pos = Position::empty()
        .with_piece(Square::new(4, 3).unwrap(), Side::Dark, true)
        .unwrap()
        .with_piece(Square::new(6, 1).unwrap(), Side::Light, false)
        .unwrap();

    let e = evaluate_breakdown(&pos, Side::Dark);
    assert_eq!(e.material, 5.0);
    assert_eq!(e.positional, -0.5);
    assert_eq!(e.kings, 5.0);
    assert_eq!(e.mobility, 1.0);
    assert_eq!(e.center, 2.0);
    assert_eq!(e.total(), 12.5);
    assert_eq!(evaluate(&pos, Side::Light), -12.5);
}

#[test]
fn evaluation_is_antisymmetric_for_capture_setup() {
    let pos = Position::from_diagram(
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
    )
    .unwrap();
    assert_eq!(evaluate(&pos, Side::Dark), -1.0);
    assert_eq!(evaluate(&pos, Side::Light), 1.0);
}
