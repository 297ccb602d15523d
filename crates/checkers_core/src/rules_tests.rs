use super::*;
use crate::types::Square;

fn diagram(text: &str) -> Position {
    Position::from_diagram(text).unwrap()
}

#[test]
fn test_startpos_is_in_progress() {
    let pos = Position::startpos();
    for side in Side::ALL {
        assert!(!is_terminal(&pos, side));
        assert_eq!(status(&pos, side), GameStatus::InProgress);
    }
}

#[test]
fn test_equal_kings_with_men_is_not_a_draw() {
    // One king each, but Dark still has a man
    let pos = diagram(
        "
        ........
        ........
        ...D....
        ........
        ........
        ......L.
        .d......
        ........
        ",
    );
    assert!(!is_draw(&pos, Side::Dark));
    assert!(!is_draw(&pos, Side::Light));
}

#[test]
fn test_unequal_kings_is_not_a_draw() {
    let pos = diagram(
        "
        ........
        ........
        ...D.D..
        ........
        ........
        ......L.
        ........
        ........
        ",
    );
    assert!(!is_draw(&pos, Side::Light));
}

#[test]
fn test_status_reports_reason() {
    let pos = Position::empty()
        .with_piece(Square::new(4, 3).unwrap(), Side::Dark, false)
        .unwrap();
    assert_eq!(
        status(&pos, Side::Light),
        GameStatus::Won {
            winner: Side::Dark,
            reason: WinReason::OpponentEliminated
        }
    );
    assert_eq!(
        status(&pos, Side::Dark),
        GameStatus::Won {
            winner: Side::Dark,
            reason: WinReason::OpponentEliminated
        }
    );
    assert!(status(&pos, Side::Dark).is_over());
}
