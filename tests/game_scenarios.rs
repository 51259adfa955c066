use chess_rules::board::{Color, PieceId, Position};
use chess_rules::game::{Game, GameOutcome, Selection, SelectionEvent};

fn id(token: &str) -> PieceId {
    token.parse().expect("valid piece token")
}

/// Click `from` then `to`, expecting the second click to apply a move.
fn click_move(game: &mut Game, from: Position, to: Position) -> chess_rules::MoveApplied {
    match game.select(from) {
        SelectionEvent::Selected { destinations, .. } => {
            assert!(destinations.contains(&to), "{to} not offered from {from}")
        }
        other => panic!("selecting {from} gave {other:?}"),
    }
    match game.select(to) {
        SelectionEvent::Moved(applied) => applied,
        other => panic!("moving to {to} gave {other:?}"),
    }
}

#[test]
fn king_pawn_double_step_sets_target() {
    let mut game = Game::new();
    let applied = click_move(&mut game, Position(4, 6), Position(4, 4));

    assert_eq!(applied.piece, id("P4"));
    assert!(!applied.is_capture());
    assert_eq!(applied.turn, Color::Black);
    assert_eq!(applied.en_passant_target, Some(Position(4, 5)));
    assert_eq!(game.turn(), Color::Black);
    assert_eq!(game.en_passant_target(), Some(Position(4, 5)));
}

#[test]
fn reply_double_step_offers_ordinary_capture_not_en_passant() {
    let mut game = Game::new();
    click_move(&mut game, Position(4, 6), Position(4, 4));
    click_move(&mut game, Position(3, 1), Position(3, 3));

    assert_eq!(game.en_passant_target(), Some(Position(3, 2)));
    let moves = game.legal_moves(id("P4"));
    assert!(moves.contains(&Position(3, 3)));
    assert!(!moves.contains(&Position(3, 2)));

    let applied = click_move(&mut game, Position(4, 4), Position(3, 3));
    assert!(!applied.en_passant);
    assert_eq!(applied.captured.map(|c| c.piece), Some(id("p3")));
    assert_eq!(game.en_passant_target(), None);
}

#[test]
fn en_passant_capture_removes_passed_pawn() {
    let mut game = Game::new();
    click_move(&mut game, Position(4, 6), Position(4, 4));
    click_move(&mut game, Position(0, 1), Position(0, 2));
    click_move(&mut game, Position(4, 4), Position(4, 3));
    click_move(&mut game, Position(3, 1), Position(3, 3));

    assert_eq!(game.en_passant_target(), Some(Position(3, 2)));
    let applied = click_move(&mut game, Position(4, 3), Position(3, 2));

    assert!(applied.en_passant);
    assert!(applied.is_capture());
    let captured = applied.captured.expect("capture recorded");
    assert_eq!(captured.piece, id("p3"));
    assert_eq!(captured.square, Position(3, 3));
    assert_eq!(game.board().piece_at(Position(3, 2)), Some(id("P4")));
    assert!(game.board().is_empty_square(Position(3, 3)));
    assert_eq!(game.board().len(), 31);
    assert_eq!(game.en_passant_target(), None);
}

#[test]
fn fools_mate_ends_the_game() {
    let mut game = Game::new();
    click_move(&mut game, Position(5, 6), Position(5, 5));
    click_move(&mut game, Position(4, 1), Position(4, 3));
    click_move(&mut game, Position(6, 6), Position(6, 4));
    let applied = click_move(&mut game, Position(3, 0), Position(7, 4));

    assert!(applied.is_game_over());
    assert_eq!(
        applied.outcome,
        GameOutcome::GameOver {
            winner: Color::Black,
            checkmate: true,
        }
    );
    assert!(game.legal_moves_for(Color::White).is_empty());
    assert_eq!(game.selection(), &Selection::GameOver);
    assert_eq!(game.select(Position(4, 7)), SelectionEvent::Ignored);
}

#[test]
fn check_must_be_answered() {
    let mut game = Game::new();
    click_move(&mut game, Position(4, 6), Position(4, 4));
    click_move(&mut game, Position(5, 1), Position(5, 2));
    click_move(&mut game, Position(3, 7), Position(7, 3));

    // Qh5+ : only g7-g6 blocks
    assert!(game.is_in_check(Color::Black));
    let replies = game.legal_moves_for(Color::Black);
    assert_eq!(replies, vec![(id("p6"), vec![Position(6, 2)])]);
}

#[test]
fn turn_does_not_flip_on_rejected_attempt() {
    let mut game = Game::new();
    game.select(Position(4, 6));
    let event = game.select(Position(4, 2));
    assert!(matches!(event, SelectionEvent::Cleared { .. }));
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.board().position_of(id("P4")), Some(Position(4, 6)));
}

#[test]
fn reselecting_another_own_piece() {
    let mut game = Game::new();
    game.select(Position(1, 7));
    match game.select(Position(6, 7)) {
        SelectionEvent::Selected {
            piece,
            destinations,
            ..
        } => {
            assert_eq!(piece, id("N1"));
            assert_eq!(destinations.len(), 2);
        }
        other => panic!("expected reselection, got {other:?}"),
    }
}

#[cfg(feature = "serde")]
#[test]
fn move_notification_serializes() {
    let mut game = Game::new();
    let applied = click_move(&mut game, Position(4, 6), Position(4, 4));
    let json = serde_json::to_value(&applied).expect("serializable");
    assert_eq!(json["piece"], "P4");
    assert_eq!(json["to"], serde_json::json!([4, 4]));
    assert_eq!(json["turn"], "Black");
    assert_eq!(json["en_passant_target"], serde_json::json!([4, 5]));
}
