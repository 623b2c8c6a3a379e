
use chess_engine::{
    engine::Engine,
    types::{Color, GameStatus, Square},
};
use test_utils::*;

#[test]
fn fresh_game_status_is_normal() {
    let engine = Engine::new();

    assert_eq!(engine.status(), GameStatus::Normal);
    assert!(!engine.is_in_check());
}

#[test]
fn attacked_king_with_escapes_is_check() {
    let engine = engine_from_fen("4r2k/8/8/8/8/8/3P4/4K3 w - - 0 1");

    assert!(engine.is_in_check());
    assert_eq!(engine.status(), GameStatus::Check);
}

#[test]
fn cornered_king_with_guarded_queen_is_checkmate() {
    // Black king a8, white queen b7 guarded by the king on a6: the queen
    // covers every flight square and cannot be captured.
    let engine = engine_from_fen("k7/1Q6/K7/8/8/8/8/8 b - - 0 1");

    assert_eq!(
        engine.status(),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );

    // Every black square yields an empty move list.
    for square in Square::iter() {
        assert!(engine.legal_moves(square).is_empty());
    }
}

#[test]
fn boxed_king_without_check_is_stalemate() {
    // Black king a8, white queen b6, white king c6: every flight square is
    // covered but a8 itself is not attacked.
    let engine = engine_from_fen("k7/8/1QK5/8/8/8/8/8 b - - 0 1");

    assert!(!engine.is_in_check());
    assert_eq!(engine.status(), GameStatus::Stalemate);

    for square in Square::iter() {
        assert!(engine.legal_moves(square).is_empty());
    }
}

#[test]
fn fools_mate_is_checkmate_for_black() {
    let engine =
        engine_from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 3");

    assert_eq!(
        engine.status(),
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
}

#[test]
fn scholars_mate_played_through_the_engine() {
    let mut engine = Engine::new();

    for input in [
        "e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7",
    ] {
        let choice = engine.parse_move(input).unwrap();
        engine.make_move(choice.from, choice.mv);
    }

    assert_eq!(
        engine.status(),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );
}

#[test]
fn missing_king_degrades_to_not_in_check() {
    // Malformed upstream state, tolerated defensively.
    let engine = engine_from_fen("8/8/8/8/8/8/8/K7 b - - 0 1");

    assert!(!engine.is_in_check());
}
