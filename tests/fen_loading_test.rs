
use chess_engine::{
    constants::STARTING_POSITION_FEN,
    engine::Engine,
    position::Position,
    types::{CastleSide, Color},
};
use test_utils::*;

#[test]
fn starting_fen_round_trips() {
    let engine = engine_from_fen(STARTING_POSITION_FEN);

    assert_eq!(engine.to_fen(), STARTING_POSITION_FEN);
}

#[test]
fn starting_fen_matches_a_fresh_game() {
    let engine = engine_from_fen(STARTING_POSITION_FEN);

    assert_eq!(engine.position, Position::new());
    assert_eq!(engine.turn, Color::White);
    assert_eq!(engine.context.en_passant, None);

    for color in [Color::White, Color::Black] {
        for side in [CastleSide::Kingside, CastleSide::Queenside] {
            assert!(engine.context.castling.can_castle(color, side));
        }
    }
}

#[test]
fn side_to_move_is_parsed() {
    let engine = engine_from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1");

    assert_eq!(engine.turn, Color::Black);
}

#[test]
fn partial_castling_rights_are_parsed() {
    let engine = engine_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1");

    assert!(engine
        .context
        .castling
        .can_castle(Color::White, CastleSide::Kingside));
    assert!(!engine
        .context
        .castling
        .can_castle(Color::White, CastleSide::Queenside));
    assert!(!engine
        .context
        .castling
        .can_castle(Color::Black, CastleSide::Kingside));
    assert!(engine
        .context
        .castling
        .can_castle(Color::Black, CastleSide::Queenside));

    assert_eq!(engine.to_fen(), "r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1");
}

#[test]
fn en_passant_target_is_parsed_and_emitted() {
    let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
    let engine = engine_from_fen(fen);

    assert_eq!(engine.context.en_passant, Some(sq("e3")));
    assert_eq!(engine.to_fen(), fen);
}

#[test]
fn fen_after_a_double_push_records_the_target() {
    let mut engine = Engine::new();
    let choice = engine.parse_move("e2e4").unwrap();
    engine.make_move(choice.from, choice.mv);

    assert_eq!(
        engine.to_fen(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );
}

#[test]
fn fullmove_number_survives_a_round_trip() {
    let engine = engine_from_fen("4k3/8/8/8/8/8/8/4K3 b - - 7 34");

    assert_eq!(engine.to_fen(), "4k3/8/8/8/8/8/8/4K3 b - - 0 34");
}

#[test]
fn fullmove_number_increments_after_black_moves() {
    let mut engine = Engine::new();

    for input in ["e2e4", "e7e5"] {
        let choice = engine.parse_move(input).unwrap();
        engine.make_move(choice.from, choice.mv);
    }

    assert!(engine.to_fen().ends_with("0 2"));
}

#[test]
fn missing_counters_default_sensibly() {
    let engine = engine_from_fen("4k3/8/8/8/8/8/8/4K3 w - -");

    assert!(engine.to_fen().ends_with("0 1"));
}

#[test]
fn invalid_fens_are_rejected() {
    for fen in [
        "",
        "invalid fen string",
        "8/8 w - - 0 1",                                     // too few ranks
        "9/8/8/8/8/8/8/8 w - - 0 1",                         // rank too long
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1", // bad side
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1", // bad castling
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1", // bad target
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPX/RNBQKBNR w KQkq - 0 1", // bad piece
    ] {
        assert!(Engine::from_fen(fen).is_err(), "FEN accepted: {fen}");
    }
}
