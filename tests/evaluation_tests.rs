
use chess_engine::{engine::Engine, eval::evaluate};
use test_utils::*;

#[test]
fn starting_position_is_balanced() {
    let engine = Engine::new();

    assert_eq!(evaluate(&engine.position), 0);
}

#[test]
fn missing_black_queen_scores_plus_nine() {
    let engine = engine_from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");

    assert_eq!(evaluate(&engine.position), 9);
}

#[test]
fn lone_rook_scores_its_material_value() {
    let engine = engine_from_fen("k7/8/8/8/8/8/8/K2R4 w - - 0 1");

    assert_eq!(evaluate(&engine.position), 5);
}

#[test]
fn kings_contribute_nothing() {
    let engine = engine_from_fen("k7/8/8/8/8/8/8/K7 w - - 0 1");

    assert_eq!(evaluate(&engine.position), 0);
}

#[test]
fn minor_pieces_share_a_value() {
    let bishop = engine_from_fen("k7/8/8/8/8/8/8/KB6 w - - 0 1");
    let knight = engine_from_fen("k7/8/8/8/8/8/8/KN6 w - - 0 1");

    assert_eq!(evaluate(&bishop.position), evaluate(&knight.position));
    assert_eq!(evaluate(&bishop.position), 3);
}

#[test]
fn mirrored_positions_negate_the_score() {
    for fen in [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "k7/8/8/3q4/8/5N2/8/K2R4 w - - 0 1",
        "6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1",
    ] {
        let engine = engine_from_fen(fen);
        let mirror = mirrored(&engine.position);

        assert_eq!(
            evaluate(&engine.position),
            -evaluate(&mirror),
            "Mirror symmetry broken for {fen}"
        );
    }
}
