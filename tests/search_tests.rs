
use chess_engine::{
    engine::Engine,
    search::choose_move,
    types::{Difficulty, MoveKind, PieceKind},
};
use rand::{rngs::StdRng, SeedableRng};
use test_utils::*;

fn engine_at(fen: &str, difficulty: Difficulty, seed: u64) -> Engine {
    let mut engine = engine_from_fen(fen);
    engine.difficulty = difficulty;
    engine.set_seed(seed);
    engine
}

#[test]
fn hard_level_finds_a_back_rank_mate() {
    for seed in 0..5 {
        let mut engine = engine_at("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1", Difficulty::Hard, seed);
        let choice = engine.choose_move().unwrap();

        assert_eq!(choice.from, sq("a1"));
        assert_eq!(choice.mv.to, sq("a8"));
    }
}

#[test]
fn hard_level_finds_the_mate_for_black_too() {
    for seed in 0..5 {
        let mut engine = engine_at("r5k1/5ppp/8/8/8/8/5PPP/6K1 b - - 0 1", Difficulty::Hard, seed);
        let choice = engine.choose_move().unwrap();

        assert_eq!(choice.from, sq("a8"));
        assert_eq!(choice.mv.to, sq("a1"));
    }
}

#[test]
fn hard_level_moves_the_attacked_queen() {
    // The c5 pawn attacks the d4 queen; anything but a queen move loses
    // nine points of material within the search horizon.
    for seed in 0..5 {
        let mut engine = engine_at("4k3/8/8/2p5/3Q4/8/8/4K3 w - - 0 1", Difficulty::Hard, seed);
        let choice = engine.choose_move().unwrap();

        assert_eq!(choice.from, sq("d4"));
    }
}

#[test]
fn medium_level_prefers_the_largest_capture() {
    // The a4 rook can take a queen or a pawn; the doubled capture value
    // dwarfs the jitter, so every seed picks the queen.
    for seed in 0..10 {
        let mut engine = engine_at("q6k/8/8/8/R6p/8/8/1K6 w - - 0 1", Difficulty::Medium, seed);
        let choice = engine.choose_move().unwrap();

        assert_eq!(choice.from, sq("a4"));
        assert_eq!(choice.mv.to, sq("a8"));
    }
}

#[test]
fn medium_level_takes_the_en_passant_bonus() {
    // Black's only scoring move is the en-passant capture; the bonus
    // clears the jitter ceiling, so king shuffles never win.
    for seed in 0..10 {
        let mut engine = engine_at("4k3/8/8/8/3pP3/8/8/4K3 b - e3 0 1", Difficulty::Medium, seed);
        let choice = engine.choose_move().unwrap();

        assert_eq!(choice.from, sq("d4"));
        assert_eq!(choice.mv.to, sq("e3"));
        assert_eq!(choice.mv.kind, MoveKind::EnPassant);
    }
}

#[test]
fn easy_level_is_reproducible_under_a_seed() {
    let mut first = Engine::with_seed(42);
    first.difficulty = Difficulty::Easy;
    let mut second = Engine::with_seed(42);
    second.difficulty = Difficulty::Easy;

    assert_eq!(first.choose_move(), second.choose_move());
}

#[test]
fn easy_level_returns_a_legal_move() {
    let mut engine = Engine::with_seed(7);
    engine.difficulty = Difficulty::Easy;

    let choice = engine.choose_move().unwrap();
    let legal = engine.legal_moves(choice.from);

    assert!(legal.contains(&choice.mv));
}

#[test]
fn no_move_is_offered_when_checkmated() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let mut engine = engine_at(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 3",
            difficulty,
            1,
        );

        assert_eq!(engine.choose_move(), None);
    }
}

#[test]
fn no_move_is_offered_in_stalemate() {
    let mut engine = engine_at("k7/8/1QK5/8/8/8/8/8 b - - 0 1", Difficulty::Hard, 1);

    assert_eq!(engine.choose_move(), None);
}

#[test]
fn ai_promotions_resolve_to_queen() {
    // Any non-promoting move lets the black king collect the pawn inside
    // the search horizon, so promotion is the unique best root move.
    let mut engine = engine_at("8/P7/1k6/3K4/8/8/8/8 w - - 0 1", Difficulty::Hard, 3);
    let choice = engine.choose_move().unwrap();

    assert_eq!(choice.from, sq("a7"));
    assert_eq!(
        choice.mv.kind,
        MoveKind::Promotion {
            to: Some(PieceKind::Queen)
        }
    );
}

#[test]
fn selector_is_a_pure_function_of_its_inputs() {
    // Calling the standalone selector must not disturb the position or
    // context it searched.
    let engine = engine_from_fen("r3k2r/pppq1ppp/8/8/8/8/PPP2PPP/R3K2R w KQkq - 0 1");
    let before = engine.position.clone();
    let before_ctx = engine.context;

    let mut rng = StdRng::seed_from_u64(9);
    let choice = choose_move(
        &engine.position,
        &engine.context,
        engine.turn,
        Difficulty::Hard,
        &mut rng,
    );

    assert!(choice.is_some());
    assert_eq!(engine.position, before);
    assert_eq!(engine.context, before_ctx);
}

#[test]
fn seeded_hard_searches_are_deterministic() {
    let mut first = Engine::with_seed(11);
    let mut second = Engine::with_seed(11);

    for _ in 0..4 {
        let a = first.play_computer_move().unwrap();
        let b = second.play_computer_move().unwrap();
        assert_eq!(a, b);
    }
}
