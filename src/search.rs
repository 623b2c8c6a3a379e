use rand::Rng;

use crate::{
    apply::apply,
    attacks::is_in_check,
    constants::{
        CAPTURE_BONUS_FACTOR, CHECK_BONUS, EN_PASSANT_BONUS, INFINITY_SCORE, MATE_SCORE,
        RANDOM_JITTER_MAX, SEARCH_DEPTH,
    },
    eval::evaluate,
    movegen::all_legal_moves,
    position::Position,
    types::{ChosenMove, Color, Difficulty, MoveKind, PieceKind, SearchContext},
};

/// Picks a move for `color`, or `None` when it has no legal move
/// (checkmate or stalemate).
///
/// The random source is injected so selection is reproducible under a
/// seeded generator. Promotions come back resolved to a queen.
pub fn choose_move<R: Rng>(
    position: &Position,
    ctx: &SearchContext,
    color: Color,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<ChosenMove> {
    let moves = all_legal_moves(position, color, ctx);

    if moves.is_empty() {
        return None;
    }

    let choice = match difficulty {
        // Uniform over all candidates; scoring them first would change
        // nothing observable.
        Difficulty::Easy => moves[rng.gen_range(0..moves.len())],
        Difficulty::Medium => choose_heuristic(position, ctx, color, &moves, rng),
        Difficulty::Hard => choose_minimax(position, ctx, color, &moves, rng),
    };

    let mv = match choice.mv.kind {
        MoveKind::Promotion { to: None } => choice.mv.with_promotion(PieceKind::Queen),
        _ => choice.mv,
    };

    Some(ChosenMove {
        from: choice.from,
        mv,
    })
}

/// One-ply scorer: capture value doubled, small bonuses for en-passant and
/// for giving check, plus jitter to vary play between otherwise equal
/// moves. Uniform among the moves tied for the maximum.
fn choose_heuristic<R: Rng>(
    position: &Position,
    ctx: &SearchContext,
    color: Color,
    moves: &[ChosenMove],
    rng: &mut R,
) -> ChosenMove {
    let mut best_score = f64::NEG_INFINITY;
    let mut best_moves: Vec<ChosenMove> = Vec::new();

    for &choice in moves {
        let mut score = 0.0;

        if choice.mv.kind == MoveKind::EnPassant {
            score += EN_PASSANT_BONUS;
        }

        if let Some(target) = position.piece_at(choice.mv.to) {
            score += CAPTURE_BONUS_FACTOR * target.kind.value() as f64;
        }

        let (next, _) = apply(position, choice.from, choice.mv, color, *ctx);
        if is_in_check(&next, color.opponent()) {
            score += CHECK_BONUS;
        }

        score += rng.gen_range(0.0..RANDOM_JITTER_MAX);

        if score > best_score {
            best_score = score;
            best_moves.clear();
            best_moves.push(choice);
        } else if score == best_score {
            best_moves.push(choice);
        }
    }

    best_moves[rng.gen_range(0..best_moves.len())]
}

/// Root of the fixed-depth search: white maximizes, black minimizes, ties
/// among equally-best root moves break uniformly at random.
fn choose_minimax<R: Rng>(
    position: &Position,
    ctx: &SearchContext,
    color: Color,
    moves: &[ChosenMove],
    rng: &mut R,
) -> ChosenMove {
    let maximizing = color == Color::White;
    let mut best_score = if maximizing {
        -INFINITY_SCORE
    } else {
        INFINITY_SCORE
    };
    let mut best_moves: Vec<ChosenMove> = Vec::new();

    for &choice in moves {
        let (next, next_ctx) = apply(position, choice.from, choice.mv, color, *ctx);
        let score = minimax(
            &next,
            next_ctx,
            color.opponent(),
            SEARCH_DEPTH - 1,
            -INFINITY_SCORE,
            INFINITY_SCORE,
        );

        let improved = if maximizing {
            score > best_score
        } else {
            score < best_score
        };

        if improved {
            best_score = score;
            best_moves.clear();
            best_moves.push(choice);
        } else if score == best_score {
            best_moves.push(choice);
        }
    }

    best_moves[rng.gen_range(0..best_moves.len())]
}

/// Bounded recursive tree walk over owned position copies. Each branch
/// clones before applying, so sibling branches and backtracking never see
/// another branch's speculative board.
fn minimax(
    position: &Position,
    ctx: SearchContext,
    color: Color,
    depth: u16,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if depth == 0 {
        return evaluate(position);
    }

    let moves = all_legal_moves(position, color, &ctx);

    if moves.is_empty() {
        // Mate counts against whichever side is stuck; stalemate is level.
        if is_in_check(position, color) {
            return match color {
                Color::White => -MATE_SCORE,
                Color::Black => MATE_SCORE,
            };
        }

        return 0;
    }

    if color == Color::White {
        let mut value = -INFINITY_SCORE;

        for choice in moves {
            let (next, next_ctx) = apply(position, choice.from, choice.mv, color, ctx);
            value = value.max(minimax(
                &next,
                next_ctx,
                Color::Black,
                depth - 1,
                alpha,
                beta,
            ));

            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }

        value
    } else {
        let mut value = INFINITY_SCORE;

        for choice in moves {
            let (next, next_ctx) = apply(position, choice.from, choice.mv, color, ctx);
            value = value.min(minimax(
                &next,
                next_ctx,
                Color::White,
                depth - 1,
                alpha,
                beta,
            ));

            beta = beta.min(value);
            if alpha >= beta {
                break;
            }
        }

        value
    }
}
