use crate::{
    apply::apply_in_place,
    attacks::{is_in_check, is_square_attacked},
    constants::{
        BISHOP_DIRECTIONS, KING_DELTAS, KING_HOME_COL, KNIGHT_DELTAS, QUEEN_DIRECTIONS,
        ROOK_DIRECTIONS,
    },
    position::Position,
    types::{CastleSide, ChosenMove, Color, Move, MoveKind, PieceKind, SearchContext, Square},
};

/// Moves satisfying piece-movement rules from `from`, before any check
/// filtering. Empty squares yield an empty list.
pub fn pseudo_moves(position: &Position, from: Square, ctx: &SearchContext) -> Vec<Move> {
    let Some(piece) = position.piece_at(from) else {
        return Vec::new();
    };

    let color = piece.color;
    let mut moves = Vec::new();

    match piece.kind {
        PieceKind::Pawn => add_pawn_moves(position, from, color, ctx, &mut moves),
        PieceKind::Knight => add_step_moves(position, from, color, &KNIGHT_DELTAS, &mut moves),
        PieceKind::Bishop => {
            add_sliding_moves(position, from, color, &BISHOP_DIRECTIONS, &mut moves)
        }
        PieceKind::Rook => add_sliding_moves(position, from, color, &ROOK_DIRECTIONS, &mut moves),
        PieceKind::Queen => add_sliding_moves(position, from, color, &QUEEN_DIRECTIONS, &mut moves),
        PieceKind::King => {
            add_step_moves(position, from, color, &KING_DELTAS, &mut moves);
            add_castle_moves(position, from, color, ctx, &mut moves);
        }
    }

    moves
}

/// Pseudo moves from `from` that do not leave `color`'s own king attacked,
/// with the castle path rules applied against the pre-move position.
///
/// An empty square, or one holding the opponent's piece, yields an empty
/// list; callers validate selection by occupancy, not by error handling.
pub fn legal_moves(
    position: &Position,
    from: Square,
    color: Color,
    ctx: &SearchContext,
) -> Vec<Move> {
    match position.piece_at(from) {
        Some(piece) if piece.color == color => {}
        _ => return Vec::new(),
    }

    let mut legal = Vec::new();

    for mv in pseudo_moves(position, from, ctx) {
        // The king may not castle out of, through, or into check. These
        // squares are probed on the pre-move position: the king has not
        // moved yet when the opponent's attacks are considered.
        if let MoveKind::Castle { side } = mv.kind {
            if is_in_check(position, color) {
                continue;
            }

            let home_row = color.home_row();
            let passed = Square::new(home_row, side.passed_through_col());
            let destination = Square::new(home_row, side.king_destination_col());

            if is_square_attacked(position, passed, color.opponent())
                || is_square_attacked(position, destination, color.opponent())
            {
                continue;
            }
        }

        let mut next = position.clone();
        apply_in_place(&mut next, from, mv, color, *ctx);

        if !is_in_check(&next, color) {
            legal.push(mv);
        }
    }

    legal
}

/// Every legal move for `color`, scanning the board row 0 first.
pub fn all_legal_moves(position: &Position, color: Color, ctx: &SearchContext) -> Vec<ChosenMove> {
    let mut moves = Vec::new();

    for (from, _) in position.pieces_of(color) {
        for mv in legal_moves(position, from, color, ctx) {
            moves.push(ChosenMove { from, mv });
        }
    }

    moves
}

/// Early-exit variant of `all_legal_moves` for status queries.
pub fn has_any_legal_move(position: &Position, color: Color, ctx: &SearchContext) -> bool {
    position
        .pieces_of(color)
        .any(|(from, _)| !legal_moves(position, from, color, ctx).is_empty())
}

fn add_pawn_moves(
    position: &Position,
    from: Square,
    color: Color,
    ctx: &SearchContext,
    moves: &mut Vec<Move>,
) {
    let direction = color.pawn_direction();

    // Single push, and the double push when still on the start row.
    if let Some(one_ahead) = from.offset(direction, 0) {
        if position.piece_at(one_ahead).is_none() {
            moves.push(pawn_advance(one_ahead, color, MoveKind::Quiet));

            if from.row == color.pawn_start_row() {
                if let Some(two_ahead) = from.offset(2 * direction, 0) {
                    if position.piece_at(two_ahead).is_none() {
                        moves.push(Move::new(two_ahead, MoveKind::DoublePush));
                    }
                }
            }
        }
    }

    // Diagonal captures.
    for delta_col in [-1, 1] {
        let Some(diagonal) = from.offset(direction, delta_col) else {
            continue;
        };

        if let Some(target) = position.piece_at(diagonal) {
            if target.color != color {
                moves.push(pawn_advance(diagonal, color, MoveKind::Capture));
            }
        }
    }

    // En-passant, when the context's target square is one forward-diagonal
    // step away.
    if let Some(en_passant) = ctx.en_passant {
        if from.row as i8 + direction == en_passant.row as i8
            && from.col.abs_diff(en_passant.col) == 1
        {
            moves.push(Move::new(en_passant, MoveKind::EnPassant));
        }
    }
}

/// Wraps a pawn push or capture, flagging the promotion on the back rank.
/// The promotion piece is left unresolved for the caller to pick.
fn pawn_advance(to: Square, color: Color, kind: MoveKind) -> Move {
    if to.row == color.promotion_row() {
        Move::new(to, MoveKind::Promotion { to: None })
    } else {
        Move::new(to, kind)
    }
}

fn add_step_moves(
    position: &Position,
    from: Square,
    color: Color,
    deltas: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(delta_row, delta_col) in deltas {
        let Some(to) = from.offset(delta_row, delta_col) else {
            continue;
        };

        match position.piece_at(to) {
            None => moves.push(Move::new(to, MoveKind::Quiet)),
            Some(target) if target.color != color => {
                moves.push(Move::new(to, MoveKind::Capture));
            }
            Some(_) => {}
        }
    }
}

fn add_sliding_moves(
    position: &Position,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(delta_row, delta_col) in directions {
        let mut square = from;

        while let Some(to) = square.offset(delta_row, delta_col) {
            match position.piece_at(to) {
                None => moves.push(Move::new(to, MoveKind::Quiet)),
                Some(target) => {
                    if target.color != color {
                        moves.push(Move::new(to, MoveKind::Capture));
                    }
                    break;
                }
            }

            square = to;
        }
    }
}

/// Castle candidates: rights still held, king on its home square, and the
/// squares between king and rook empty. Check constraints along the king's
/// path are deferred to `legal_moves`.
fn add_castle_moves(
    position: &Position,
    from: Square,
    color: Color,
    ctx: &SearchContext,
    moves: &mut Vec<Move>,
) {
    let home_row = color.home_row();

    if from != Square::new(home_row, KING_HOME_COL) {
        return;
    }

    for side in [CastleSide::Kingside, CastleSide::Queenside] {
        if !ctx.castling.can_castle(color, side) {
            continue;
        }

        let between_cols: &[u8] = match side {
            CastleSide::Kingside => &[5, 6],
            CastleSide::Queenside => &[1, 2, 3],
        };

        let clear = between_cols
            .iter()
            .all(|&col| position.piece_at(Square::new(home_row, col)).is_none());

        if clear {
            moves.push(Move::new(
                Square::new(home_row, side.king_destination_col()),
                MoveKind::Castle { side },
            ));
        }
    }
}
