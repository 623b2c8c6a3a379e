use crate::{
    position::Position,
    types::{CastleSide, Color, Move, MoveKind, Piece, PieceKind, SearchContext, Square},
};

/// Applies `mv` (previously produced by the move generator for this exact
/// position and context) as an owned transformation, leaving the inputs
/// untouched.
pub fn apply(
    position: &Position,
    from: Square,
    mv: Move,
    color: Color,
    ctx: SearchContext,
) -> (Position, SearchContext) {
    let mut next = position.clone();
    let next_ctx = apply_in_place(&mut next, from, mv, color, ctx);

    (next, next_ctx)
}

/// In-place variant used where the caller already owns a scratch clone.
///
/// Behavior for a move the generator did not produce is unspecified; an
/// empty source square is tolerated as a no-op on the grid.
pub fn apply_in_place(
    position: &mut Position,
    from: Square,
    mv: Move,
    color: Color,
    ctx: SearchContext,
) -> SearchContext {
    let Some(piece) = position.remove_piece(from) else {
        return SearchContext {
            castling: ctx.castling,
            en_passant: None,
        };
    };

    // A promotion swaps the pawn for the resolved piece (queen by default).
    let placed = match mv.kind {
        MoveKind::Promotion { to } => Piece::new(to.unwrap_or(PieceKind::Queen), color),
        _ => piece,
    };

    // The en-passant victim sits behind the destination, one row toward the
    // capturing side's own home rank.
    if mv.kind == MoveKind::EnPassant {
        if let Some(victim_square) = mv.to.offset(-color.pawn_direction(), 0) {
            position.remove_piece(victim_square);
        }
    }

    let captured = position.piece_at(mv.to);
    position.add_piece(placed, mv.to);

    if let MoveKind::Castle { side } = mv.kind {
        let home_row = color.home_row();
        position.remove_piece(Square::new(home_row, side.rook_home_col()));
        position.add_piece(
            Piece::new(PieceKind::Rook, color),
            Square::new(home_row, side.rook_destination_col()),
        );
    }

    // The en-passant target only survives for the single move after a
    // double push: it is recomputed from scratch every application.
    let en_passant = match mv.kind {
        MoveKind::DoublePush => Some(Square::new((from.row + mv.to.row) / 2, from.col)),
        _ => None,
    };

    let mut castling = ctx.castling;

    match piece.kind {
        PieceKind::King => castling.revoke_all(color),
        PieceKind::Rook if from.row == color.home_row() => {
            for side in [CastleSide::Kingside, CastleSide::Queenside] {
                if from.col == side.rook_home_col() {
                    castling.revoke(color, side);
                }
            }
        }
        _ => {}
    }

    // Capturing on the opponent's rook home corner revokes that right even
    // if the rook never moved. The en-passant victim is never on a corner.
    if captured.is_some() && mv.kind != MoveKind::EnPassant {
        let opponent = color.opponent();

        if mv.to.row == opponent.home_row() {
            for side in [CastleSide::Kingside, CastleSide::Queenside] {
                if mv.to.col == side.rook_home_col() {
                    castling.revoke(opponent, side);
                }
            }
        }
    }

    SearchContext {
        castling,
        en_passant,
    }
}
