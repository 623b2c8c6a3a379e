use crate::{
    constants::{BISHOP_DIRECTIONS, KNIGHT_DELTAS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS},
    position::Position,
    types::{Color, PieceKind, Square},
};

/// Whether any piece of `by` attacks `target`.
///
/// Pawns attack their two forward diagonals only (never their push square);
/// sliders attack along a ray until the first blocker of either color.
pub fn is_square_attacked(position: &Position, target: Square, by: Color) -> bool {
    for (from, piece) in position.pieces_of(by) {
        let attacks = match piece.kind {
            PieceKind::Pawn => pawn_attacks(from, by, target),
            PieceKind::Knight => KNIGHT_DELTAS
                .iter()
                .any(|&(dr, dc)| from.offset(dr, dc) == Some(target)),
            PieceKind::King => {
                let dr = (from.row as i8 - target.row as i8).unsigned_abs();
                let dc = (from.col as i8 - target.col as i8).unsigned_abs();
                dr.max(dc) == 1
            }
            PieceKind::Bishop => slider_attacks(position, from, target, &BISHOP_DIRECTIONS),
            PieceKind::Rook => slider_attacks(position, from, target, &ROOK_DIRECTIONS),
            PieceKind::Queen => slider_attacks(position, from, target, &QUEEN_DIRECTIONS),
        };

        if attacks {
            return true;
        }
    }

    false
}

/// Whether `color`'s king is attacked. A position with no king (malformed
/// upstream) degrades to `false` rather than failing.
pub fn is_in_check(position: &Position, color: Color) -> bool {
    match position.find_king(color) {
        Some(king_square) => is_square_attacked(position, king_square, color.opponent()),
        None => false,
    }
}

fn pawn_attacks(from: Square, color: Color, target: Square) -> bool {
    let direction = color.pawn_direction();

    from.offset(direction, -1) == Some(target) || from.offset(direction, 1) == Some(target)
}

fn slider_attacks(
    position: &Position,
    from: Square,
    target: Square,
    directions: &[(i8, i8)],
) -> bool {
    for &(dr, dc) in directions {
        let mut square = from;

        while let Some(next) = square.offset(dr, dc) {
            if next == target {
                return true;
            }
            if position.piece_at(next).is_some() {
                break;
            }
            square = next;
        }
    }

    false
}
