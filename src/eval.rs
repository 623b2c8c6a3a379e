use crate::{position::Position, types::Color};

/// Material balance: white's piece values minus black's. No positional,
/// mobility, or king-safety terms.
pub fn evaluate(position: &Position) -> i32 {
    let mut score = 0;

    for (_, piece) in position.pieces() {
        let value = piece.kind.value();

        match piece.color {
            Color::White => score += value,
            Color::Black => score -= value,
        }
    }

    score
}
