use std::fmt;

use crate::{
    constants::{NUM_FILES, NUM_RANKS},
    types::{Color, Piece, PieceKind, Square},
};

/// The 8x8 board grid. Row 0 is black's home rank, row 7 is white's.
///
/// `Position` is a plain value: simulation clones it and mutates the clone,
/// so speculative moves in one search branch never alias the authoritative
/// game state or a sibling branch.
#[derive(Clone, PartialEq, Eq)]
pub struct Position {
    squares: [[Option<Piece>; NUM_FILES]; NUM_RANKS],
}

impl Position {
    /// The standard starting arrangement.
    pub fn new() -> Position {
        let mut position = Position::empty();

        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        for (col, &kind) in back_rank.iter().enumerate() {
            position.add_piece(Piece::new(kind, Color::Black), Square::new(0, col as u8));
            position.add_piece(Piece::new(kind, Color::White), Square::new(7, col as u8));
        }

        for col in 0..NUM_FILES as u8 {
            position.add_piece(
                Piece::new(PieceKind::Pawn, Color::Black),
                Square::new(1, col),
            );
            position.add_piece(
                Piece::new(PieceKind::Pawn, Color::White),
                Square::new(6, col),
            );
        }

        position
    }

    pub fn empty() -> Position {
        Position {
            squares: [[None; NUM_FILES]; NUM_RANKS],
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    pub fn add_piece(&mut self, piece: Piece, square: Square) {
        self.squares[square.row as usize][square.col as usize] = Some(piece);
    }

    /// Clears the square, returning whatever occupied it.
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize].take()
    }

    /// All occupied squares with their pieces, row 0 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }

    /// Occupied squares belonging to `color`, row 0 first.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    pub fn display_board(&self, flip: bool) {
        println!("{}", self.render(flip));
    }

    fn render(&self, flip: bool) -> String {
        let mut out = String::new();

        let rows: Vec<u8> = if flip {
            (0..NUM_RANKS as u8).rev().collect()
        } else {
            (0..NUM_RANKS as u8).collect()
        };

        for &row in &rows {
            out.push_str(&format!("{}  ", 8 - row));

            let cols: Vec<u8> = if flip {
                (0..NUM_FILES as u8).rev().collect()
            } else {
                (0..NUM_FILES as u8).collect()
            };

            for col in cols {
                match self.squares[row as usize][col as usize] {
                    Some(piece) => out.push(piece.to_char()),
                    None => out.push('.'),
                }
                out.push(' ');
            }
            out.push('\n');
        }

        out.push_str("   ");
        let files: &str = if flip {
            "h g f e d c b a"
        } else {
            "a b c d e f g h"
        };
        out.push_str(files);
        out.push('\n');

        out
    }
}

impl Default for Position {
    fn default() -> Position {
        Position::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(false))
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(false))
    }
}
