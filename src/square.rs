use std::fmt;

use crate::{
    constants::{NUM_FILES, NUM_RANKS},
    types::Square,
};

impl Square {
    pub fn new(row: u8, col: u8) -> Square {
        debug_assert!(row < NUM_RANKS as u8 && col < NUM_FILES as u8);
        Square { row, col }
    }

    pub fn iter() -> impl Iterator<Item = Square> {
        (0..NUM_RANKS as u8)
            .flat_map(|row| (0..NUM_FILES as u8).map(move |col| Square { row, col }))
    }

    /// The square `(delta_row, delta_col)` away, or `None` off the board.
    pub fn offset(self, delta_row: i8, delta_col: i8) -> Option<Square> {
        let row = self.row as i8 + delta_row;
        let col = self.col as i8 + delta_col;

        if row < 0 || row >= NUM_RANKS as i8 || col < 0 || col >= NUM_FILES as i8 {
            return None;
        }

        Some(Square {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Parses coordinates like "e4". Row 0 corresponds to rank 8.
    pub fn from_algebraic(input: &str) -> Result<Square, String> {
        let mut chars = input.chars();

        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return Err(format!("Invalid square: {input}")),
        };

        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(format!("Invalid square: {input}"));
        }

        Ok(Square {
            row: 7 - (rank as u8 - b'1'),
            col: file as u8 - b'a',
        })
    }

    pub fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    pub fn rank_char(self) -> char {
        (b'1' + (7 - self.row)) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}
