#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row the color's pieces start on. Row 0 is black's home rank,
    /// row 7 is white's.
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row a pawn of this color promotes on.
    pub const fn promotion_row(self) -> u8 {
        self.opponent().home_row()
    }

    /// Row delta for a pawn push. White advances toward row 0.
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn = 0,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }
}

/// A board coordinate. `row` 0 is black's home rank (rank 8 in algebraic
/// notation), `row` 7 is white's home rank (rank 1).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside = 0,
    Queenside,
}

impl CastleSide {
    /// Column the king lands on after castling.
    pub const fn king_destination_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// Column the king passes through on the way to its destination.
    pub const fn passed_through_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    pub const fn rook_home_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// Column the rook lands on, adjacent to the castled king.
    pub const fn rook_destination_col(self) -> u8 {
        self.passed_through_col()
    }
}

/// What a move does, one case per category. Invalid combinations
/// (a castling promotion, say) are unrepresentable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveKind {
    Quiet,
    Capture,
    /// Pawn two-step from its start row. Sets the en-passant target.
    DoublePush,
    /// Pawn capture of the pawn that just double-stepped. The captured
    /// pawn is not on the destination square.
    EnPassant,
    /// Pawn reaching the back rank. `to: None` means the caller still has
    /// to pick a piece; the applicator defaults to a queen.
    Promotion { to: Option<PieceKind> },
    Castle { side: CastleSide },
}

/// A candidate transition, relative to an implicit source square.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    pub const fn new(to: Square, kind: MoveKind) -> Move {
        Move { to, kind }
    }

    pub fn is_promotion(&self) -> bool {
        matches!(self.kind, MoveKind::Promotion { .. })
    }

    /// Resolve an unresolved promotion to `kind`. Leaves other moves as-is.
    pub fn with_promotion(self, kind: PieceKind) -> Move {
        match self.kind {
            MoveKind::Promotion { .. } => Move {
                to: self.to,
                kind: MoveKind::Promotion { to: Some(kind) },
            },
            _ => self,
        }
    }
}

/// A move paired with its source square, as returned by whole-board
/// enumeration and the AI selector.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChosenMove {
    pub from: Square,
    pub mv: Move,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct SideRights {
    kingside: bool,
    queenside: bool,
}

/// Per-color castling availability. Monotonic: rights can be revoked but
/// never re-granted, so the type exposes no setter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    rights: [SideRights; 2],
}

impl CastlingRights {
    pub const fn full() -> CastlingRights {
        CastlingRights {
            rights: [SideRights {
                kingside: true,
                queenside: true,
            }; 2],
        }
    }

    pub const fn none() -> CastlingRights {
        CastlingRights {
            rights: [SideRights {
                kingside: false,
                queenside: false,
            }; 2],
        }
    }

    /// Arbitrary rights, for FEN loading and test setup.
    pub const fn from_flags(
        white_kingside: bool,
        white_queenside: bool,
        black_kingside: bool,
        black_queenside: bool,
    ) -> CastlingRights {
        CastlingRights {
            rights: [
                SideRights {
                    kingside: white_kingside,
                    queenside: white_queenside,
                },
                SideRights {
                    kingside: black_kingside,
                    queenside: black_queenside,
                },
            ],
        }
    }

    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        let rights = self.rights[color as usize];
        match side {
            CastleSide::Kingside => rights.kingside,
            CastleSide::Queenside => rights.queenside,
        }
    }

    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        let rights = &mut self.rights[color as usize];
        match side {
            CastleSide::Kingside => rights.kingside = false,
            CastleSide::Queenside => rights.queenside = false,
        }
    }

    pub fn revoke_all(&mut self, color: Color) {
        self.rights[color as usize] = SideRights {
            kingside: false,
            queenside: false,
        };
    }
}

/// The meta-state that must travel with a `Position` through move
/// generation and application. Kept outside the board grid so board
/// mutation and rights/en-passant bookkeeping stay independently testable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchContext {
    pub castling: CastlingRights,
    /// Square capturable-through right after a double push; cleared by the
    /// very next move whether or not it was used.
    pub en_passant: Option<Square>,
}

impl SearchContext {
    pub const fn initial() -> SearchContext {
        SearchContext {
            castling: CastlingRights::full(),
            en_passant: None,
        }
    }
}

impl Default for SearchContext {
    fn default() -> SearchContext {
        SearchContext::initial()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Normal,
    Check,
    Checkmate { winner: Color },
    Stalemate,
}

/// AI strength. `Easy` picks uniformly at random, `Medium` runs the
/// one-ply heuristic scorer, `Hard` runs the fixed-depth minimax search.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy = 1,
    Medium = 2,
    Hard = 3,
}

impl Difficulty {
    /// Numeric levels map 1 and 2 directly; 3 and above select the search.
    pub fn from_level(level: u8) -> Result<Difficulty, &'static str> {
        match level {
            0 => Err("Difficulty level must be at least 1"),
            1 => Ok(Difficulty::Easy),
            2 => Ok(Difficulty::Medium),
            _ => Ok(Difficulty::Hard),
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Difficulty::from_level(value)
    }
}
