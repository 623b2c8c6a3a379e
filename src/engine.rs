use rand::{rngs::StdRng, SeedableRng};

use crate::{
    apply::apply,
    attacks::is_in_check,
    constants::{NUM_FILES, NUM_RANKS},
    movegen::{all_legal_moves, has_any_legal_move, legal_moves},
    position::Position,
    search::choose_move,
    types::{
        CastleSide, CastlingRights, ChosenMove, Color, Difficulty, GameStatus, Move, MoveKind,
        Piece, PieceKind, SearchContext, Square,
    },
};

/// Saved game state for `undo`. Positions are cheap owned values, so a
/// snapshot stack replaces move unmaking.
#[derive(Clone)]
struct Snapshot {
    position: Position,
    context: SearchContext,
    turn: Color,
    fullmove: u16,
}

/// The caller-facing game facade: authoritative position, its context,
/// whose turn it is, and the AI configuration.
pub struct Engine {
    pub position: Position,
    pub context: SearchContext,
    pub turn: Color,
    pub difficulty: Difficulty,
    fullmove: u16,
    history: Vec<Snapshot>,
    rng: StdRng,
}

impl Engine {
    pub fn new() -> Engine {
        Engine::from_rng(StdRng::from_entropy())
    }

    /// Deterministic engine for tests and reproducible games.
    pub fn with_seed(seed: u64) -> Engine {
        Engine::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Reseeds the move selector's random source in place.
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    fn from_rng(rng: StdRng) -> Engine {
        Engine {
            position: Position::new(),
            context: SearchContext::initial(),
            turn: Color::White,
            difficulty: Difficulty::Hard,
            fullmove: 1,
            history: Vec::new(),
            rng,
        }
    }

    pub fn new_game(&mut self) {
        self.position = Position::new();
        self.context = SearchContext::initial();
        self.turn = Color::White;
        self.fullmove = 1;
        self.history.clear();
    }

    /// Legal moves from `from` for the side to move. Empty when the square
    /// is empty or holds the opponent's piece.
    pub fn legal_moves(&self, from: Square) -> Vec<Move> {
        legal_moves(&self.position, from, self.turn, &self.context)
    }

    pub fn all_legal_moves(&self) -> Vec<ChosenMove> {
        all_legal_moves(&self.position, self.turn, &self.context)
    }

    /// Commits a move previously returned by `legal_moves` and passes the
    /// turn. Unresolved promotions become queens.
    pub fn make_move(&mut self, from: Square, mv: Move) {
        self.history.push(Snapshot {
            position: self.position.clone(),
            context: self.context,
            turn: self.turn,
            fullmove: self.fullmove,
        });

        let (position, context) = apply(&self.position, from, mv, self.turn, self.context);
        self.position = position;
        self.context = context;

        if self.turn == Color::Black {
            self.fullmove += 1;
        }
        self.turn = self.turn.opponent();
    }

    /// Restores the state before the last `make_move`.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(snapshot) => {
                self.position = snapshot.position;
                self.context = snapshot.context;
                self.turn = snapshot.turn;
                self.fullmove = snapshot.fullmove;
                true
            }
            None => false,
        }
    }

    pub fn is_in_check(&self) -> bool {
        is_in_check(&self.position, self.turn)
    }

    /// Status for the side to move, derived from check state and whether
    /// any legal move exists anywhere.
    pub fn status(&self) -> GameStatus {
        let has_moves = has_any_legal_move(&self.position, self.turn, &self.context);
        let in_check = self.is_in_check();

        match (has_moves, in_check) {
            (true, false) => GameStatus::Normal,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Checkmate {
                winner: self.turn.opponent(),
            },
            (false, false) => GameStatus::Stalemate,
        }
    }

    /// Asks the configured selector for the side to move's choice.
    pub fn choose_move(&mut self) -> Option<ChosenMove> {
        choose_move(
            &self.position,
            &self.context,
            self.turn,
            self.difficulty,
            &mut self.rng,
        )
    }

    /// Chooses and commits a move for the side to move.
    pub fn play_computer_move(&mut self) -> Option<ChosenMove> {
        let choice = self.choose_move()?;
        self.make_move(choice.from, choice.mv);
        Some(choice)
    }

    pub fn display_board(&self, flip: bool) {
        self.position.display_board(flip);
    }

    /// Parses long algebraic notation ("e2e4", "e7e8q") against the side
    /// to move's legal moves. A promotion without a fifth character comes
    /// back unresolved so the caller can collect a choice.
    pub fn parse_move(&self, input: &str) -> Result<ChosenMove, String> {
        let input = input.trim();
        let chars: Vec<char> = input.chars().collect();

        if chars.len() < 4 || chars.len() > 5 {
            return Err(format!("Invalid move string: {input}"));
        }

        let from = Square::from_algebraic(&chars[..2].iter().collect::<String>())?;
        let to = Square::from_algebraic(&chars[2..4].iter().collect::<String>())?;

        let promotion = match chars.get(4) {
            Some(&c) => Some(PieceKind::from_char(c)?),
            None => None,
        };

        let mv = self
            .legal_moves(from)
            .into_iter()
            .find(|mv| mv.to == to)
            .ok_or_else(|| format!("Illegal move: {input}"))?;

        let mv = match promotion {
            Some(kind) if mv.is_promotion() => mv.with_promotion(kind),
            Some(_) => return Err(format!("Move is not a promotion: {input}")),
            None => mv,
        };

        Ok(ChosenMove { from, mv })
    }

    /// Long algebraic rendering of a move ("e2e4", "e7e8q").
    pub fn move_string(from: Square, mv: Move) -> String {
        let mut out = format!("{}{}", from, mv.to);

        if let MoveKind::Promotion { to } = mv.kind {
            out.push(to.unwrap_or(PieceKind::Queen).to_char());
        }

        out
    }

    /// Loads a FEN string. The halfmove clock is accepted but unused
    /// (there is no fifty-move rule here).
    pub fn from_fen(fen: &str) -> Result<Engine, String> {
        let fields: Vec<&str> = fen.split_whitespace().collect();

        if fields.len() < 4 {
            return Err(format!(
                "FEN must have at least 4 fields, got {}",
                fields.len()
            ));
        }

        let position = parse_placement(fields[0])?;

        let turn = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(format!("Invalid side to move: {other}")),
        };

        let castling = parse_castling(fields[2])?;

        let en_passant = match fields[3] {
            "-" => None,
            square => Some(Square::from_algebraic(square)?),
        };

        let fullmove = match fields.get(5) {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| format!("Invalid fullmove number: {value}"))?,
            None => 1,
        };

        let mut engine = Engine::new();
        engine.position = position;
        engine.context = SearchContext {
            castling,
            en_passant,
        };
        engine.turn = turn;
        engine.fullmove = fullmove;

        Ok(engine)
    }

    pub fn to_fen(&self) -> String {
        let mut placement = String::new();

        for row in 0..NUM_RANKS as u8 {
            let mut empty_run = 0;

            for col in 0..NUM_FILES as u8 {
                match self.position.piece_at(Square::new(row, col)) {
                    Some(piece) => {
                        if empty_run > 0 {
                            placement.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        placement.push(piece.to_char());
                    }
                    None => empty_run += 1,
                }
            }

            if empty_run > 0 {
                placement.push_str(&empty_run.to_string());
            }
            if row < NUM_RANKS as u8 - 1 {
                placement.push('/');
            }
        }

        let side = match self.turn {
            Color::White => 'w',
            Color::Black => 'b',
        };

        let mut castling = String::new();
        for (color, kingside_char, queenside_char) in
            [(Color::White, 'K', 'Q'), (Color::Black, 'k', 'q')]
        {
            if self.context.castling.can_castle(color, CastleSide::Kingside) {
                castling.push(kingside_char);
            }
            if self
                .context
                .castling
                .can_castle(color, CastleSide::Queenside)
            {
                castling.push(queenside_char);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let en_passant = match self.context.en_passant {
            Some(square) => square.to_string(),
            None => "-".to_string(),
        };

        format!(
            "{placement} {side} {castling} {en_passant} 0 {}",
            self.fullmove
        )
    }
}

impl Default for Engine {
    fn default() -> Engine {
        Engine::new()
    }
}

fn parse_placement(placement: &str) -> Result<Position, String> {
    let ranks: Vec<&str> = placement.split('/').collect();

    if ranks.len() != NUM_RANKS {
        return Err(format!(
            "FEN placement must have 8 ranks, got {}",
            ranks.len()
        ));
    }

    let mut position = Position::empty();

    for (row, rank) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10) {
                col += skip as usize;
                continue;
            }

            if col >= NUM_FILES {
                return Err(format!("FEN rank too long: {rank}"));
            }

            let piece = Piece::from_char(c).map_err(|e| format!("{e} in rank: {rank}"))?;
            position.add_piece(piece, Square::new(row as u8, col as u8));
            col += 1;
        }

        if col != NUM_FILES {
            return Err(format!("FEN rank does not cover 8 files: {rank}"));
        }
    }

    Ok(position)
}

fn parse_castling(field: &str) -> Result<CastlingRights, String> {
    if field == "-" {
        return Ok(CastlingRights::none());
    }

    let mut white_kingside = false;
    let mut white_queenside = false;
    let mut black_kingside = false;
    let mut black_queenside = false;

    for c in field.chars() {
        match c {
            'K' => white_kingside = true,
            'Q' => white_queenside = true,
            'k' => black_kingside = true,
            'q' => black_queenside = true,
            other => return Err(format!("Invalid castling flag: {other}")),
        }
    }

    Ok(CastlingRights::from_flags(
        white_kingside,
        white_queenside,
        black_kingside,
        black_queenside,
    ))
}
