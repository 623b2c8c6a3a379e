#[cfg(feature = "api")]
use serde::{Deserialize, Serialize};

use crate::engine::Engine;
use crate::eval::evaluate;
use crate::types::{Difficulty, GameStatus};

#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct BestMoveRequest {
    pub fen: String,
    /// AI level: 1 random, 2 heuristic, 3+ minimax. Defaults to 3.
    pub level: Option<u8>,
    /// Seed for the move selector's random source, for reproducible output.
    pub seed: Option<u64>,
}

#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct BestMoveResponse {
    pub best_move: String,      // Long algebraic (e.g. e2e4, e7e8q)
    pub evaluation: i32,        // Material balance after the move
    pub status: String,         // Status for the side to move after the move
    pub fen_after_move: String, // FEN string after applying the move
}

/// Main entry point for API consumers: analyzes a FEN position and returns
/// the selected move for the side to move.
pub fn choose_best_move(request: BestMoveRequest) -> Result<BestMoveResponse, String> {
    let mut engine =
        Engine::from_fen(&request.fen).map_err(|e| format!("Invalid FEN: {e}"))?;

    engine.difficulty = Difficulty::from_level(request.level.unwrap_or(3))
        .map_err(|e| e.to_string())?;

    if let Some(seed) = request.seed {
        engine.set_seed(seed);
    }

    let choice = engine
        .choose_move()
        .ok_or_else(|| "No legal moves in position (checkmate or stalemate)".to_string())?;

    let best_move = Engine::move_string(choice.from, choice.mv);

    engine.make_move(choice.from, choice.mv);

    let status = match engine.status() {
        GameStatus::Normal => "normal",
        GameStatus::Check => "check",
        GameStatus::Checkmate { .. } => "checkmate",
        GameStatus::Stalemate => "stalemate",
    };

    Ok(BestMoveResponse {
        best_move,
        evaluation: evaluate(&engine.position),
        status: status.to_string(),
        fen_after_move: engine.to_fen(),
    })
}

/// Simpler interface with just FEN and level.
pub fn get_best_move(fen: &str, level: u8) -> Result<BestMoveResponse, String> {
    choose_best_move(BestMoveRequest {
        fen: fen.to_string(),
        level: Some(level),
        seed: None,
    })
}
