//! Seeded random playouts.
//!
//! Picks uniformly among the legal moves at every ply. The same seed always
//! produces the same game, which makes playouts usable as reproducible
//! stress tests for make/unmake and the legality filter.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::ChessResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutConfig {
    /// Stop after this many plies even if the game is still running.
    pub max_plies: usize,
    pub seed: u64,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutSummary {
    pub plies: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub status: GameStatus,
}

/// Plays a random game from the opening position.
pub fn play_random_game(config: PlayoutConfig) -> ChessResult<PlayoutSummary> {
    let mut game_state = GameState::new_game();
    play_random_moves(&mut game_state, config)
}

/// Plays random legal moves on `game_state` until the game ends or
/// `config.max_plies` moves have been made. The moves stay applied.
pub fn play_random_moves(
    game_state: &mut GameState,
    config: PlayoutConfig,
) -> ChessResult<PlayoutSummary> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut summary = PlayoutSummary {
        plies: 0,
        captures: 0,
        en_passant: 0,
        castles: 0,
        promotions: 0,
        status: game_state.status(),
    };

    while summary.plies < config.max_plies {
        let legal_moves = game_state.legal_moves();
        let Some(candidate) = legal_moves.choose(&mut rng) else {
            break;
        };
        let mv = game_state.apply_move(candidate)?;

        summary.plies += 1;
        if mv.is_capture() {
            summary.captures += 1;
        }
        if mv.is_en_passant {
            summary.en_passant += 1;
        }
        if mv.is_castling {
            summary.castles += 1;
        }
        if mv.is_promotion {
            summary.promotions += 1;
        }
    }

    // Refresh the terminal flags for the final position.
    game_state.legal_moves();
    summary.status = game_state.status();
    debug!(seed = config.seed, plies = summary.plies, status = ?summary.status, "playout finished");
    Ok(summary)
}
