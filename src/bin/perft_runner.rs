//! Perft and random-playout diagnostics runner.
//!
//! Usage:
//! `cargo run --release --bin perft_runner`
//! `cargo run --release --bin perft_runner -- --depth 3 --plies 300 --seed 9`
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::time::Instant;

use tracing::info;
use tracing_subscriber::EnvFilter;

use deca_chess::game_state::chess_types::GameState;
use deca_chess::move_generation::move_generator::ChessResult;
use deca_chess::move_generation::perft::{perft, perft_divide};
use deca_chess::utils::random_playout::{play_random_game, PlayoutConfig};
use deca_chess::utils::render_game_state::render_game_state;

fn parse_arg<T: std::str::FromStr>(flag: &str, default: T) -> T {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<T>() {
                return v;
            }
        }
    }
    default
}

fn main() -> ChessResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let depth = parse_arg::<u8>("--depth", 2).max(1);
    let defaults = PlayoutConfig::default();
    let config = PlayoutConfig {
        max_plies: parse_arg("--plies", defaults.max_plies),
        seed: parse_arg("--seed", defaults.seed),
    };

    let mut game = GameState::new_game();
    println!("{}", render_game_state(&game));

    for (mv, nodes) in perft_divide(&mut game, depth) {
        println!("{mv}: {nodes}");
    }

    let started = Instant::now();
    let counts = perft(&mut game, depth);
    let elapsed_ms = started.elapsed().as_millis();
    info!(
        depth,
        nodes = counts.nodes,
        captures = counts.captures,
        en_passant = counts.en_passant,
        castles = counts.castles,
        promotions = counts.promotions,
        checkmates = counts.checkmates,
        elapsed_ms,
        "perft"
    );

    let summary = play_random_game(config)?;
    info!(
        seed = config.seed,
        plies = summary.plies,
        captures = summary.captures,
        castles = summary.castles,
        promotions = summary.promotions,
        status = ?summary.status,
        "random playout"
    );
    Ok(())
}
