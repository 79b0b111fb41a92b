//! Engine-vs-engine self-play runner.
//!
//! Run with:
//! `cargo run --release --bin self_play`
//! `cargo run --release --bin self_play -- --depth 4 --seed 7 --plies 120`
//!
//! Set `RUST_LOG=sable_chess=debug` to see every move as it is applied.

use sable_chess::errors::{ChessError, ChessResult};
use sable_chess::utils::engine_match_harness::{play_match, MatchConfig};
use sable_chess::utils::render_game_state::render_game_state;
use tracing_subscriber::EnvFilter;

fn main() -> ChessResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = MatchConfig::default();
    let mut args = std::env::args().skip(1);
    while let Some(flag) = args.next() {
        let value = args.next();
        match flag.as_str() {
            "--depth" => {
                let depth = parse_arg(&flag, value)?;
                config.light_config.max_depth = depth;
                config.dark_config.max_depth = depth;
            }
            "--seed" => {
                let seed: u64 = parse_arg(&flag, value)?;
                config.seed = seed;
                config.light_config.seed = seed;
                config.dark_config.seed = seed.wrapping_add(1);
            }
            "--plies" => config.max_plies = parse_arg(&flag, value)?,
            "--opening" => config.opening_plies = parse_arg(&flag, value)?,
            other => return Err(ChessError::Engine(format!("unknown argument: {other}"))),
        }
    }

    let result = play_match(&config)?;

    println!("{}", render_game_state(&result.final_state));
    println!("fen: {}", result.final_state.get_fen());
    println!("opening: {}", result.opening_moves_lan.join(" "));
    println!("moves: {}", result.played_moves_lan.join(" "));
    println!("outcome: {:?}", result.outcome);
    println!(
        "think time: light {:.3}s dark {:.3}s",
        result.light_think_time.as_secs_f64(),
        result.dark_think_time.as_secs_f64()
    );
    Ok(())
}

fn parse_arg<T: std::str::FromStr>(flag: &str, value: Option<String>) -> ChessResult<T> {
    value
        .as_deref()
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| ChessError::Engine(format!("{flag} expects a numeric value")))
}
