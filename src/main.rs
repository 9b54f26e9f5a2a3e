//! Flappy Sim entry point
//!
//! Headless runner: drives the simulation through the serialized session at
//! 60 Hz of simulated time, with a simple autopilot standing in for the keyboard.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use flappy_sim::consts::TICK_PERIOD;
use flappy_sim::sim::{GamePhase, GameState, InputEvent, ObstacleRole};
use flappy_sim::{Difficulty, Session, SimConfig};

#[derive(Parser, Debug)]
#[command(name = "flappy-sim")]
#[command(about = "Headless runner for the flappy simulation core")]
struct Cli {
    /// Difficulty preset (easy, medium, hard); unknown names fall back to medium
    #[arg(long, default_value = "medium")]
    difficulty: String,
    /// Simulated seconds to run
    #[arg(long, default_value_t = 60.0)]
    seconds: f64,
    /// Spawn RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// JSON tuning file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Restart this many times after a game over
    #[arg(long, default_value_t = 2)]
    restarts: u32,
    /// Print the final frame snapshot as JSON
    #[arg(long)]
    json: bool,
}

/// Jump when falling below the middle of the next gate's opening
fn wants_jump(state: &GameState) -> bool {
    let player = &state.player;
    let target = state
        .obstacles
        .iter()
        .find(|o| o.role == ObstacleRole::Top && o.right() >= player.pos.x)
        .map(|top| top.pos.y + top.size.y + state.config.opening_space() / 2)
        .unwrap_or(state.config.board.y / 2);
    player.vel_y >= 0 && player.pos.y + player.size.y / 2 > target
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SimConfig::default(),
    };
    let state = match cli.seed {
        Some(seed) => GameState::with_seed(config, seed),
        None => GameState::new(config),
    };
    log::info!("Flappy Sim (headless) starting, seed {}", state.seed);

    let mut session = Session::new(state);
    session.select_difficulty(Difficulty::parse_or_default(&cli.difficulty));

    let frames = (cli.seconds.max(0.0) / TICK_PERIOD.as_secs_f64()).round() as u64;
    let mut restarts_left = cli.restarts;
    let mut runs = 1;

    for _ in 0..frames {
        match session.state().phase {
            GamePhase::Running => {
                if wants_jump(session.state()) {
                    session.input(InputEvent::Jump);
                }
            }
            GamePhase::Over if restarts_left > 0 => {
                restarts_left -= 1;
                runs += 1;
                session.input(InputEvent::Jump);
            }
            GamePhase::Over | GamePhase::AwaitingStart => break,
        }
        session.advance(TICK_PERIOD);
    }

    let snapshot = session.snapshot();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!(
            "runs: {}  score: {}  best: {}  over: {}  ticks: {}",
            runs, snapshot.score, snapshot.best, snapshot.over, snapshot.time_ticks
        );
    }

    Ok(())
}
