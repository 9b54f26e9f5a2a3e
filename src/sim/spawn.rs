//! Obstacle pair spawning
//!
//! A gate is a top and bottom pipe sharing one random vertical offset, with a
//! fixed opening between them. Both enter at the right edge of the board.

use glam::IVec2;
use rand::Rng;

use super::state::{GameState, Obstacle, ObstacleRole};
use crate::config::SimConfig;

/// Draw a top-pipe y uniformly from the inclusive spawn range
pub fn random_top_y<R: Rng + ?Sized>(config: &SimConfig, rng: &mut R) -> i32 {
    let (min_y, max_y) = config.top_pipe_range();
    rng.random_range(min_y..=max_y)
}

/// Build a gate whose top pipe sits at `top_y`
pub fn make_pair(config: &SimConfig, top_y: i32) -> [Obstacle; 2] {
    let x = config.board.x;
    let bottom_y = top_y + config.pipe_size.y + config.opening_space();
    [
        Obstacle::new(ObstacleRole::Top, IVec2::new(x, top_y), config.pipe_size),
        Obstacle::new(ObstacleRole::Bottom, IVec2::new(x, bottom_y), config.pipe_size),
    ]
}

/// Append a gate at `top_y`. No-op unless running.
pub fn spawn_pair_at(state: &mut GameState, top_y: i32) -> bool {
    if !state.phase.is_running() {
        return false;
    }
    state.obstacles.extend(make_pair(&state.config, top_y));
    log::debug!(
        "Spawned gate at top y {} ({} obstacles live)",
        top_y,
        state.obstacles.len()
    );
    true
}

/// Append a gate at a random offset drawn from the state's RNG. No-op unless running.
pub fn spawn_pair(state: &mut GameState) -> bool {
    if !state.phase.is_running() {
        return false;
    }
    let top_y = random_top_y(&state.config, &mut state.rng);
    spawn_pair_at(state, top_y)
}
