//! Fixed timestep simulation tick
//!
//! Core game loop that advances the run by one frame, plus input handling.

use super::collision::any_collision;
use super::state::{GamePhase, GameState, InputEvent, Obstacle, Player};
use crate::consts::{HALVES_PER_OBSTACLE, SPEEDUP_EVERY};
use crate::halves_to_points;

/// Advance the game state by one frame. No-op unless running.
///
/// Order: physics, collision, scoring, bounds check, pruning. A collision does
/// not cut the frame short; scoring and pruning still run before the run ends.
pub fn tick(state: &mut GameState) {
    if !state.phase.is_running() {
        return;
    }

    state.time_ticks += 1;

    integrate(
        &mut state.player,
        &mut state.obstacles,
        state.config.gravity,
        state.scroll_speed,
    );

    let collided = any_collision(&state.player, &state.obstacles);

    award_passes(state);

    let out_of_bounds = state.player_out_of_bounds();

    prune_obstacles(&mut state.obstacles);

    log::trace!(
        "tick {}: y={} vy={} obstacles={} score={}",
        state.time_ticks,
        state.player.pos.y,
        state.player.vel_y,
        state.obstacles.len(),
        state.score_halves
    );

    if collided || out_of_bounds {
        log::debug!(
            "Run ending (collision: {}, out of bounds: {})",
            collided,
            out_of_bounds
        );
        state.end_run();
    }
}

/// Apply gravity to the player and scroll every obstacle. No clamping.
pub fn integrate(player: &mut Player, obstacles: &mut [Obstacle], gravity: i32, scroll_speed: i32) {
    player.vel_y += gravity;
    player.pos.y += player.vel_y;

    for obstacle in obstacles.iter_mut() {
        obstacle.pos.x += scroll_speed;
    }
}

/// Score every obstacle the player has just cleared and escalate the scroll speed.
///
/// Each obstacle scores once. The first time the truncated score lands on a
/// positive multiple of [`SPEEDUP_EVERY`], the scroll speeds up by one, until the
/// difficulty's max is reached. Returns the number of obstacles scored.
pub fn award_passes(state: &mut GameState) -> u32 {
    let player_x = state.player.pos.x;
    let max_speed = state.speeds.max;
    let mut scored = 0;

    for obstacle in state.obstacles.iter_mut() {
        if obstacle.passed || player_x <= obstacle.right() {
            continue;
        }
        obstacle.passed = true;
        state.score_halves += HALVES_PER_OBSTACLE;
        scored += 1;

        let points = halves_to_points(state.score_halves);
        if points > 0
            && points.is_multiple_of(SPEEDUP_EVERY)
            && points != state.last_speedup_at
            && state.scroll_speed > max_speed
        {
            state.scroll_speed -= 1;
            state.last_speedup_at = points;
            log::debug!("Score {} reached, scroll speed now {}", points, state.scroll_speed);
        }
    }

    scored
}

/// Drop obstacles that have fully left the board, keeping order
pub fn prune_obstacles(obstacles: &mut Vec<Obstacle>) {
    obstacles.retain(|obstacle| !obstacle.is_offscreen());
}

/// Feed one input event into the state machine
pub fn handle_input(state: &mut GameState, input: InputEvent) {
    match (input, state.phase) {
        (InputEvent::Jump, GamePhase::Running) => {
            state.player.vel_y = state.config.jump_velocity;
        }
        (InputEvent::Jump, GamePhase::Over) => state.reset_run(),
        (InputEvent::Jump, GamePhase::AwaitingStart) => {}
    }
}
