use std::time::Duration;

use glam::IVec2;

use flappy_sim::sim::{
    GamePhase, GameState, InputEvent, Obstacle, ObstacleRole, award_passes, handle_input,
    make_pair, spawn_pair_at, tick,
};
use flappy_sim::{Difficulty, Session, SimConfig};

fn running(config: SimConfig, difficulty: Difficulty) -> GameState {
    let mut state = GameState::with_seed(config, 2024);
    state.select_difficulty(difficulty);
    state
}

/// Put a gate behind the player and score it
fn clear_one_pair(state: &mut GameState) {
    for mut obstacle in make_pair(&state.config, -250) {
        obstacle.pos.x = -30;
        state.obstacles.push(obstacle);
    }
    award_passes(state);
    state.obstacles.clear();
}

fn weightless() -> SimConfig {
    SimConfig {
        gravity: 0,
        ..SimConfig::default()
    }
}

#[test]
fn first_tick_from_start_position() {
    let mut state = running(SimConfig::default(), Difficulty::Medium);
    assert_eq!(state.config.board, IVec2::new(360, 640));
    assert_eq!(state.player.pos, IVec2::new(45, 320));
    assert_eq!(state.player.size, IVec2::new(34, 24));
    assert_eq!(state.player.vel_y, 0);

    tick(&mut state);

    assert_eq!(state.player.vel_y, 1);
    assert_eq!(state.player.pos.y, 321);
}

#[test]
fn medium_speeds_up_once_on_reaching_ten() {
    let mut state = running(SimConfig::default(), Difficulty::Medium);
    assert_eq!(state.scroll_speed, -4);

    for _ in 0..9 {
        clear_one_pair(&mut state);
    }
    // Top pipe of the tenth gate: 9.5 points
    state.obstacles.push(Obstacle::new(
        ObstacleRole::Top,
        IVec2::new(-30, -250),
        IVec2::new(64, 512),
    ));
    award_passes(&mut state);
    state.obstacles.clear();
    assert_eq!(state.score_halves, 19);
    assert_eq!(state.scroll_speed, -4);

    // Bottom pipe: 10.0 points
    state.obstacles.push(Obstacle::new(
        ObstacleRole::Bottom,
        IVec2::new(-30, 422),
        IVec2::new(64, 512),
    ));
    award_passes(&mut state);
    state.obstacles.clear();
    assert_eq!(state.score_points(), 10);
    assert_eq!(state.scroll_speed, -5);

    // 10.5 and 11.0 stay on the same step (the pair scores one half at a time)
    clear_one_pair(&mut state);
    assert_eq!(state.score(), 11.0);
    assert_eq!(state.scroll_speed, -5);

    state.obstacles.push(Obstacle::new(
        ObstacleRole::Top,
        IVec2::new(-30, -250),
        IVec2::new(64, 512),
    ));
    award_passes(&mut state);
    assert_eq!(state.score(), 11.5);
    assert_eq!(state.scroll_speed, -5);
}

#[test]
fn speedup_steps_are_per_multiple_of_ten() {
    let mut state = running(SimConfig::default(), Difficulty::Medium);
    let mut history = Vec::new();
    for _ in 0..30 {
        clear_one_pair(&mut state);
        history.push((state.score_points(), state.scroll_speed));
    }
    assert_eq!(history[8], (9, -4));
    assert_eq!(history[9], (10, -5));
    assert_eq!(history[18], (19, -5));
    assert_eq!(history[19], (20, -6));
    assert_eq!(history[29], (30, -7));
}

#[test]
fn speed_never_passes_the_cap() {
    for difficulty in Difficulty::ALL {
        let mut state = running(SimConfig::default(), difficulty);
        let speeds = difficulty.default_speeds();
        for _ in 0..300 {
            clear_one_pair(&mut state);
            assert!(state.scroll_speed >= speeds.max);
            assert!(state.scroll_speed <= speeds.base);
        }
        assert_eq!(state.scroll_speed, speeds.max);
    }
}

#[test]
fn hard_cap_can_be_configured() {
    let config =
        SimConfig::from_json(r#"{ "speeds": { "Hard": { "base": -5, "max": -8 } } }"#).unwrap();
    let mut state = running(config, Difficulty::Hard);
    for _ in 0..300 {
        clear_one_pair(&mut state);
    }
    assert_eq!(state.scroll_speed, -8);
}

#[test]
fn jump_while_over_resets_the_run() {
    let mut state = running(SimConfig::default(), Difficulty::Medium);
    spawn_pair_at(&mut state, -200);
    state.score_halves = 6;
    state.scroll_speed = -6;

    while state.phase == GamePhase::Running {
        tick(&mut state);
    }
    assert_eq!(state.phase, GamePhase::Over);
    assert_eq!(state.obstacles.len(), 2);
    assert_eq!(state.high_score.points(), 3);

    handle_input(&mut state, InputEvent::Jump);

    assert_eq!(state.phase, GamePhase::Running);
    assert_eq!(state.score_halves, 0);
    assert_eq!(state.player.pos, IVec2::new(45, 320));
    assert_eq!(state.player.vel_y, 0);
    assert_eq!(state.scroll_speed, -4);
    assert_eq!(state.obstacles.len(), 0);
    assert_eq!(state.high_score.points(), 3);
}

#[test]
fn best_score_survives_a_worse_run() {
    let mut state = running(SimConfig::default(), Difficulty::Easy);
    for _ in 0..5 {
        clear_one_pair(&mut state);
    }
    state.end_run();
    handle_input(&mut state, InputEvent::Jump);

    for _ in 0..3 {
        clear_one_pair(&mut state);
    }
    state.end_run();

    assert_eq!(state.score_points(), 3);
    assert_eq!(state.high_score.points(), 5);
    assert_eq!(state.snapshot().best, 5);
}

#[test]
fn obstacle_pruned_once_fully_off_screen() {
    let mut state = running(weightless(), Difficulty::Medium);
    // Opening spans y 212..372; the player (320..344) flies through it
    spawn_pair_at(&mut state, -300);

    // ceil((360 + 64) / 4) = 106 ticks leaves the right edge exactly at 0
    for _ in 0..106 {
        tick(&mut state);
    }
    assert_eq!(state.phase, GamePhase::Running);
    assert_eq!(state.obstacles.len(), 2);
    assert!(state.obstacles.iter().all(|o| o.right() == 0));
    assert_eq!(state.score_halves, 2);

    tick(&mut state);
    assert!(state.obstacles.is_empty());
}

#[test]
fn hitting_a_pipe_ends_the_run() {
    let mut state = running(weightless(), Difficulty::Medium);
    // Opening spans y 400..560; the player at 320 hits the top pipe
    spawn_pair_at(&mut state, -112);

    let mut ticks = 0;
    while state.phase == GamePhase::Running {
        tick(&mut state);
        ticks += 1;
    }
    // Pipe's left edge must pass the player's right edge (79): 360 - 4t < 79
    assert_eq!(ticks, 71);
    assert!(state.snapshot().over);
}

#[test]
fn session_spawns_on_its_own_clock() {
    let mut session = Session::new(GameState::with_seed(weightless(), 5));
    session.select_difficulty(Difficulty::Medium);

    for _ in 0..10 {
        session.advance(Duration::from_millis(250));
    }

    let snap = session.snapshot();
    assert_eq!(snap.phase, GamePhase::Running);
    assert_eq!(snap.time_ticks, 150);
    assert_eq!(snap.obstacles.len(), 2);
    // Spawned after tick 90, scrolled for 60 ticks since
    assert!(snap.obstacles.iter().all(|o| o.rect.pos.x == 120));
}

#[test]
fn session_ignores_jump_before_difficulty() {
    let mut session = Session::new(GameState::with_seed(SimConfig::default(), 5));
    session.input(InputEvent::Jump);
    assert_eq!(session.advance(Duration::from_millis(250)), 0);
    assert_eq!(session.state().phase, GamePhase::AwaitingStart);
    assert_eq!(session.state().player.vel_y, 0);
}
