//! Game state and core simulation types
//!
//! Everything a run mutates lives in [`GameState`]. Entities get their sizes and
//! start positions from [`SimConfig`] at construction.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::difficulty::{Difficulty, DifficultySpeeds};
use crate::highscores::HighScore;
use crate::{Rect, halves_to_points};

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Difficulty not chosen yet; nothing moves
    AwaitingStart,
    /// Active gameplay
    Running,
    /// Run ended; waiting for a jump to restart
    Over,
}

impl GamePhase {
    /// Allowed transitions. Anything else is a logic error and gets rejected.
    pub fn can_transition_to(self, next: GamePhase) -> bool {
        matches!(
            (self, next),
            (GamePhase::AwaitingStart, GamePhase::Running)
                | (GamePhase::Running, GamePhase::Over)
                | (GamePhase::Over, GamePhase::Running)
        )
    }

    pub fn is_running(self) -> bool {
        self == GamePhase::Running
    }
}

/// Discrete player input. Only one key matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Jump,
}

impl InputEvent {
    /// Map a key name from the windowing layer; every key but space is ignored
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            " " => Some(InputEvent::Jump),
            k if k.eq_ignore_ascii_case("space") => Some(InputEvent::Jump),
            _ => None,
        }
    }
}

/// The player-controlled entity. Only `pos.y` changes during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub pos: IVec2,
    pub size: IVec2,
    pub vel_y: i32,
}

impl Player {
    pub fn new(start: IVec2, size: IVec2) -> Self {
        Self {
            pos: start,
            size,
            vel_y: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Move back to the start point and drop all momentum
    pub fn reset(&mut self, start: IVec2) {
        self.pos = start;
        self.vel_y = 0;
    }
}

/// Which half of a gate an obstacle is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleRole {
    Top,
    Bottom,
}

/// One pipe of a gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub role: ObstacleRole,
    pub pos: IVec2,
    pub size: IVec2,
    /// Set once the player's x is past the right edge; never cleared
    pub passed: bool,
}

impl Obstacle {
    pub fn new(role: ObstacleRole, pos: IVec2, size: IVec2) -> Self {
        Self {
            role,
            pos,
            size,
            passed: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    /// Fully past the left edge of the board
    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.right() < 0
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: SimConfig,
    pub phase: GamePhase,
    /// None until a difficulty is selected
    pub difficulty: Option<Difficulty>,
    pub speeds: DifficultySpeeds,
    pub player: Player,
    /// Live obstacles in spawn order (left to right)
    pub obstacles: Vec<Obstacle>,
    /// Horizontal obstacle velocity per tick (negative)
    pub scroll_speed: i32,
    /// Whole-point score that last sped the scroll up (0 = none this run)
    pub last_speedup_at: u32,
    /// Current run score in half points
    pub score_halves: u32,
    pub high_score: HighScore,
    /// Simulation tick counter (all runs)
    pub time_ticks: u64,
    /// Seed of the spawn RNG
    pub seed: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a state with a per-process random spawn seed
    pub fn new(config: SimConfig) -> Self {
        Self::with_seed(config, rand::random())
    }

    /// Create a state whose obstacle layout is reproducible
    pub fn with_seed(config: SimConfig, seed: u64) -> Self {
        let player = Player::new(config.player_start, config.player_size);
        let speeds = Difficulty::default().default_speeds();
        Self {
            phase: GamePhase::AwaitingStart,
            difficulty: None,
            speeds,
            player,
            obstacles: Vec::new(),
            scroll_speed: speeds.base,
            last_speedup_at: 0,
            score_halves: 0,
            high_score: HighScore::new(),
            time_ticks: 0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            config,
        }
    }

    /// Move to `next` if the transition table allows it
    fn transition(&mut self, next: GamePhase) -> bool {
        if !self.phase.can_transition_to(next) {
            log::warn!("Rejected phase transition {:?} -> {:?}", self.phase, next);
            return false;
        }
        self.phase = next;
        true
    }

    /// Fix the difficulty and start the first run
    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if self.phase != GamePhase::AwaitingStart {
            log::warn!("Difficulty already chosen, ignoring {}", difficulty);
            return false;
        }
        self.difficulty = Some(difficulty);
        self.speeds = self.config.speeds_for(difficulty);
        self.scroll_speed = self.speeds.base;
        let started = self.transition(GamePhase::Running);
        log::info!(
            "Run started on {} (speed {}, max {})",
            difficulty,
            self.speeds.base,
            self.speeds.max
        );
        started
    }

    /// End the current run and fold its score into the high score
    pub fn end_run(&mut self) {
        if !self.transition(GamePhase::Over) {
            return;
        }
        self.high_score.record(self.score_halves);
        log::info!(
            "Game over: score {}, best {}",
            self.score_points(),
            self.high_score.points()
        );
    }

    /// Reinitialize the run in place and resume play
    ///
    /// Only an ended run can be reset; the first run starts through
    /// [`GameState::select_difficulty`].
    pub fn reset_run(&mut self) {
        if self.phase != GamePhase::Over {
            log::warn!("Reset ignored while {:?}", self.phase);
            return;
        }
        if !self.transition(GamePhase::Running) {
            return;
        }
        self.player.reset(self.config.player_start);
        self.scroll_speed = self.speeds.base;
        self.last_speedup_at = 0;
        self.obstacles.clear();
        self.score_halves = 0;
        log::info!("Run reset");
    }

    /// Above the top edge or below the bottom edge of the board
    pub fn player_out_of_bounds(&self) -> bool {
        self.player.pos.y > self.config.board.y || self.player.pos.y < 0
    }

    /// Score truncated to whole points
    pub fn score_points(&self) -> u32 {
        halves_to_points(self.score_halves)
    }

    /// Exact score including the trailing half
    pub fn score(&self) -> f64 {
        f64::from(self.score_halves) / 2.0
    }
}
