//! Flappy Sim - simulation core for a gated-obstacle reflex game
//!
//! Core modules:
//! - `sim`: Per-tick simulation (physics, spawning, collisions, scoring, phases)
//! - `driver`: Serialized tick/spawn cadence feeding one update path
//! - `difficulty`: Speed presets chosen before a run
//! - `config`: Data-driven board and physics tuning
//! - `highscores`: Best score for the current process

pub mod config;
pub mod difficulty;
pub mod driver;
pub mod highscores;
pub mod sim;

pub use config::{ConfigError, SimConfig};
pub use difficulty::{Difficulty, DifficultySpeeds};
pub use driver::{Cadence, Session, SharedSession, SimEvent};
pub use highscores::HighScore;

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Board dimensions (pixels)
    pub const BOARD_WIDTH: i32 = 360;
    pub const BOARD_HEIGHT: i32 = 640;

    /// Player start is an eighth of the way in, vertically centered
    pub const PLAYER_START_X: i32 = BOARD_WIDTH / 8;
    pub const PLAYER_START_Y: i32 = BOARD_HEIGHT / 2;
    pub const PLAYER_WIDTH: i32 = 34;
    pub const PLAYER_HEIGHT: i32 = 24;

    /// Obstacle (pipe) dimensions
    pub const PIPE_WIDTH: i32 = 64;
    pub const PIPE_HEIGHT: i32 = 512;
    /// Distance kept between the top pipe's top edge bounds and the board edge
    pub const PIPE_EDGE_MARGIN: i32 = 100;

    /// Downward acceleration per tick
    pub const GRAVITY: i32 = 1;
    /// Vertical velocity set by a jump (replaces current velocity)
    pub const JUMP_VELOCITY: i32 = -9;

    /// Score awarded per obstacle crossed, in half points
    pub const HALVES_PER_OBSTACLE: u32 = 1;
    /// Scroll speed steps up every time the truncated score lands on a multiple of this
    pub const SPEEDUP_EVERY: u32 = 10;

    /// Fixed simulation tick (60 Hz)
    pub const TICK_PERIOD: Duration = Duration::from_nanos(1_000_000_000 / 60);
    /// Pair spawn cadence
    pub const SPAWN_PERIOD: Duration = Duration::from_millis(1500);
    /// Largest frame delta accepted by the driver (prevents spiral of death)
    pub const MAX_FRAME_DT: Duration = Duration::from_millis(250);
}

/// Axis-aligned integer rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub const fn new(pos: IVec2, size: IVec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }
}

/// Convert half points to the whole score shown on screen (truncating)
#[inline]
pub fn halves_to_points(halves: u32) -> u32 {
    halves / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(IVec2::new(45, 320), IVec2::new(34, 24));
        assert_eq!(r.left(), 45);
        assert_eq!(r.right(), 79);
        assert_eq!(r.top(), 320);
        assert_eq!(r.bottom(), 344);
    }

    #[test]
    fn test_halves_truncate() {
        assert_eq!(halves_to_points(0), 0);
        assert_eq!(halves_to_points(1), 0);
        assert_eq!(halves_to_points(21), 10);
    }

    #[test]
    fn test_tick_period_is_sixty_hz() {
        assert_eq!(consts::TICK_PERIOD.as_nanos(), 16_666_666);
    }
}
