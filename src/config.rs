//! Simulation tuning
//!
//! Board geometry, entity sizes and physics constants. Everything the entities
//! need is passed in through this struct; nothing reads enclosing state.
//! Stored as JSON so balance can be changed without a rebuild.

use std::collections::HashMap;
use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::difficulty::{Difficulty, DifficultySpeeds};

/// Errors from loading or validating a [`SimConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Board size in pixels
    pub board: IVec2,
    /// Player spawn point (also the reset point)
    pub player_start: IVec2,
    pub player_size: IVec2,
    pub pipe_size: IVec2,
    /// Margin keeping each pipe's end on screen; bounds the random top-pipe offset
    pub pipe_edge_margin: i32,
    /// Added to the player's vertical velocity every tick
    pub gravity: i32,
    /// Vertical velocity set by a jump
    pub jump_velocity: i32,
    /// Per-difficulty overrides of the built-in speeds
    pub speeds: HashMap<Difficulty, DifficultySpeeds>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            board: IVec2::new(BOARD_WIDTH, BOARD_HEIGHT),
            player_start: IVec2::new(PLAYER_START_X, PLAYER_START_Y),
            player_size: IVec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            pipe_size: IVec2::new(PIPE_WIDTH, PIPE_HEIGHT),
            pipe_edge_margin: PIPE_EDGE_MARGIN,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            speeds: HashMap::new(),
        }
    }
}

impl SimConfig {
    /// Vertical gap between a top pipe's bottom edge and its bottom pipe
    pub fn opening_space(&self) -> i32 {
        self.board.y / 4
    }

    /// Inclusive range of top-pipe y positions
    pub fn top_pipe_range(&self) -> (i32, i32) {
        (-self.pipe_size.y + self.pipe_edge_margin, -self.pipe_edge_margin)
    }

    /// Speeds for a difficulty, honouring overrides
    pub fn speeds_for(&self, difficulty: Difficulty) -> DifficultySpeeds {
        self.speeds
            .get(&difficulty)
            .copied()
            .unwrap_or_else(|| difficulty.default_speeds())
    }

    /// Check invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.x <= 0 || self.board.y <= 0 {
            return Err(ConfigError::Invalid(format!(
                "board size must be positive, got {}x{}",
                self.board.x, self.board.y
            )));
        }
        if self.player_size.x <= 0 || self.player_size.y <= 0 {
            return Err(ConfigError::Invalid("player size must be positive".into()));
        }
        if self.pipe_size.x <= 0 || self.pipe_size.y <= 0 {
            return Err(ConfigError::Invalid("pipe size must be positive".into()));
        }
        let (min_y, max_y) = self.top_pipe_range();
        if min_y > max_y {
            return Err(ConfigError::Invalid(format!(
                "pipe edge margin {} leaves an empty spawn range [{}, {}]",
                self.pipe_edge_margin, min_y, max_y
            )));
        }
        for (difficulty, speeds) in &self.speeds {
            if speeds.base >= 0 {
                return Err(ConfigError::Invalid(format!(
                    "{} base speed must be negative, got {}",
                    difficulty, speeds.base
                )));
            }
            if speeds.max > speeds.base {
                return Err(ConfigError::Invalid(format!(
                    "{} max speed {} is slower than base {}",
                    difficulty, speeds.max, speeds.base
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save a config file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        log::info!("Config saved to {}", path.display());
        Ok(())
    }
}
