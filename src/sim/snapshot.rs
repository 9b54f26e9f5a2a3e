//! Read-only view of the game for the rendering layer
//!
//! Captured between updates and owned by the caller, so drawing never touches
//! live simulation state.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState, ObstacleRole};
use crate::Rect;

/// Image the renderer should use for an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteId {
    Background,
    Player,
    TopPipe,
    BottomPipe,
}

impl From<ObstacleRole> for SpriteId {
    fn from(role: ObstacleRole) -> Self {
        match role {
            ObstacleRole::Top => SpriteId::TopPipe,
            ObstacleRole::Bottom => SpriteId::BottomPipe,
        }
    }
}

/// A rectangle to draw with a given sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteRect {
    pub sprite: SpriteId,
    pub rect: Rect,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub background: SpriteId,
    pub board: IVec2,
    pub player: SpriteRect,
    /// Obstacles in spawn order
    pub obstacles: Vec<SpriteRect>,
    /// Current score, truncated
    pub score: u32,
    /// Best score this process, truncated
    pub best: u32,
    /// Show the end-of-run text
    pub over: bool,
    pub phase: GamePhase,
    pub time_ticks: u64,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            background: SpriteId::Background,
            board: state.config.board,
            player: SpriteRect {
                sprite: SpriteId::Player,
                rect: state.player.rect(),
            },
            obstacles: state
                .obstacles
                .iter()
                .map(|o| SpriteRect {
                    sprite: o.role.into(),
                    rect: o.rect(),
                })
                .collect(),
            score: state.score_points(),
            best: state.high_score.points(),
            over: state.phase == GamePhase::Over,
            phase: state.phase,
            time_ticks: state.time_ticks,
        }
    }
}

impl GameState {
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(self)
    }
}
