//! Collision detection
//!
//! Axis-aligned boxes only. Overlap uses strict inequalities, so boxes that merely
//! share an edge do not collide.

use super::state::{Obstacle, Player};
use crate::Rect;

/// True if the two rectangles overlap with positive area
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

#[inline]
pub fn player_hits(player: &Player, obstacle: &Obstacle) -> bool {
    rects_overlap(&player.rect(), &obstacle.rect())
}

/// True if the player overlaps any live obstacle
pub fn any_collision(player: &Player, obstacles: &[Obstacle]) -> bool {
    obstacles.iter().any(|obstacle| player_hits(player, obstacle))
}
