//! Simulation module
//!
//! All gameplay logic lives here:
//! - Fixed timestep only; one call to `tick` is one frame
//! - Randomness only in obstacle spawning
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{any_collision, player_hits, rects_overlap};
pub use snapshot::{RenderSnapshot, SpriteId, SpriteRect};
pub use spawn::{make_pair, random_top_y, spawn_pair, spawn_pair_at};
pub use state::{GamePhase, GameState, InputEvent, Obstacle, ObstacleRole, Player};
pub use tick::{award_passes, handle_input, integrate, prune_obstacles, tick};
