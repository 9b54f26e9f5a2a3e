//! Best score tracking
//!
//! Lives in memory for the lifetime of the process only; nothing is written to disk.

use serde::{Deserialize, Serialize};

use crate::halves_to_points;

/// Best run score seen so far, in half points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScore {
    halves: u32,
}

impl HighScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished run. Returns true if it set a new best.
    pub fn record(&mut self, run_halves: u32) -> bool {
        if run_halves > self.halves {
            log::info!(
                "New high score: {} (was {})",
                halves_to_points(run_halves),
                halves_to_points(self.halves)
            );
            self.halves = run_halves;
            true
        } else {
            false
        }
    }

    /// Raw best score in half points
    pub fn halves(&self) -> u32 {
        self.halves
    }

    /// Best score truncated to whole points (for display)
    pub fn points(&self) -> u32 {
        halves_to_points(self.halves)
    }
}
