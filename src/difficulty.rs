//! Difficulty presets
//!
//! Chosen once before a run starts. Each preset fixes the base scroll speed and
//! the fastest speed the run can escalate to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Difficulty levels offered by the selection prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Horizontal scroll speeds for a run (negative = leftward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultySpeeds {
    /// Speed at run start and after every reset
    pub base: i32,
    /// Fastest speed reachable through score escalation
    pub max: i32,
}

impl DifficultySpeeds {
    pub const fn new(base: i32, max: i32) -> Self {
        Self { base, max }
    }
}

/// Error returned when a difficulty name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
pub struct UnknownDifficulty(pub String);

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Built-in speeds for this preset
    pub fn default_speeds(&self) -> DifficultySpeeds {
        match self {
            Difficulty::Easy => DifficultySpeeds::new(-3, -6),
            Difficulty::Medium => DifficultySpeeds::new(-4, -8),
            Difficulty::Hard => DifficultySpeeds::new(-5, -10),
        }
    }

    /// Map a selection index from the prompt (0 = Easy, 1 = Medium, 2 = Hard).
    ///
    /// A dismissed prompt (`None`) or an out-of-range index falls back to Medium.
    pub fn from_choice(choice: Option<usize>) -> Self {
        match choice.and_then(|i| Self::ALL.get(i).copied()) {
            Some(difficulty) => difficulty,
            None => {
                log::warn!("No valid difficulty chosen ({:?}), using Medium", choice);
                Difficulty::Medium
            }
        }
    }

    /// Parse a name, falling back to Medium when it is not recognised
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|err: UnknownDifficulty| {
            log::warn!("{}, using Medium", err);
            Difficulty::Medium
        })
    }
}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" | "med" | "normal" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_speeds() {
        assert_eq!(Difficulty::Easy.default_speeds(), DifficultySpeeds::new(-3, -6));
        assert_eq!(Difficulty::Medium.default_speeds(), DifficultySpeeds::new(-4, -8));
        assert_eq!(Difficulty::Hard.default_speeds(), DifficultySpeeds::new(-5, -10));
    }

    #[test]
    fn test_from_choice_falls_back_to_medium() {
        assert_eq!(Difficulty::from_choice(Some(0)), Difficulty::Easy);
        assert_eq!(Difficulty::from_choice(Some(2)), Difficulty::Hard);
        assert_eq!(Difficulty::from_choice(None), Difficulty::Medium);
        assert_eq!(Difficulty::from_choice(Some(7)), Difficulty::Medium);
    }

    #[test]
    fn test_parse() {
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(" easy ".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert!("nightmare".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::parse_or_default("nightmare"), Difficulty::Medium);
    }
}
