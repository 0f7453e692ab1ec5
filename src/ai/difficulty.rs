use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Computer opponent strength. Trivial plays a uniformly random legal move;
/// the other tiers run minimax at a fixed depth.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[serde(alias = "easy")]
    Trivial,
    #[default]
    Low,
    #[serde(alias = "hard")]
    Medium,
    #[serde(alias = "insane")]
    High,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Trivial,
        Difficulty::Low,
        Difficulty::Medium,
        Difficulty::High,
    ];

    /// Plies searched by minimax, or `None` for random play.
    pub fn search_depth(self) -> Option<u32> {
        match self {
            Difficulty::Trivial => None,
            Difficulty::Low => Some(3),
            Difficulty::Medium => Some(5),
            Difficulty::High => Some(7),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Trivial => "Trivial",
            Difficulty::Low => "Low",
            Difficulty::Medium => "Medium",
            Difficulty::High => "High",
        }
    }

    /// The next tier up, wrapping from High back to Trivial.
    pub fn next(self) -> Difficulty {
        match self {
            Difficulty::Trivial => Difficulty::Low,
            Difficulty::Low => Difficulty::Medium,
            Difficulty::Medium => Difficulty::High,
            Difficulty::High => Difficulty::Trivial,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trivial" | "easy" => Ok(Difficulty::Trivial),
            "low" => Ok(Difficulty::Low),
            "medium" | "hard" => Ok(Difficulty::Medium),
            "high" | "insane" => Ok(Difficulty::High),
            _ => Err(ParseError::Difficulty(s.to_string())),
        }
    }
}
