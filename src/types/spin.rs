use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Highest pocket number on the wheel.
pub const MAX_OUTCOME: u8 = 36;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("outcome {0} is outside the wheel range 0-36")]
pub struct OutcomeOutOfRange(pub u8);

/// Rotation direction of the wheel for a spin.
///
/// The persisted tokens are the arrow glyphs the session files have always
/// used, so existing history files keep loading unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "⬅️")]
    Left,
    #[serde(rename = "➡️")]
    Right,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "L",
            Direction::Right => "R",
        }
    }

    /// The fixed token written to the persisted history.
    pub fn token(&self) -> &'static str {
        match self {
            Direction::Left => "⬅️",
            Direction::Right => "➡️",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One recorded roulette result. Immutable once created; the outcome is
/// guaranteed to be within [0,36].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spin {
    outcome: u8,
    direction: Direction,
}

impl Spin {
    pub fn new(outcome: u8, direction: Direction) -> Result<Self, OutcomeOutOfRange> {
        if outcome > MAX_OUTCOME {
            return Err(OutcomeOutOfRange(outcome));
        }
        Ok(Self { outcome, direction })
    }

    pub fn outcome(&self) -> u8 {
        self.outcome
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl fmt::Display for Spin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.outcome, self.direction.as_str())
    }
}

// Persisted shape is a 2-element record [outcome, direction-token].
impl Serialize for Spin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.outcome, self.direction).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Spin {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (outcome, direction) = <(u8, Direction)>::deserialize(deserializer)?;
        Spin::new(outcome, direction).map_err(D::Error::custom)
    }
}
