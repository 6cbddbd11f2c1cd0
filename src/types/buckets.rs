use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Red,
    Black,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Red => "red",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One of the three 12-number partitions of 1..=36. Zero belongs to none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dozen {
    #[serde(rename = "1D")]
    First,
    #[serde(rename = "2D")]
    Second,
    #[serde(rename = "3D")]
    Third,
}

impl Dozen {
    pub const ALL: [Dozen; 3] = [Dozen::First, Dozen::Second, Dozen::Third];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dozen::First => "1D",
            Dozen::Second => "2D",
            Dozen::Third => "3D",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Dozen::First => 0,
            Dozen::Second => 1,
            Dozen::Third => 2,
        }
    }
}

impl fmt::Display for Dozen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Low (1-18) or high (19-36) half of the layout. Zero belongs to none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Half {
    #[serde(rename = "1-18")]
    Low,
    #[serde(rename = "19-36")]
    High,
}

impl Half {
    pub const ALL: [Half; 2] = [Half::Low, Half::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Half::Low => "1-18",
            Half::High => "19-36",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Half::Low => 0,
            Half::High => 1,
        }
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
