use serde::{Deserialize, Serialize};
use std::fmt;

use crate::classify::{dozen_of, half_of};
use crate::types::{Dozen, Half};

/// Percentage share of each dozen within the supplied window.
///
/// Each bucket is rounded independently, so the three values can sum to a
/// little more or less than 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DozenStats {
    pub first_pct: u8,
    pub second_pct: u8,
    pub third_pct: u8,
}

impl fmt::Display for DozenStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}% // {} {}% // {} {}%",
            Dozen::First,
            self.first_pct,
            Dozen::Second,
            self.second_pct,
            Dozen::Third,
            self.third_pct
        )
    }
}

/// Percentage share of the low and high halves within the supplied window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalfStats {
    pub low_pct: u8,
    pub high_pct: u8,
}

impl fmt::Display for HalfStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}% // {} {}%",
            Half::Low,
            self.low_pct,
            Half::High,
            self.high_pct
        )
    }
}

/// Returns `None` when the window is empty or holds only zeros.
pub fn dozen_stats(outcomes: &[u8]) -> Option<DozenStats> {
    let mut counts = [0u32; 3];
    for &n in outcomes {
        if let Some(dozen) = dozen_of(n) {
            counts[dozen.index()] += 1;
        }
    }

    let total: u32 = counts.iter().sum();
    if total == 0 {
        return None;
    }

    Some(DozenStats {
        first_pct: pct(counts[0], total),
        second_pct: pct(counts[1], total),
        third_pct: pct(counts[2], total),
    })
}

/// Returns `None` when the window is empty or holds only zeros.
pub fn half_stats(outcomes: &[u8]) -> Option<HalfStats> {
    let mut counts = [0u32; 2];
    for &n in outcomes {
        if let Some(half) = half_of(n) {
            counts[half.index()] += 1;
        }
    }

    let total: u32 = counts.iter().sum();
    if total == 0 {
        return None;
    }

    Some(HalfStats {
        low_pct: pct(counts[0], total),
        high_pct: pct(counts[1], total),
    })
}

fn pct(count: u32, total: u32) -> u8 {
    (f64::from(count) / f64::from(total) * 100.0).round() as u8
}
