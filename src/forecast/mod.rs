use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::fmt;

use crate::classify::{dozen_of, half_of};
use crate::types::{Dozen, Half, Spin};

/// Minimum history length before a forecast is attempted.
pub const MIN_HISTORY: usize = 6;
/// Number of most recent spins the forecast looks at.
pub const FORECAST_WINDOW: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Forecast {
    /// Fewer than [`MIN_HISTORY`] spins recorded.
    Insufficient,
    Guess { dozen: Dozen, half: Half },
}

impl fmt::Display for Forecast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Forecast::Insufficient => write!(f, "Not enough history for a forecast."),
            Forecast::Guess { dozen, half } => {
                write!(f, "Forecast: dozen {dozen} | half {half}")
            }
        }
    }
}

/// Guesses the next dozen and half from recent bucket frequencies.
///
/// The random source only breaks ties between equally frequent buckets; a
/// single maximum never touches it. Seed it for reproducible runs.
pub struct Forecaster {
    rng: ChaCha8Rng,
}

impl Forecaster {
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn forecast(&mut self, history: &[Spin]) -> Forecast {
        if history.len() < MIN_HISTORY {
            return Forecast::Insufficient;
        }

        let start = history.len().saturating_sub(FORECAST_WINDOW);
        let window = &history[start..];

        let mut dozen_counts = [0u32; 3];
        let mut half_counts = [0u32; 2];
        for spin in window {
            if let Some(dozen) = dozen_of(spin.outcome()) {
                dozen_counts[dozen.index()] += 1;
            }
            if let Some(half) = half_of(spin.outcome()) {
                half_counts[half.index()] += 1;
            }
        }

        let dozen = self.pick_max(&Dozen::ALL, &dozen_counts);
        let half = self.pick_max(&Half::ALL, &half_counts);
        Forecast::Guess { dozen, half }
    }

    fn pick_max<T: Copy>(&mut self, buckets: &[T], counts: &[u32]) -> T {
        let max = counts.iter().copied().max().unwrap_or(0);
        let tied: Vec<T> = buckets
            .iter()
            .zip(counts)
            .filter(|&(_, &count)| count == max)
            .map(|(bucket, _)| *bucket)
            .collect();

        if tied.len() == 1 {
            tied[0]
        } else {
            tied[self.rng.gen_range(0..tied.len())]
        }
    }
}

impl Default for Forecaster {
    fn default() -> Self {
        Self::new()
    }
}
