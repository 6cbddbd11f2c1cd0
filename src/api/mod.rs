use serde::Serialize;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;
use tracing::info;

use crate::forecast::{Forecast, Forecaster};
use crate::stats::{self, DozenStats, HalfStats};
use crate::store::{codec, HistoryBackend, HistoryStore, PersistError};
use crate::transitions::{successors, DEFAULT_TOP_K};
use crate::types::{Direction, OutcomeOutOfRange, Spin};

/// Outcomes fed to the dozen/half aggregates.
pub const STATS_WINDOW: usize = 50;
/// Spins rendered in the history line.
pub const HISTORY_DISPLAY_LIMIT: usize = 100;

/// Structured rejections surfaced to the transport layer. None of these is
/// fatal and none leaves the history changed.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error(transparent)]
    Outcome(#[from] OutcomeOutOfRange),

    #[error("import payload is not a sequence of [outcome, direction] records: {0}")]
    Import(#[source] serde_json::Error),

    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Read-only composite view of the session.
#[derive(Debug, Clone, Serialize)]
pub struct StateView {
    pub history_display: String,
    pub forecast: Forecast,
    pub dozen_stats: Option<DozenStats>,
    pub half_stats: Option<HalfStats>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionReply {
    pub message: String,
}

struct Inner {
    store: HistoryStore,
    forecaster: Forecaster,
}

/// Entry point for every transport-facing operation. All access goes through
/// one mutex so concurrent callers serialize to an equivalent
/// single-threaded ordering and reads never see a history mid-mutation.
pub struct Tracker {
    inner: Mutex<Inner>,
}

impl Tracker {
    pub fn new(backend: Box<dyn HistoryBackend>, forecaster: Forecaster) -> Self {
        Self {
            inner: Mutex::new(Inner {
                store: HistoryStore::open(backend),
                forecaster,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock still holds consistent data: mutations persist
        // before they commit to memory.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn state(&self) -> StateView {
        let mut inner = self.lock();
        let Inner { store, forecaster } = &mut *inner;

        let spins = store.spins();
        let window_start = spins.len().saturating_sub(STATS_WINDOW);
        let outcomes: Vec<u8> = spins[window_start..].iter().map(|s| s.outcome()).collect();

        StateView {
            history_display: render_history(spins),
            forecast: forecaster.forecast(spins),
            dozen_stats: stats::dozen_stats(&outcomes),
            half_stats: stats::half_stats(&outcomes),
        }
    }

    /// Records a spin and reports which outcomes historically followed it.
    pub fn register(&self, outcome: u8, direction: Direction) -> Result<ActionReply, TrackerError> {
        let spin = Spin::new(outcome, direction)?;

        let mut inner = self.lock();
        inner.store.append(spin)?;
        info!(%spin, "Registered spin");

        let followers = successors(inner.store.spins(), spin, DEFAULT_TOP_K);
        let message = if followers.is_empty() {
            format!("No data for {spin} yet.")
        } else {
            let listed: Vec<String> = followers
                .iter()
                .map(|(n, count)| format!("{n} ({count})"))
                .collect();
            format!("After {spin}: {}", listed.join(", "))
        };
        Ok(ActionReply { message })
    }

    pub fn undo(&self) -> Result<ActionReply, TrackerError> {
        let mut inner = self.lock();
        let message = match inner.store.pop_last()? {
            Some(spin) => {
                info!(%spin, "Removed last spin");
                format!("Removed {spin}")
            }
            None => "Nothing to undo.".to_string(),
        };
        Ok(ActionReply { message })
    }

    /// Replaces the whole history with the records in `payload`. A malformed
    /// payload rejects the import atomically; the existing history is not
    /// touched.
    pub fn import_history(&self, payload: &[u8]) -> Result<ActionReply, TrackerError> {
        let spins = codec::decode(payload).map_err(TrackerError::Import)?;
        let count = spins.len();

        let mut inner = self.lock();
        inner.store.replace(spins)?;
        info!(spins = count, "Imported history");
        Ok(ActionReply {
            message: format!("Imported {count} spins."),
        })
    }

    /// Bytes of the current persisted representation.
    pub fn export_history(&self) -> Result<Vec<u8>, TrackerError> {
        Ok(self.lock().store.export()?)
    }

    pub fn clear(&self) -> Result<ActionReply, TrackerError> {
        let mut inner = self.lock();
        inner.store.clear()?;
        info!("History cleared");
        Ok(ActionReply {
            message: "History cleared.".to_string(),
        })
    }
}

fn render_history(spins: &[Spin]) -> String {
    if spins.is_empty() {
        return "History is empty".to_string();
    }
    let start = spins.len().saturating_sub(HISTORY_DISPLAY_LIMIT);
    let parts: Vec<String> = spins[start..].iter().map(Spin::to_string).collect();
    format!("History: {}", parts.join(" → "))
}
