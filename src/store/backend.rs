use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::store::codec;
use crate::types::Spin;

/// Errors from persisting the history.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// What a backend found when asked for the persisted history.
///
/// An absent resource and a present-but-unreadable one are distinct so the
/// store can report them differently, even though both recover to an empty
/// history.
#[derive(Debug)]
pub enum LoadOutcome {
    Records(Vec<Spin>),
    Absent,
    Malformed(PersistError),
}

/// Storage for the full history. Every persist call is a synchronous full
/// rewrite of the backing resource.
pub trait HistoryBackend: Send {
    fn load(&mut self) -> LoadOutcome;
    fn persist(&mut self, spins: &[Spin]) -> Result<(), PersistError>;
}

/// JSON file on disk, the production backend.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryBackend for FileBackend {
    fn load(&mut self) -> LoadOutcome {
        if !self.path.exists() {
            return LoadOutcome::Absent;
        }
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) => return LoadOutcome::Malformed(e.into()),
        };
        match codec::decode(&raw) {
            Ok(spins) => LoadOutcome::Records(spins),
            Err(e) => LoadOutcome::Malformed(e.into()),
        }
    }

    fn persist(&mut self, spins: &[Spin]) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let text = codec::encode(spins)?;
        fs::write(&self.path, text)?;

        debug!(
            path = %self.path.display(),
            spins = spins.len(),
            "Persisted history"
        );
        Ok(())
    }
}

/// Ephemeral backend holding the encoded history in memory. Used for tests
/// and throwaway sessions; it round-trips through the same codec as the file
/// backend.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    text: Option<String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the backend with arbitrary raw contents, valid or not.
    pub fn with_raw(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl HistoryBackend for MemoryBackend {
    fn load(&mut self) -> LoadOutcome {
        match &self.text {
            None => LoadOutcome::Absent,
            Some(text) => match codec::decode(text.as_bytes()) {
                Ok(spins) => LoadOutcome::Records(spins),
                Err(e) => LoadOutcome::Malformed(e.into()),
            },
        }
    }

    fn persist(&mut self, spins: &[Spin]) -> Result<(), PersistError> {
        self.text = Some(codec::encode(spins)?);
        Ok(())
    }
}
