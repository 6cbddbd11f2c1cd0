pub mod backend;
pub mod codec;

pub use backend::{FileBackend, HistoryBackend, LoadOutcome, MemoryBackend, PersistError};

use tracing::{info, warn};

use crate::types::Spin;

/// Owner of the ordered spin history.
///
/// Invariant: the backing resource reflects the in-memory history after
/// every successful mutating call. Mutations persist first and only then
/// commit to memory, so a persist failure leaves both sides unchanged.
pub struct HistoryStore {
    spins: Vec<Spin>,
    backend: Box<dyn HistoryBackend>,
}

impl HistoryStore {
    /// Loads whatever the backend holds. An absent resource and a malformed
    /// one both recover to an empty history; opening never fails the caller.
    pub fn open(mut backend: Box<dyn HistoryBackend>) -> Self {
        let spins = match backend.load() {
            LoadOutcome::Records(spins) => {
                info!(spins = spins.len(), "Loaded persisted history");
                spins
            }
            LoadOutcome::Absent => {
                info!("No persisted history found, starting empty");
                Vec::new()
            }
            LoadOutcome::Malformed(e) => {
                warn!(error = %e, "Persisted history is unreadable, starting empty");
                Vec::new()
            }
        };
        Self { spins, backend }
    }

    pub fn spins(&self) -> &[Spin] {
        &self.spins
    }

    pub fn len(&self) -> usize {
        self.spins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spins.is_empty()
    }

    pub fn append(&mut self, spin: Spin) -> Result<(), PersistError> {
        self.spins.push(spin);
        if let Err(e) = self.backend.persist(&self.spins) {
            self.spins.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Removes the last spin. `Ok(None)` on an empty history is an
    /// informational result, not an error.
    pub fn pop_last(&mut self) -> Result<Option<Spin>, PersistError> {
        let Some(spin) = self.spins.pop() else {
            return Ok(None);
        };
        if let Err(e) = self.backend.persist(&self.spins) {
            self.spins.push(spin);
            return Err(e);
        }
        Ok(Some(spin))
    }

    /// Atomic full replace: the new history is persisted before it is
    /// adopted, so a failure leaves the old history intact.
    pub fn replace(&mut self, spins: Vec<Spin>) -> Result<(), PersistError> {
        self.backend.persist(&spins)?;
        self.spins = spins;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), PersistError> {
        self.replace(Vec::new())
    }

    /// Bytes of the persisted representation of the current history.
    pub fn export(&self) -> Result<Vec<u8>, PersistError> {
        Ok(codec::encode(&self.spins)?.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;
    use std::io;
    use tempfile::TempDir;

    fn right(outcome: u8) -> Spin {
        Spin::new(outcome, Direction::Right).unwrap()
    }

    /// Backend whose persist always fails, for commit-rollback checks.
    struct FailingBackend;

    impl HistoryBackend for FailingBackend {
        fn load(&mut self) -> LoadOutcome {
            LoadOutcome::Absent
        }

        fn persist(&mut self, _spins: &[Spin]) -> Result<(), PersistError> {
            Err(PersistError::Io(io::Error::new(
                io::ErrorKind::Other,
                "disk full",
            )))
        }
    }

    #[test]
    fn test_open_with_absent_resource_starts_empty() {
        let store = HistoryStore::open(Box::new(MemoryBackend::new()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_with_malformed_resource_starts_empty() {
        let store = HistoryStore::open(Box::new(MemoryBackend::with_raw("garbage {{{")));
        assert!(store.is_empty());
    }

    #[test]
    fn test_append_and_pop_keep_insertion_order() {
        let mut store = HistoryStore::open(Box::new(MemoryBackend::new()));
        store.append(right(5)).unwrap();
        store.append(right(12)).unwrap();
        store.append(right(0)).unwrap();
        assert_eq!(store.spins(), &[right(5), right(12), right(0)]);

        assert_eq!(store.pop_last().unwrap(), Some(right(0)));
        assert_eq!(store.spins(), &[right(5), right(12)]);
    }

    #[test]
    fn test_pop_last_on_empty_is_none() {
        let mut store = HistoryStore::open(Box::new(MemoryBackend::new()));
        assert_eq!(store.pop_last().unwrap(), None);
    }

    #[test]
    fn test_replace_and_clear() {
        let mut store = HistoryStore::open(Box::new(MemoryBackend::new()));
        store.append(right(1)).unwrap();

        store.replace(vec![right(7), right(8)]).unwrap();
        assert_eq!(store.spins(), &[right(7), right(8)]);

        store.clear().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_failed_persist_leaves_memory_unchanged() {
        let mut store = HistoryStore::open(Box::new(FailingBackend));
        assert!(store.append(right(5)).is_err());
        assert!(store.is_empty());

        let mut store = HistoryStore::open(Box::new(MemoryBackend::new()));
        store.append(right(5)).unwrap();
        store.backend = Box::new(FailingBackend);

        assert!(store.pop_last().is_err());
        assert_eq!(store.spins(), &[right(5)]);

        assert!(store.replace(vec![right(9)]).is_err());
        assert_eq!(store.spins(), &[right(5)]);
    }

    #[test]
    fn test_export_matches_persisted_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");

        let mut store = HistoryStore::open(Box::new(FileBackend::new(path.clone())));
        store.append(right(5)).unwrap();
        store.append(right(23)).unwrap();

        let exported = store.export().unwrap();
        let on_disk = std::fs::read(&path).unwrap();
        assert_eq!(exported, on_disk);
    }

    #[test]
    fn test_reopen_from_file_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");

        let mut store = HistoryStore::open(Box::new(FileBackend::new(path.clone())));
        store.append(right(5)).unwrap();
        store.append(Spin::new(12, Direction::Left).unwrap()).unwrap();

        let reopened = HistoryStore::open(Box::new(FileBackend::new(path)));
        assert_eq!(reopened.spins(), store.spins());
    }
}
