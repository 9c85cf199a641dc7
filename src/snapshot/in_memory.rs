use std::sync::{Arc, RwLock};

use crate::error::StoreError;

use super::store::SnapshotStore;

/// In-memory snapshot store backed by `Arc<RwLock<Option<Vec<u8>>>>`.
///
/// Clone-friendly (cloning shares the same underlying storage), so a test
/// can keep a handle and inspect what the sentence store wrote.
#[derive(Clone, Default)]
pub struct InMemorySnapshotStore {
    storage: Arc<RwLock<Option<Vec<u8>>>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing snapshot bytes.
    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            storage: Arc::new(RwLock::new(Some(bytes.into()))),
        }
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn read_snapshot(&self) -> Result<Option<Vec<u8>>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("snapshot read"))?;
        Ok(storage.clone())
    }

    fn write_snapshot(&self, bytes: &[u8]) -> Result<(), StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("snapshot write"))?;
        *storage = Some(bytes.to_vec());
        Ok(())
    }

    fn ensure_exists(&self) -> Result<(), StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("snapshot write"))?;
        storage.get_or_insert_with(Vec::new);
        Ok(())
    }
}
