use crate::error::StoreError;

/// Trait for snapshot persistence. One snapshot per store, replaced whole on
/// every write.
pub trait SnapshotStore: Send + Sync {
    /// Load the raw snapshot bytes. `None` when no snapshot exists yet.
    fn read_snapshot(&self) -> Result<Option<Vec<u8>>, StoreError>;

    /// Replace the snapshot with the given bytes.
    fn write_snapshot(&self, bytes: &[u8]) -> Result<(), StoreError>;

    /// Create an empty snapshot if none exists.
    fn ensure_exists(&self) -> Result<(), StoreError>;
}
