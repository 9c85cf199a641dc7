use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

use super::store::SnapshotStore;

/// Snapshot kept in a single file on the local filesystem.
///
/// Writes go to a sibling `.tmp` file which is then renamed over the target,
/// so readers never observe a half-written snapshot.
#[derive(Clone, Debug)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(unix)]
fn set_file_mode(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o644))
        .map_err(|e| StoreError::io("set_snapshot_permissions", e))
}

#[cfg(not(unix))]
fn set_file_mode(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

impl SnapshotStore for FileSnapshotStore {
    fn read_snapshot(&self) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io("read_snapshot", e)),
        }
    }

    fn write_snapshot(&self, bytes: &[u8]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::io("create_snapshot_dir", e))?;
            }
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, bytes).map_err(|e| StoreError::io("write_snapshot_temp", e))?;
        set_file_mode(&temp_path)?;
        fs::rename(&temp_path, &self.path).map_err(|e| StoreError::io("rename_snapshot_temp", e))?;

        tracing::debug!(
            path = %self.path.display(),
            size_bytes = bytes.len(),
            "wrote snapshot"
        );
        Ok(())
    }

    fn ensure_exists(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }
        fs::File::create(&self.path).map_err(|e| StoreError::io("create_snapshot", e))?;
        set_file_mode(&self.path)
    }
}
