use std::sync::{Mutex, MutexGuard};

use crate::error::StoreError;
use crate::sentence::{Sentence, SentenceId};
use crate::snapshot::SnapshotStore;

/// The guarded contents of a [`SentenceStore`]: the ordered sequence and the
/// id counter.
#[derive(Debug)]
pub struct StoreState {
    sentences: Vec<Sentence>,
    /// `None` once the id space is used up.
    next_id: Option<SentenceId>,
}

impl StoreState {
    fn from_sentences(sentences: Vec<Sentence>) -> Self {
        let next_id = sentences.iter().map(|s| s.id).max().unwrap_or(0).checked_add(1);
        Self { sentences, next_id }
    }

    /// Stored sentences in insertion order.
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn sentences_mut(&mut self) -> &mut Vec<Sentence> {
        &mut self.sentences
    }

    /// Hand out the next id. Ids are never handed out twice, so once the
    /// largest id has been issued every further call fails.
    pub fn allocate_id(&mut self) -> Result<SentenceId, StoreError> {
        let id = self.next_id.ok_or(StoreError::IdsExhausted)?;
        self.next_id = id.checked_add(1);
        Ok(id)
    }

    pub fn find_mut(&mut self, id: SentenceId) -> Option<&mut Sentence> {
        self.sentences.iter_mut().find(|s| s.id == id)
    }

    pub fn position(&self, id: SentenceId) -> Option<usize> {
        self.sentences.iter().position(|s| s.id == id)
    }
}

/// What a [`SentenceStore::with_lock`] closure did to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change<T> {
    /// State was only read; nothing is persisted.
    Read(T),
    /// State was mutated; the snapshot is rewritten before the lock is released.
    Write(T),
}

/// In-memory sentence sequence persisted through a [`SnapshotStore`].
///
/// Every access goes through one exclusive lock. Persistence is best effort:
/// a failed snapshot write is logged and the in-memory change stands.
pub struct SentenceStore<S> {
    state: Mutex<StoreState>,
    snapshot: S,
}

impl<S: SnapshotStore> SentenceStore<S> {
    /// Build the store from whatever the snapshot currently holds.
    ///
    /// A missing snapshot is created empty. An unreadable or unparsable one
    /// is logged and treated as empty, and is left untouched on disk until
    /// the next successful mutation.
    pub fn load(snapshot: S) -> Self {
        let sentences = match snapshot.read_snapshot() {
            Ok(None) => {
                if let Err(e) = snapshot.ensure_exists() {
                    tracing::error!(error = %e, "failed to create snapshot");
                }
                Vec::new()
            }
            Ok(Some(bytes)) if bytes.is_empty() => Vec::new(),
            Ok(Some(bytes)) => match serde_json::from_slice::<Vec<Sentence>>(&bytes) {
                Ok(sentences) => sentences,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to parse snapshot, starting empty");
                    Vec::new()
                }
            },
            Err(e) => {
                tracing::error!(error = %e, "failed to read snapshot, starting empty");
                Vec::new()
            }
        };

        let state = StoreState::from_sentences(sentences);
        match state.next_id {
            Some(next_id) => tracing::info!(
                sentences = state.sentences.len(),
                next_id,
                "loaded sentence store"
            ),
            None => tracing::warn!(
                sentences = state.sentences.len(),
                "loaded sentence store with no ids left, creates will fail"
            ),
        }

        Self {
            state: Mutex::new(state),
            snapshot,
        }
    }

    fn lock(&self, operation: &'static str) -> Result<MutexGuard<'_, StoreState>, StoreError> {
        self.state
            .lock()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }

    /// Serialize the state and hand it to the snapshot backend.
    fn persist(&self, state: &StoreState) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(&state.sentences)?;
        self.snapshot.write_snapshot(&bytes)
    }

    fn persist_logged(&self, state: &StoreState) {
        if let Err(e) = self.persist(state) {
            tracing::error!(error = %e, "failed to save snapshot");
        }
    }

    /// Rewrite the snapshot from the current state.
    ///
    /// Write failures are logged, not returned; only a poisoned lock is an error.
    pub fn save(&self) -> Result<(), StoreError> {
        let state = self.lock("save")?;
        self.persist_logged(&state);
        Ok(())
    }

    /// Run `f` with exclusive access to the state, saving afterwards when it
    /// reports [`Change::Write`]. An `Err` from `f` is treated as no change.
    ///
    /// The snapshot write is synchronous and happens while the lock is held,
    /// so this blocks the calling thread for the duration of the write. Async
    /// callers run it on a runtime worker; there is no `spawn_blocking`.
    pub fn with_lock<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut StoreState) -> Result<Change<T>, E>,
        E: From<StoreError>,
    {
        let mut state = self.lock("with_lock")?;
        match f(&mut *state)? {
            Change::Read(value) => Ok(value),
            Change::Write(value) => {
                self.persist_logged(&state);
                Ok(value)
            }
        }
    }

    /// Clone of the stored sequence in insertion order.
    pub fn sentences(&self) -> Result<Vec<Sentence>, StoreError> {
        Ok(self.lock("sentences")?.sentences.clone())
    }

}
