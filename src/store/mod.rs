//! Sentence store - the locked, snapshot-persisted record sequence.
//!
//! `SentenceStore<S>` owns the sentences and the id counter behind a single
//! mutex. Callers mutate through `with_lock`, reporting whether they changed
//! anything; changes are written to the `SnapshotStore` backend before the
//! lock is released.
//!
//! ## Example
//!
//! ```ignore
//! use sentence_clipboard::{Change, InMemorySnapshotStore, SentenceStore};
//!
//! let store = SentenceStore::load(InMemorySnapshotStore::new());
//! let count = store.with_lock(|state| Ok::<_, StoreError>(Change::Read(state.sentences().len())))?;
//! ```

mod sentence_store;

pub use sentence_store::{Change, SentenceStore, StoreState};
