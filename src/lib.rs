mod config;
mod error;
pub mod logging;
mod sentence;
mod service;
mod snapshot;
mod store;

#[cfg(feature = "http")]
pub mod http;

pub use config::{ServerConfig, DEFAULT_DATA_FILE, DEFAULT_PORT, DEFAULT_STATIC_DIR};
pub use error::StoreError;
pub use sentence::{Sentence, SentenceId, Timestamp, ALL_GROUPS, DEFAULT_GROUP};
pub use service::{
    Acknowledgement, Copied, SentenceInput, SentenceService, ServiceError, MSG_CONTENT_REQUIRED,
    MSG_COPIED, MSG_DELETED, MSG_UPDATED,
};
pub use snapshot::{FileSnapshotStore, InMemorySnapshotStore, SnapshotStore};
pub use store::{Change, SentenceStore, StoreState};
