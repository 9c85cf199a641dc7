//! Sentence service - the list, create, update, delete and copy operations.
//!
//! `SentenceService<S>` wraps a `SentenceStore<S>` and runs every operation
//! as a single locked read or mutation. Errors are `ServiceError`s carrying
//! an HTTP-style status code.
//!
//! ## Quick Start
//!
//! ```ignore
//! use sentence_clipboard::{InMemorySnapshotStore, SentenceInput, SentenceService};
//!
//! let service = SentenceService::load(InMemorySnapshotStore::new());
//! let created = service.create(SentenceInput::new("hi").with_group("work"))?;
//! service.copy(created.id)?;
//! let most_copied_first = service.list(Some("work"))?;
//! ```

mod error;
mod sentence_service;

pub use error::ServiceError;
pub use sentence_service::{
    Acknowledgement, Copied, SentenceInput, SentenceService, MSG_CONTENT_REQUIRED, MSG_COPIED,
    MSG_DELETED, MSG_UPDATED,
};
