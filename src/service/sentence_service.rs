use serde::{Deserialize, Serialize};

use crate::sentence::{now, Sentence, SentenceId};
use crate::snapshot::SnapshotStore;
use crate::store::{Change, SentenceStore};

use super::error::ServiceError;

pub const MSG_CONTENT_REQUIRED: &str = "内容不能为空";
pub const MSG_UPDATED: &str = "更新成功";
pub const MSG_DELETED: &str = "删除成功";
pub const MSG_COPIED: &str = "复制成功";

const SEED_SENTENCES: [&str; 2] = [
    "Hello, this is a sample sentence.",
    "This is another example sentence for testing.",
];

/// Body of create and update requests. Absent and empty fields are treated
/// alike.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceInput {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
}

impl SentenceInput {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            group: None,
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    fn content(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }

    fn group(&self) -> &str {
        self.group.as_deref().unwrap_or_default()
    }
}

/// `{ "message": ... }` acknowledgement for update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub message: String,
}

impl Acknowledgement {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Result of a copy: acknowledgement plus the copied text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Copied {
    pub message: String,
    pub content: String,
}

/// List, create, update, delete and copy over a [`SentenceStore`].
///
/// Each operation is exactly one `with_lock` call, so operations on the same
/// sentence are linearizable.
pub struct SentenceService<S> {
    store: SentenceStore<S>,
}

impl<S: SnapshotStore> SentenceService<S> {
    pub fn new(store: SentenceStore<S>) -> Self {
        Self { store }
    }

    /// Load the store from `snapshot` and wrap it.
    pub fn load(snapshot: S) -> Self {
        Self::new(SentenceStore::load(snapshot))
    }

    pub fn store(&self) -> &SentenceStore<S> {
        &self.store
    }

    /// Sentences visible under `group`, most copied first.
    ///
    /// No filter is applied for `None`, `""` or `"全部"`. Equal copy counts
    /// keep insertion order. Stored order is never changed.
    pub fn list(&self, group: Option<&str>) -> Result<Vec<Sentence>, ServiceError> {
        self.store.with_lock(|state| {
            let mut listed: Vec<Sentence> = state
                .sentences()
                .iter()
                .filter(|s| s.matches_group(group))
                .cloned()
                .collect();
            listed.sort_by(|a, b| b.copy_count.cmp(&a.copy_count));
            Ok(Change::Read(listed))
        })
    }

    pub fn create(&self, input: SentenceInput) -> Result<Sentence, ServiceError> {
        if input.content().is_empty() {
            return Err(ServiceError::Validation(MSG_CONTENT_REQUIRED.to_string()));
        }

        let sentence = self.store.with_lock(|state| {
            let sentence = Sentence::new(state.allocate_id()?, input.content(), input.group());
            state.sentences_mut().push(sentence.clone());
            Ok::<_, ServiceError>(Change::Write(sentence))
        })?;

        tracing::debug!(id = sentence.id, group = %sentence.group, "created sentence");
        Ok(sentence)
    }

    /// Overwrite the non-empty fields of `input`. `updated_at` is bumped even
    /// when nothing else changes.
    pub fn update(
        &self,
        id: SentenceId,
        input: SentenceInput,
    ) -> Result<Acknowledgement, ServiceError> {
        self.store.with_lock(|state| {
            let sentence = state.find_mut(id).ok_or(ServiceError::NotFound(id))?;
            if !input.content().is_empty() {
                sentence.content = input.content().to_string();
            }
            if !input.group().is_empty() {
                sentence.group = input.group().to_string();
            }
            sentence.updated_at = now();
            Ok::<_, ServiceError>(Change::Write(()))
        })?;

        tracing::debug!(id, "updated sentence");
        Ok(Acknowledgement::new(MSG_UPDATED))
    }

    pub fn delete(&self, id: SentenceId) -> Result<Acknowledgement, ServiceError> {
        self.store.with_lock(|state| {
            let index = state.position(id).ok_or(ServiceError::NotFound(id))?;
            state.sentences_mut().remove(index);
            Ok::<_, ServiceError>(Change::Write(()))
        })?;

        tracing::debug!(id, "deleted sentence");
        Ok(Acknowledgement::new(MSG_DELETED))
    }

    /// Count one copy of the sentence and hand back its content.
    /// `updated_at` is left alone.
    pub fn copy(&self, id: SentenceId) -> Result<Copied, ServiceError> {
        let (content, copy_count) = self.store.with_lock(|state| {
            let sentence = state.find_mut(id).ok_or(ServiceError::NotFound(id))?;
            sentence.copy_count += 1;
            Ok::<_, ServiceError>(Change::Write((sentence.content.clone(), sentence.copy_count)))
        })?;

        tracing::debug!(id, copy_count, "copied sentence");
        Ok(Copied {
            message: MSG_COPIED.to_string(),
            content,
        })
    }

    /// Insert the two sample sentences when the store is empty. Returns how
    /// many were added.
    pub fn seed_if_empty(&self) -> Result<usize, ServiceError> {
        let seeded = self.store.with_lock(|state| {
            if !state.sentences().is_empty() {
                return Ok::<_, ServiceError>(Change::Read(0));
            }
            for content in SEED_SENTENCES {
                let sentence = Sentence::new(state.allocate_id()?, content, "");
                state.sentences_mut().push(sentence);
            }
            Ok(Change::Write(SEED_SENTENCES.len()))
        })?;

        if seeded > 0 {
            tracing::info!(seeded, "seeded empty store with sample sentences");
        }
        Ok(seeded)
    }
}
