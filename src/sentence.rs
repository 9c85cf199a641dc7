//! The `Sentence` record and the labels with special meaning.

use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};

/// Group assigned to sentences created without one.
pub const DEFAULT_GROUP: &str = "默认";

/// Group filter value meaning "no filter".
pub const ALL_GROUPS: &str = "全部";

/// Wall-clock instant with the local offset it was recorded in.
pub type Timestamp = DateTime<FixedOffset>;

/// Store-assigned sentence identifier.
pub type SentenceId = i64;

pub(crate) fn now() -> Timestamp {
    Local::now().into()
}

/// A stored text snippet.
///
/// Field order matches the on-disk snapshot layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub id: SentenceId,
    pub content: String,
    pub group: String,
    pub copy_count: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Sentence {
    /// Build a fresh, never-copied sentence. An empty group falls back to
    /// [`DEFAULT_GROUP`].
    pub fn new(id: SentenceId, content: impl Into<String>, group: impl Into<String>) -> Self {
        let group = group.into();
        let created_at = now();
        Self {
            id,
            content: content.into(),
            group: if group.is_empty() {
                DEFAULT_GROUP.to_string()
            } else {
                group
            },
            copy_count: 0,
            created_at,
            updated_at: created_at,
        }
    }

    /// Whether this sentence is visible under the given group filter.
    pub fn matches_group(&self, filter: Option<&str>) -> bool {
        match filter {
            None | Some("") | Some(ALL_GROUPS) => true,
            Some(group) => self.group == group,
        }
    }
}
