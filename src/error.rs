use std::fmt;

/// Error type for the snapshot store and its persistence backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A thread panicked while holding the store lock.
    LockPoisoned(&'static str),
    /// Filesystem access failed.
    Io { op: &'static str, message: String },
    /// The snapshot could not be encoded or decoded.
    Serde(String),
    /// Every id up to `i64::MAX` has been handed out.
    IdsExhausted,
}

impl StoreError {
    pub(crate) fn io(op: &'static str, err: std::io::Error) -> Self {
        StoreError::Io {
            op,
            message: err.to_string(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
            StoreError::Io { op, message } => write!(f, "io error during {}: {}", op, message),
            StoreError::Serde(message) => write!(f, "snapshot serialization error: {}", message),
            StoreError::IdsExhausted => write!(f, "no sentence ids left"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serde(err.to_string())
    }
}
