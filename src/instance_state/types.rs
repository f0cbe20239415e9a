//! Bundle keys and errors for instance state

/// Bundle key holding the score (i32)
pub const SCORE_KEY: &str = "SCORE_KEY";

/// Bundle key holding the remaining countdown in milliseconds (i64)
pub const TIMER_KEY: &str = "TIMER_KEY";

/// Bundle key holding the RFC 3339 capture time (informational only)
pub const CAPTURED_AT_KEY: &str = "CAPTURED_AT";

/// Error types for instance state save/restore
#[derive(Debug)]
pub enum InstanceStateError {
    /// Nothing was saved, or it was already restored
    Missing,
    SerializationError(serde_json::Error),
    MissingKey(&'static str),
    CorruptedData(String),
}

impl std::fmt::Display for InstanceStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstanceStateError::Missing => write!(f, "No saved instance state"),
            InstanceStateError::SerializationError(e) => write!(f, "Serialization error: {}", e),
            InstanceStateError::MissingKey(key) => write!(f, "Missing key in instance state: {}", key),
            InstanceStateError::CorruptedData(msg) => write!(f, "Corrupted instance state: {}", msg),
        }
    }
}

impl std::error::Error for InstanceStateError {}

impl From<serde_json::Error> for InstanceStateError {
    fn from(err: serde_json::Error) -> Self {
        InstanceStateError::SerializationError(err)
    }
}
