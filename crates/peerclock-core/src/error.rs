//! Error types for PeerClock

use thiserror::Error;

/// Core PeerClock errors
#[derive(Error, Debug)]
pub enum ClockError {
    // Sync errors
    #[error("current-time record too short: expected {expected}, got {actual}")]
    RecordTooShort { expected: usize, actual: usize },

    // Collaborator errors
    #[error("time source error: {0}")]
    TimeSource(String),
}

/// Result type for PeerClock operations
pub type ClockResult<T> = Result<T, ClockError>;
