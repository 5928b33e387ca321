//! Errors shared by the signaling channel and the frame source.

use std::fmt;
use thiserror::Error;

/// Result type alias.
pub type Result<T> = core::result::Result<T, ConferenceError>;

/// Coarse classification of a [`ConferenceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Transport,
    InvalidState,
    ResourceUnavailable,
    IncompleteFrame,
    InvalidConfig,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Transport => "transport",
            ErrorKind::InvalidState => "invalid state",
            ErrorKind::ResourceUnavailable => "resource unavailable",
            ErrorKind::IncompleteFrame => "incomplete frame",
            ErrorKind::InvalidConfig => "invalid config",
        };
        f.write_str(name)
    }
}

/// Structured error delivered by every failed operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConferenceError {
    /// The underlying channel reported a connect, send or disconnect failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The operation is not valid in the channel's current state.
    #[error("Cannot {operation} while {state}")]
    InvalidState {
        operation: &'static str,
        state: String,
    },

    /// A backing resource (file, device) could not be opened or read.
    #[error("Resource unavailable: {resource}: {reason}")]
    ResourceUnavailable { resource: String, reason: String },

    /// The backing store holds less than one full frame.
    #[error("Incomplete frame: expected {expected} bytes, read {read}")]
    IncompleteFrame { expected: usize, read: usize },

    /// A configuration document could not be parsed.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl ConferenceError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn invalid_state(operation: &'static str, state: impl fmt::Display) -> Self {
        Self::InvalidState {
            operation,
            state: state.to_string(),
        }
    }

    pub fn resource_unavailable(resource: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::ResourceUnavailable {
            resource: resource.into(),
            reason: reason.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ConferenceError::Transport(_) => ErrorKind::Transport,
            ConferenceError::InvalidState { .. } => ErrorKind::InvalidState,
            ConferenceError::ResourceUnavailable { .. } => ErrorKind::ResourceUnavailable,
            ConferenceError::IncompleteFrame { .. } => ErrorKind::IncompleteFrame,
            ConferenceError::InvalidConfig(_) => ErrorKind::InvalidConfig,
        }
    }
}

impl From<serde_json::Error> for ConferenceError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidConfig(e.to_string())
    }
}
