use std::io;
use thiserror::Error;

/// Custom error type for raidcheck
#[derive(Error, Debug)]
pub enum RaidError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timeout after {secs}s running '{command}'")]
    Timeout { command: String, secs: u64 },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unknown host: {0} (no SSL thumbprint configured)")]
    UnknownHost(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for raidcheck
pub type Result<T> = std::result::Result<T, RaidError>;

impl RaidError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        RaidError::Config(msg.into())
    }

    /// Create a transport error
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        RaidError::Transport(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        RaidError::Other(msg.into())
    }

    /// True for failures that happened while fetching raw command text.
    /// These abort the whole check pass.
    pub fn is_retrieval_failure(&self) -> bool {
        matches!(self, RaidError::Timeout { .. } | RaidError::Transport(_))
    }
}
