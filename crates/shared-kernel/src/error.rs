// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ChunkerError {
    #[error(transparent)]
    Size(#[from] SizeError),

    #[error(transparent)]
    Split(#[from] SplitError),
}

impl ChunkerError {
    /// Whether the failure came from the chunk size argument rather than from
    /// the filesystem.
    pub fn is_size_error(&self) -> bool {
        matches!(self, Self::Size(_) | Self::Split(SplitError::ZeroChunkSize))
    }
}

pub type Result<T> = std::result::Result<T, ChunkerError>;

/// Errors raised while reading a human-readable size specification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeError {
    #[error("invalid size format: '{input}'")]
    InvalidFormat { input: String },

    #[error("invalid size value '{input}': {reason}")]
    InvalidMagnitude { input: String, reason: String },
}

pub type SizeResult<T> = std::result::Result<T, SizeError>;

/// Errors raised while splitting an input file into chunks.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("error opening input file '{path}': {source}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error creating output file '{path}': {source}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error writing chunk '{path}': {source}")]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error removing empty chunk '{path}': {source}")]
    OutputRemove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("chunk size must be greater than zero")]
    ZeroChunkSize,
}

pub type SplitResult<T> = std::result::Result<T, SplitError>;
