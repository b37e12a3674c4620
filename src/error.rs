//! Error types for playlist handling
//!
//! Every error here is a local, recoverable condition reported straight
//! to the caller. Nothing is retried internally.

use thiserror::Error;

/// Why a time specification such as `"4:34"` or `"1:02:03"` was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    /// A component is not a base-10 integer
    #[error("invalid time component {component:?} in {spec:?}")]
    Format { spec: String, component: String },

    /// Wrong number of components, or a component outside its range
    #[error("time specification {spec:?} out of range: {reason}")]
    Range { spec: String, reason: String },
}

/// Main error type for the playlist library
#[derive(Error, Debug)]
pub enum Error {
    /// A song was constructed with an invalid length
    #[error("invalid song length: {0}")]
    InvalidDuration(#[from] DurationError),

    /// Bad length unit request
    #[error("invalid argument: {0}")]
    Argument(String),

    /// `advance` called on a playlist without songs
    #[error("playlist is empty")]
    EmptyPlaylist,

    /// `advance` called on the last song with repeat disabled
    #[error("reached end of playlist")]
    EndOfPlaylist,

    /// Playlist file could not be read or written
    #[error("playlist file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Playlist file is not a valid record
    #[error("malformed playlist file: {0}")]
    Json(#[from] serde_json::Error),

    /// Audio file tags could not be read
    #[error("failed to read tags from {path}: {reason}")]
    Tag { path: String, reason: String },
}

/// Convenience Result type using the library Error
pub type Result<T> = std::result::Result<T, Error>;
