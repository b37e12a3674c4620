//! Playlist Manager - ordered, shuffled and repeating playlists
//!
//! This library models songs with validated lengths, traverses playlists
//! sequentially, on repeat or shuffled, and stores them as JSON files.
//! Playlists can also be imported from a directory of tagged audio files.

pub mod config;
pub mod error;
pub mod importer;
pub mod model;
pub mod storage;

pub use config::LibraryConfig;
pub use error::{DurationError, Error, Result};
pub use model::{Duration, Playlist, Song};
pub use storage::PlaylistStore;
