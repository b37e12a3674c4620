//! Directory import
//!
//! Scans a directory for audio files, reads their tags through a
//! [`TagSource`] and turns them into a playlist.

mod crawler;
mod lofty_source;
mod traits;

pub use crawler::{MusicCrawler, UNKNOWN_ALBUM, UNKNOWN_ARTIST, UNKNOWN_TITLE};
pub use lofty_source::LoftyTagSource;
pub use traits::{TagSource, TrackTags};
