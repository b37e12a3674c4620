//! Tag reading trait and data

use crate::error::Result;
use std::path::Path;

/// Tag reader trait - allows swapping the real reader for a fake in tests
pub trait TagSource {
    /// Read the tags and length of one audio file
    fn read_tags(&self, path: &Path) -> Result<TrackTags>;
}

/// Metadata read from an audio file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackTags {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,

    /// Track length in whole seconds (truncated)
    pub duration_secs: u64,
}
