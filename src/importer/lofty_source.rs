//! Tag reading with lofty

use super::traits::{TagSource, TrackTags};
use crate::error::{Error, Result};
use lofty::prelude::*;
use lofty::probe::Probe;
use std::path::Path;

/// Reads tags and duration from real audio files
#[derive(Debug, Clone, Copy, Default)]
pub struct LoftyTagSource;

impl LoftyTagSource {
    pub fn new() -> Self {
        Self
    }
}

fn tag_error(path: &Path, e: lofty::error::LoftyError) -> Error {
    Error::Tag {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

fn non_empty(value: Option<std::borrow::Cow<'_, str>>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl TagSource for LoftyTagSource {
    fn read_tags(&self, path: &Path) -> Result<TrackTags> {
        let tagged_file = Probe::open(path)
            .map_err(|e| tag_error(path, e))?
            .read()
            .map_err(|e| tag_error(path, e))?;

        let mut tags = TrackTags {
            duration_secs: tagged_file.properties().duration().as_secs(),
            ..TrackTags::default()
        };

        if let Some(tag) = tagged_file.primary_tag().or_else(|| tagged_file.first_tag()) {
            tags.title = non_empty(tag.title());
            tags.artist = non_empty(tag.artist());
            tags.album = non_empty(tag.album());
        }

        log::debug!("Read tags from {:?}: {:?}", path, tags);
        Ok(tags)
    }
}
