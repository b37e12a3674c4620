//! Directory scanning and playlist building

use super::traits::{TagSource, TrackTags};
use crate::config::LibraryConfig;
use crate::error::Result;
use crate::model::{Duration, Playlist, Song};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// Builds playlists from the audio files in a directory
pub struct MusicCrawler<S: TagSource> {
    path: PathBuf,
    config: LibraryConfig,
    source: S,
}

impl<S: TagSource + Sync> MusicCrawler<S> {
    /// Create a crawler for the directory at `path`
    pub fn new(path: PathBuf, config: LibraryConfig, source: S) -> Self {
        Self {
            path,
            config,
            source,
        }
    }

    fn is_audio_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| {
                self.config
                    .extensions
                    .iter()
                    .any(|wanted| wanted.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }

    /// Audio files in the directory, sorted by file name
    pub fn audio_files(&self) -> Vec<PathBuf> {
        let max_depth = if self.config.recursive { usize::MAX } else { 1 };

        WalkDir::new(&self.path)
            .follow_links(self.config.follow_links)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("Skipping unreadable directory entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file() || entry.path().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| self.is_audio_file(path))
            .collect()
    }

    /// Read every audio file's tags; files that cannot be read are skipped
    pub fn read_tags(&self) -> Vec<TrackTags> {
        let files = self.audio_files();
        log::info!("Reading tags from {} file(s) in {:?}", files.len(), self.path);

        let results: Vec<(PathBuf, Result<TrackTags>)> = files
            .into_par_iter()
            .map(|path| {
                let tags = self.source.read_tags(&path);
                (path, tags)
            })
            .collect();

        results
            .into_iter()
            .filter_map(|(path, tags)| match tags {
                Ok(tags) => Some(tags),
                Err(e) => {
                    log::warn!("Skipping {:?}: {}", path, e);
                    None
                }
            })
            .collect()
    }

    /// Build a playlist from the directory's audio files
    pub fn create_playlist(&self, name: &str, repeat: bool, shuffle: bool) -> Result<Playlist> {
        let mut playlist = Playlist::new(name, repeat, shuffle);
        let added = playlist.try_add_songs(self.read_tags().into_iter().map(song_from_tags))?;

        log::info!("Created playlist '{}' with {} song(s)", name, added);
        Ok(playlist)
    }
}

fn song_from_tags(tags: TrackTags) -> Result<Song> {
    let length = Duration::from_secs(tags.duration_secs).to_string();
    Song::new(
        tags.title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        tags.artist.unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
        tags.album.unwrap_or_else(|| UNKNOWN_ALBUM.to_string()),
        &length,
    )
}
