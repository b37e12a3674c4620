//! Playlist files under a storage root

use super::record::{filename_for, from_record, to_record, PlaylistRecord, PLAYLIST_EXTENSION};
use crate::error::Result;
use crate::model::Playlist;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Reads and writes one JSON file per playlist
///
/// File names are taken as given and joined onto the root; there is no
/// protection against names that escape it. Writes are not atomic.
#[derive(Debug, Clone)]
pub struct PlaylistStore {
    root: PathBuf,
}

impl PlaylistStore {
    /// Create a store rooted at `root` (created lazily on first save)
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a playlist with the given name is saved to
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(filename_for(name))
    }

    /// Save a playlist, returning the written path
    pub fn save(&self, playlist: &Playlist) -> Result<PathBuf> {
        fs::create_dir_all(&self.root)?;

        let path = self.path_for(&playlist.name);
        log::info!(
            "Saving playlist '{}' ({} songs) to {:?}",
            playlist.name,
            playlist.len(),
            path
        );

        let mut writer = BufWriter::new(File::create(&path)?);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        to_record(playlist).serialize(&mut serializer)?;
        writer.flush()?;

        Ok(path)
    }

    /// Load a playlist from a file name relative to the root
    pub fn load(&self, filename: &str) -> Result<Playlist> {
        let path = self.root.join(filename);
        log::debug!("Loading playlist from {:?}", path);

        let file = File::open(&path)?;
        let record: PlaylistRecord = serde_json::from_reader(BufReader::new(file))?;
        let playlist = from_record(record)?;

        log::info!(
            "Loaded playlist '{}' ({} songs)",
            playlist.name,
            playlist.len()
        );
        Ok(playlist)
    }

    /// File names of all stored playlists, sorted
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            let is_playlist = path.is_file()
                && path.extension().and_then(|e| e.to_str()) == Some(PLAYLIST_EXTENSION);
            if is_playlist {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}
