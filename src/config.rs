//! Library configuration

use std::path::PathBuf;

/// Default directory playlists are stored in
pub const DEFAULT_STORAGE_ROOT: &str = "playlist-data";

/// Configuration for storage and directory import
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    /// Directory holding one JSON file per playlist
    pub storage_root: PathBuf,

    /// File extensions to import (case-insensitive, without dot)
    pub extensions: Vec<String>,

    /// Whether to descend into subdirectories when importing
    pub recursive: bool,

    /// Whether to follow symlinks when importing
    pub follow_links: bool,
}

impl LibraryConfig {
    /// Create a configuration storing playlists under `storage_root`
    pub fn new(storage_root: PathBuf) -> Self {
        Self {
            storage_root,
            extensions: vec!["mp3".to_string()],
            recursive: false,
            follow_links: true,
        }
    }

    /// Set the file extensions to import
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Descend into subdirectories when importing
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Follow symlinks when importing
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_STORAGE_ROOT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LibraryConfig::default();
        assert_eq!(config.storage_root, PathBuf::from(DEFAULT_STORAGE_ROOT));
        assert_eq!(config.extensions, vec!["mp3".to_string()]);
        assert!(!config.recursive);
        assert!(config.follow_links);
    }

    #[test]
    fn test_builders() {
        let config = LibraryConfig::new(PathBuf::from("/tmp/playlists"))
            .with_extensions(vec!["flac".to_string(), "ogg".to_string()])
            .with_recursive(true)
            .with_follow_links(false);

        assert_eq!(config.storage_root, PathBuf::from("/tmp/playlists"));
        assert_eq!(config.extensions.len(), 2);
        assert!(config.recursive);
        assert!(!config.follow_links);
    }
}
