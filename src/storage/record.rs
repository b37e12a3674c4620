//! Storage-ready representation of a playlist

use crate::error::Result;
use crate::model::{Playlist, Song};
use serde::{Deserialize, Serialize};

/// Extension of playlist files
pub const PLAYLIST_EXTENSION: &str = "json";

/// Flat record of a playlist as written to disk
///
/// The cursor and the shuffle cycle are not stored; a restored playlist
/// starts at its first song with a fresh cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistRecord {
    pub name: String,

    #[serde(default)]
    pub repeat: bool,

    #[serde(default)]
    pub shuffle: bool,

    #[serde(rename = "_songs", default)]
    pub songs: Vec<SongRecord>,
}

/// One song entry inside a [`PlaylistRecord`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRecord {
    pub title: String,
    pub artist: String,
    pub album: String,

    /// `"M:SS"` or `"H:MM:SS"`
    pub song_length: String,
}

impl From<&Song> for SongRecord {
    fn from(song: &Song) -> Self {
        Self {
            title: song.title().to_string(),
            artist: song.artist().to_string(),
            album: song.album().to_string(),
            song_length: song.length().to_string(),
        }
    }
}

impl TryFrom<SongRecord> for Song {
    type Error = crate::error::Error;

    fn try_from(record: SongRecord) -> Result<Self> {
        Song::new(record.title, record.artist, record.album, &record.song_length)
    }
}

/// Build the record for a playlist, songs in playlist order
pub fn to_record(playlist: &Playlist) -> PlaylistRecord {
    PlaylistRecord {
        name: playlist.name.clone(),
        repeat: playlist.repeat,
        shuffle: playlist.shuffle(),
        songs: playlist.songs().iter().map(SongRecord::from).collect(),
    }
}

/// Restore a playlist from its record
///
/// Any malformed song aborts the whole restore.
pub fn from_record(record: PlaylistRecord) -> Result<Playlist> {
    let mut playlist = Playlist::new(record.name, record.repeat, record.shuffle);
    let songs = record
        .songs
        .into_iter()
        .map(Song::try_from)
        .collect::<Result<Vec<_>>>()?;
    playlist.add_songs(songs);
    Ok(playlist)
}

/// File name a playlist is stored under: spaces become `-`, plus `.json`
pub fn filename_for(name: &str) -> String {
    format!("{}.{}", name.replace(' ', "-"), PLAYLIST_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn jaza() -> Song {
        Song::new("Jaza", "Slavi", "???", "4:34").unwrap()
    }

    #[test]
    fn test_to_record() {
        let mut playlist = Playlist::new("My Playlist", true, true);
        playlist.add_song(jaza());

        let record = to_record(&playlist);
        assert_eq!(
            record,
            PlaylistRecord {
                name: "My Playlist".to_string(),
                repeat: true,
                shuffle: true,
                songs: vec![SongRecord {
                    title: "Jaza".to_string(),
                    artist: "Slavi".to_string(),
                    album: "???".to_string(),
                    song_length: "4:34".to_string(),
                }],
            }
        );
    }

    #[test]
    fn test_json_field_names() {
        let mut playlist = Playlist::new("My Playlist", false, true);
        playlist.add_song(jaza());

        let value = serde_json::to_value(to_record(&playlist)).unwrap();
        assert_eq!(value["name"], "My Playlist");
        assert_eq!(value["repeat"], false);
        assert_eq!(value["shuffle"], true);
        assert_eq!(value["_songs"][0]["song_length"], "4:34");
    }

    #[test]
    fn test_missing_flags_default_to_false() {
        let record: PlaylistRecord = serde_json::from_str(
            r#"{"name": "nova chalga", "_songs": [
                {"title": "Jaza", "artist": "Slavi", "album": "???", "song_length": "4:34"}
            ]}"#,
        )
        .unwrap();

        let playlist = from_record(record).unwrap();
        assert_eq!(playlist.name, "nova chalga");
        assert!(!playlist.repeat);
        assert!(!playlist.shuffle());
        assert_eq!(playlist.current_song(), Some(&jaza()));
    }

    #[test]
    fn test_malformed_song_aborts_restore() {
        let record = PlaylistRecord {
            name: "broken".to_string(),
            repeat: false,
            shuffle: false,
            songs: vec![
                SongRecord::from(&jaza()),
                SongRecord {
                    title: "Bad".to_string(),
                    artist: "Nobody".to_string(),
                    album: "-".to_string(),
                    song_length: "1:75".to_string(),
                },
            ],
        };

        assert!(matches!(from_record(record), Err(Error::InvalidDuration(_))));
    }

    #[test]
    fn test_filename_for() {
        assert_eq!(filename_for("My Playlist"), "My-Playlist.json");
        assert_eq!(filename_for("nova chalga"), "nova-chalga.json");
        assert_eq!(filename_for("solo"), "solo.json");
    }
}
