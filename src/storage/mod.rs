//! Playlist persistence
//!
//! Converts playlists to and from flat records and stores them as JSON
//! files under a storage root.

mod record;
mod store;

pub use record::{filename_for, from_record, to_record, PlaylistRecord, SongRecord};
pub use store::PlaylistStore;
