//! Playlist data model
//!
//! Songs with validated lengths, and playlists that traverse them in
//! order, on repeat or shuffled.

mod duration;
mod playlist;
mod song;

pub use duration::{Duration, Length, LengthUnit};
pub use playlist::Playlist;
pub use song::Song;
