use super::duration::{Duration, LengthUnit};
use super::song::Song;
use crate::error::{Error, Result};
use rand::Rng;
use std::collections::{HashMap, HashSet};

/// Ordered list of songs with a playback cursor
///
/// The cursor is a position in `songs`, so duplicate songs are traversed
/// one after the other instead of being confused with each other.
///
/// Not safe for concurrent mutation; callers that share a playlist between
/// threads must put it behind their own lock.
#[derive(Debug, Clone)]
pub struct Playlist {
    /// Playlist name (also the basis of its file name)
    pub name: String,

    /// Wrap to the first song after the last one (ignored while shuffling)
    pub repeat: bool,

    shuffle: bool,

    /// Songs in insertion order, duplicates allowed
    songs: Vec<Song>,

    /// Position of the current song, `None` iff `songs` is empty
    current: Option<usize>,

    /// Songs already emitted in the running shuffle cycle
    played: HashSet<Song>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>, repeat: bool, shuffle: bool) -> Self {
        Self {
            name: name.into(),
            repeat,
            shuffle,
            songs: Vec::new(),
            current: None,
            played: HashSet::new(),
        }
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    /// Enable or disable shuffle; disabling it drops the running cycle
    pub fn set_shuffle(&mut self, shuffle: bool) {
        self.shuffle = shuffle;
        if !shuffle {
            self.played.clear();
        }
    }

    /// Songs in playlist order
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// The song under the cursor
    pub fn current_song(&self) -> Option<&Song> {
        self.current.and_then(|i| self.songs.get(i))
    }

    /// Position of the song under the cursor
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Songs emitted so far in the running shuffle cycle
    pub fn played(&self) -> &HashSet<Song> {
        &self.played
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Append a song; the first song added becomes current
    pub fn add_song(&mut self, song: Song) {
        self.songs.push(song);
        if self.current.is_none() {
            self.current = Some(0);
        }
    }

    /// Append several songs in order
    pub fn add_songs<I: IntoIterator<Item = Song>>(&mut self, songs: I) {
        for song in songs {
            self.add_song(song);
        }
    }

    /// Append songs until the first failure
    ///
    /// Songs added before the failure stay in the playlist. Returns the
    /// number of songs added.
    pub fn try_add_songs<I, E>(&mut self, songs: I) -> std::result::Result<usize, E>
    where
        I: IntoIterator<Item = std::result::Result<Song, E>>,
    {
        let mut added = 0;
        for song in songs {
            self.add_song(song?);
            added += 1;
        }
        Ok(added)
    }

    /// Remove the first song equal to `song`, if any
    ///
    /// The cursor keeps pointing at the same entry when an earlier one is
    /// removed. If the current entry itself is removed the cursor stays at
    /// its position, which now holds the following song (or the last song
    /// when the removed one was last).
    pub fn remove_song(&mut self, song: &Song) {
        let Some(pos) = self.songs.iter().position(|s| s == song) else {
            return;
        };
        let removed = self.songs.remove(pos);

        if !self.songs.contains(&removed) {
            self.played.remove(&removed);
        }
        self.finish_cycle_if_complete();

        self.current = match self.current {
            _ if self.songs.is_empty() => None,
            Some(cur) if pos < cur => Some(cur - 1),
            Some(cur) => Some(cur.min(self.songs.len() - 1)),
            None => None,
        };
    }

    /// Move to the next song and return it
    ///
    /// In shuffle mode this draws a random unplayed song (see
    /// [`advance_with`](Self::advance_with)); otherwise it steps forward,
    /// wrapping to the first song only when `repeat` is set.
    pub fn advance(&mut self) -> Result<&Song> {
        self.advance_with(&mut rand::thread_rng())
    }

    /// [`advance`](Self::advance) with an explicit random source
    ///
    /// Shuffle draws songs uniformly with replacement and rejects those
    /// already played in the current cycle, so a call takes
    /// `len / unplayed` draws on average. This is unbounded in theory but
    /// cheap for playlist-sized inputs. Once every distinct song has been
    /// played, the cycle restarts.
    pub fn advance_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&Song> {
        if self.songs.is_empty() {
            return Err(Error::EmptyPlaylist);
        }

        let next = if self.shuffle {
            self.shuffle_next(rng)
        } else {
            self.sequential_next()?
        };

        self.current = Some(next);
        Ok(&self.songs[next])
    }

    fn sequential_next(&self) -> Result<usize> {
        let cur = self.current.unwrap_or(0);
        if cur + 1 < self.songs.len() {
            Ok(cur + 1)
        } else if self.repeat {
            Ok(0)
        } else {
            Err(Error::EndOfPlaylist)
        }
    }

    fn shuffle_next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let index = loop {
            let candidate = rng.gen_range(0..self.songs.len());
            if !self.played.contains(&self.songs[candidate]) {
                break candidate;
            }
        };

        self.played.insert(self.songs[index].clone());
        self.finish_cycle_if_complete();

        index
    }

    /// Start a fresh shuffle cycle once every distinct song has been played
    fn finish_cycle_if_complete(&mut self) {
        if self.played.is_empty() {
            return;
        }
        let distinct: HashSet<&Song> = self.songs.iter().collect();
        if self.played.len() >= distinct.len() {
            log::debug!("Shuffle cycle of '{}' complete, starting over", self.name);
            self.played.clear();
        }
    }

    /// Combined length of all songs
    pub fn total_length(&self) -> Duration {
        let total = self
            .songs
            .iter()
            .map(|s| s.length_in(LengthUnit::Seconds))
            .sum();
        Duration::from_secs(total)
    }

    /// Number of songs per artist
    pub fn artist_counts(&self) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for song in &self.songs {
            *counts.entry(song.artist()).or_insert(0) += 1;
        }
        counts
    }
}
