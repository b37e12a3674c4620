use super::duration::{Duration, Length, LengthUnit};
use crate::error::{Error, Result};
use std::fmt;

/// A single track in a playlist
///
/// Songs are plain values: two songs with the same title, artist, album and
/// total length are equal and hash identically, no matter how their length
/// was written (`"4:34"` vs `"0:04:34"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Song {
    title: String,
    artist: String,
    album: String,
    length: Duration,
}

impl Song {
    /// Create a song, rejecting an invalid length specification
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        length: &str,
    ) -> Result<Self> {
        let length = Duration::parse(length)?;
        Ok(Self::with_duration(title, artist, album, length))
    }

    /// Create a song from an already validated length
    pub fn with_duration(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        length: Duration,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            length,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn album(&self) -> &str {
        &self.album
    }

    /// The stored length
    pub fn length(&self) -> &Duration {
        &self.length
    }

    /// Length converted to a single unit
    pub fn length_in(&self, unit: LengthUnit) -> u64 {
        self.length.in_unit(unit)
    }

    /// Length request by unit names
    ///
    /// No names returns the stored length, one name returns the converted
    /// value. More than one name, or an unknown name, is an
    /// [`Error::Argument`].
    pub fn length_query<S: AsRef<str>>(&self, units: &[S]) -> Result<Length> {
        match units {
            [] => Ok(Length::Raw(self.length)),
            [unit] => {
                let unit: LengthUnit = unit.as_ref().parse()?;
                Ok(Length::Converted(self.length_in(unit)))
            }
            _ => Err(Error::Argument(format!(
                "expected at most one length unit, got {}",
                units.len()
            ))),
        }
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} from {} - {}",
            self.artist, self.title, self.album, self.length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;
    use std::hash::{Hash, Hasher};

    fn hash_of(song: &Song) -> u64 {
        let mut hasher = DefaultHasher::new();
        song.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_invalid_length_is_rejected() {
        assert!(matches!(
            Song::new("habibi", "azis", "???", "76:23"),
            Err(Error::InvalidDuration(_))
        ));
        assert!(matches!(
            Song::new("habibi", "azis", "???", "aa:23"),
            Err(Error::InvalidDuration(_))
        ));
    }

    #[test]
    fn test_length_units() {
        let song = Song::new("habibi", "azis", "???", "1:23:45").unwrap();
        assert_eq!(song.length_in(LengthUnit::Seconds), 5025);
        assert_eq!(song.length_in(LengthUnit::Minutes), 83);
        assert_eq!(song.length_in(LengthUnit::Hours), 1);
    }

    #[test]
    fn test_length_query() {
        let song = Song::new("habibi", "azis", "???", "2:03").unwrap();
        let none: [&str; 0] = [];

        assert_eq!(
            song.length_query(&none).unwrap(),
            Length::Raw(Duration::parse("2:03").unwrap())
        );
        assert_eq!(song.length_query(&["seconds"]).unwrap(), Length::Converted(123));
        assert!(matches!(
            song.length_query(&["seconds", "minutes"]),
            Err(Error::Argument(_))
        ));
        assert!(matches!(
            song.length_query(&["sekundi"]),
            Err(Error::Argument(_))
        ));
    }

    #[test]
    fn test_structural_equality_and_hash() {
        let a = Song::new("Jaza", "Slavi", "???", "4:34").unwrap();
        let b = Song::new("Jaza", "Slavi", "???", "0:04:34").unwrap();
        let c = Song::new("Jaza", "Slavi", "??", "4:34").unwrap();

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, c);

        let set: HashSet<Song> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display() {
        let song = Song::new("Jaza", "Slavi", "???", "4:34").unwrap();
        assert_eq!(song.to_string(), "Slavi - Jaza from ??? - 4:34");
    }
}
