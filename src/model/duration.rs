use crate::error::{DurationError, Error};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::IntErrorKind;
use std::str::FromStr;

/// Validated song length with an optional hours component
///
/// Built from `"M:SS"` or `"H:MM:SS"`. Minutes and seconds are always in
/// `0..=59`. Equality and hashing only look at the total number of
/// seconds, so `"4:34"` and `"0:04:34"` are the same length.
#[derive(Debug, Clone, Copy)]
pub struct Duration {
    hours: Option<u64>,
    minutes: u8,
    seconds: u8,
}

impl Duration {
    /// Parse a `"M:SS"` or `"H:MM:SS"` specification
    ///
    /// Whitespace around each component is ignored. Non-integer components
    /// fail with [`DurationError::Format`]; a component count other than 2
    /// or 3, or any component out of range, fails with
    /// [`DurationError::Range`].
    pub fn parse(spec: &str) -> Result<Self, DurationError> {
        let components = spec
            .split(':')
            .map(|c| {
                c.trim().parse::<i64>().map_err(|e| match e.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        DurationError::Range {
                            spec: spec.to_string(),
                            reason: format!("component {:?} is too large", c.trim()),
                        }
                    }
                    _ => DurationError::Format {
                        spec: spec.to_string(),
                        component: c.to_string(),
                    },
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        match components.as_slice() {
            &[minutes, seconds] => Self::build(spec, None, minutes, seconds),
            &[hours, minutes, seconds] => Self::build(spec, Some(hours), minutes, seconds),
            other => Err(DurationError::Range {
                spec: spec.to_string(),
                reason: format!("expected 2 or 3 components, got {}", other.len()),
            }),
        }
    }

    /// Build a length from its structured components
    pub fn from_parts(
        hours: Option<i64>,
        minutes: i64,
        seconds: i64,
    ) -> Result<Self, DurationError> {
        let spec = match hours {
            Some(h) => format!("{}:{}:{}", h, minutes, seconds),
            None => format!("{}:{}", minutes, seconds),
        };
        Self::build(&spec, hours, minutes, seconds)
    }

    /// Build an `H:MM:SS` length from a whole number of seconds
    pub fn from_secs(total: u64) -> Self {
        Self {
            hours: Some(total / 3600),
            minutes: ((total % 3600) / 60) as u8,
            seconds: (total % 60) as u8,
        }
    }

    /// Whether `spec` is an acceptable time specification
    pub fn is_valid(spec: &str) -> bool {
        Self::parse(spec).is_ok()
    }

    fn build(
        spec: &str,
        hours: Option<i64>,
        minutes: i64,
        seconds: i64,
    ) -> Result<Self, DurationError> {
        let out_of_range = |reason: String| DurationError::Range {
            spec: spec.to_string(),
            reason,
        };

        if let Some(h) = hours {
            if h < 0 {
                return Err(out_of_range(format!("hours must be >= 0, got {}", h)));
            }
        }
        if !(0..=59).contains(&minutes) {
            return Err(out_of_range(format!("minutes must be in 0..=59, got {}", minutes)));
        }
        if !(0..=59).contains(&seconds) {
            return Err(out_of_range(format!("seconds must be in 0..=59, got {}", seconds)));
        }

        Ok(Self {
            hours: hours.map(|h| h as u64),
            minutes: minutes as u8,
            seconds: seconds as u8,
        })
    }

    pub fn total_seconds(&self) -> u64 {
        self.hours_component()
            .saturating_mul(3600)
            .saturating_add(u64::from(self.minutes) * 60 + u64::from(self.seconds))
    }

    /// Total whole minutes (seconds are truncated)
    pub fn total_minutes(&self) -> u64 {
        self.hours_component()
            .saturating_mul(60)
            .saturating_add(u64::from(self.minutes))
    }

    /// Hours component, 0 for `M:SS` lengths
    pub fn hours_component(&self) -> u64 {
        self.hours.unwrap_or(0)
    }

    /// Convert to the requested unit
    pub fn in_unit(&self, unit: LengthUnit) -> u64 {
        match unit {
            LengthUnit::Seconds => self.total_seconds(),
            LengthUnit::Minutes => self.total_minutes(),
            LengthUnit::Hours => self.hours_component(),
        }
    }
}

impl PartialEq for Duration {
    fn eq(&self, other: &Self) -> bool {
        self.total_seconds() == other.total_seconds()
    }
}

impl Eq for Duration {}

impl Hash for Duration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.total_seconds().hash(state);
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hours {
            Some(h) => write!(f, "{}:{:02}:{:02}", h, self.minutes, self.seconds),
            None => write!(f, "{}:{:02}", self.minutes, self.seconds),
        }
    }
}

impl FromStr for Duration {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Unit a song length can be converted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Seconds,
    Minutes,
    /// Only the hours component, not a rounded total
    Hours,
}

impl FromStr for LengthUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seconds" => Ok(Self::Seconds),
            "minutes" => Ok(Self::Minutes),
            "hours" => Ok(Self::Hours),
            other => Err(Error::Argument(format!(
                "unknown length unit {:?} (expected seconds, minutes or hours)",
                other
            ))),
        }
    }
}

/// Answer to a length request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    /// No unit was requested: the stored length itself
    Raw(Duration),
    /// Length converted to the single requested unit
    Converted(u64),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Raw(d) => d.fmt(f),
            Length::Converted(v) => v.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minutes_seconds() {
        let d = Duration::parse("4:34").unwrap();
        assert_eq!(d.total_seconds(), 274);
        assert_eq!(d.total_minutes(), 4);
        assert_eq!(d.hours_component(), 0);
        assert_eq!(d.to_string(), "4:34");
    }

    #[test]
    fn test_parse_with_hours() {
        let d = Duration::parse("1:23:45").unwrap();
        assert_eq!(d.total_seconds(), 5025);
        assert_eq!(d.total_minutes(), 83);
        assert_eq!(d.hours_component(), 1);
        assert_eq!(d.to_string(), "1:23:45");
    }

    #[test]
    fn test_total_seconds_matches_component_arithmetic() {
        for h in [0i64, 1, 7, 120] {
            for m in [0i64, 1, 30, 59] {
                for s in [0i64, 9, 59] {
                    let d = Duration::parse(&format!("{}:{}:{}", h, m, s)).unwrap();
                    assert_eq!(d.total_seconds(), (h * 3600 + m * 60 + s) as u64);
                }
            }
        }
    }

    #[test]
    fn test_whitespace_is_ignored_and_output_normalized() {
        let d = Duration::parse(" 2 : 3 ").unwrap();
        assert_eq!(d.total_seconds(), 123);
        assert_eq!(d.to_string(), "2:03");
    }

    #[test]
    fn test_non_integer_component_is_format_error() {
        assert!(matches!(
            Duration::parse("aa:23"),
            Err(DurationError::Format { .. })
        ));
        assert!(matches!(
            Duration::parse("3:4.5"),
            Err(DurationError::Format { .. })
        ));
        assert!(matches!(Duration::parse(""), Err(DurationError::Format { .. })));
    }

    #[test]
    fn test_component_count_is_range_error() {
        assert!(matches!(Duration::parse("42"), Err(DurationError::Range { .. })));
        assert!(matches!(
            Duration::parse("1:2:3:4"),
            Err(DurationError::Range { .. })
        ));
    }

    #[test]
    fn test_out_of_range_components() {
        for spec in ["76:23", "2:67", "2:34:67", "2:67:12", "-2:34:24", "-1:30", "1:-5"] {
            assert!(
                matches!(Duration::parse(spec), Err(DurationError::Range { .. })),
                "{} should be out of range",
                spec
            );
        }
    }

    #[test]
    fn test_overflowing_integer_is_range_error() {
        assert!(matches!(
            Duration::parse("99999999999999999999:00:00"),
            Err(DurationError::Range { .. })
        ));
        assert!(matches!(
            Duration::parse("1:-99999999999999999999"),
            Err(DurationError::Range { .. })
        ));
    }

    #[test]
    fn test_is_valid_polarity() {
        assert!(Duration::is_valid("23:45"));
        assert!(Duration::is_valid("23:45:56"));
        assert!(!Duration::is_valid("2:34:67"));
        assert!(!Duration::is_valid("-2:-34:24"));
    }

    #[test]
    fn test_equality_uses_total_seconds() {
        let short = Duration::parse("4:34").unwrap();
        let long = Duration::parse("0:04:34").unwrap();
        assert_eq!(short, long);
        assert_ne!(short, Duration::parse("4:35").unwrap());
    }

    #[test]
    fn test_from_secs_and_parts() {
        assert_eq!(Duration::from_secs(439).to_string(), "0:07:19");
        assert_eq!(Duration::from_secs(90061).to_string(), "25:01:01");
        assert_eq!(
            Duration::from_parts(None, 3, 5).unwrap().to_string(),
            "3:05"
        );
        assert!(Duration::from_parts(Some(1), 60, 0).is_err());
    }

    #[test]
    fn test_length_unit_from_str() {
        assert_eq!("minutes".parse::<LengthUnit>().unwrap(), LengthUnit::Minutes);
        assert!(matches!(
            "sekundi".parse::<LengthUnit>(),
            Err(Error::Argument(_))
        ));
    }
}
