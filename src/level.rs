// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Log levels and the verbosity ceiling used for gating.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// An enum representing the available verbosity levels of the logger.
///
/// The discriminant is the ordinal accepted by the `LOG_LEVEL` environment variable.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    /// Disables all output when used as a ceiling.
    Off = 0,
    /// Designates very serious errors.
    Error = 1,
    /// Designates hazardous situations.
    Warning = 2,
    /// Designates useful information.
    Info = 3,
    /// Designates lower priority information.
    Debug = 4,
}

impl Level {
    /// Return the string representation of the `Level`.
    ///
    /// This returns the same string as the `fmt::Display` implementation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Off => "OFF",
            Level::Error => "ERROR",
            Level::Warning => "WARNING",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }

    /// The fixed-width tag written between the timestamp and the message.
    ///
    /// Anything that is not DEBUG, WARNING or ERROR is tagged as INFO.
    pub fn tag(&self) -> &'static str {
        match self {
            Level::Debug => " DEBUG   ",
            Level::Warning => " WARNING ",
            Level::Error => " ERROR   ",
            _ => " INFO    ",
        }
    }

    /// The numeric ordinal of this level.
    pub fn ordinal(&self) -> i32 {
        *self as i32
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Level, Self::Err> {
        for (name, level) in [
            ("off", Level::Off),
            ("error", Level::Error),
            ("warning", Level::Warning),
            ("info", Level::Info),
            ("debug", Level::Debug),
        ] {
            if s.eq_ignore_ascii_case(name) {
                return Ok(level);
            }
        }

        Err(Error::new(format!("malformed level: {s:?}")))
    }
}

/// The configured verbosity ceiling.
///
/// A record at level `L` passes iff `L <= ceiling` numerically. The ceiling is kept as a raw
/// integer so that values outside `0..=4` read from the environment keep their meaning: a
/// negative ceiling silences everything and anything above `4` lets everything through.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct LevelFilter(i32);

impl Default for LevelFilter {
    fn default() -> Self {
        LevelFilter::from(Level::Info)
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        LevelFilter(level.ordinal())
    }
}

impl LevelFilter {
    /// Create a ceiling from a raw ordinal.
    pub const fn new(ordinal: i32) -> Self {
        LevelFilter(ordinal)
    }

    /// Parse a ceiling the way C `atoi` parses an integer.
    ///
    /// Leading whitespace and an optional sign are accepted, then as many decimal digits as
    /// follow. Input without leading digits yields `0`, i.e. [`Level::Off`]. Out-of-range
    /// values saturate.
    pub fn parse_lossy(s: &str) -> Self {
        let s = s.trim_start();
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let mut value: i64 = 0;
        for b in digits.bytes().take_while(u8::is_ascii_digit) {
            value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
        }
        if negative {
            value = -value;
        }

        LevelFilter(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
    }

    /// The raw ordinal of this ceiling.
    pub fn ordinal(&self) -> i32 {
        self.0
    }

    /// Checks whether a record at `level` passes this ceiling.
    ///
    /// # Examples
    ///
    /// ```
    /// use logme::level::Level;
    /// use logme::level::LevelFilter;
    ///
    /// let ceiling = LevelFilter::from(Level::Warning);
    ///
    /// assert!(ceiling.test(Level::Error));
    /// assert!(ceiling.test(Level::Warning));
    /// assert!(!ceiling.test(Level::Info));
    /// assert!(!ceiling.test(Level::Debug));
    /// ```
    pub fn test(&self, level: Level) -> bool {
        level.ordinal() <= self.0
    }

    /// The most verbose [`log::LevelFilter`] that this ceiling lets through.
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self.0 {
            i32::MIN..=0 => log::LevelFilter::Off,
            1 => log::LevelFilter::Error,
            2 => log::LevelFilter::Warn,
            3 => log::LevelFilter::Info,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_fixed_width() {
        for level in [Level::Error, Level::Warning, Level::Info, Level::Debug] {
            assert_eq!(level.tag().len(), 9, "{level}");
        }
        assert_eq!(Level::Off.tag(), " INFO    ");
    }

    #[test]
    fn test_parse_lossy_like_atoi() {
        assert_eq!(LevelFilter::parse_lossy("4"), LevelFilter::new(4));
        assert_eq!(LevelFilter::parse_lossy("  2"), LevelFilter::new(2));
        assert_eq!(LevelFilter::parse_lossy("+3"), LevelFilter::new(3));
        assert_eq!(LevelFilter::parse_lossy("-1"), LevelFilter::new(-1));
        assert_eq!(LevelFilter::parse_lossy("3abc"), LevelFilter::new(3));
        assert_eq!(LevelFilter::parse_lossy("debug"), LevelFilter::new(0));
        assert_eq!(LevelFilter::parse_lossy(""), LevelFilter::new(0));
        assert_eq!(LevelFilter::parse_lossy("- 3"), LevelFilter::new(0));
        assert_eq!(
            LevelFilter::parse_lossy("99999999999999999999"),
            LevelFilter::new(i32::MAX)
        );
    }

    #[test]
    fn test_gating_ceiling() {
        let counts: Vec<usize> = (0..=4)
            .map(|ceiling| {
                let filter = LevelFilter::new(ceiling);
                [Level::Error, Level::Warning, Level::Info, Level::Debug]
                    .into_iter()
                    .filter(|level| filter.test(*level))
                    .count()
            })
            .collect();
        assert_eq!(counts, vec![0, 1, 2, 3, 4]);

        assert!(!LevelFilter::new(-5).test(Level::Error));
        assert!(LevelFilter::new(42).test(Level::Debug));
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(LevelFilter::default(), LevelFilter::from(Level::Info));
        assert_eq!(
            LevelFilter::default().to_log_level_filter(),
            log::LevelFilter::Info
        );
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!("WARNING".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
        assert!("verbose".parse::<Level>().is_err());
    }
}
