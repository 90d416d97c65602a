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

use std::fmt::Write;

use jiff::tz::TimeZone;

use crate::Error;
use crate::color;
use crate::record::Record;
use crate::time::format_timestamp;

/// A layout that formats log record as text.
///
/// Output format:
///
/// ```text
/// 2024-08-11 22:44:57 INFO    Hello World
/// 2024-08-11 22:44:57 DEBUG   Now you see me, now you...
/// 2024-08-11 22:44:57 WARNING Looks like the primary buffer panel just flew off.
/// 2024-08-11 22:44:57 ERROR   You have no respect for logic.
/// 2024-08-11 22:44:57 INFO    demos/toast.rs:35 | 2 + 3 = 5
/// ```
///
/// When colorized, the start sequence of the record's color precedes the timestamp and the
/// reset sequence follows the message, so the whole line is colored.
///
/// The timestamp is rendered in the system time zone unless a [`TimeZone`] is set.
///
/// # Examples
///
/// ```
/// use logme::layout::TextLayout;
///
/// let layout = TextLayout::default().location(true);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextLayout {
    colorize: bool,
    location: bool,
    tz: Option<TimeZone>,
}

impl TextLayout {
    /// Wrap every line in the record's color.
    pub fn colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    /// Prefix the message with `file:line | `.
    pub fn location(mut self, location: bool) -> Self {
        self.location = location;
        self
    }

    /// Render timestamps in `tz` instead of the system time zone.
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.tz = Some(tz);
        self
    }

    /// Whether lines are colorized.
    pub fn is_colorized(&self) -> bool {
        self.colorize
    }

    /// Format `record` as one line, without the trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall-clock time cannot be converted to calendar time, or if an
    /// argument fails to format.
    pub fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        let time = self.timestamp(record)?;
        self.format_at(record, &time)
    }

    /// Render the observed time of `record` as calendar time.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall-clock time cannot be converted to calendar time.
    pub fn timestamp(&self, record: &Record) -> Result<String, Error> {
        format_timestamp(record.time(), self.tz.as_ref())
    }

    /// Format `record` as one line using an already rendered timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if an argument fails to format.
    pub fn format_at(&self, record: &Record, time: &str) -> Result<Vec<u8>, Error> {
        let mut text = String::new();
        if self.colorize {
            write!(&mut text, "{}", record.color().start()).map_err(Error::from_fmt_error)?;
        }

        text.push_str(time);
        text.push_str(record.level().tag());

        if self.location {
            let file = record.file().unwrap_or_default();
            let line = record.line().unwrap_or_default();
            write!(&mut text, "{file}:{line} | ").map_err(Error::from_fmt_error)?;
        }

        text.write_fmt(*record.args())
            .map_err(Error::from_fmt_error)?;

        if self.colorize {
            text.push_str(color::RESET);
        }

        Ok(text.into_bytes())
    }
}
