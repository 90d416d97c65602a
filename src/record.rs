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

//! Log record.

use std::fmt;
use std::time::SystemTime;

use crate::color::LogColor;
use crate::level::Level;

/// The payload of a single logging call.
///
/// Records are built per call and consumed immediately; nothing retains them.
#[derive(Clone, Debug)]
pub struct Record<'a> {
    // the observed time
    now: SystemTime,

    level: Level,
    color: LogColor,
    terminate: bool,

    file: Option<&'a str>,
    line: Option<u32>,

    args: fmt::Arguments<'a>,
}

impl<'a> Record<'a> {
    /// The observed time.
    pub fn time(&self) -> SystemTime {
        self.now
    }

    /// The verbosity level of the message.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The color wrapped around the line when colorization is on.
    pub fn color(&self) -> LogColor {
        self.color
    }

    /// Whether the process terminates after this record.
    pub fn terminate(&self) -> bool {
        self.terminate
    }

    /// The source file containing the call.
    pub fn file(&self) -> Option<&'a str> {
        self.file
    }

    /// The line containing the call.
    pub fn line(&self) -> Option<u32> {
        self.line
    }

    /// The message body.
    pub fn args(&self) -> &fmt::Arguments<'a> {
        &self.args
    }

    /// Returns a new builder.
    pub fn builder() -> RecordBuilder<'a> {
        RecordBuilder::default()
    }
}

/// Builder for [`Record`].
#[derive(Debug)]
pub struct RecordBuilder<'a> {
    record: Record<'a>,
}

impl Default for RecordBuilder<'_> {
    fn default() -> Self {
        RecordBuilder {
            record: Record {
                now: SystemTime::now(),
                level: Level::Info,
                color: LogColor::for_level(Level::Info),
                terminate: false,
                file: None,
                line: None,
                args: format_args!(""),
            },
        }
    }
}

impl<'a> RecordBuilder<'a> {
    /// Set [`args`](Record::args).
    pub fn args(mut self, args: fmt::Arguments<'a>) -> Self {
        self.record.args = args;
        self
    }

    /// Set [`level`](Record::level) together with its default [`color`](Record::color).
    pub fn level(mut self, level: Level) -> Self {
        self.record.level = level;
        self.record.color = LogColor::for_level(level);
        self
    }

    /// Set [`color`](Record::color).
    pub fn color(mut self, color: LogColor) -> Self {
        self.record.color = color;
        self
    }

    /// Set [`terminate`](Record::terminate).
    pub fn terminate(mut self, terminate: bool) -> Self {
        self.record.terminate = terminate;
        self
    }

    /// Set [`file`](Record::file).
    pub fn file(mut self, file: Option<&'a str>) -> Self {
        self.record.file = file;
        self
    }

    /// Set [`line`](Record::line).
    pub fn line(mut self, line: Option<u32>) -> Self {
        self.record.line = line;
        self
    }

    /// Set [`time`](Record::time).
    pub fn time(mut self, now: SystemTime) -> Self {
        self.record.now = now;
        self
    }

    /// Invoke the builder and return a `Record`
    pub fn build(self) -> Record<'a> {
        self.record
    }
}
