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

//! Color utilities.

use std::fmt;

pub use colored::Color;

use crate::level::Level;

/// The escape sequence that resets every attribute.
pub const RESET: &str = "\x1B[0m";

/// A foreground color tag wrapped around a whole output line.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LogColor(Color);

impl LogColor {
    /// Red, used for FATAL and ERROR.
    pub const RED: LogColor = LogColor(Color::Red);
    /// Green.
    pub const GREEN: LogColor = LogColor(Color::Green);
    /// Yellow, used for WARNING.
    pub const YELLOW: LogColor = LogColor(Color::Yellow);
    /// Blue, used for DEBUG.
    pub const BLUE: LogColor = LogColor(Color::Blue);
    /// Magenta.
    pub const MAGENTA: LogColor = LogColor(Color::Magenta);
    /// Cyan, used for INFO.
    pub const CYAN: LogColor = LogColor(Color::Cyan);
    /// White.
    pub const WHITE: LogColor = LogColor(Color::White);

    /// Wrap an arbitrary [`Color`].
    pub const fn new(color: Color) -> Self {
        LogColor(color)
    }

    /// The color the convenience macros use for `level`.
    pub fn for_level(level: Level) -> Self {
        match level {
            Level::Off | Level::Error => LogColor::RED,
            Level::Warning => LogColor::YELLOW,
            Level::Info => LogColor::CYAN,
            Level::Debug => LogColor::BLUE,
        }
    }

    /// The start escape sequence of this color.
    pub fn start(&self) -> StartSequence {
        StartSequence(self.0)
    }
}

impl From<Color> for LogColor {
    fn from(color: Color) -> Self {
        LogColor(color)
    }
}

/// Displays as the ANSI escape sequence that switches the foreground to a color.
#[derive(Clone, Copy, Debug)]
pub struct StartSequence(Color);

impl fmt::Display for StartSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1B[{}m", self.0.to_fg_str())
    }
}
