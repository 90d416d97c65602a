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

//! Settings read from the environment.
//!
//! | Variable            | Effect                                                      |
//! |---------------------|-------------------------------------------------------------|
//! | `LOG_LEVEL`         | `0` OFF, `1` ERROR, `2` WARNING, `3` INFO, `4` DEBUG        |
//! | `LOG_FILE`          | append to this file; `-` selects stdout; unset is stderr    |
//! | `LOG_LOCATION`      | if set, prefix messages with `file:line \| `                |
//! | `DISABLE_LOG_COLOR` | if set, never colorize                                      |
//! | `TERM`              | colorize only if set and not `dumb`                         |

use crate::append::Destination;
use crate::append::Target;
use crate::level::LevelFilter;

/// Environment variable holding the verbosity ceiling.
pub const LEVEL_ENV: &str = "LOG_LEVEL";
/// Environment variable holding the destination path.
pub const FILE_ENV: &str = "LOG_FILE";
/// Presence-only environment variable enabling the location tag.
pub const LOCATION_ENV: &str = "LOG_LOCATION";
/// Presence-only environment variable disabling colorization.
pub const DISABLE_COLOR_ENV: &str = "DISABLE_LOG_COLOR";
/// Environment variable holding the terminal type.
pub const TERM_ENV: &str = "TERM";

/// Raw logger settings, before the destination is opened.
///
/// # Examples
///
/// ```
/// use logme::append::Target;
/// use logme::config::Config;
/// use logme::level::Level;
///
/// let config = Config::default()
///     .with_level(Level::Debug)
///     .with_target(Target::Stdout)
///     .with_location(true);
/// assert!(config.location());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Config {
    level: LevelFilter,
    target: Target,
    location: bool,
    disable_color: bool,
    term: Option<String>,
}

impl Config {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Config::from_lookup(|name| std::env::var_os(name).map(|v| v.to_string_lossy().into_owned()))
    }

    /// Read settings through `lookup`, which returns the value of a variable if it is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use logme::append::Target;
    /// use logme::config::Config;
    /// use logme::level::LevelFilter;
    ///
    /// let config = Config::from_lookup(|name| match name {
    ///     "LOG_LEVEL" => Some("2".to_string()),
    ///     "LOG_FILE" => Some("-".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(config.level(), LevelFilter::new(2));
    /// assert_eq!(config.target(), &Target::Stdout);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let level = lookup(LEVEL_ENV)
            .map(|s| LevelFilter::parse_lossy(&s))
            .unwrap_or_default();
        let target = Target::from_setting(lookup(FILE_ENV).as_deref());

        Config {
            level,
            target,
            location: lookup(LOCATION_ENV).is_some(),
            disable_color: lookup(DISABLE_COLOR_ENV).is_some(),
            term: lookup(TERM_ENV),
        }
    }

    /// Set the verbosity ceiling.
    pub fn with_level(mut self, level: impl Into<LevelFilter>) -> Self {
        self.level = level.into();
        self
    }

    /// Set the destination.
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// Enable or disable the `file:line | ` tag.
    pub fn with_location(mut self, location: bool) -> Self {
        self.location = location;
        self
    }

    /// Force colorization off.
    pub fn with_disable_color(mut self, disable_color: bool) -> Self {
        self.disable_color = disable_color;
        self
    }

    /// Set the terminal type, as `TERM` would.
    pub fn with_term(mut self, term: Option<&str>) -> Self {
        self.term = term.map(str::to_owned);
        self
    }

    /// The verbosity ceiling.
    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// The destination.
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Whether the location tag is enabled.
    pub fn location(&self) -> bool {
        self.location
    }

    /// Decide colorization for an opened destination.
    pub fn colorize(&self, destination: &Destination) -> bool {
        should_colorize(
            self.disable_color,
            destination.is_stream() && destination.is_terminal(),
            self.term.as_deref(),
        )
    }
}

fn should_colorize(disable_color: bool, interactive: bool, term: Option<&str>) -> bool {
    !disable_color && interactive && term.is_some_and(|term| term != "dumb")
}
