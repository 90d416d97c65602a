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

use crate::Logger;
use crate::level::Level;
use crate::logger::default_logger;
use crate::logger::fatal;
use crate::record::Record;

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warning,
            log::Level::Info => Self::Info,
            log::Level::Debug | log::Level::Trace => Self::Debug,
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        Logger::enabled(self, metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        let record = Record::builder()
            .args(*record.args())
            .level(record.level().into())
            .file(record.file())
            .line(record.line())
            .build();

        if let Err(err) = Logger::log(self, &record) {
            fatal(&err);
        }
    }

    fn flush(&self) {
        let _ = Logger::flush(self);
    }
}

/// Route records of the `log` crate through the process-wide logger.
///
/// The `log` crate's maximum level follows the configured ceiling, with `Trace` records treated
/// as DEBUG.
///
/// # Examples
///
/// ```
/// logme::bridge::setup_log_crate().unwrap();
///
/// log::warn!("routed through logme");
/// ```
///
/// # Errors
///
/// Returns an error if another global logger is already set up for the `log` crate.
pub fn setup_log_crate() -> Result<(), log::SetLoggerError> {
    let logger = default_logger();
    log::set_logger(logger)?;
    log::set_max_level(logger.level().to_log_level_filter());
    Ok(())
}
