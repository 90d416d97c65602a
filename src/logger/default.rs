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

use std::fmt;
use std::io;
use std::io::Write;
use std::process;
use std::sync::Once;
use std::sync::OnceLock;

use crate::Error;
use crate::Logger;
use crate::color::LogColor;
use crate::level::Level;
use crate::record::Record;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Return the process-wide logger, resolving it from the environment on first use.
///
/// Resolution happens exactly once, even if several threads log for the first time
/// concurrently.
///
/// If `LOG_FILE` names a file that cannot be opened, a diagnostic is written to stderr and the
/// process exits with status 1.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(|| {
        let logger = Logger::from_env().unwrap_or_else(|err| fatal(&err));
        register_exit_flush();
        logger
    })
}

/// Install `logger` as the process-wide logger instead of resolving one from the environment.
///
/// # Errors
///
/// Returns the logger back if the process-wide logger is already set.
pub fn set_default_logger(logger: Logger) -> Result<(), Logger> {
    DEFAULT_LOGGER.set(logger)?;
    register_exit_flush();
    Ok(())
}

/// Log through the process-wide logger and terminate the process if asked to.
///
/// This is the function behind [`error!`](crate::error) and friends. The record is gated by the
/// configured ceiling, but `terminate` is honored even when nothing is printed.
///
/// The process exits with status 1 if `terminate` is set, or if the wall-clock time cannot be
/// converted to calendar time.
pub fn emit(
    level: Level,
    color: LogColor,
    terminate: bool,
    file: Option<&str>,
    line: Option<u32>,
    args: fmt::Arguments,
) {
    let record = Record::builder()
        .level(level)
        .color(color)
        .terminate(terminate)
        .file(file)
        .line(line)
        .args(args)
        .build();

    if let Err(err) = default_logger().log(&record) {
        fatal(&err);
    }

    if record.terminate() {
        process::exit(1);
    }
}

/// Log at ERROR through the process-wide logger and terminate the process.
///
/// This is the function behind [`fatal!`](crate::fatal).
pub fn emit_fatal(
    color: LogColor,
    file: Option<&str>,
    line: Option<u32>,
    args: fmt::Arguments,
) -> ! {
    emit(Level::Error, color, true, file, line, args);
    process::exit(1)
}

pub(crate) fn fatal(err: &Error) -> ! {
    let _ = writeln!(io::stderr(), "Logger: {err}");
    process::exit(1)
}

fn register_exit_flush() {
    static REGISTER: Once = Once::new();
    REGISTER.call_once(|| {
        // SAFETY: `flush_at_exit` neither unwinds nor calls `exit`.
        unsafe {
            libc::atexit(flush_at_exit);
        }
    });
}

extern "C" fn flush_at_exit() {
    if let Some(logger) = DEFAULT_LOGGER.get() {
        // skip if another thread still holds the destination
        logger.destination().try_flush();
    }
}
