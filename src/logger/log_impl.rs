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

use std::io;
use std::io::Write;

use crate::Error;
use crate::append::Destination;
use crate::config::Config;
use crate::layout::TextLayout;
use crate::level::Level;
use crate::level::LevelFilter;
use crate::record::Record;

/// A resolved logger: a verbosity ceiling, a layout and the single destination.
///
/// Nothing about a `Logger` changes after construction.
///
/// # Examples
///
/// ```
/// use logme::Logger;
/// use logme::append::Destination;
/// use logme::config::Config;
/// use logme::level::Level;
/// use logme::record::Record;
///
/// let logger = Logger::with_destination(
///     &Config::default().with_level(Level::Warning),
///     Destination::writer(Vec::new()),
/// );
///
/// assert!(logger.enabled(Level::Error));
/// assert!(!logger.enabled(Level::Info));
///
/// let record = Record::builder()
///     .level(Level::Error)
///     .args(format_args!("disk full"))
///     .build();
/// logger.log(&record).unwrap();
/// ```
#[derive(Debug)]
pub struct Logger {
    level: LevelFilter,
    layout: TextLayout,
    destination: Destination,
}

impl Logger {
    /// Resolve `config`, opening its destination.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination is a file that cannot be opened for appending.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let destination = Destination::open(config.target())?;
        Ok(Logger::with_destination(config, destination))
    }

    /// Resolve the settings found in the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `LOG_FILE` names a file that cannot be opened for appending.
    pub fn from_env() -> Result<Self, Error> {
        Logger::new(&Config::from_env())
    }

    /// Resolve `config` against an already opened destination, ignoring its target.
    pub fn with_destination(config: &Config, destination: Destination) -> Self {
        let layout = TextLayout::default()
            .colorize(config.colorize(&destination))
            .location(config.location());

        Logger {
            level: config.level(),
            layout,
            destination,
        }
    }

    /// Replace the layout.
    pub fn with_layout(mut self, layout: TextLayout) -> Self {
        self.layout = layout;
        self
    }

    /// The verbosity ceiling.
    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// The layout.
    pub fn layout(&self) -> &TextLayout {
        &self.layout
    }

    /// The destination.
    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Whether a record at `level` produces output.
    pub fn enabled(&self, level: Level) -> bool {
        self.level.test(level)
    }

    /// Write `record` as one line, unless its level is gated off.
    ///
    /// The line is rendered before the destination is acquired, so arguments may log through
    /// this same logger. The rendered line is written while holding the destination, so
    /// concurrent calls never interleave. WARNING and ERROR lines are flushed immediately unless
    /// the destination is one of the standard streams.
    ///
    /// Failures to format or write are reported on the process's stderr and otherwise ignored.
    /// This method never terminates the process; [`Record::terminate`] is honored by
    /// [`emit`](crate::emit).
    ///
    /// # Errors
    ///
    /// Returns an error if the wall-clock time cannot be converted to calendar time.
    pub fn log(&self, record: &Record) -> Result<(), Error> {
        if !self.enabled(record.level()) {
            return Ok(());
        }

        let time = self.layout.timestamp(record)?;
        let mut bytes = match self.layout.format_at(record, &time) {
            Ok(bytes) => bytes,
            Err(err) => {
                handle_log_error(record.level(), None, err);
                return Ok(());
            }
        };
        bytes.push(b'\n');

        let flush = !self.destination.is_stream()
            && matches!(record.level(), Level::Warning | Level::Error);
        let mut writer = self.destination.lock();
        let result = write_line(&mut writer, &bytes, flush);
        drop(writer);

        if let Err(err) = result {
            handle_log_error(record.level(), Some(&bytes), Error::from_io_error(err));
        }
        Ok(())
    }

    /// Flush buffered output of the destination.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination fails to flush.
    pub fn flush(&self) -> Result<(), Error> {
        self.destination.flush().map_err(Error::from_io_error)
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let _ = self.destination.flush();
    }
}

fn write_line(writer: &mut impl Write, bytes: &[u8], flush: bool) -> io::Result<()> {
    writer.write_all(bytes)?;
    if flush {
        writer.flush()?;
    }
    Ok(())
}

// Never formats the record arguments again; they may be what failed.
fn handle_log_error(level: Level, line: Option<&[u8]>, error: Error) {
    let attempted = match line {
        Some(line) => String::from_utf8_lossy(line).trim_end().to_owned(),
        None => "<unformatted>".to_owned(),
    };

    let _ = write!(
        io::stderr(),
        r###"
Error perform logging.
    Attempted to log: {attempted}
    Level: {level}
    Error: {error}
"###,
    );
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::fmt;
    use std::sync::Arc;
    use std::sync::Mutex;
    use std::time::Duration;
    use std::time::SystemTime;

    use jiff::tz::TimeZone;

    use super::*;

    #[derive(Clone, Default)]
    struct Shared(Arc<Mutex<Vec<u8>>>);

    impl Shared {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn logger(config: Config) -> (Logger, Shared) {
        let shared = Shared::default();
        let logger = Logger::with_destination(&config, Destination::writer(shared.clone()));
        let layout = TextLayout::default()
            .location(config.location())
            .timezone(TimeZone::UTC);
        (logger.with_layout(layout), shared)
    }

    fn record(level: Level) -> Record<'static> {
        Record::builder()
            .time(SystemTime::UNIX_EPOCH + Duration::from_secs(86_400))
            .level(level)
            .file(Some("src/lib.rs"))
            .line(Some(7))
            .args(format_args!("message"))
            .build()
    }

    #[test]
    fn test_gating_by_ceiling() {
        let (logger, shared) = logger(Config::default().with_level(Level::Warning));
        for level in [Level::Error, Level::Warning, Level::Info, Level::Debug] {
            logger.log(&record(level)).unwrap();
        }

        let text = shared.text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "1970-01-02 00:00:00 ERROR   message",
                "1970-01-02 00:00:00 WARNING message",
            ]
        );
    }

    #[test]
    fn test_off_emits_nothing() {
        let (logger, shared) = logger(Config::default().with_level(Level::Off));
        logger.log(&record(Level::Error)).unwrap();
        assert!(shared.text().is_empty());
    }

    #[test]
    fn test_one_newline_per_line() {
        let (logger, shared) = logger(Config::default().with_level(Level::Debug));
        logger.log(&record(Level::Debug)).unwrap();
        logger.log(&record(Level::Info)).unwrap();
        let text = shared.text();
        assert_eq!(text.matches('\n').count(), 2);
        assert!(text.ends_with("INFO    message\n"));
    }

    #[test]
    fn test_location_prefix() {
        let (logger, shared) = logger(Config::default().with_location(true));
        logger.log(&record(Level::Info)).unwrap();
        assert_eq!(
            shared.text(),
            "1970-01-02 00:00:00 INFO    src/lib.rs:7 | message\n"
        );
    }

    #[test]
    fn test_writer_destination_is_not_colorized() {
        let shared = Shared::default();
        let config = Config::default().with_term(Some("xterm-256color"));
        let logger = Logger::with_destination(&config, Destination::writer(shared.clone()));
        assert!(!logger.layout().is_colorized());
        logger.log(&record(Level::Error)).unwrap();
        assert!(!shared.text().contains('\x1B'));
    }

    #[test]
    fn test_argument_logging_through_same_logger() {
        struct Nested<'a>(&'a Logger);

        impl fmt::Display for Nested<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0
                    .log(&record(Level::Debug))
                    .map_err(|_| fmt::Error)?;
                f.write_str("outer")
            }
        }

        let (logger, shared) = logger(Config::default().with_level(Level::Debug));
        logger
            .log(
                &Record::builder()
                    .time(SystemTime::UNIX_EPOCH)
                    .level(Level::Warning)
                    .args(format_args!("{}", Nested(&logger)))
                    .build(),
            )
            .unwrap();

        assert_eq!(
            shared.text(),
            "1970-01-02 00:00:00 DEBUG   message\n1970-01-01 00:00:00 WARNING outer\n"
        );
    }

    #[test]
    fn test_failing_argument_is_formatted_once() {
        struct Failing(Cell<usize>);

        impl fmt::Display for Failing {
            fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.set(self.0.get() + 1);
                Err(fmt::Error)
            }
        }

        let (logger, shared) = logger(Config::default());
        let failing = Failing(Cell::new(0));
        logger
            .log(
                &Record::builder()
                    .args(format_args!("{failing}"))
                    .build(),
            )
            .unwrap();

        assert_eq!(failing.0.get(), 1);
        assert!(shared.text().is_empty());
    }
}
