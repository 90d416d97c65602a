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
use std::io::IsTerminal;
use std::io::StderrLock;
use std::io::StdoutLock;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;
use std::sync::TryLockError;

use crate::Error;
use crate::append::FileWriter;

/// Where a logger should write, before anything is opened.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum Target {
    /// The inherited standard error stream.
    #[default]
    Stderr,
    /// The inherited standard output stream.
    Stdout,
    /// A file opened for appending.
    File(PathBuf),
}

impl Target {
    /// Interpret the value of the `LOG_FILE` setting.
    ///
    /// `None` selects stderr, `-` selects stdout and anything else is a file path.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value {
            None => Target::Stderr,
            Some("-") => Target::Stdout,
            Some(path) => Target::File(PathBuf::from(path)),
        }
    }
}

/// The opened destination of a logger.
///
/// Exactly one destination exists per logger and it never changes once opened.
pub enum Destination {
    /// The inherited standard error stream.
    Stderr,
    /// The inherited standard output stream.
    Stdout,
    /// A buffered file owned by the logger.
    File(Mutex<FileWriter>),
    /// An arbitrary writer, treated like a file.
    Writer(Mutex<Box<dyn Write + Send>>),
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stderr => f.write_str("Stderr"),
            Destination::Stdout => f.write_str("Stdout"),
            Destination::File(file) => match file.try_lock() {
                Ok(file) => f.debug_tuple("File").field(&file.path()).finish(),
                Err(_) => f.debug_tuple("File").field(&"<locked>").finish(),
            },
            Destination::Writer(_) => f.write_str("Writer"),
        }
    }
}

impl Destination {
    /// Open the destination described by `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is a file that cannot be opened for appending.
    pub fn open(target: &Target) -> Result<Self, Error> {
        match target {
            Target::Stderr => Ok(Destination::Stderr),
            Target::Stdout => Ok(Destination::Stdout),
            Target::File(path) => Ok(Destination::File(Mutex::new(FileWriter::open(path)?))),
        }
    }

    /// Route output to an arbitrary writer.
    pub fn writer(writer: impl Write + Send + 'static) -> Self {
        Destination::Writer(Mutex::new(Box::new(writer)))
    }

    /// Whether this is one of the inherited standard streams.
    pub fn is_stream(&self) -> bool {
        matches!(self, Destination::Stderr | Destination::Stdout)
    }

    /// Whether this is an inherited standard stream attached to a terminal.
    pub fn is_terminal(&self) -> bool {
        match self {
            Destination::Stderr => io::stderr().is_terminal(),
            Destination::Stdout => io::stdout().is_terminal(),
            Destination::File(_) | Destination::Writer(_) => false,
        }
    }

    /// Acquire exclusive access to the destination.
    ///
    /// Every line is written while holding the returned guard, so lines from different threads
    /// never interleave.
    pub fn lock(&self) -> DestinationWriter<'_> {
        match self {
            Destination::Stderr => DestinationWriter::Stderr(io::stderr().lock()),
            Destination::Stdout => DestinationWriter::Stdout(io::stdout().lock()),
            Destination::File(file) => {
                DestinationWriter::File(file.lock().unwrap_or_else(PoisonError::into_inner))
            }
            Destination::Writer(writer) => {
                DestinationWriter::Writer(writer.lock().unwrap_or_else(PoisonError::into_inner))
            }
        }
    }

    /// Flush buffered output.
    pub fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }

    /// Flush buffered output unless another thread holds the destination. Never blocks.
    ///
    /// The standard streams are left alone: stderr is unbuffered and std flushes stdout on exit.
    ///
    /// Returns `false` if the destination was busy.
    pub fn try_flush(&self) -> bool {
        match self {
            Destination::Stderr | Destination::Stdout => true,
            Destination::File(file) => match file.try_lock() {
                Ok(mut file) => {
                    let _ = file.flush();
                    true
                }
                Err(TryLockError::Poisoned(file)) => {
                    let _ = file.into_inner().flush();
                    true
                }
                Err(TryLockError::WouldBlock) => false,
            },
            Destination::Writer(writer) => match writer.try_lock() {
                Ok(mut writer) => {
                    let _ = writer.flush();
                    true
                }
                Err(TryLockError::Poisoned(writer)) => {
                    let _ = writer.into_inner().flush();
                    true
                }
                Err(TryLockError::WouldBlock) => false,
            },
        }
    }
}

/// Exclusive access to a [`Destination`], released on drop.
pub enum DestinationWriter<'a> {
    /// Locked stderr.
    Stderr(StderrLock<'static>),
    /// Locked stdout.
    Stdout(StdoutLock<'static>),
    /// Locked log file.
    File(MutexGuard<'a, FileWriter>),
    /// Locked custom writer.
    Writer(MutexGuard<'a, Box<dyn Write + Send>>),
}

impl Write for DestinationWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            DestinationWriter::Stderr(w) => w.write(buf),
            DestinationWriter::Stdout(w) => w.write(buf),
            DestinationWriter::File(w) => w.write(buf),
            DestinationWriter::Writer(w) => w.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            DestinationWriter::Stderr(w) => w.write_all(buf),
            DestinationWriter::Stdout(w) => w.write_all(buf),
            DestinationWriter::File(w) => w.write_all(buf),
            DestinationWriter::Writer(w) => w.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            DestinationWriter::Stderr(w) => w.flush(),
            DestinationWriter::Stdout(w) => w.flush(),
            DestinationWriter::File(w) => w.flush(),
            DestinationWriter::Writer(w) => w.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_from_setting() {
        assert_eq!(Target::from_setting(None), Target::Stderr);
        assert_eq!(Target::from_setting(Some("-")), Target::Stdout);
        assert_eq!(
            Target::from_setting(Some("/var/log/app.log")),
            Target::File(PathBuf::from("/var/log/app.log"))
        );
    }

    #[test]
    fn test_files_and_writers_are_never_terminals() {
        let dest = Destination::writer(Vec::new());
        assert!(!dest.is_stream());
        assert!(!dest.is_terminal());
        assert!(Destination::Stderr.is_stream());
        assert!(Destination::Stdout.is_stream());
    }

    #[test]
    fn test_try_flush_never_blocks() {
        let dest = Destination::writer(Vec::new());
        let guard = dest.lock();
        assert!(!dest.try_flush());
        drop(guard);
        assert!(dest.try_flush());

        let held = io::stderr().lock();
        let (tx, rx) = std::sync::mpsc::channel();
        let handle = std::thread::spawn(move || {
            let _ = tx.send(Destination::Stderr.try_flush());
        });
        let flushed = rx.recv_timeout(std::time::Duration::from_secs(5));
        drop(held);
        handle.join().unwrap();
        assert_eq!(flushed, Ok(true));
    }

    #[test]
    fn test_open_file_target() {
        let dir = tempfile::TempDir::new().expect("failed to create a temporary directory");
        let path = dir.path().join("dest.log");

        let dest = Destination::open(&Target::File(path.clone())).unwrap();
        assert!(!dest.is_stream());
        dest.lock().write_all(b"line\n").unwrap();
        assert!(dest.try_flush());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "line\n");
    }
}
