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

//! Logme is a tiny process-wide logger: leveled, optionally colorized, timestamped lines written
//! to one destination chosen by the environment.
//!
//! # Overview
//!
//! The first logging call resolves the configuration once from the environment (see
//! [`config`]). Every call after that is gated by the configured level and, if it passes,
//! written as a single line:
//!
//! ```text
//! 2024-08-11 22:44:57 INFO    Hello World
//! 2024-08-11 22:44:57 INFO    src/main.rs:7 | 2 + 3 = 5
//! ```
//!
//! The location tag appears only if `LOG_LOCATION` is set. Lines are colorized only when the
//! destination is a terminal.
//!
//! # Examples
//!
//! ```
//! logme::info!("Hello World");
//! logme::debug!("Hidden unless LOG_LEVEL=4");
//! logme::warning!("Looks like the primary buffer panel just flew off.");
//! logme::info!("2 + 3 = {}", 5);
//! ```
//!
//! [`fatal!`] logs at ERROR and terminates the process with status 1.
//!
//! Loggers can also be resolved from explicit settings and used directly:
//!
//! ```
//! use logme::Logger;
//! use logme::append::Target;
//! use logme::config::Config;
//! use logme::level::Level;
//!
//! let config = Config::default()
//!     .with_level(Level::Debug)
//!     .with_target(Target::Stdout);
//! let logger = Logger::new(&config).unwrap();
//! assert!(logger.enabled(Level::Debug));
//! ```
//!
//! # Features
//!
//! * `disable`: every macro compiles to nothing; [`fatal!`] still terminates the process.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
pub mod bridge;
pub mod color;
pub mod config;
pub mod layout;
pub mod level;
pub mod record;
pub mod time;

mod error;
pub use self::error::Error;

mod logger;
pub use self::logger::*;

mod macros;
