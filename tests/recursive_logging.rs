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
use std::fs;

use logme::Logger;
use logme::append::Target;
use logme::config::Config;
use logme::level::Level;
use logme::record::Record;
use tempfile::TempDir;

struct Thing<'a> {
    logger: &'a Logger,
    name: &'a str,
}

impl fmt::Display for Thing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.logger
            .log(
                &Record::builder()
                    .level(Level::Debug)
                    .args(format_args!("formatting wrapping ({})", self.name))
                    .build(),
            )
            .map_err(|_| fmt::Error)?;
        f.write_str(self.name)
    }
}

// an argument that logs through the logger formatting it
#[test]
fn test_meta_logging_in_format_works() {
    let dir = TempDir::new().expect("failed to create a temporary directory");
    let path = dir.path().join("recursive.log");
    let logger = Logger::new(
        &Config::default()
            .with_level(Level::Debug)
            .with_target(Target::File(path.clone())),
    )
    .unwrap();

    let thing = Thing {
        logger: &logger,
        name: "aha",
    };
    logger
        .log(
            &Record::builder()
                .level(Level::Error)
                .args(format_args!("I'm logging {thing}!"))
                .build(),
        )
        .unwrap();
    drop(logger);

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2, "{content:?}");
    assert!(lines[0].ends_with(" DEBUG   formatting wrapping (aha)"), "{content:?}");
    assert!(lines[1].ends_with(" ERROR   I'm logging aha!"), "{content:?}");
}
