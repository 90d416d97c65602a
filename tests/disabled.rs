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

// Run with `--features disable`. Same re-spawn scheme as `tests/process.rs`.

#![cfg(feature = "disable")]

use std::process::Command;
use std::process::Output;

const CHILD_ENV: &str = "LOGME_TEST_CHILD";

fn run_child(name: &str) -> Output {
    let exe = std::env::current_exe().expect("failed to locate the test binary");
    Command::new(exe)
        .args([name, "--exact", "--nocapture", "--test-threads=1"])
        .env_remove("LOG_FILE")
        .env("LOG_LEVEL", "4")
        .env(CHILD_ENV, name)
        .output()
        .expect("failed to run the test binary")
}

fn is_child(name: &str) -> bool {
    std::env::var(CHILD_ENV).is_ok_and(|child| child == name)
}

fn contains_marker(output: &Output) -> bool {
    [&output.stdout, &output.stderr]
        .iter()
        .any(|text| String::from_utf8_lossy(text).contains("stripped-marker"))
}

#[test]
fn child_stripped_levels() {
    if !is_child("child_stripped_levels") {
        return;
    }
    let mut evaluated = false;
    logme::error!("stripped-marker error {}", {
        evaluated = true;
        1
    });
    logme::warning!("stripped-marker warning");
    logme::info!("stripped-marker info");
    logme::debug!("stripped-marker debug");
    logme::info_os!("stripped-marker os");
    assert!(!evaluated);
}

#[test]
fn test_macros_print_nothing() {
    let output = run_child("child_stripped_levels");
    assert!(output.status.success(), "{output:?}");
    assert!(!contains_marker(&output), "{output:?}");
}

#[test]
fn child_stripped_fatal() {
    if !is_child("child_stripped_fatal") {
        return;
    }
    logme::fatal!("stripped-marker fatal");
}

#[test]
fn test_fatal_still_terminates() {
    let output = run_child("child_stripped_fatal");
    assert_eq!(output.status.code(), Some(1), "{output:?}");
    assert!(!contains_marker(&output), "{output:?}");
}
