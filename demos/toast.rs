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

// Try: LOG_LEVEL=4 LOG_LOCATION=1 cargo run --example toast

macro_rules! info_database {
    ($($arg:tt)+) => {
        logme::info!("[ Database ] {}", format_args!($($arg)+))
    };
}

fn main() {
    logme::info!("Hello World");

    // hidden by default, set LOG_LEVEL=4 to see it
    logme::debug!("Now you see me, now you...");

    logme::warning!("Looks like the primary buffer panel just flew off.");
    logme::error!("You have no respect for logic.");

    logme::info!("2 + 3 = {}", 5);

    // user data is an argument, never part of the template
    let entries = 507;
    let statement = "Robert'); DROP TABLE users; --";
    info_database!("Found {entries} entries, now inserting `{statement}`");

    if std::fs::File::open("/definitely/not/here").is_err() {
        logme::warning_os!("open");
    }

    logme::fatal!("Abandon the Sinking Ship!");
}
