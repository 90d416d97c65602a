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

//! Wall-clock formatting backed by `jiff`.

use std::time::SystemTime;

use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::Error;

/// `YYYY-MM-DD HH:MM:SS`, always 19 characters for years 1000..=9999.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format `now` as calendar time in `tz`, or in the system time zone if `tz` is `None`.
///
/// A system time zone that cannot be determined falls back to UTC.
///
/// # Errors
///
/// Returns an error if `now` is outside the range `jiff` can represent.
pub fn format_timestamp(now: SystemTime, tz: Option<&TimeZone>) -> Result<String, Error> {
    let timestamp = Timestamp::try_from(now)
        .map_err(|err| Error::new("failed to obtain wall-clock time").with_source(err))?;

    let tz = match tz {
        Some(tz) => tz.clone(),
        None => TimeZone::system(),
    };

    Ok(timestamp.to_zoned(tz).strftime(TIMESTAMP_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_format_utc() {
        // 2024-08-11T14:44:57Z
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_723_387_497);
        let text = format_timestamp(now, Some(&TimeZone::UTC)).unwrap();
        assert_eq!(text, "2024-08-11 14:44:57");
        assert_eq!(text.len(), 19);
    }

    #[test]
    fn test_subsecond_is_truncated() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_millis(999);
        let text = format_timestamp(now, Some(&TimeZone::UTC)).unwrap();
        assert_eq!(text, "1970-01-01 00:00:00");
    }

    #[test]
    fn test_fixed_offset() {
        let tz = TimeZone::fixed(jiff::tz::offset(8));
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_723_387_497);
        let text = format_timestamp(now, Some(&tz)).unwrap();
        assert_eq!(text, "2024-08-11 22:44:57");
    }
}
