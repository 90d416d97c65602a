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

// With the `disable` feature, every macro type-checks its arguments inside `if false` and
// produces no code; `fatal!` still exits.

/// Log at ERROR in red, then terminate the process with status 1.
///
/// The process terminates even if ERROR is gated off.
///
/// ```no_run
/// logme::fatal!("Abandon the Sinking Ship!");
/// ```
#[cfg(not(feature = "disable"))]
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
        $crate::emit_fatal(
            $crate::color::LogColor::RED,
            ::std::option::Option::Some(::std::file!()),
            ::std::option::Option::Some(::std::line!()),
            ::std::format_args!($($arg)+),
        )
    };
}

/// Log at ERROR in red.
///
/// ```
/// logme::error!("You have no respect for {}.", "logic");
/// ```
#[cfg(not(feature = "disable"))]
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::emit(
            $crate::level::Level::Error,
            $crate::color::LogColor::RED,
            false,
            ::std::option::Option::Some(::std::file!()),
            ::std::option::Option::Some(::std::line!()),
            ::std::format_args!($($arg)+),
        )
    };
}

/// Log at WARNING in yellow.
///
/// ```
/// logme::warning!("Looks like the primary buffer panel just flew off.");
/// ```
#[cfg(not(feature = "disable"))]
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => {
        $crate::emit(
            $crate::level::Level::Warning,
            $crate::color::LogColor::YELLOW,
            false,
            ::std::option::Option::Some(::std::file!()),
            ::std::option::Option::Some(::std::line!()),
            ::std::format_args!($($arg)+),
        )
    };
}

/// Log at INFO in cyan.
///
/// ```
/// logme::info!("2 + 3 = {}", 5);
/// ```
#[cfg(not(feature = "disable"))]
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::emit(
            $crate::level::Level::Info,
            $crate::color::LogColor::CYAN,
            false,
            ::std::option::Option::Some(::std::file!()),
            ::std::option::Option::Some(::std::line!()),
            ::std::format_args!($($arg)+),
        )
    };
}

/// Log at DEBUG in blue.
///
/// ```
/// logme::debug!("Now you see me, now you...");
/// ```
#[cfg(not(feature = "disable"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::emit(
            $crate::level::Level::Debug,
            $crate::color::LogColor::BLUE,
            false,
            ::std::option::Option::Some(::std::file!()),
            ::std::option::Option::Some(::std::line!()),
            ::std::format_args!($($arg)+),
        )
    };
}

#[cfg(feature = "disable")]
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {{
        if false {
            let _ = ::std::format_args!($($arg)+);
        }
        ::std::process::exit(1)
    }};
}

#[cfg(feature = "disable")]
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {{
        if false {
            let _ = ::std::format_args!($($arg)+);
        }
    }};
}

#[cfg(feature = "disable")]
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => {{
        if false {
            let _ = ::std::format_args!($($arg)+);
        }
    }};
}

#[cfg(feature = "disable")]
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {{
        if false {
            let _ = ::std::format_args!($($arg)+);
        }
    }};
}

#[cfg(feature = "disable")]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {{
        if false {
            let _ = ::std::format_args!($($arg)+);
        }
    }};
}

/// Like [`fatal!`], with the last OS error appended to `tag`, as `perror` would.
///
/// ```no_run
/// if std::fs::File::open("/nowhere").is_err() {
///     logme::fatal_os!("open");
/// }
/// ```
#[macro_export]
macro_rules! fatal_os {
    ($tag:expr) => {
        $crate::fatal!("{}: {}", $tag, ::std::io::Error::last_os_error())
    };
}

/// Like [`error!`], with the last OS error appended to `tag`.
#[macro_export]
macro_rules! error_os {
    ($tag:expr) => {
        $crate::error!("{}: {}", $tag, ::std::io::Error::last_os_error())
    };
}

/// Like [`warning!`], with the last OS error appended to `tag`.
#[macro_export]
macro_rules! warning_os {
    ($tag:expr) => {
        $crate::warning!("{}: {}", $tag, ::std::io::Error::last_os_error())
    };
}

/// Like [`info!`], with the last OS error appended to `tag`.
#[macro_export]
macro_rules! info_os {
    ($tag:expr) => {
        $crate::info!("{}: {}", $tag, ::std::io::Error::last_os_error())
    };
}

/// Like [`debug!`], with the last OS error appended to `tag`.
#[macro_export]
macro_rules! debug_os {
    ($tag:expr) => {
        $crate::debug!("{}: {}", $tag, ::std::io::Error::last_os_error())
    };
}
