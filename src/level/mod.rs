//! Severity levels carried by individual records and the global verbosity
//! setting that gates them. The two are independent: verbosity decides which
//! levels pass, it is not itself a level.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so the filter can compare a record's level against the
/// NOTICE threshold at normal verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// High-volume diagnostics, suppressed at normal verbosity.
    Debug = 0,
    /// Informational detail, also suppressed at normal verbosity.
    Info = 1,
    /// Normal operational milestones — the floor at normal verbosity.
    Notice = 2,
    /// Non-fatal anomalies that may need attention.
    Warning = 3,
    /// Failures of the current operation.
    Error = 4,
    /// Failures that degrade the whole application.
    Severe = 5,
    /// The application cannot continue.
    Fatal = 6,
    /// Placeholder slot at the top of the table; real records never carry it.
    None = 7,
}

impl Level {
    /// Lowercase because CLI args and parse sites use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Notice => "notice",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Severe => "severe",
            Self::Fatal => "fatal",
            Self::None => "none",
        }
    }

    /// Fixed uppercase table used in the persisted line prefix.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Notice => "NOTICE",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Severe => "SEVERE",
            Self::Fatal => "FATAL",
            Self::None => "NONE",
        }
    }

    /// Convenience for iteration in exhaustive filter checks.
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::Debug,
            Self::Info,
            Self::Notice,
            Self::Warning,
            Self::Error,
            Self::Severe,
            Self::Fatal,
            Self::None,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "notice" => Ok(Self::Notice),
            "warn" | "warning" => Ok(Self::Warning),
            "error" | "err" => Ok(Self::Error),
            "severe" => Ok(Self::Severe),
            "fatal" => Ok(Self::Fatal),
            "none" => Ok(Self::None),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Global threshold controlling which [`Level`]s are emitted.
///
/// Ranges over −1..=2 on the wire; `from_raw` is the only way in from an
/// untyped integer, so an out-of-range request can never corrupt state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verbosity {
    /// Nothing at all is logged.
    None = -1,
    /// Notice, warning, error, severe, and fatal pass; debug and info do not.
    Normal = 0,
    /// Everything passes.
    Debug = 1,
    /// Everything passes, plus free-memory diagnostics on screen.
    DebugFreemem = 2,
}

impl Verbosity {
    /// Validates the host-supplied integer; `None` means the request is rejected.
    #[must_use]
    pub const fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            -1 => Some(Self::None),
            0 => Some(Self::Normal),
            1 => Some(Self::Debug),
            2 => Some(Self::DebugFreemem),
            _ => None,
        }
    }

    /// The wire value the host configured this verbosity with.
    #[must_use]
    pub const fn as_raw(self) -> i32 {
        self as i32
    }

    /// Lowercase name used in the self-logged "level changed" notice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Normal => "normal",
            Self::Debug => "debug",
            Self::DebugFreemem => "debug-freemem",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
