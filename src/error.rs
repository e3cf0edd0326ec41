//! Unified error type for all relog operations.

/// Error type for relog operations.
///
/// The [`Logger`](crate::Logger) facade never propagates these to callers —
/// logging must not be able to unwind the host application — but backend
/// implementations report them so the facade can drop records deliberately.
#[derive(Debug)]
pub enum Error {
    /// I/O error from the file backend.
    Io(std::io::Error),
    /// `open` was called while a log file is already open.
    AlreadyOpen,
    /// A write was attempted with no open log file.
    NotOpen,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::AlreadyOpen => write!(f, "log file already open"),
            Self::NotOpen => write!(f, "log file not open"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
