//! The backend owns the one OS file handle and the wall clock. Nothing else
//! in the crate touches either directly — swapping the concrete backend at
//! process start is how platform differences and tests are handled.

mod file;

pub use file::FileBackend;

use crate::error::Error;
use std::path::Path;

/// Broken-out local wall-clock fields, in the units the line prefix renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

/// Persistence contract the logger requires from a pluggable backend.
///
/// `Send` so the logger holding the boxed backend can be shared across
/// threads behind its lock.
pub trait Backend: Send {
    /// Opens a fresh log file at `path`, first rotating any previous file to
    /// `backup` (best effort — a failed delete or rename must not stop the
    /// open). The fresh file's first three bytes are the UTF-8 byte-order
    /// mark.
    ///
    /// # Errors
    /// Fails if a file is already open, or the fresh file cannot be created.
    fn open(&mut self, path: &Path, backup: &Path) -> Result<(), Error>;

    /// Releases the file handle. Closing an already-closed backend is a no-op.
    fn close(&mut self);

    /// Whether a log file is currently open.
    fn is_open(&self) -> bool;

    /// Appends `line` plus a single trailing terminator and flushes before
    /// returning.
    ///
    /// # Errors
    /// Fails when no file is open or the underlying write fails — reported
    /// distinctly so the caller can drop the record and carry on.
    fn write(&mut self, line: &str) -> Result<(), Error>;

    /// Local wall-clock reading for the line prefix.
    fn now_local(&self) -> LocalTime;
}
