//! The logger facade: owns all mutable logging state under one lock and runs
//! every record through the filter → collapse → format → write pipeline.
//!
//! Nothing here can fail from the caller's point of view. An unopened or
//! failing backend drops records; an out-of-range verbosity request is
//! reported as a self-logged ERROR line. The host application keeps running
//! either way.

use crate::backend::{Backend, FileBackend};
use crate::collapse::{RepeatTracker, Verdict};
use crate::error::Error;
use crate::filter::Filter;
use crate::fmt::{self, memdump};
use crate::level::{Level, Verbosity};
use crate::path;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Process-stable identifier for the calling OS thread; repeat detection and
/// the line prefix both key on it.
fn current_thread_id() -> u64 {
    static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);
    thread_local! {
        static THREAD_ID: u64 = NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed);
    }
    THREAD_ID.with(|id| *id)
}

/// Everything the pipeline mutates, so one lock acquisition covers a whole
/// record.
struct LogState {
    filter: Filter,
    repeats: RepeatTracker,
    backend: Box<dyn Backend>,
}

/// Process-wide logging context.
///
/// Explicitly constructed and typically shared via `Arc` for the life of the
/// process; there is no ambient global instance. All state lives behind a
/// single mutex, so lines from different threads land in the file in the
/// order their lock acquisitions won, and each record's whole pipeline runs
/// atomically.
pub struct Logger {
    state: Mutex<LogState>,
}

impl Logger {
    /// Logger over the standard file backend, not yet attached to a file.
    #[must_use]
    pub fn new() -> Self {
        Self::with_backend(FileBackend::new())
    }

    /// Logger over a caller-chosen backend — how the concrete persistence
    /// implementation is selected at process start, and how tests capture
    /// output.
    pub fn with_backend(backend: impl Backend + 'static) -> Self {
        Self {
            state: Mutex::new(LogState {
                filter: Filter::new(),
                repeats: RepeatTracker::new(),
                backend: Box::new(backend),
            }),
        }
    }

    /// A poisoned lock means some thread panicked mid-write; the state is
    /// still structurally sound and logging must keep working, so recover the
    /// guard instead of propagating the panic.
    fn lock(&self) -> MutexGuard<'_, LogState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Opens `{directory}/{app_name}.log`, rotating any previous file to
    /// `{app_name}.old.log` in the same directory.
    ///
    /// On failure the logger stays unopened and subsequent records are
    /// silently dropped at the write stage.
    ///
    /// # Errors
    /// Fails if a log file is already open or the file cannot be created.
    pub fn init(&self, directory: &str, app_name: &str) -> Result<(), Error> {
        let dir = path::ensure_trailing_separator(directory);
        let target = PathBuf::from(format!("{dir}{app_name}.log"));
        let backup = PathBuf::from(format!("{dir}{app_name}.old.log"));

        let mut state = self.lock();
        state.backend.open(&target, &backup)
    }

    /// Closes the backend and forgets all repeat bookkeeping. A pending
    /// repeat summary is dropped, not flushed. Idempotent.
    pub fn close(&self) {
        let mut state = self.lock();
        state.backend.close();
        state.repeats.reset();
    }

    /// Logs a pre-formatted message with no extra-category tag.
    pub fn log(&self, level: Level, msg: &str) {
        self.log_tagged(level, 0, msg);
    }

    /// Logs a pre-formatted message tagged with extra-category bits; tagged
    /// records are dropped unless their category has been opted in via
    /// [`set_extra_log_levels`](Self::set_extra_log_levels).
    pub fn log_tagged(&self, level: Level, extra: u32, msg: &str) {
        let mut state = self.lock();
        if !state.filter.is_enabled(level, extra) {
            return;
        }
        Self::append(&mut state, level, msg);
    }

    /// Collapse-then-write half of the pipeline. Assumes the lock is held —
    /// the deferred repeat summary writes through here without re-entering
    /// the public surface.
    fn append(state: &mut LogState, level: Level, msg: &str) {
        match state.repeats.observe(msg, level, current_thread_id()) {
            Verdict::Discard | Verdict::Suppress => {}
            Verdict::Emit { flush, line } => {
                if let Some(summary) = flush {
                    Self::persist(state, summary.level, &summary.text);
                }
                Self::persist(state, level, &line);
            }
        }
    }

    /// Formats and writes one already-collapsed line. Write failures are
    /// swallowed: the record is dropped and logging continues.
    fn persist(state: &mut LogState, level: Level, line: &str) {
        let now = state.backend.now_local();
        let rendered = fmt::format_line(level, now, current_thread_id(), line);
        let _ = state.backend.write(&rendered);
    }

    /// Re-checks the filter for a message originating inside the logger
    /// itself, with the lock already held.
    fn self_log(state: &mut LogState, level: Level, msg: &str) {
        if state.filter.is_enabled(level, 0) {
            Self::append(state, level, msg);
        }
    }

    /// Applies a host-requested verbosity, accepting only −1..=2.
    ///
    /// A valid change is announced at NOTICE; an out-of-range request leaves
    /// the verbosity unchanged and shows up as one ERROR line in the stream —
    /// the rejection is observable, never raised.
    pub fn set_log_level(&self, raw: i32) {
        let mut state = self.lock();
        match Verbosity::from_raw(raw) {
            Some(verbosity) => {
                state.filter.set_verbosity(verbosity);
                Self::self_log(
                    &mut state,
                    Level::Notice,
                    &format!("Log level changed to \"{verbosity}\""),
                );
            }
            None => {
                Self::self_log(
                    &mut state,
                    Level::Error,
                    &format!("Invalid log level requested: {raw}"),
                );
            }
        }
    }

    /// The currently configured verbosity.
    #[must_use]
    pub fn log_level(&self) -> Verbosity {
        self.lock().filter.verbosity()
    }

    /// Replaces the extra-category opt-in mask; takes effect on the next record.
    pub fn set_extra_log_levels(&self, mask: u32) {
        self.lock().filter.set_extra_levels(mask);
    }

    /// The currently configured extra-category mask.
    #[must_use]
    pub fn extra_log_levels(&self) -> u32 {
        self.lock().filter.extra_levels()
    }

    /// Whether a record at `level` with `extra` tag bits would currently be
    /// persisted. Lets hot call sites skip building expensive messages.
    #[must_use]
    pub fn is_enabled(&self, level: Level, extra: u32) -> bool {
        self.lock().filter.is_enabled(level, extra)
    }

    /// Renders `data` as 16-bytes-per-row hex+ASCII at DEBUG level.
    ///
    /// Layered entirely atop [`log`](Self::log): each row is an ordinary
    /// record, so verbosity filtering applies as usual.
    pub fn mem_dump(&self, data: &[u8]) {
        self.log(
            Level::Debug,
            &format!("MEM_DUMP: Dumping from {:p}", data.as_ptr()),
        );
        for row in memdump::rows(data) {
            self.log(Level::Debug, &row);
        }
    }

    pub fn debug(&self, msg: &str) {
        self.log(Level::Debug, msg);
    }

    pub fn info(&self, msg: &str) {
        self.log(Level::Info, msg);
    }

    pub fn notice(&self, msg: &str) {
        self.log(Level::Notice, msg);
    }

    pub fn warning(&self, msg: &str) {
        self.log(Level::Warning, msg);
    }

    pub fn error(&self, msg: &str) {
        self.log(Level::Error, msg);
    }

    pub fn severe(&self, msg: &str) {
        self.log(Level::Severe, msg);
    }

    pub fn fatal(&self, msg: &str) {
        self.log(Level::Fatal, msg);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
