#![forbid(unsafe_code)]

//! `relog` - Thread-safe rotating file logger that collapses repeated lines.
//!
//! A process-wide logging facility: callers emit leveled, pre-formatted
//! messages from any thread; the logger serializes them under one lock,
//! timestamps them, collapses consecutive duplicates from the same thread
//! and level into a `Previous line repeats N times.` summary, and persists
//! them to a rotated log file (`app.log`, previous run in `app.old.log`).
//!
//! # Example
//!
//! ```no_run
//! use relog::{Level, Logger};
//!
//! let log = Logger::new();
//! if log.init("/tmp/logs/", "app").is_ok() {
//!     log.notice("application started");
//!     log.log(Level::Warning, "cache miss rate above threshold");
//!     log.close();
//! }
//! ```
//!
//! # Features
//!
//! - `cli` (default): enables the `relog` demo/stress binary
//! - `unfiltered`: diagnostic builds persist every record regardless of verbosity

// Core modules (always available)
pub mod backend;
pub mod collapse;
pub mod filter;
pub mod fmt;
pub mod level;
pub mod logger;
pub mod path;

mod error;

// Re-exports for convenience
pub use backend::{Backend, FileBackend, LocalTime};
pub use collapse::{RepeatTracker, Summary, Verdict};
pub use error::Error;
pub use filter::Filter;
pub use level::{Level, Verbosity};
pub use logger::Logger;
