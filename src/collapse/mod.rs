//! Suppresses identical consecutive lines from the same thread and level,
//! replacing the burst with a single `Previous line repeats N times.` summary
//! when a differing line breaks the run.
//!
//! This is what keeps a tight polling loop from flooding the log file: a
//! repeat only counts as a repeat when line text, level, *and* originating
//! thread all match the retained line.

use crate::level::Level;

/// Deferred summary for a broken run of suppressed repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Level the suppressed lines were logged at.
    pub level: Level,
    pub text: String,
}

/// What the logger should do with one candidate line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Candidate trimmed to nothing — no bookkeeping, no write.
    Discard,
    /// Candidate matches the retained line; only the counter moved.
    Suppress,
    /// Persist `line`, preceded by `flush` if a run was broken.
    Emit {
        flush: Option<Summary>,
        line: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Retained {
    line: String,
    level: Level,
    thread: u64,
}

/// Tracks the last persisted line of the single global log stream.
#[derive(Debug, Default)]
pub struct RepeatTracker {
    retained: Option<Retained>,
    count: u32,
}

impl RepeatTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            retained: None,
            count: 0,
        }
    }

    /// Classifies one candidate line.
    ///
    /// Trailing whitespace never survives to the file, so matching and the
    /// emitted text both use the trimmed form.
    pub fn observe(&mut self, candidate: &str, level: Level, thread: u64) -> Verdict {
        let line = candidate.trim_end();
        if line.is_empty() {
            return Verdict::Discard;
        }

        if let Some(retained) = &self.retained
            && retained.line == line
            && retained.level == level
            && retained.thread == thread
        {
            self.count += 1;
            return Verdict::Suppress;
        }

        let mut flush = None;
        if self.count > 0 {
            if let Some(retained) = &self.retained {
                flush = Some(Summary {
                    level: retained.level,
                    text: format!("Previous line repeats {} times.", self.count),
                });
            }
            self.count = 0;
        }

        self.retained = Some(Retained {
            line: line.to_string(),
            level,
            thread,
        });

        Verdict::Emit {
            flush,
            line: line.to_string(),
        }
    }

    /// Suppressed repeats still waiting for a summary. Close drops these.
    #[must_use]
    pub const fn pending(&self) -> u32 {
        self.count
    }

    /// A freshly opened log has no memory of earlier lines.
    pub fn reset(&mut self) {
        self.retained = None;
        self.count = 0;
    }
}
