//! Renders the persisted form of one record: the fixed prefix
//! `YYYY-MM-DD HH:MM:SS T:<thread> <LEVEL>: ` followed by the message, with
//! embedded newlines re-indented so continuation lines stay under the prefix.

pub mod memdump;

use crate::backend::LocalTime;
use crate::level::Level;

/// Level labels are right-justified to seven columns so the message column
/// starts at the same offset on every line of a given thread.
const LEVEL_WIDTH: usize = 7;

/// Builds the final persisted line for one record.
///
/// The clock reading comes from the backend, not from here — all OS time
/// queries stay behind the [`Backend`](crate::Backend) boundary.
#[must_use]
pub fn format_line(level: Level, time: LocalTime, thread_id: u64, message: &str) -> String {
    let prefix = format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02} T:{} {:>width$}: ",
        time.year,
        time.month,
        time.day,
        time.hour,
        time.minute,
        time.second,
        thread_id,
        level.label(),
        width = LEVEL_WIDTH,
    );

    let mut line = String::with_capacity(prefix.len() + message.len());
    if message.contains('\n') {
        // Continuation lines indent to the prefix width, which varies with
        // the thread-id digit count.
        let continuation = format!("\n{:indent$}", "", indent = prefix.len());
        line.push_str(&prefix);
        line.push_str(&message.replace('\n', &continuation));
    } else {
        line.push_str(&prefix);
        line.push_str(message);
    }
    line
}
