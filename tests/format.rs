//! Persisted-line prefix shape and continuation re-indentation.

use relog::fmt::format_line;
use relog::{Level, LocalTime};

const TIME: LocalTime = LocalTime {
    year: 2026,
    month: 8,
    day: 5,
    hour: 12,
    minute: 34,
    second: 56,
};

#[test]
fn prefix_shape() {
    let line = format_line(Level::Info, TIME, 7, "hello");
    assert_eq!(line, "2026-08-05 12:34:56 T:7    INFO: hello");
}

#[test]
fn date_fields_zero_padded() {
    let time = LocalTime {
        year: 987,
        month: 1,
        day: 2,
        hour: 3,
        minute: 4,
        second: 5,
    };
    let line = format_line(Level::Error, time, 12, "x");
    assert_eq!(line, "0987-01-02 03:04:05 T:12   ERROR: x");
}

#[test]
fn seven_character_label_needs_no_padding() {
    let line = format_line(Level::Warning, TIME, 7, "careful");
    assert_eq!(line, "2026-08-05 12:34:56 T:7 WARNING: careful");
}

#[test]
fn continuation_lines_indent_to_prefix_width() {
    let prefix = "2026-08-05 12:34:56 T:7    INFO: ";
    let line = format_line(Level::Info, TIME, 7, "first\nsecond\nthird");

    let expected = format!(
        "{prefix}first\n{indent}second\n{indent}third",
        indent = " ".repeat(prefix.len()),
    );
    assert_eq!(line, expected);
}

#[test]
fn indent_tracks_thread_id_width() {
    let line = format_line(Level::Info, TIME, 123_456, "a\nb");
    let (head, tail) = line.split_once('\n').unwrap();

    assert!(head.ends_with("INFO: a"));
    assert_eq!(tail, format!("{}b", " ".repeat(head.len() - 1)));
}
