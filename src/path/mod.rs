//! Path-string helper used once, when the logger builds its file path at
//! initialization.

/// Ensures `dir` ends in exactly one path separator before filename
/// concatenation.
///
/// A trailing run of separators collapses to one; the separator style already
/// present in the string is kept, and bare names get `/`.
#[must_use]
pub fn ensure_trailing_separator(dir: &str) -> String {
    let trimmed = dir.trim_end_matches(['/', '\\']);
    let separator = if trimmed.contains('\\') { '\\' } else { '/' };

    let mut out = String::with_capacity(trimmed.len() + 1);
    out.push_str(trimmed);
    out.push(separator);
    out
}
