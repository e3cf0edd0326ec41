//! Hex+ASCII rendering of an arbitrary byte buffer, 16 bytes per row.

use std::fmt::Write;

const BYTES_PER_ROW: usize = 16;
const CLUSTER: usize = 4;
/// Offset prefix plus four full hex clusters plus the column gap; short
/// trailing rows pad up to here so the ASCII gutter stays aligned.
const ASCII_COLUMN: usize = 13 * 4 + 16;

/// Renders `data` as `MEM_DUMP: <offset>  <hex clusters>  <ascii>` rows.
///
/// Hex bytes group in clusters of four separated by a space. Bytes outside
/// the printable range 32..=127 show as `.` in the ASCII gutter.
#[must_use]
pub fn rows(data: &[u8]) -> Vec<String> {
    let mut out = Vec::with_capacity(data.len().div_ceil(BYTES_PER_ROW));

    for (row, chunk) in data.chunks(BYTES_PER_ROW).enumerate() {
        let mut line = format!("MEM_DUMP: {:04x} ", row * BYTES_PER_ROW);

        for cluster in chunk.chunks(CLUSTER) {
            for byte in cluster {
                let _ = write!(line, " {byte:02x}");
            }
            line.push(' ');
        }

        while line.len() < ASCII_COLUMN {
            line.push(' ');
        }

        for &byte in chunk {
            line.push(if (32..=127).contains(&byte) {
                byte as char
            } else {
                '.'
            });
        }

        out.push(line);
    }

    out
}
