//! Standard-filesystem backend: one open handle, rotate-on-open,
//! flush-per-line.

use super::{Backend, LocalTime};
use crate::error::Error;
use chrono::{Datelike, Local, Timelike};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// UTF-8 byte-order mark written as the first three bytes of every fresh log
/// file, so viewers treat the file as UTF-8 regardless of locale.
const BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Owns the one OS file handle for the process-wide log.
#[derive(Debug, Default)]
pub struct FileBackend {
    file: Option<BufWriter<File>>,
}

impl FileBackend {
    #[must_use]
    pub const fn new() -> Self {
        Self { file: None }
    }
}

impl Backend for FileBackend {
    fn open(&mut self, path: &Path, backup: &Path) -> Result<(), Error> {
        if self.file.is_some() {
            return Err(Error::AlreadyOpen);
        }

        // Best-effort rotation: a stale backup or missing previous file must
        // not stop the fresh file from opening.
        let _ = fs::remove_file(backup);
        let _ = fs::rename(path, backup);

        let mut file = BufWriter::new(File::create(path)?);
        file.write_all(&BOM)?;
        file.flush()?;

        self.file = Some(file);
        Ok(())
    }

    fn close(&mut self) {
        if let Some(mut file) = self.file.take() {
            let _ = file.flush();
        }
    }

    fn is_open(&self) -> bool {
        self.file.is_some()
    }

    fn write(&mut self, line: &str) -> Result<(), Error> {
        let Some(file) = self.file.as_mut() else {
            return Err(Error::NotOpen);
        };

        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")?;
        file.flush()?;
        Ok(())
    }

    fn now_local(&self) -> LocalTime {
        let now = Local::now();
        LocalTime {
            year: now.year(),
            month: now.month(),
            day: now.day(),
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
        }
    }
}
