//! Append-only decklist log
//!
//! Each resolved decklist is appended as a section: a `---` line followed by
//! one record line per card (see [`DeckRecord`]). Existing content is never
//! rewritten. Appends take an exclusive lock, reads a shared one.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use thiserror::Error;

use crate::domain::{DeckRecord, RecordError, SECTION_SEPARATOR};

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Malformed record at line {line_no}: {source}")]
    Malformed {
        line_no: usize,
        #[source]
        source: RecordError,
    },
}

/// Handle to the decklist log file
pub struct DeckLog {
    path: PathBuf,
}

impl DeckLog {
    /// Creates a log handle for the given path (the file is created on first append)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends a separator line and one line per record
    pub fn append_section(&self, records: &[DeckRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open decklist log: {}", self.path.display()))?;

        file.lock_exclusive()
            .context("Failed to acquire write lock on decklist log")?;

        let mut writer = BufWriter::new(&file);
        writeln!(writer, "{}", SECTION_SEPARATOR).context("Failed to write section separator")?;
        for record in records {
            writeln!(writer, "{}", record.to_line()).context("Failed to write record")?;
        }

        writer.flush().context("Failed to flush decklist log")?;

        Ok(())
    }

    /// Reads every section back; a missing file reads as no sections
    ///
    /// Records that appear before the first separator form their own section.
    pub fn read_sections(&self) -> Result<Vec<Vec<DeckRecord>>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open decklist log: {}", self.path.display()))?;

        file.lock_shared()
            .context("Failed to acquire read lock on decklist log")?;

        let reader = BufReader::new(&file);
        let mut sections: Vec<Vec<DeckRecord>> = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
            let line = line.trim_end_matches('\r');

            if line.trim().is_empty() {
                continue;
            }

            if line.trim() == SECTION_SEPARATOR {
                sections.push(Vec::new());
                continue;
            }

            let record = DeckRecord::parse_line(line)
                .map_err(|source| LogError::Malformed { line_no, source })?;

            match sections.last_mut() {
                Some(section) => section.push(record),
                None => sections.push(vec![record]),
            }
        }

        Ok(sections)
    }
}
