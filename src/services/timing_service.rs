//! Timing log service
//!
//! Streams `<bib> <separator> <HH:MM:SS,ffffff>` lines from the timing log as
//! [`TimingRecord`]s. The file handle lives inside [`TimingLog`] and is closed
//! when the iterator is dropped, whether it was drained or stopped on an error.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::constants::TIMING_LINE_TOKENS;
use crate::error::{AppError, AppResult};
use crate::models::TimingRecord;
use crate::utils::time::parse_timestamp;

/// Lazy, single-pass reader over a timing log file
///
/// Yields one record per line. After the first error it yields `None`.
pub struct TimingLog {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    line_number: usize,
    failed: bool,
}

impl TimingLog {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of lines read so far
    pub fn lines_read(&self) -> usize {
        self.line_number
    }
}

impl Iterator for TimingLog {
    type Item = AppResult<TimingRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let result = match self.lines.next()? {
            Ok(line) => {
                self.line_number += 1;
                TimingService::parse_line(&line, self.line_number)
            }
            Err(e) => Err(AppError::TimingLogRead {
                path: self.path.clone(),
                reason: e.to_string(),
            }),
        };

        self.failed = result.is_err();
        Some(result)
    }
}

/// Timing service for reading the start/finish log
pub struct TimingService;

impl TimingService {
    /// Open the timing log at `path` for streaming
    pub fn open(path: &Path) -> AppResult<TimingLog> {
        let file = File::open(path).map_err(|e| AppError::TimingLogRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), "Opened timing log");

        Ok(TimingLog {
            path: path.to_path_buf(),
            lines: BufReader::new(file).lines(),
            line_number: 0,
            failed: false,
        })
    }

    /// Parse a single timing log line
    pub fn parse_line(line: &str, line_number: usize) -> AppResult<TimingRecord> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != TIMING_LINE_TOKENS {
            return Err(AppError::MalformedLine {
                line_number,
                line: line.to_string(),
            });
        }
        // The middle token is a free-form separator and is not inspected.
        let (bib, time) = (tokens[0], tokens[2]);

        let timestamp = parse_timestamp(time).ok_or_else(|| AppError::MalformedTimestamp {
            bib: bib.to_string(),
            value: time.to_string(),
        })?;

        Ok(TimingRecord {
            bib: bib.to_string(),
            timestamp,
            line_number,
        })
    }
}
