//! Timing log record model

use chrono::NaiveTime;

/// One parsed line of the timing log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingRecord {
    /// Bib number exactly as written in the log
    pub bib: String,
    pub timestamp: NaiveTime,
    /// 1-based line number in the source file
    pub line_number: usize,
}
