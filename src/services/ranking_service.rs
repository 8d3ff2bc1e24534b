//! Pairing and ranking service
//!
//! Timing records arrive in log order and are paired by position: the first
//! record of each pair only contributes its timestamp (the start), the second
//! contributes the finish timestamp and the bib number used for the
//! participant lookup. Completed pairs go into a [`Leaderboard`].

use chrono::NaiveTime;

use crate::error::AppResult;
use crate::models::{ElapsedPolicy, Leaderboard, ResultRun, TimingRecord};
use crate::services::directory_service::ParticipantDirectory;
use crate::utils::validation::validate_elapsed;

/// Single-pass pairing engine for one race
pub struct RankingService<'a> {
    directory: &'a ParticipantDirectory,
    policy: ElapsedPolicy,
    pending_start: Option<NaiveTime>,
    leaderboard: Leaderboard,
}

impl<'a> RankingService<'a> {
    pub fn new(directory: &'a ParticipantDirectory, policy: ElapsedPolicy) -> Self {
        Self {
            directory,
            policy,
            pending_start: None,
            leaderboard: Leaderboard::new(),
        }
    }

    /// Feed the next timing record
    ///
    /// Fails with `UnknownParticipant` when a completed pair's bib has no
    /// directory entry, and with `NegativeElapsed` when the policy rejects it.
    pub fn ingest(&mut self, record: TimingRecord) -> AppResult<()> {
        let Some(start) = self.pending_start.take() else {
            self.pending_start = Some(record.timestamp);
            return Ok(());
        };

        let elapsed = record.timestamp - start;
        let participant = self.directory.resolve(&record.bib)?;
        validate_elapsed(&record.bib, elapsed, self.policy)?;

        tracing::debug!(
            bib = %record.bib,
            line = record.line_number,
            elapsed_ms = elapsed.num_milliseconds(),
            "Paired result"
        );

        self.leaderboard.push(ResultRun {
            elapsed,
            bib: record.bib,
            participant,
        });
        Ok(())
    }

    /// Feed every record from `records`, stopping at the first error
    pub fn ingest_all<I>(&mut self, records: I) -> AppResult<()>
    where
        I: IntoIterator<Item = AppResult<TimingRecord>>,
    {
        for record in records {
            self.ingest(record?)?;
        }
        Ok(())
    }

    /// Number of completed pairs so far
    pub fn completed(&self) -> usize {
        self.leaderboard.len()
    }

    /// Finish ingestion and hand over the leaderboard
    ///
    /// A trailing unpaired start is dropped without error.
    pub fn finish(self) -> Leaderboard {
        if let Some(start) = self.pending_start {
            tracing::debug!(%start, "Dropping unpaired trailing timing record");
        }
        self.leaderboard
    }
}
