//! Race result models

use chrono::TimeDelta;
use serde::{Serialize, Serializer};

use super::Participant;
use crate::utils::time::format_elapsed;

/// A completed start/finish pair attached to its participant
///
/// Field order is the sort order: elapsed time first, then the bib string,
/// then the participant's names. Equal elapsed times therefore rank by bib
/// number compared as text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ResultRun {
    pub elapsed: TimeDelta,
    pub bib: String,
    pub participant: Participant,
}

/// What to do with a pair whose finish precedes its start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElapsedPolicy {
    /// Keep negative elapsed times as they are
    #[default]
    Permit,
    /// Abort the run on a negative elapsed time
    Reject,
}

/// One row of the final report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedRow {
    pub place: usize,
    pub bib: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(serialize_with = "serialize_elapsed")]
    pub elapsed: TimeDelta,
}

impl RankedRow {
    pub fn new(place: usize, run: ResultRun) -> Self {
        Self {
            place,
            bib: run.bib,
            first_name: run.participant.first_name,
            last_name: run.participant.last_name,
            elapsed: run.elapsed,
        }
    }

    /// Cells in column order, as displayed
    pub fn cells(&self) -> [String; 5] {
        [
            self.place.to_string(),
            self.bib.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
            format_elapsed(self.elapsed),
        ]
    }
}

fn serialize_elapsed<S: Serializer>(elapsed: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_elapsed(*elapsed))
}
