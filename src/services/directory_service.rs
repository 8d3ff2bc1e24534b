//! Participant directory service
//!
//! Loads the JSON document mapping bib numbers to participant names.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{AppError, AppResult};
use crate::models::{DirectoryEntry, Participant};

/// Bib number → participant lookup for a single run
#[derive(Debug, Clone, Default)]
pub struct ParticipantDirectory {
    entries: HashMap<String, DirectoryEntry>,
}

impl ParticipantDirectory {
    /// Resolve a bib number to its participant
    ///
    /// A blank entry (`{}`, `null`, ...) is treated the same as a missing one.
    /// Only the resolved entry's shape is checked.
    pub fn resolve(&self, bib: &str) -> AppResult<Participant> {
        let entry = self
            .entries
            .get(bib)
            .filter(|entry| !entry.is_blank())
            .ok_or_else(|| AppError::UnknownParticipant {
                bib: bib.to_string(),
            })?;

        entry
            .to_participant()
            .map_err(|reason| AppError::InvalidParticipant {
                bib: bib.to_string(),
                reason,
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Directory service for loading participant data
pub struct DirectoryService;

impl DirectoryService {
    /// Read and parse the participant directory at `path`
    pub fn load(path: &Path) -> AppResult<ParticipantDirectory> {
        let contents = std::fs::read_to_string(path).map_err(|e| AppError::DirectoryLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let directory = Self::parse(&contents).map_err(|reason| AppError::DirectoryLoad {
            path: path.to_path_buf(),
            reason,
        })?;

        if directory.is_empty() {
            tracing::warn!(path = %path.display(), "Participant directory has no entries");
        } else {
            tracing::info!(
                path = %path.display(),
                participants = directory.len(),
                "Loaded participant directory"
            );
        }

        Ok(directory)
    }

    /// Parse a directory document
    ///
    /// Only the top level must be a JSON object; entries are checked on lookup.
    pub fn parse(contents: &str) -> Result<ParticipantDirectory, String> {
        let entries: HashMap<String, DirectoryEntry> =
            serde_json::from_str(contents).map_err(|e| e.to_string())?;

        Ok(ParticipantDirectory { entries })
    }
}
