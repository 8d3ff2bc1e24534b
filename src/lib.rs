//! RaceRank - Race Result Ranking
//!
//! This library turns a timing log of start/finish events and a participant
//! directory into a leaderboard ordered by elapsed race time.
//!
//! # Pipeline
//!
//! - **Directory**: bib number → participant names, loaded from JSON
//! - **Timing log**: lazy `<bib> <separator> <HH:MM:SS,ffffff>` line reader
//! - **Ranking**: consecutive lines are paired by position, the elapsed time
//!   is computed and the result pushed onto a min-heap
//! - **Report**: the heap is drained into placed rows and rendered as a
//!   table or JSON
//!
//! Any failure aborts the run; no partial report is produced.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use services::RaceService;
