//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod leaderboard;
pub mod participant;
pub mod result;
pub mod timing;

pub use leaderboard::*;
pub use participant::*;
pub use result::*;
pub use timing::*;
