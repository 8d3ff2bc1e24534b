//! Input validation utilities

use std::sync::LazyLock;

use chrono::TimeDelta;
use regex::Regex;

use crate::error::{AppError, AppResult};
use crate::models::ElapsedPolicy;

static TIMESTAMP_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,2}:[0-9]{1,2}:[0-9]{1,2},[0-9]{1,6}$").expect("timestamp pattern is valid")
});

/// Check the textual shape of a timestamp (`H:M:S,f` with 1-2 digit clock
/// fields and 1-6 fractional digits). Range checks happen when parsing.
pub fn is_timestamp_shaped(s: &str) -> bool {
    TIMESTAMP_SHAPE.is_match(s)
}

/// Apply the negative elapsed-time policy to a freshly paired result
pub fn validate_elapsed(bib: &str, elapsed: TimeDelta, policy: ElapsedPolicy) -> AppResult<()> {
    if elapsed < TimeDelta::zero() {
        match policy {
            ElapsedPolicy::Permit => {
                tracing::warn!(
                    bib,
                    elapsed_ms = elapsed.num_milliseconds(),
                    "Finish precedes start, keeping negative elapsed time"
                );
            }
            ElapsedPolicy::Reject => {
                return Err(AppError::NegativeElapsed {
                    bib: bib.to_string(),
                    elapsed,
                });
            }
        }
    }
    Ok(())
}
