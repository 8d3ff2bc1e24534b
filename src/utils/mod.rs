//! Utility functions

pub mod time;
pub mod validation;

pub use time::{format_elapsed, parse_timestamp};
pub use validation::{is_timestamp_shaped, validate_elapsed};
