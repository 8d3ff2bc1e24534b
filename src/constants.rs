//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// INPUT DEFAULTS
// =============================================================================

/// Default timing log file name
pub const DEFAULT_RESULTS_PATH: &str = "results_RUN.txt";

/// Default participant directory file name
pub const DEFAULT_COMPETITORS_PATH: &str = "competitors2.json";

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// =============================================================================
// TIMING LOG FORMAT
// =============================================================================

/// Number of whitespace-separated tokens on every timing log line
pub const TIMING_LINE_TOKENS: usize = 3;

/// Clock part of a timestamp, parsed by chrono
pub const CLOCK_FORMAT: &str = "%H:%M:%S";

/// Separator between the clock and the fractional seconds
pub const FRACTION_SEPARATOR: char = ',';

/// Maximum number of fractional-second digits (microseconds)
pub const MAX_FRACTION_DIGITS: usize = 6;

// =============================================================================
// PARTICIPANT DIRECTORY
// =============================================================================

/// JSON field holding the participant's first name
pub const FIRST_NAME_FIELD: &str = "Name";

/// JSON field holding the participant's last name
pub const LAST_NAME_FIELD: &str = "Surname";

// =============================================================================
// REPORT LAYOUT
// =============================================================================

/// Delimiter between table cells
pub const CELL_SEPARATOR: &str = " | ";

/// Delimiter between column rules on the header separator line
pub const RULE_SEPARATOR: &str = "-+-";

/// Character used to draw the header separator line
pub const RULE_CHAR: char = '-';

/// Report column headers
pub mod headers {
    /// English labels
    pub const EN: [&str; 5] = ["Place", "Bib Number", "First Name", "Last Name", "Result"];

    /// Russian labels
    pub const RU: [&str; 5] = ["Занятое место", "Нагрудный номер", "Имя", "Фамилия", "Результат"];
}

/// Supported locale identifiers
pub mod locales {
    pub const EN: &str = "en";
    pub const RU: &str = "ru";
}

/// Supported output formats
pub mod output_formats {
    pub const TABLE: &str = "table";
    pub const JSON: &str = "json";
}

/// Supported log formats
pub mod log_formats {
    pub const PRETTY: &str = "pretty";
    pub const JSON: &str = "json";
}
