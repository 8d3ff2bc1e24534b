//! Time utilities

use chrono::{NaiveTime, TimeDelta, Timelike};

use crate::constants::{CLOCK_FORMAT, FRACTION_SEPARATOR, MAX_FRACTION_DIGITS};
use crate::utils::validation::is_timestamp_shaped;

/// Parse a timing log timestamp (`HH:MM:SS,ffffff`)
///
/// The fractional part holds 1 to 6 digits and is read as a decimal
/// fraction, so `,5` is half a second. Leap seconds are rejected.
pub fn parse_timestamp(s: &str) -> Option<NaiveTime> {
    if !is_timestamp_shaped(s) {
        return None;
    }

    let (clock, fraction) = s.split_once(FRACTION_SEPARATOR)?;
    let time = NaiveTime::parse_from_str(clock, CLOCK_FORMAT).ok()?;
    if time.nanosecond() >= 1_000_000_000 {
        return None;
    }

    let micros: u32 = format!("{:0<width$}", fraction, width = MAX_FRACTION_DIGITS)
        .parse()
        .ok()?;
    time.with_nanosecond(micros * 1_000)
}

/// Format an elapsed time as `HH:MM:SS[.ffffff]`
///
/// Sub-second digits are shown only when non-zero. Negative values carry a
/// leading `-`.
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let negative = elapsed < TimeDelta::zero();
    let magnitude = if negative { -elapsed } else { elapsed };

    let total_seconds = magnitude.num_seconds();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    let micros = magnitude.subsec_nanos() / 1_000;

    let mut out = format!(
        "{}{:02}:{:02}:{:02}",
        if negative { "-" } else { "" },
        hours,
        minutes,
        seconds
    );
    if micros != 0 {
        out.push_str(&format!(".{:06}", micros));
    }
    out
}
