//! The `YYYYMMDDThhmmssZ` timestamp grammar.
//!
//! The trailing `Z` is a literal marker. Wall times are read and written in
//! the request's timezone, not in UTC.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeDelta, TimeZone};
use chrono_tz::Tz;

use crate::error::{TimeError, TimeResult};

pub const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

const TIMESTAMP_LEN: usize = 16;

/// Checks the exact shape before handing the string to chrono, which would
/// otherwise accept single-digit fields and leading whitespace.
fn has_timestamp_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == TIMESTAMP_LEN
        && bytes.iter().enumerate().all(|(i, b)| match i {
            8 => *b == b'T',
            15 => *b == b'Z',
            _ => b.is_ascii_digit(),
        })
}

/// ## Summary
/// Resolves a wall-clock time in `tz` to an instant.
///
/// Times skipped by a DST gap are shifted forward by one hour; times repeated
/// by a DST fold resolve to the earlier instant.
#[must_use]
pub fn localize(tz: Tz, local: NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _latest) => Some(earliest),
        LocalResult::None => {
            let shifted = local.checked_add_signed(TimeDelta::hours(1))?;
            tz.from_local_datetime(&shifted).earliest()
        }
    }
}

/// ## Summary
/// Parses a `YYYYMMDDThhmmssZ` timestamp as a wall time in `tz`.
///
/// `field` names the request parameter for error reporting.
///
/// ## Errors
/// Returns `TimeError::InvalidTimestamp` if the value does not match the
/// grammar or names an impossible date or time.
pub fn parse_timestamp(field: &'static str, value: &str, tz: Tz) -> TimeResult<DateTime<Tz>> {
    let invalid = || TimeError::InvalidTimestamp {
        field,
        value: value.to_string(),
    };

    if !has_timestamp_shape(value) {
        return Err(invalid());
    }

    let local = NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|e| {
        tracing::debug!(field, value, error = %e, "Timestamp rejected by chrono");
        invalid()
    })?;

    localize(tz, local).ok_or_else(invalid)
}

/// ## Summary
/// Formats an instant as `YYYYMMDDThhmmssZ` in its own timezone.
#[must_use]
pub fn format_timestamp(instant: &DateTime<Tz>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}
