//! Timezone resolution.
//!
//! A request names its zone once; the resolved `Tz` is then threaded through
//! every instant of the enumeration.

use std::str::FromStr;

use chrono_tz::Tz;

use crate::error::{TimeError, TimeResult};

/// Name that selects the system zone explicitly.
pub const LOCAL_TIMEZONE: &str = "Local";

/// ## Summary
/// Returns the system timezone, or UTC when the system zone is unknown to
/// the bundled IANA database.
#[must_use]
pub fn system_timezone() -> Tz {
    match iana_time_zone::get_timezone() {
        Ok(name) => Tz::from_str(&name).unwrap_or_else(|_e| {
            tracing::warn!(%name, "System timezone not in the IANA database, using UTC");
            Tz::UTC
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Could not determine system timezone, using UTC");
            Tz::UTC
        }
    }
}

/// ## Summary
/// Resolves an IANA timezone name.
///
/// An empty name or `"Local"` resolves to the system timezone.
///
/// ## Errors
/// Returns `TimeError::UnknownTimezone` if the name is not in the IANA database.
pub fn resolve_timezone(name: &str) -> TimeResult<Tz> {
    if name.is_empty() || name == LOCAL_TIMEZONE {
        return Ok(system_timezone());
    }

    Tz::from_str(name).map_err(|_e| TimeError::UnknownTimezone(name.to_string()))
}
