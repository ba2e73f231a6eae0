//! Period classification.
//!
//! A descriptor is either a calendar unit with a multiplier (`<n>d`,
//! `<n>mo`, `<n>y`) or a fixed duration in the usual `72h3m0.5s` grammar.
//! Calendar patterns are tried first. Both kinds must describe a strictly
//! positive step, otherwise enumeration would never terminate.

mod duration;

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::TimeDelta;
use regex_lite::Regex;

use crate::error::{TimeError, TimeResult};

pub use duration::{DurationError, parse_duration};

#[expect(
    clippy::expect_used,
    reason = "The pattern is a literal and is covered by unit tests"
)]
static CALENDAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(d|mo|y)$").expect("calendar pattern is valid"));

/// Calendar unit advanced with date arithmetic rather than a fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarUnit {
    Day,
    Month,
    Year,
}

impl CalendarUnit {
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Day => "d",
            Self::Month => "mo",
            Self::Year => "y",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "d" => Some(Self::Day),
            "mo" => Some(Self::Month),
            "y" => Some(Self::Year),
            _ => None,
        }
    }
}

/// A classified period descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// Fixed-length step, always strictly positive.
    Fixed(TimeDelta),
    /// `multiplier` calendar units per step.
    Calendar {
        unit: CalendarUnit,
        multiplier: NonZeroU32,
    },
}

impl Period {
    #[must_use]
    pub const fn is_calendar(&self) -> bool {
        matches!(self, Self::Calendar { .. })
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(step) => write!(f, "{step}"),
            Self::Calendar { unit, multiplier } => write!(f, "{multiplier}{}", unit.suffix()),
        }
    }
}

impl FromStr for Period {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        classify(s)
    }
}

/// ## Summary
/// Classifies a period descriptor as a calendar unit or a fixed duration.
///
/// ## Errors
/// Returns `TimeError::UnsupportedPeriod` if the descriptor matches neither
/// grammar, or if it describes a zero or negative step.
#[tracing::instrument(level = "trace")]
pub fn classify(descriptor: &str) -> TimeResult<Period> {
    let unsupported = || TimeError::UnsupportedPeriod(descriptor.to_string());

    if let Some(caps) = CALENDAR_PATTERN.captures(descriptor) {
        let unit = CalendarUnit::from_suffix(&caps[2]).ok_or_else(unsupported)?;
        let multiplier = caps[1]
            .parse::<u32>()
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or_else(unsupported)?;
        return Ok(Period::Calendar { unit, multiplier });
    }

    match parse_duration(descriptor) {
        Ok(step) if step > TimeDelta::zero() => Ok(Period::Fixed(step)),
        Ok(step) => {
            tracing::debug!(%descriptor, %step, "Rejecting non-positive duration");
            Err(unsupported())
        }
        Err(e) => {
            tracing::debug!(%descriptor, error = %e, "Descriptor is not a duration");
            Err(unsupported())
        }
    }
}
