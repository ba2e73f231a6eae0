//! Request validation.
//!
//! Checks run in a fixed order and stop at the first failure: period,
//! timezone, presence of t1 and t2, then their grammar. Ordering of the
//! bounds is checked by the enumerator.

use chrono::DateTime;
use chrono_tz::Tz;
use pservice_core::constants::{END_PARAM, PERIOD_PARAM, START_PARAM};

use crate::enumerate::{Enumerator, Interval};
use crate::error::{TimeError, TimeResult};
use crate::period::{Period, classify};
use crate::timestamp::parse_timestamp;
use crate::timezone::{LOCAL_TIMEZONE, resolve_timezone};

/// Raw, unvalidated request parameters. Empty strings count as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalQuery<'a> {
    pub period: Option<&'a str>,
    pub tz: Option<&'a str>,
    pub t1: Option<&'a str>,
    pub t2: Option<&'a str>,
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> TimeResult<&'a str> {
    present(value).ok_or(TimeError::MissingField(field))
}

impl IntervalQuery<'_> {
    /// ## Summary
    /// Validates the parameters into an [`IntervalRequest`].
    ///
    /// A missing `tz` falls back to `default_tz`, then to the system zone.
    ///
    /// ## Errors
    /// Returns the first `TimeError` encountered, in the order listed in the
    /// module documentation.
    pub fn resolve(&self, default_tz: Option<&str>) -> TimeResult<IntervalRequest> {
        let period = classify(required(self.period, PERIOD_PARAM)?)?;

        let tz_name = present(self.tz)
            .or_else(|| present(default_tz))
            .unwrap_or(LOCAL_TIMEZONE);
        let tz = resolve_timezone(tz_name)?;

        let t1 = required(self.t1, START_PARAM)?;
        let t2 = required(self.t2, END_PARAM)?;

        Ok(IntervalRequest {
            period,
            start: parse_timestamp(START_PARAM, t1, tz)?,
            end: parse_timestamp(END_PARAM, t2, tz)?,
        })
    }
}

/// A validated request: classified period and both bounds in one zone.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalRequest {
    pub period: Period,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl IntervalRequest {
    #[must_use]
    pub fn timezone(&self) -> Tz {
        self.start.timezone()
    }

    /// ## Summary
    /// Runs the enumeration for this request.
    ///
    /// ## Errors
    /// See [`Enumerator::enumerate`].
    pub fn enumerate(&self, enumerator: &Enumerator) -> TimeResult<Interval> {
        enumerator.enumerate(&self.period, &self.start, &self.end)
    }
}
