//! Interval enumeration.
//!
//! Fixed durations snap both bounds to the duration grid (measured from the
//! Unix epoch) and include the upper bound. Wall times that do not move past
//! the last emitted one (the repeated hour of a DST fall-back) are skipped.
//! Calendar units always emit their anchor, then every step strictly before t2.

use std::num::NonZeroU32;

use chrono::{DateTime, TimeDelta, Utc};
use chrono_tz::Tz;
use pservice_core::config::DEFAULT_MAX_POINTS;
use serde::Serialize;

use crate::error::{TimeError, TimeResult};
use crate::period::{CalendarUnit, Period};
use crate::stepper::CalendarStep;
use crate::timestamp::format_timestamp;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Ordered, duplicate-free list of formatted timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Interval(Vec<String>);

impl Interval {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Interval> for Vec<String> {
    fn from(interval: Interval) -> Self {
        interval.0
    }
}

fn delta_nanos(delta: TimeDelta) -> i128 {
    i128::from(delta.num_seconds()) * NANOS_PER_SECOND + i128::from(delta.subsec_nanos())
}

fn instant_nanos(instant: &DateTime<Tz>) -> i128 {
    i128::from(instant.timestamp()) * NANOS_PER_SECOND
        + i128::from(instant.timestamp_subsec_nanos())
}

fn instant_from_nanos(nanos: i128, tz: Tz) -> Option<DateTime<Tz>> {
    let secs = i64::try_from(nanos.div_euclid(NANOS_PER_SECOND)).ok()?;
    let subsec = u32::try_from(nanos.rem_euclid(NANOS_PER_SECOND)).ok()?;
    DateTime::<Utc>::from_timestamp(secs, subsec).map(|utc| utc.with_timezone(&tz))
}

/// Rounds to the nearest multiple of `step`; halfway values round up.
fn round_to_multiple(nanos: i128, step: i128) -> i128 {
    let quotient = nanos.div_euclid(step);
    let remainder = nanos.rem_euclid(step);
    if remainder * 2 >= step {
        (quotient + 1) * step
    } else {
        quotient * step
    }
}

/// Produces intervals, bounded by a maximum number of timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enumerator {
    max_points: usize,
}

impl Default for Enumerator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_POINTS)
    }
}

impl Enumerator {
    #[must_use]
    pub const fn new(max_points: usize) -> Self {
        Self { max_points }
    }

    #[must_use]
    pub const fn max_points(&self) -> usize {
        self.max_points
    }

    /// ## Summary
    /// Lists the instants spaced by `period` between `start` and `end`,
    /// formatted in `start`'s timezone.
    ///
    /// Equal bounds yield an empty interval for every period kind.
    ///
    /// ## Errors
    /// - `TimeError::OrderingViolation` if `start` is after `end`.
    /// - `TimeError::IntervalTooLarge` if more than `max_points` timestamps
    ///   would be produced.
    /// - `TimeError::OutOfRange` if the anchor or a grid instant cannot be
    ///   represented.
    #[tracing::instrument(level = "debug", skip(self), fields(max_points = self.max_points))]
    pub fn enumerate(
        &self,
        period: &Period,
        start: &DateTime<Tz>,
        end: &DateTime<Tz>,
    ) -> TimeResult<Interval> {
        if start > end {
            return Err(TimeError::OrderingViolation);
        }
        if start == end {
            return Ok(Interval::default());
        }

        let interval = match *period {
            Period::Fixed(step) => self.fixed(step, start, end)?,
            Period::Calendar { unit, multiplier } => {
                self.calendar(unit, multiplier, start, end)?
            }
        };

        tracing::debug!(points = interval.len(), "Enumerated interval");
        Ok(interval)
    }

    fn fixed(
        &self,
        step: TimeDelta,
        start: &DateTime<Tz>,
        end: &DateTime<Tz>,
    ) -> TimeResult<Interval> {
        let step = delta_nanos(step);
        if step <= 0 {
            return Err(TimeError::UnsupportedPeriod(format!("{step}ns")));
        }
        let tz = start.timezone();

        let first = round_to_multiple(instant_nanos(start), step);
        let last = round_to_multiple(instant_nanos(end), step);

        let count = (last - first) / step + 1;
        let len = usize::try_from(count)
            .ok()
            .filter(|&len| len <= self.max_points)
            .ok_or(TimeError::IntervalTooLarge {
                limit: self.max_points,
            })?;

        let mut points: Vec<String> = Vec::with_capacity(len);
        for i in 0..count {
            let instant =
                instant_from_nanos(first + i * step, tz).ok_or(TimeError::OutOfRange)?;
            let formatted = format_timestamp(&instant);
            if points.last().is_none_or(|last| *last < formatted) {
                points.push(formatted);
            }
        }

        Ok(Interval(points))
    }

    fn calendar(
        &self,
        unit: CalendarUnit,
        multiplier: NonZeroU32,
        start: &DateTime<Tz>,
        end: &DateTime<Tz>,
    ) -> TimeResult<Interval> {
        if self.max_points == 0 {
            return Err(TimeError::IntervalTooLarge { limit: 0 });
        }

        let (step, mut date) =
            CalendarStep::anchored(unit, multiplier, start).ok_or(TimeError::OutOfRange)?;
        let anchor = step.instant(date).ok_or(TimeError::OutOfRange)?;

        let mut points = vec![format_timestamp(&anchor)];
        while let Some(next_date) = step.next(date) {
            let Some(next) = step.instant(next_date) else {
                break;
            };
            if next >= *end {
                break;
            }
            if points.len() >= self.max_points {
                return Err(TimeError::IntervalTooLarge {
                    limit: self.max_points,
                });
            }
            points.push(format_timestamp(&next));
            date = next_date;
        }

        Ok(Interval(points))
    }
}

/// ## Summary
/// Enumerates with the default limit. See [`Enumerator::enumerate`].
///
/// ## Errors
/// Same as [`Enumerator::enumerate`].
pub fn enumerate(
    period: &Period,
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
) -> TimeResult<Interval> {
    Enumerator::default().enumerate(period, start, end)
}
