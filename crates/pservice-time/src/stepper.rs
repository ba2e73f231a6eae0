//! Calendar stepping for day, month and year periods.
//!
//! Month and year steps always land on the last day of the target month or
//! year, never on t1's day-of-month. Every step keeps the anchor's hour.

use std::num::NonZeroU32;

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use chrono_tz::Tz;

use crate::period::CalendarUnit;
use crate::timestamp::localize;

/// ## Summary
/// Rounds a wall time to the nearest whole hour; 30 minutes and up round up.
#[must_use]
pub fn round_to_hour(local: NaiveDateTime) -> Option<NaiveDateTime> {
    let truncated = local.date().and_hms_opt(local.hour(), 0, 0)?;
    if local.signed_duration_since(truncated) >= TimeDelta::minutes(30) {
        truncated.checked_add_signed(TimeDelta::hours(1))
    } else {
        Some(truncated)
    }
}

/// Last calendar day of `date`'s month.
fn last_day_of_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}

/// Advances a date by one calendar period in a fixed timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarStep {
    unit: CalendarUnit,
    multiplier: NonZeroU32,
    tz: Tz,
    hour: u32,
}

impl CalendarStep {
    /// ## Summary
    /// Builds the stepper for `start` and returns it with the anchor date.
    ///
    /// - Day: `start` rounded to the nearest hour.
    /// - Month: last day of `start`'s month, at `start`'s rounded hour.
    /// - Year: December 31 of `start`'s year, at `start`'s rounded hour.
    ///
    /// Returns `None` if the anchor falls outside the representable calendar.
    #[must_use]
    pub fn anchored(
        unit: CalendarUnit,
        multiplier: NonZeroU32,
        start: &DateTime<Tz>,
    ) -> Option<(Self, NaiveDate)> {
        let local = start.naive_local();
        let rounded = round_to_hour(local)?;

        let date = match unit {
            CalendarUnit::Day => rounded.date(),
            CalendarUnit::Month => last_day_of_month(local.date())?,
            CalendarUnit::Year => NaiveDate::from_ymd_opt(local.year(), 12, 31)?,
        };

        let step = Self {
            unit,
            multiplier,
            tz: start.timezone(),
            hour: rounded.hour(),
        };
        Some((step, date))
    }

    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// ## Summary
    /// Returns the date one period after `date`, or `None` past the end of
    /// the representable calendar.
    #[must_use]
    pub fn next(&self, date: NaiveDate) -> Option<NaiveDate> {
        let n = self.multiplier.get();
        match self.unit {
            CalendarUnit::Day => date.checked_add_days(Days::new(u64::from(n))),
            CalendarUnit::Month => {
                let target = date.with_day(1)?.checked_add_months(Months::new(n))?;
                last_day_of_month(target)
            }
            CalendarUnit::Year => {
                let year = date.year().checked_add(i32::try_from(n).ok()?)?;
                NaiveDate::from_ymd_opt(year, 12, 31)
            }
        }
    }

    /// ## Summary
    /// Resolves `date` at the anchor hour to an instant in the step's timezone.
    #[must_use]
    pub fn instant(&self, date: NaiveDate) -> Option<DateTime<Tz>> {
        localize(self.tz, date.and_hms_opt(self.hour, 0, 0)?)
    }
}
