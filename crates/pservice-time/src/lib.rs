//! Periodic timestamp enumeration.
//!
//! Turns a period descriptor ("1h", "3h30m", "2d", "1mo", "5y") and two
//! bounds into the ordered list of `YYYYMMDDThhmmssZ` timestamps between
//! them, in a single resolved timezone.

pub mod enumerate;
pub mod error;
pub mod period;
pub mod request;
pub mod stepper;
pub mod timestamp;
pub mod timezone;

pub use enumerate::{Enumerator, Interval, enumerate};
pub use error::{TimeError, TimeResult};
pub use period::{CalendarUnit, Period, classify};
pub use request::{IntervalQuery, IntervalRequest};
