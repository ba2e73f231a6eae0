//! Fixed-duration grammar.
//!
//! Format: `[-+]?([0-9]*(\.[0-9]*)?(ns|us|µs|μs|ms|s|m|h))+`, or the bare
//! string `0`. Examples: "300ms", "1.5h", "2h45m", "-90s".

use chrono::TimeDelta;
use thiserror::Error;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Why a string is not a valid duration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("empty duration")]
    Empty,

    #[error("expected a number at byte {0}")]
    MissingNumber(usize),

    #[error("missing unit after number")]
    MissingUnit,

    #[error("unknown unit {0:?}")]
    UnknownUnit(String),

    #[error("duration overflows the representable range")]
    Overflow,
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "\u{b5}s" | "\u{3bc}s" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(60 * NANOS_PER_SECOND),
        "h" => Some(3_600 * NANOS_PER_SECOND),
        _ => None,
    }
}

/// Splits the leading ASCII digits off `s`.
fn leading_digits(s: &str) -> (&str, &str) {
    let end = s.bytes().position(|b| !b.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// ## Summary
/// Parses a fixed duration such as `"3h30m"` or `"1.5s"`.
///
/// Fraction digits past what fits in 64 bits are ignored.
///
/// ## Errors
/// Returns a `DurationError` describing the first malformed component, or
/// `DurationError::Overflow` if the total does not fit in `i64` nanoseconds.
pub fn parse_duration(input: &str) -> Result<TimeDelta, DurationError> {
    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(TimeDelta::zero());
    }
    if rest.is_empty() {
        return Err(DurationError::Empty);
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let offset = input.len() - rest.len();

        let (int_part, after_int) = leading_digits(rest);
        let (frac_part, after_num) = match after_int.strip_prefix('.') {
            Some(after_dot) => leading_digits(after_dot),
            None => ("", after_int),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(DurationError::MissingNumber(offset));
        }

        let unit_end = after_num
            .bytes()
            .position(|b| b == b'.' || b.is_ascii_digit())
            .unwrap_or(after_num.len());
        let (unit, remaining) = after_num.split_at(unit_end);
        if unit.is_empty() {
            return Err(DurationError::MissingUnit);
        }
        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit(unit.to_string()))?;

        let whole = if int_part.is_empty() {
            0
        } else {
            int_part
                .parse::<u64>()
                .map_err(|_e| DurationError::Overflow)?
        };
        let component = whole
            .checked_mul(scale)
            .and_then(|v| v.checked_add(fraction_nanos(frac_part, scale)))
            .ok_or(DurationError::Overflow)?;
        total = total.checked_add(component).ok_or(DurationError::Overflow)?;

        rest = remaining;
    }

    let nanos = i64::try_from(total).map_err(|_e| DurationError::Overflow)?;
    Ok(TimeDelta::nanoseconds(if negative { -nanos } else { nanos }))
}

/// Value of `0.<digits>` units, in nanoseconds, truncated.
fn fraction_nanos(digits: &str, scale: u64) -> u64 {
    let mut numerator: u64 = 0;
    let mut denominator: u64 = 1;
    for d in digits.bytes() {
        let (Some(n), Some(den)) = (
            numerator
                .checked_mul(10)
                .and_then(|n| n.checked_add(u64::from(d - b'0'))),
            denominator.checked_mul(10),
        ) else {
            break;
        };
        numerator = n;
        denominator = den;
    }

    let nanos = u128::from(numerator) * u128::from(scale) / u128::from(denominator);
    u64::try_from(nanos).unwrap_or(u64::MAX)
}
