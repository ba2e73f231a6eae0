use thiserror::Error;

/// Validation errors raised before or during an enumeration.
///
/// Every variant is a client error; none of them are worth retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("Missing {0}")]
    MissingField(&'static str),

    #[error("Unsupported period: {0:?}")]
    UnsupportedPeriod(String),

    #[error("Invalid {field}: {value:?} does not match YYYYMMDDThhmmssZ")]
    InvalidTimestamp { field: &'static str, value: String },

    #[error("Unknown timezone: {0:?}")]
    UnknownTimezone(String),

    #[error("t1 after t2")]
    OrderingViolation,

    #[error("Interval exceeds the limit of {limit} timestamps")]
    IntervalTooLarge { limit: usize },

    #[error("Timestamp out of the representable range")]
    OutOfRange,
}

pub type TimeResult<T> = std::result::Result<T, TimeError>;
