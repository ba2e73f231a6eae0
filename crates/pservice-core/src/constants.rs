/// Route component constants shared across crates
pub const PTLIST_ROUTE_COMPONENT: &str = "ptlist";
pub const PTLIST_ROUTE_PREFIX: &str = const_str::concat!("/", PTLIST_ROUTE_COMPONENT);

pub const HEALTHCHECK_ROUTE_COMPONENT: &str = "healthcheck";
pub const HEALTHCHECK_ROUTE_PREFIX: &str = const_str::concat!("/", HEALTHCHECK_ROUTE_COMPONENT);

/// Query parameter names accepted by the ptlist endpoint
pub const PERIOD_PARAM: &str = "period";
pub const TIMEZONE_PARAM: &str = "tz";
pub const START_PARAM: &str = "t1";
pub const END_PARAM: &str = "t2";
