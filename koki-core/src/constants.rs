/// Calendar days in a (non-leap) year.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Weeks per year used when converting weekly rest days to annual rest days.
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Upper bound on weekly rest days accepted by the utilization calculator.
pub const MAX_REST_DAYS_PER_WEEK: f64 = 2.0;

/// Maximum number of requests evaluated by a single batch call.
pub const MAX_BATCH_SIZE: usize = 10_000;
