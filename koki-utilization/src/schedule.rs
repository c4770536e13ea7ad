use koki_core::constants::{DAYS_PER_YEAR, MAX_REST_DAYS_PER_WEEK, WEEKS_PER_YEAR};
use koki_core::errors::{KokiError, KokiResult};

/// Annual working calendar derived from weekly rest, holidays and shift length.
///
/// ```text
/// workingDays  = 365 − restDaysPerWeek × 52 − annualHolidays
/// workingHours = workingDays × dailyHours
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnualSchedule {
    pub working_days: f64,
    pub working_hours: f64,
}

impl AnnualSchedule {
    /// Validate the inputs and derive the calendar.
    pub fn derive(rest_days_per_week: f64, annual_holidays: i32, daily_hours: f64) -> KokiResult<Self> {
        if !(0.0..=MAX_REST_DAYS_PER_WEEK).contains(&rest_days_per_week) {
            return Err(KokiError::invalid_input(
                "rest_days_per_week",
                format!("must be within [0, {MAX_REST_DAYS_PER_WEEK}], got {rest_days_per_week}"),
            ));
        }
        if annual_holidays < 0 {
            return Err(KokiError::invalid_input(
                "annual_holidays",
                format!("must not be negative, got {annual_holidays}"),
            ));
        }
        if !daily_hours.is_finite() || daily_hours <= 0.0 {
            return Err(KokiError::invalid_input(
                "daily_hours",
                format!("must be positive, got {daily_hours}"),
            ));
        }

        let working_days =
            DAYS_PER_YEAR - rest_days_per_week * WEEKS_PER_YEAR - f64::from(annual_holidays);
        if working_days < 0.0 {
            return Err(KokiError::invalid_input(
                "annual_holidays",
                format!("schedule leaves {working_days} working days per year"),
            ));
        }

        Ok(Self {
            working_days,
            working_hours: working_days * daily_hours,
        })
    }
}
