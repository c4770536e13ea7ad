use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{KokiError, KokiResult};

/// Work-rate coefficient converting pure labor time into calendar time.
///
/// Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct UtilizationCoefficient(f64);

impl UtilizationCoefficient {
    /// Create a coefficient, rejecting non-finite and non-positive values.
    pub fn new(value: f64) -> KokiResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(KokiError::invalid_input(
                "coefficient",
                format!("must be a positive finite number, got {value}"),
            ));
        }
        Ok(Self(value))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for UtilizationCoefficient {
    type Error = KokiError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UtilizationCoefficient> for f64 {
    fn from(coefficient: UtilizationCoefficient) -> Self {
        coefficient.0
    }
}

impl fmt::Display for UtilizationCoefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

/// Named site work schedules with a known coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkSchedulePreset {
    /// One rest day per week.
    WeeklyRest,
    /// One rest day per week plus monthly rest days.
    WeeklyAndMonthlyRest,
    /// Rush schedule with almost no rest.
    Rush,
}

impl WorkSchedulePreset {
    pub const ALL: [WorkSchedulePreset; 3] =
        [Self::WeeklyRest, Self::WeeklyAndMonthlyRest, Self::Rush];
}

/// How the caller specifies site utilization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum UtilizationInputs {
    /// Derive the coefficient from the working calendar.
    Schedule {
        rest_days_per_week: f64,
        annual_holidays: i32,
        daily_hours: f64,
    },
    /// Use a coefficient directly.
    Override { coefficient: f64 },
    /// Use the coefficient calibrated for a named schedule.
    Preset { preset: WorkSchedulePreset },
}

impl Default for UtilizationInputs {
    fn default() -> Self {
        Self::Preset {
            preset: WorkSchedulePreset::WeeklyAndMonthlyRest,
        }
    }
}
