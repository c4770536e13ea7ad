use koki_core::config::UtilizationConfig;
use koki_core::errors::{KokiError, KokiResult};
use koki_core::models::{UtilizationCoefficient, UtilizationInputs, WorkSchedulePreset};
use tracing::debug;

use crate::schedule::AnnualSchedule;

/// Utilization coefficient calculator.
///
/// `coefficient = annualWorkingHours / baseAnnualHours`
#[derive(Debug, Clone, Default)]
pub struct UtilizationCalculator {
    config: UtilizationConfig,
}

impl UtilizationCalculator {
    pub fn new(config: UtilizationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &UtilizationConfig {
        &self.config
    }

    /// Resolve any form of utilization input to a coefficient.
    pub fn resolve(&self, inputs: &UtilizationInputs) -> KokiResult<UtilizationCoefficient> {
        match *inputs {
            UtilizationInputs::Schedule {
                rest_days_per_week,
                annual_holidays,
                daily_hours,
            } => self.compute(rest_days_per_week, annual_holidays, daily_hours),
            UtilizationInputs::Override { coefficient } => Self::from_override(coefficient),
            UtilizationInputs::Preset { preset } => self.from_preset(preset),
        }
    }

    /// Derive the coefficient from a working calendar.
    pub fn compute(
        &self,
        rest_days_per_week: f64,
        annual_holidays: i32,
        daily_hours: f64,
    ) -> KokiResult<UtilizationCoefficient> {
        let schedule = AnnualSchedule::derive(rest_days_per_week, annual_holidays, daily_hours)?;
        let value = schedule.working_hours / self.config.base_annual_hours;
        debug!(
            working_days = schedule.working_days,
            working_hours = schedule.working_hours,
            coefficient = value,
            "utilization derived from schedule"
        );
        UtilizationCoefficient::new(value)
    }

    /// Accept a coefficient directly.
    pub fn from_override(coefficient: f64) -> KokiResult<UtilizationCoefficient> {
        UtilizationCoefficient::new(coefficient)
    }

    /// Coefficient calibrated for a named schedule.
    pub fn from_preset(&self, preset: WorkSchedulePreset) -> KokiResult<UtilizationCoefficient> {
        let value = self
            .config
            .preset_coefficients
            .get(&preset)
            .copied()
            .ok_or_else(|| {
                KokiError::invalid_input("preset", format!("no coefficient configured for {preset:?}"))
            })?;
        UtilizationCoefficient::new(value)
    }
}
