use serde::{Deserialize, Serialize};

/// Per-trade durations in calendar months.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DurationBreakdown {
    pub piling: f64,
    pub substructure: f64,
    pub superstructure: f64,
    pub finishing: f64,
    pub special_conditions: f64,
}

impl DurationBreakdown {
    /// Sum of all components.
    pub fn total(&self) -> f64 {
        self.piling + self.substructure + self.superstructure + self.finishing + self.special_conditions
    }
}

/// Accumulation model output, created fresh per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationResult {
    pub breakdown: DurationBreakdown,
    /// Conventional sequencing: substructure finished before superstructure.
    pub bottom_up_total: f64,
    /// Months recovered by top-down sequencing.
    pub reduction: f64,
    /// `bottom_up_total - reduction`.
    pub top_down_total: f64,
}
