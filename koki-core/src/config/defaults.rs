// Single source of truth for all default values.

use crate::models::{
    AccumulationUsage, LocationCategory, RegressionUsage, StructureCategory, WorkSchedulePreset,
};

// --- Utilization ---
pub const DEFAULT_BASE_ANNUAL_HOURS: f64 = 2569.41;
pub const DEFAULT_PRESET_COEFFICIENTS: [(WorkSchedulePreset, f64); 3] = [
    (WorkSchedulePreset::WeeklyRest, 0.85),
    (WorkSchedulePreset::WeeklyAndMonthlyRest, 0.75737),
    (WorkSchedulePreset::Rush, 0.9644),
];

// --- Accumulation (Method A) ---
pub const DEFAULT_SUBSTRUCTURE_RATE: f64 = 2.80; // months per floor below grade
pub const DEFAULT_SUPERSTRUCTURE_RATE: f64 = 0.59; // months per floor above grade
pub const DEFAULT_PILE_BASE_DURATION: f64 = 1.76;
pub const DEFAULT_FINISHING_DURATION: f64 = 3.25; // power-on to completion
pub const DEFAULT_TOP_DOWN_REDUCTION_RATIO: f64 = 0.39;
// (structure, substructure multiplier, superstructure multiplier, top-down reduction ratio)
pub const DEFAULT_STRUCTURE_FACTORS: [(StructureCategory, f64, f64, f64); 3] = [
    (StructureCategory::S, 1.00, 1.00, 0.45),
    (StructureCategory::Src, 1.05, 1.05, 0.39),
    (StructureCategory::Rc, 1.15, 1.15, 0.33),
];
pub const DEFAULT_FINISHING_MULTIPLIERS: [(AccumulationUsage, f64); 4] = [
    (AccumulationUsage::Residential, 1.2),
    (AccumulationUsage::Hotel, 1.2),
    (AccumulationUsage::Factory, 0.8),
    (AccumulationUsage::Warehouse, 0.8),
];
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

// --- Regression (Method B) ---
pub const DEFAULT_TIER_THRESHOLD_FLOORS: f64 = 18.0;
pub const DEFAULT_DEFLATION_MULTIPLIER: f64 = 0.9;
pub const UNKNOWN_CATEGORY_ADJUSTMENT: f64 = 0.0;

pub const LOW_RISE_CONSTANT: f64 = 6.0;
pub const LOW_RISE_USAGE: [(RegressionUsage, f64); 7] = [
    (RegressionUsage::Office, 0.0),
    (RegressionUsage::Commercial, 1.0),
    (RegressionUsage::Residential, 1.5),
    (RegressionUsage::Hotel, 2.0),
    (RegressionUsage::Hospital, 2.5),
    (RegressionUsage::Education, 0.5),
    (RegressionUsage::Industrial, -1.5),
];
pub const LOW_RISE_LOCATION: [(LocationCategory, f64); 2] = [
    (LocationCategory::Urban, 1.2),
    (LocationCategory::Suburban, 0.0),
];
pub const LOW_RISE_STRUCTURE: [(StructureCategory, f64); 3] = [
    (StructureCategory::S, 0.0),
    (StructureCategory::Src, 1.5),
    (StructureCategory::Rc, 2.5),
];
pub const LOW_RISE_FOOTPRINT_WEIGHT: f64 = 0.0004;
pub const LOW_RISE_TOTAL_AREA_WEIGHT: f64 = 0.00008;
pub const LOW_RISE_BELOW_WEIGHT: f64 = 2.4;
pub const LOW_RISE_ABOVE_WEIGHT: f64 = 0.55;
pub const LOW_RISE_PENTHOUSE_WEIGHT: f64 = 0.6;

pub const HIGH_RISE_CONSTANT: f64 = 4.0;
pub const HIGH_RISE_USAGE: [(RegressionUsage, f64); 7] = [
    (RegressionUsage::Office, 0.0),
    (RegressionUsage::Commercial, 1.2),
    (RegressionUsage::Residential, 2.0),
    (RegressionUsage::Hotel, 2.5),
    (RegressionUsage::Hospital, 3.0),
    (RegressionUsage::Education, 0.5),
    (RegressionUsage::Industrial, -1.0),
];
pub const HIGH_RISE_LOCATION: [(LocationCategory, f64); 2] = [
    (LocationCategory::Urban, 1.5),
    (LocationCategory::Suburban, 0.0),
];
pub const HIGH_RISE_STRUCTURE: [(StructureCategory, f64); 3] = [
    (StructureCategory::S, 0.0),
    (StructureCategory::Src, 2.0),
    (StructureCategory::Rc, 3.5),
];
pub const HIGH_RISE_FOOTPRINT_WEIGHT: f64 = 0.0003;
pub const HIGH_RISE_TOTAL_AREA_WEIGHT: f64 = 0.00005;
pub const HIGH_RISE_BELOW_WEIGHT: f64 = 2.2;
pub const HIGH_RISE_ABOVE_WEIGHT: f64 = 0.42;
pub const HIGH_RISE_PENTHOUSE_WEIGHT: f64 = 0.5;

// --- Comparison ---
pub const DEFAULT_DISCREPANCY_THRESHOLD_MONTHS: f64 = 3.0;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_OUTPUT: bool = true;
