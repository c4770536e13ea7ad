pub mod structure;
pub mod usage;

/// Structure-adjusted rates for one building, in pure labor months.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeRates {
    /// Months per floor below grade.
    pub substructure: f64,
    /// Months per floor above grade.
    pub superstructure: f64,
    /// Fraction of substructure duration recovered top-down.
    pub reduction_ratio: f64,
}
