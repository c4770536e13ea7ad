use koki_core::config::AccumulationConfig;
use koki_core::models::StructureCategory;

use super::TradeRates;

/// Structure speed factors applied to the base rate constants.
///
/// The below-grade system slows the substructure rate; the above-grade
/// system slows the superstructure rate and sets the top-down ratio
/// (steel frames sequence top-down most easily).
///
/// Baseline (S): 1.0×. SRC: moderate slowdown. RC: largest slowdown.
pub fn resolve(
    config: &AccumulationConfig,
    substructure: StructureCategory,
    superstructure: StructureCategory,
) -> TradeRates {
    let below = config.factors_for(substructure);
    let above = config.factors_for(superstructure);

    TradeRates {
        substructure: config.substructure_rate * below.substructure_multiplier,
        superstructure: config.superstructure_rate * above.superstructure_multiplier,
        reduction_ratio: above.top_down_reduction_ratio,
    }
}
