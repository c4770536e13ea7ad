use koki_core::config::{RegressionConfig, RegressionTable};
use koki_core::models::{ProjectParameters, RegressionResult, RegressionTerms};

/// Tiered weighted-sum formula.
///
/// ```text
/// rawSum  = constant + usageAdj + locationAdj + structureAdj
///         + footprint × wFootprint + totalArea × wArea
///         + floorsBelow × wBelow + floorsAbove × wAbove + phFloors × wPh
/// total   = rawSum × deflation + special
/// reduction = floorsBelow × wBelow × deflation × reductionRatio
/// topDown = total − reduction
/// ```
///
/// The table switches at a hard floor-count threshold, never interpolated.
pub fn compute(params: &ProjectParameters, config: &RegressionConfig) -> RegressionResult {
    let tier = config.tier_for(params.floors_above);
    let table = config.table(tier);

    let terms = terms(params, table);
    let raw_sum = terms.sum();
    let deflation = table.deflation_multiplier;

    let total = raw_sum * deflation + params.special_conditions_months;
    let reduction = terms.floors_below * deflation * table.top_down_reduction_ratio;

    RegressionResult {
        tier,
        terms,
        raw_sum,
        deflation_multiplier: deflation,
        special_conditions: params.special_conditions_months,
        total,
        reduction,
        top_down_total: total - reduction,
    }
}

/// Each additive term for one table. Unknown categories contribute 0.
pub fn terms(params: &ProjectParameters, table: &RegressionTable) -> RegressionTerms {
    RegressionTerms {
        constant: table.constant,
        usage: table.usage_adjustment(params.regression_usage()),
        location: table.location_adjustment(params.location),
        structure: table.structure_adjustment(params.structure),
        footprint_area: params.footprint_area * table.footprint_weight,
        total_area: params.total_area * table.total_area_weight,
        floors_below: params.floors_below * table.below_weight,
        floors_above: params.floors_above * table.above_weight,
        penthouse_floors: params.penthouse_floors * table.penthouse_weight,
    }
}
