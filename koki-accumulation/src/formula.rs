use koki_core::config::AccumulationConfig;
use koki_core::models::{DurationBreakdown, DurationResult, ProjectParameters, UtilizationCoefficient};

use crate::factors::{self, TradeRates};

/// Accumulation formula.
///
/// ```text
/// piling         = hasPile ? pileBase / c : 0
/// substructure   = floorsBelow × subRate / c
/// superstructure = floorsAbove × superRate / c
/// finishing      = finishingBase × usageMultiplier
/// bottomUp       = piling + substructure + superstructure + finishing + special
/// reduction      = substructure × reductionRatio
/// topDown        = bottomUp − reduction
/// ```
pub fn compute(
    params: &ProjectParameters,
    coefficient: UtilizationCoefficient,
    config: &AccumulationConfig,
) -> DurationResult {
    let rates = factors::structure::resolve(config, params.substructure_category(), params.structure);
    compute_with_rates(params, coefficient, config, rates)
}

/// Same as [`compute`] with pre-resolved trade rates.
pub fn compute_with_rates(
    params: &ProjectParameters,
    coefficient: UtilizationCoefficient,
    config: &AccumulationConfig,
    rates: TradeRates,
) -> DurationResult {
    let c = coefficient.value();

    let piling = if params.has_piling {
        config.pile_base_duration / c
    } else {
        0.0
    };

    let breakdown = DurationBreakdown {
        piling,
        substructure: params.floors_below * rates.substructure / c,
        superstructure: params.floors_above * rates.superstructure / c,
        finishing: factors::usage::finishing_duration(config, params.usage),
        special_conditions: params.special_conditions_months,
    };

    let bottom_up_total = breakdown.total();
    let reduction = breakdown.substructure * rates.reduction_ratio;

    DurationResult {
        breakdown,
        bottom_up_total,
        reduction,
        top_down_total: bottom_up_total - reduction,
    }
}
