use koki_core::config::RegressionConfig;
use koki_core::models::*;
use koki_regression::{formula, RegressionEngine};
use proptest::prelude::*;

fn arb_usage() -> impl Strategy<Value = RegressionUsage> {
    prop::sample::select(RegressionUsage::ALL.to_vec())
}

fn arb_structure() -> impl Strategy<Value = StructureCategory> {
    prop::sample::select(StructureCategory::ALL.to_vec())
}

fn arb_location() -> impl Strategy<Value = LocationCategory> {
    prop::sample::select(LocationCategory::ALL.to_vec())
}

proptest! {
    #[test]
    fn tier_is_a_pure_step_at_threshold(floors_above in 0.0f64..80.0) {
        let engine = RegressionEngine::default();
        let result = engine.evaluate(&ProjectParameters {
            floors_above,
            ..Default::default()
        });
        let expected = if floors_above >= 18.0 { HeightTier::HighRise } else { HeightTier::LowRise };
        prop_assert_eq!(result.tier, expected);
    }

    #[test]
    fn missing_categories_contribute_exactly_zero(
        usage in arb_usage(),
        structure in arb_structure(),
        location in arb_location(),
        floors_above in 0.0f64..60.0,
    ) {
        let mut config = RegressionConfig::default();
        for table in [&mut config.low_rise, &mut config.high_rise] {
            table.usage.clear();
            table.location.clear();
            table.structure.clear();
        }
        let params = ProjectParameters {
            regression_usage: Some(usage),
            structure,
            location,
            floors_above,
            ..Default::default()
        };

        let result = RegressionEngine::new(config.clone()).evaluate(&params);
        prop_assert_eq!(result.terms.usage, 0.0);
        prop_assert_eq!(result.terms.location, 0.0);
        prop_assert_eq!(result.terms.structure, 0.0);

        let table = config.table(result.tier);
        let scale_only = table.constant
            + params.footprint_area * table.footprint_weight
            + params.total_area * table.total_area_weight
            + params.floors_below * table.below_weight
            + params.floors_above * table.above_weight
            + params.penthouse_floors * table.penthouse_weight;
        prop_assert!((result.raw_sum - scale_only).abs() < 1e-9);
    }

    #[test]
    fn top_down_never_exceeds_total(
        floors_below in 0.0f64..8.0,
        floors_above in 0.0f64..60.0,
        usage in arb_usage(),
        structure in arb_structure(),
    ) {
        let engine = RegressionEngine::default();
        let result = engine.evaluate(&ProjectParameters {
            floors_below,
            floors_above,
            regression_usage: Some(usage),
            structure,
            ..Default::default()
        });
        prop_assert!(result.top_down_total <= result.total);
    }

    #[test]
    fn terms_are_bit_identical_on_repeat(
        floors_above in 0.0f64..60.0,
        total_area in 0.0f64..200_000.0,
    ) {
        let config = RegressionConfig::default();
        let params = ProjectParameters { floors_above, total_area, ..Default::default() };
        let first = formula::compute(&params, &config);
        let second = formula::compute(&params, &config);
        prop_assert_eq!(first.total.to_bits(), second.total.to_bits());
        prop_assert_eq!(first.terms, second.terms);
    }
}
