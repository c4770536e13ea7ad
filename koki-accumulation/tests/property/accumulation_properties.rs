use koki_accumulation::AccumulationEngine;
use koki_core::models::*;
use proptest::prelude::*;

fn arb_structure() -> impl Strategy<Value = StructureCategory> {
    prop_oneof![
        Just(StructureCategory::S),
        Just(StructureCategory::Src),
        Just(StructureCategory::Rc),
    ]
}

fn arb_usage() -> impl Strategy<Value = AccumulationUsage> {
    prop::sample::select(AccumulationUsage::ALL.to_vec())
}

fn project(
    floors_below: f64,
    floors_above: f64,
    has_piling: bool,
    structure: StructureCategory,
    usage: AccumulationUsage,
) -> ProjectParameters {
    ProjectParameters {
        floors_below,
        floors_above,
        has_piling,
        structure,
        usage,
        ..Default::default()
    }
}

proptest! {
    #[test]
    fn bottom_up_strictly_decreases_as_coefficient_grows(
        floors_below in 0.5f64..8.0,
        floors_above in 1.0f64..60.0,
        has_piling in any::<bool>(),
        structure in arb_structure(),
        usage in arb_usage(),
        c in 0.3f64..1.2,
        step in 0.01f64..0.5,
    ) {
        let engine = AccumulationEngine::default();
        let params = project(floors_below, floors_above, has_piling, structure, usage);
        let lower = engine.evaluate(&params, UtilizationCoefficient::new(c).unwrap());
        let higher = engine.evaluate(&params, UtilizationCoefficient::new(c + step).unwrap());
        prop_assert!(
            higher.bottom_up_total < lower.bottom_up_total,
            "{} !< {}", higher.bottom_up_total, lower.bottom_up_total
        );
    }

    #[test]
    fn top_down_never_exceeds_bottom_up(
        floors_below in 0.0f64..8.0,
        floors_above in 0.0f64..60.0,
        has_piling in any::<bool>(),
        structure in arb_structure(),
        usage in arb_usage(),
        c in 0.1f64..1.5,
    ) {
        let engine = AccumulationEngine::default();
        let params = project(floors_below, floors_above, has_piling, structure, usage);
        let result = engine.evaluate(&params, UtilizationCoefficient::new(c).unwrap());
        prop_assert!(result.top_down_total <= result.bottom_up_total);
        if floors_below > 0.01 {
            prop_assert!(result.top_down_total < result.bottom_up_total);
        }
    }

    #[test]
    fn every_component_is_non_negative(
        floors_below in 0.0f64..8.0,
        floors_above in 0.0f64..60.0,
        has_piling in any::<bool>(),
        structure in arb_structure(),
        usage in arb_usage(),
        c in 0.1f64..1.5,
    ) {
        let engine = AccumulationEngine::default();
        let params = project(floors_below, floors_above, has_piling, structure, usage);
        let bd = engine.evaluate(&params, UtilizationCoefficient::new(c).unwrap()).breakdown;
        prop_assert!(bd.piling >= 0.0);
        prop_assert!(bd.substructure >= 0.0);
        prop_assert!(bd.superstructure >= 0.0);
        prop_assert!(bd.finishing >= 0.0);
    }

    #[test]
    fn evaluation_is_bit_identical_on_repeat(
        floors_below in 0.0f64..8.0,
        floors_above in 0.0f64..60.0,
        structure in arb_structure(),
        c in 0.1f64..1.5,
    ) {
        let engine = AccumulationEngine::default();
        let params = project(floors_below, floors_above, true, structure, AccumulationUsage::Office);
        let coefficient = UtilizationCoefficient::new(c).unwrap();
        let first = engine.evaluate(&params, coefficient);
        let second = engine.evaluate(&params, coefficient);
        prop_assert_eq!(first.bottom_up_total.to_bits(), second.bottom_up_total.to_bits());
        prop_assert_eq!(first.top_down_total.to_bits(), second.top_down_total.to_bits());
    }
}
