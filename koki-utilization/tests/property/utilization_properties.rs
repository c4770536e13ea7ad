use koki_utilization::UtilizationCalculator;
use proptest::prelude::*;

proptest! {
    #[test]
    fn valid_schedules_always_yield_positive_coefficient(
        rest in 0.0f64..=2.0,
        holidays in 0i32..200,
        hours in 0.5f64..16.0,
    ) {
        let calc = UtilizationCalculator::default();
        let c = calc.compute(rest, holidays, hours).unwrap();
        prop_assert!(c.value() > 0.0);
    }

    #[test]
    fn more_holidays_never_raise_the_coefficient(
        rest in 0.0f64..=1.0,
        holidays in 0i32..100,
        extra in 1i32..50,
        hours in 1.0f64..12.0,
    ) {
        let calc = UtilizationCalculator::default();
        let fewer = calc.compute(rest, holidays, hours).unwrap().value();
        let more = calc.compute(rest, holidays + extra, hours).unwrap().value();
        prop_assert!(more < fewer, "{} !< {}", more, fewer);
    }

    #[test]
    fn any_positive_override_is_accepted_verbatim(c in 1e-6f64..10.0) {
        let coefficient = UtilizationCalculator::from_override(c).unwrap();
        prop_assert_eq!(coefficient.value(), c);
    }

    #[test]
    fn out_of_range_rest_days_always_fail(rest in 2.0001f64..7.0) {
        let calc = UtilizationCalculator::default();
        prop_assert!(calc.compute(rest, 0, 8.0).is_err());
    }
}
