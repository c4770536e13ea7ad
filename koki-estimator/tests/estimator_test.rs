use koki_core::constants::MAX_BATCH_SIZE;
use koki_core::models::{
    EstimateReport, EstimationMethod, HeightTier, ProjectParameters, UtilizationInputs, Verdict,
    WorkSchedulePreset,
};
use koki_core::{KokiConfig, KokiError};
use koki_estimator::{EstimateRequest, Estimator};
use proptest::prelude::*;

const TOL: f64 = 1e-4;

fn preset(preset: WorkSchedulePreset) -> UtilizationInputs {
    UtilizationInputs::Preset { preset }
}

fn reference_report() -> EstimateReport {
    Estimator::default()
        .estimate(
            &ProjectParameters::default(),
            &preset(WorkSchedulePreset::WeeklyAndMonthlyRest),
        )
        .unwrap()
}

#[test]
fn reference_office_report() {
    let report = reference_report();

    assert!((report.coefficient.value() - 0.75737).abs() < 1e-12);
    assert!((report.method_a.bottom_up_total - 34.18864).abs() < TOL);
    assert!((report.method_a.top_down_total - 28.13295).abs() < TOL);
    assert_eq!(report.method_b.tier, HeightTier::LowRise);
    assert!((report.method_b.raw_sum - 30.66352).abs() < TOL);
    assert!((report.method_b.total - 27.597168).abs() < TOL);
    assert!((report.method_b.top_down_total - 24.227568).abs() < TOL);

    assert_eq!(report.comparison.verdict, Verdict::BLower);
    assert!((report.comparison.magnitude + 6.59147).abs() < TOL);
    assert_eq!(report.top_down_comparison.verdict, Verdict::BLower);
}

#[test]
fn comparison_uses_the_same_totals_as_the_models() {
    let report = reference_report();
    let gap = report.method_b.total - report.method_a.bottom_up_total;
    assert_eq!(report.comparison.magnitude, gap);
    let td_gap = report.method_b.top_down_total - report.method_a.top_down_total;
    assert_eq!(report.top_down_comparison.magnitude, td_gap);
}

#[test]
fn metadata_is_carried_through() {
    let params = ProjectParameters {
        project_name: Some("Tower 7".to_string()),
        site: Some("Kaohsiung".to_string()),
        ..ProjectParameters::default()
    };
    let report = Estimator::default()
        .estimate(&params, &UtilizationInputs::default())
        .unwrap();
    assert_eq!(report.project_name.as_deref(), Some("Tower 7"));
    assert_eq!(report.site.as_deref(), Some("Kaohsiung"));
}

#[test]
fn invalid_schedule_fails_the_whole_estimate() {
    let inputs = UtilizationInputs::Schedule {
        rest_days_per_week: 3.0,
        annual_holidays: 10,
        daily_hours: 8.0,
    };
    let err = Estimator::default()
        .estimate(&ProjectParameters::default(), &inputs)
        .unwrap_err();
    assert!(err.is_invalid_input());
    assert!(err.to_string().contains("rest_days_per_week"));
}

#[test]
fn negative_scale_input_fails_before_any_model_runs() {
    let params = ProjectParameters {
        floors_below: -1.0,
        ..ProjectParameters::default()
    };
    let err = Estimator::default()
        .estimate(&params, &UtilizationInputs::default())
        .unwrap_err();
    assert!(matches!(err, KokiError::InvalidInput { ref field, .. } if field == "floors_below"));
}

#[test]
fn override_coefficient_is_used_verbatim() {
    let report = Estimator::default()
        .estimate(
            &ProjectParameters::default(),
            &UtilizationInputs::Override { coefficient: 0.85 },
        )
        .unwrap();
    assert_eq!(report.coefficient.value(), 0.85);
}

#[test]
fn non_positive_override_is_rejected() {
    let result = Estimator::default().estimate(
        &ProjectParameters::default(),
        &UtilizationInputs::Override { coefficient: 0.0 },
    );
    assert!(result.unwrap_err().is_invalid_input());
}

#[test]
fn lower_coefficient_lengthens_method_a_only() {
    let estimator = Estimator::default();
    let params = ProjectParameters::default();
    let rush = estimator
        .estimate(&params, &preset(WorkSchedulePreset::Rush))
        .unwrap();
    let relaxed = estimator
        .estimate(&params, &preset(WorkSchedulePreset::WeeklyAndMonthlyRest))
        .unwrap();
    assert!(relaxed.method_a.bottom_up_total > rush.method_a.bottom_up_total);
    assert_eq!(relaxed.method_b.total, rush.method_b.total);
}

#[test]
fn threshold_from_toml_changes_the_verdict() {
    let params = ProjectParameters::default();
    let inputs = preset(WorkSchedulePreset::WeeklyAndMonthlyRest);

    let strict = Estimator::default().estimate(&params, &inputs).unwrap();
    assert_eq!(strict.top_down_comparison.verdict, Verdict::BLower);

    let lenient = Estimator::from_toml("[comparison]\ndiscrepancy_threshold_months = 5.0\n").unwrap();
    assert_eq!(lenient.comparator().threshold(), 5.0);
    let report = lenient.estimate(&params, &inputs).unwrap();
    assert!(report.top_down_comparison.is_consistent());
    assert_eq!(report.top_down_comparison.threshold, 5.0);
    assert_eq!(report.comparison.verdict, Verdict::BLower);
}

#[test]
fn bad_toml_is_a_config_error() {
    let err = Estimator::from_toml("[comparison]\ndiscrepancy_threshold_months = \"x\"\n").unwrap_err();
    assert!(!err.is_invalid_input());
}

#[test]
fn regression_table_that_could_go_negative_is_refused() {
    let toml = r#"
[regression.low_rise]
constant = -60.0
footprint_weight = 0.0004
total_area_weight = 0.00008
below_weight = 2.4
above_weight = -1.0
penthouse_weight = 0.6
deflation_multiplier = 0.9
top_down_reduction_ratio = 0.39

[regression.low_rise.usage]
office = 0.0

[regression.low_rise.location]
urban = 1.2

[regression.low_rise.structure]
SRC = 1.5
"#;
    let err = Estimator::from_toml(toml).unwrap_err();
    assert!(matches!(err, KokiError::ConfigError { .. }));
}

#[test]
fn models_agree_with_the_report() {
    let estimator = Estimator::default();
    let params = ProjectParameters::default();
    let report = reference_report();

    let [a, b] = estimator.models();
    assert_eq!(a.method(), EstimationMethod::Accumulation);
    assert_eq!(b.method(), EstimationMethod::Regression);

    let a_est = a.estimate(&params, report.coefficient).unwrap();
    let b_est = b.estimate(&params, report.coefficient).unwrap();
    assert_eq!(a_est.bottom_up_total, report.method_a.bottom_up_total);
    assert_eq!(a_est.top_down_total, report.method_a.top_down_total);
    assert_eq!(b_est.bottom_up_total, report.method_b.total);
    assert_eq!(b_est.top_down_total, report.method_b.top_down_total);
}

#[test]
fn estimate_is_idempotent() {
    assert_eq!(reference_report(), reference_report());
}

#[test]
fn report_serializes_for_the_presentation_layer() {
    let report = reference_report();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["coefficient"], 0.75737);
    assert_eq!(json["method_b"]["tier"], "low_rise");
    assert_eq!(json["comparison"]["verdict"], "b_lower");

    let back: EstimateReport = serde_json::from_value(json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn custom_config_flows_into_every_component() {
    let mut config = KokiConfig::default();
    config.comparison.discrepancy_threshold_months = 12.0;
    config.regression.tier_threshold_floors = 12.0;
    let estimator = Estimator::new(config);

    let report = estimator
        .estimate(&ProjectParameters::default(), &UtilizationInputs::default())
        .unwrap();
    assert_eq!(report.method_b.tier, HeightTier::HighRise);
    assert!(report.comparison.is_consistent());
}

#[test]
fn batch_preserves_order_and_isolates_failures() {
    let good = EstimateRequest {
        project: ProjectParameters::default(),
        utilization: UtilizationInputs::default(),
    };
    let bad = EstimateRequest {
        project: ProjectParameters {
            total_area: f64::NAN,
            ..ProjectParameters::default()
        },
        utilization: UtilizationInputs::default(),
    };
    let rush = EstimateRequest {
        project: ProjectParameters::default(),
        utilization: preset(WorkSchedulePreset::Rush),
    };

    let estimator = Estimator::default();
    let results = estimator
        .estimate_batch(&[good, bad, rush.clone()])
        .unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap(), &reference_report());
    assert!(results[1].as_ref().unwrap_err().is_invalid_input());
    assert_eq!(
        results[2].as_ref().unwrap(),
        &estimator.estimate(&rush.project, &rush.utilization).unwrap()
    );
}

#[test]
fn empty_batch_is_empty() {
    assert!(Estimator::default().estimate_batch(&[]).unwrap().is_empty());
}

#[test]
fn oversized_batch_is_rejected_up_front() {
    let requests = vec![
        EstimateRequest {
            project: ProjectParameters::default(),
            utilization: UtilizationInputs::default(),
        };
        MAX_BATCH_SIZE + 1
    ];
    let err = Estimator::default().estimate_batch(&requests).unwrap_err();
    assert!(matches!(err, KokiError::InvalidInput { ref field, .. } if field == "requests"));
}

#[test]
fn request_without_utilization_uses_default_preset() {
    let request: EstimateRequest = serde_json::from_str(
        r#"{"project": {"floors_below": 0, "floors_above": 2, "total_area": 800, "structure": "RC", "usage": "retail"}}"#,
    )
    .unwrap();
    assert_eq!(
        request.utilization,
        preset(WorkSchedulePreset::WeeklyAndMonthlyRest)
    );
}

#[test]
fn estimates_run_with_tracing_installed() {
    koki_observability::init_tracing_with_filter("koki=debug");
    let report = reference_report();
    assert_eq!(report.comparison.verdict, Verdict::BLower);
}

proptest! {
    #[test]
    fn magnitude_is_signed_gap_and_totals_are_non_negative(
        floors_below in 0.0f64..6.0,
        floors_above in 1.0f64..45.0,
        total_area in 500.0f64..80_000.0,
        footprint_area in 100.0f64..4_000.0,
        has_piling in any::<bool>(),
        c in 0.3f64..1.0,
    ) {
        let params = ProjectParameters {
            floors_below,
            floors_above,
            total_area,
            footprint_area,
            has_piling,
            ..ProjectParameters::default()
        };
        let report = Estimator::default()
            .estimate(&params, &UtilizationInputs::Override { coefficient: c })
            .unwrap();
        prop_assert!(report.method_a.top_down_total >= 0.0);
        prop_assert!(report.method_b.top_down_total >= 0.0);
        prop_assert_eq!(
            report.comparison.magnitude,
            report.method_b.total - report.method_a.bottom_up_total
        );
        let consistent = report.comparison.magnitude.abs() < report.comparison.threshold;
        prop_assert_eq!(report.comparison.is_consistent(), consistent);
    }
}
