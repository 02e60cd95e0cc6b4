use super::*;
use crate::model::dimensions::DimensionSelection;
use crate::model::profile::{ImputationAxis, ZeroImportancePolicy};
use crate::model::scores::ScoreStatus;

fn within(ci: &crate::model::scores::ConfidenceInterval, value: f64) -> bool {
    ci.low <= value && value <= ci.high
}

fn raw(columns: &[&str], rows: Vec<Vec<f64>>) -> RawTable {
    RawTable::new(columns.iter().map(|c| c.to_string()).collect(), rows)
}

fn toy_profile() -> ScoringProfile {
    let mut profile = ScoringProfile::kp_v1();
    profile.dimensions = DimensionSelection::Codes(vec!["D1".to_string(), "D2".to_string()]);
    profile
}

const D_COLUMNS: &[&str] = &[
    "D1_01", "D1_02", "D1_03", "D1_04", "D1_05", "D2_01", "D2_02", "D2_03", "D2_04", "D2_05",
];

#[test]
fn test_toy_dataset_end_to_end() {
    let table = raw(
        D_COLUMNS,
        vec![vec![1.0, 7.0, 1.0, 7.0, 7.0, 4.0, 4.0, 4.0, 4.0, 1.0]],
    );
    let out = run_pipeline(&table, &toy_profile()).unwrap();
    let p = &out.participants[0];
    assert_eq!(p.dimension_avg_performance, vec![0.0, 0.0]);
    assert_eq!(p.dimension_weight, vec![0.875, 0.125]);
    assert_eq!(p.kpi, 0.0);
    assert_eq!(p.avg_performance, 0.0);
    assert_eq!(out.kpi.overall_kpi, 0.0);
    assert!(!out.kpi.stats.ci.is_defined());
}

#[test]
fn test_overall_matches_participants() {
    let table = raw(
        D_COLUMNS,
        vec![
            vec![5.0, 6.0, 7.0, 6.0, 6.0, 3.0, 4.0, 2.0, 3.0, 2.0],
            vec![2.0, 3.0, 4.0, 3.0, 5.0, 6.0, 6.0, 7.0, 5.0, 7.0],
            vec![4.0, 4.0, 5.0, 5.0, 4.0, 1.0, 2.0, 2.0, 1.0, 3.0],
            vec![7.0, 7.0, 7.0, 7.0, 7.0, 7.0, 7.0, 7.0, 7.0, 7.0],
        ],
    );
    let out = run_pipeline(&table, &toy_profile()).unwrap();
    let manual = out.participants.iter().map(|p| p.kpi).sum::<f64>() / 4.0;
    assert!((out.kpi.overall_kpi - manual).abs() < 1e-12);
    assert!((out.kpi.stats.mean - manual).abs() < 1e-12);
    for p in &out.participants {
        let sum = p.dimension_weight.iter().sum::<f64>();
        assert!((sum - 1.0).abs() < 1e-9);
    }
    for d in &out.dimension_summaries {
        assert_eq!(d.performance.n, 4);
        assert!(within(&d.performance.ci, d.performance.mean));
        assert!(within(&d.importance.ci, d.importance.mean));
    }
}

#[test]
fn test_missing_columns_and_zero_importance_do_not_abort() {
    let table = raw(
        &["D1_01", "D1_02", "D1_05", "D2_01", "D2_05"],
        vec![
            vec![5.0, 7.0, 0.0, 3.0, 0.0],
            vec![6.0, 6.0, 6.0, 2.0, 2.0],
            vec![f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN],
        ],
    );
    let out = run_pipeline(&table, &toy_profile()).unwrap();
    assert_eq!(out.schema.injected_columns.len(), 5);
    assert_eq!(out.participants.len(), 3);
    assert_eq!(out.participants[0].status, ScoreStatus::ZeroImportance);
    assert_eq!(out.participants[1].status, ScoreStatus::Ok);
    assert_eq!(out.participants[2].status, ScoreStatus::Undefined);
    assert_eq!(out.imputation.undefined_participants, vec![3]);
    assert_eq!(out.kpi.n_excluded, 1);
    assert!(out.kpi.overall_kpi.is_nan());
}

#[test]
fn test_column_imputation_path() {
    let mut profile = toy_profile();
    profile.imputation = ImputationAxis::Column;
    profile.zero_importance = ZeroImportancePolicy::Propagate;
    let table = raw(
        D_COLUMNS,
        vec![
            vec![5.0, 5.0, 5.0, 5.0, 6.0, 3.0, 3.0, 3.0, 3.0, 2.0],
            vec![7.0, 7.0, 7.0, 7.0, f64::NAN, 5.0, 5.0, 5.0, 5.0, 4.0],
        ],
    );
    let out = run_pipeline(&table, &profile).unwrap();
    assert_eq!(out.imputation.filled_cells, 1);
    let d1 = &out.dimension_summaries[0];
    assert_eq!(d1.importance.mean, 6.0);
    assert_eq!(d1.performance.mean, 2.0);
}

#[test]
fn test_discover_dimensions() {
    let mut profile = ScoringProfile::ipa_v1();
    profile.dimensions = DimensionSelection::Discover;
    let table = raw(&["UA14_05", "KP01_05", "KP01_01"], vec![vec![5.0, 6.0, 7.0]]);
    let out = run_pipeline(&table, &profile).unwrap();
    let codes = out
        .dimensions
        .dimensions
        .iter()
        .map(|d| d.code.as_str())
        .collect::<Vec<_>>();
    assert_eq!(codes, vec!["KP01", "UA14"]);
    assert_eq!(out.dimension_summaries[1].name, "Trust");
}

#[test]
fn test_no_rows_is_run_level_error() {
    let table = raw(D_COLUMNS, Vec::new());
    let err = run_pipeline(&table, &toy_profile()).unwrap_err();
    assert!(matches!(err, PipelineError::NoParticipants));
}

#[test]
fn test_no_dimensions_is_run_level_error() {
    let mut profile = ScoringProfile::ipa_v1();
    profile.dimensions = DimensionSelection::Discover;
    let table = raw(&["age"], vec![vec![30.0]]);
    let err = run_pipeline(&table, &profile).unwrap_err();
    assert!(matches!(err, PipelineError::NoDimensions(_)));
}
