use super::*;
use crate::pipeline::stage6_kpi::Stage6Output;

fn within(ci: &crate::model::scores::ConfidenceInterval, value: f64) -> bool {
    ci.low <= value && value <= ci.high
}

#[test]
fn test_t_critical_reference_values() {
    assert!((t_critical(1.0, 0.95) - 12.7062).abs() < 1e-3);
    assert!((t_critical(10.0, 0.95) - 2.2281).abs() < 1e-3);
    assert!((t_critical(30.0, 0.95) - 2.0423).abs() < 1e-3);
    assert!((t_critical(10.0, 0.90) - 1.8125).abs() < 1e-3);
}

#[test]
fn test_t_critical_degenerate() {
    assert!(t_critical(0.0, 0.95).is_nan());
    assert!(t_critical(-1.0, 0.95).is_nan());
    assert!(t_critical(5.0, 1.0).is_nan());
    assert!(t_critical(f64::NAN, 0.95).is_nan());
}

#[test]
fn test_interval_formula() {
    let ci = confidence_interval(1.0, 2.0, 11, 0.95);
    let margin = t_critical(10.0, 0.95) * 2.0 / 11f64.sqrt();
    assert!((ci.low - (1.0 - margin)).abs() < 1e-12);
    assert!((ci.high - (1.0 + margin)).abs() < 1e-12);
    assert!(ci.is_defined());
}

#[test]
fn test_half_width_shrinks_with_sample_size() {
    let mut prev = f64::INFINITY;
    for n in 2..=200 {
        let ci = confidence_interval(0.5, 1.2, n, 0.95);
        let hw = ci.half_width();
        assert!(hw < prev, "half width did not shrink at n={n}");
        prev = hw;
    }
}

#[test]
fn test_insufficient_sample_is_undefined() {
    assert!(!confidence_interval(1.0, 0.5, 1, 0.95).is_defined());
    assert!(!confidence_interval(1.0, 0.5, 0, 0.95).is_defined());

    let single = sample_stats(&[3.0], 0.95);
    assert_eq!(single.n, 1);
    assert_eq!(single.mean, 3.0);
    assert!(single.sd.is_nan());
    assert!(single.ci.low.is_nan() && single.ci.high.is_nan());

    let empty = sample_stats(&[], 0.95);
    assert!(empty.mean.is_nan());
    assert!(!empty.ci.is_defined());
}

#[test]
fn test_mean_inside_interval() {
    let samples: Vec<Vec<f64>> = vec![
        vec![1.0, 2.0],
        vec![-3.0, 3.0, 0.5, 2.25],
        vec![0.0, 0.0, 0.0],
        vec![1.5, -0.5, 2.5, 3.0, -2.0, 0.0, 1.0],
    ];
    for s in samples {
        let stats = sample_stats(&s, 0.95);
        assert!(within(&stats.ci, stats.mean), "{s:?}");
    }
}

#[test]
fn test_run_stage7_dimension_summaries() {
    let dims = DimensionSet::from_codes(&["KP01", "ZZ01"]);
    let aggregates = vec![
        DimensionAggregates {
            avg_performance: vec![1.0, -1.0],
            importance: vec![6.0, 2.0],
            overall_performance: 0.0,
        },
        DimensionAggregates {
            avg_performance: vec![2.0, -2.0],
            importance: vec![7.0, 3.0],
            overall_performance: 0.0,
        },
        DimensionAggregates {
            avg_performance: vec![3.0, -3.0],
            importance: vec![5.0, 1.0],
            overall_performance: 0.0,
        },
    ];
    let kpi = Stage6Output {
        scores: Vec::new(),
        included_kpis: vec![0.5, 1.0, 1.5],
        n_excluded: 0,
        overall_kpi: 1.0,
    };
    let out = run_stage7(&Stage7Inputs {
        dimensions: &dims,
        aggregates: &aggregates,
        kpi: &kpi,
        confidence_level: 0.95,
    });

    assert_eq!(out.dimensions.len(), 2);
    let kp01 = &out.dimensions[0];
    assert_eq!(kp01.name, "Perspicuity");
    assert_eq!(kp01.performance.n, 3);
    assert_eq!(kp01.performance.mean, 2.0);
    assert_eq!(kp01.performance.sd, 1.0);
    assert_eq!(kp01.importance.mean, 6.0);
    assert!(within(&kp01.performance.ci, 2.0));

    let unknown = &out.dimensions[1];
    assert_eq!(unknown.name, "ZZ01");
    assert_eq!(unknown.performance.mean, -2.0);
    assert_eq!(unknown.importance.mean, 2.0);

    assert_eq!(out.kpi.overall_kpi, 1.0);
    assert_eq!(out.kpi.stats.mean, 1.0);
    assert_eq!(out.kpi.stats.sd, 0.5);
    assert_eq!(out.kpi.n_included, 3);
}
