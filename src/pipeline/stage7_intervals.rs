use statrs::distribution::{ContinuousCDF, StudentsT};
use tracing::{debug, warn};

use crate::model::dimensions::DimensionSet;
use crate::model::scores::{
    ConfidenceInterval, DimensionAggregates, DimensionSummary, KpiSummary, SampleStats,
};
use crate::model::stats::{mean, sample_sd};
use crate::pipeline::stage6_kpi::Stage6Output;

#[derive(Debug)]
pub struct Stage7Output {
    pub dimensions: Vec<DimensionSummary>,
    pub kpi: KpiSummary,
}

#[derive(Debug, Clone)]
pub struct Stage7Inputs<'a> {
    pub dimensions: &'a DimensionSet,
    pub aggregates: &'a [DimensionAggregates],
    pub kpi: &'a Stage6Output,
    pub confidence_level: f64,
}

/// Two-sided Student-t critical value for `df` degrees of freedom.
///
/// NaN when `df <= 0` or the confidence level is outside `(0, 1)`.
pub fn t_critical(df: f64, confidence_level: f64) -> f64 {
    if df.is_nan() || df <= 0.0 || !(confidence_level > 0.0 && confidence_level < 1.0) {
        return f64::NAN;
    }
    let p = 1.0 - (1.0 - confidence_level) / 2.0;
    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => dist.inverse_cdf(p),
        Err(_) => f64::NAN,
    }
}

pub fn confidence_interval(mean: f64, sd: f64, n: usize, confidence_level: f64) -> ConfidenceInterval {
    if n <= 1 {
        return ConfidenceInterval::undefined();
    }
    let se = sd / (n as f64).sqrt();
    let margin = t_critical((n - 1) as f64, confidence_level) * se;
    ConfidenceInterval {
        low: mean - margin,
        high: mean + margin,
    }
}

pub fn sample_stats(values: &[f64], confidence_level: f64) -> SampleStats {
    let n = values.len();
    let m = mean(values);
    let sd = sample_sd(values);
    SampleStats {
        n,
        mean: m,
        sd,
        ci: confidence_interval(m, sd, n, confidence_level),
    }
}

pub fn run_stage7(inputs: &Stage7Inputs<'_>) -> Stage7Output {
    let n = inputs.aggregates.len();
    if n < 2 {
        warn!("{n} participant(s): confidence intervals are undefined");
    }

    let mut dimensions = Vec::with_capacity(inputs.dimensions.len());
    for (dim, def) in inputs.dimensions.dimensions.iter().enumerate() {
        let performance = inputs
            .aggregates
            .iter()
            .map(|a| a.avg_performance[dim])
            .collect::<Vec<_>>();
        let importance = inputs
            .aggregates
            .iter()
            .map(|a| a.importance[dim])
            .collect::<Vec<_>>();
        let summary = DimensionSummary {
            code: def.code.clone(),
            name: def.name.clone(),
            performance: sample_stats(&performance, inputs.confidence_level),
            importance: sample_stats(&importance, inputs.confidence_level),
        };
        if summary.performance.ci.is_defined() {
            debug!(
                "{}: performance={:.4} +/- {:.4} importance={:.4}",
                summary.code,
                summary.performance.mean,
                summary.performance.ci.half_width(),
                summary.importance.mean
            );
        }
        dimensions.push(summary);
    }

    let stats = sample_stats(&inputs.kpi.included_kpis, inputs.confidence_level);
    let kpi = KpiSummary {
        overall_kpi: inputs.kpi.overall_kpi,
        n_participants: inputs.kpi.scores.len(),
        n_included: inputs.kpi.included_kpis.len(),
        n_excluded: inputs.kpi.n_excluded,
        stats,
    };

    Stage7Output { dimensions, kpi }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage7_intervals.rs"]
mod tests;
