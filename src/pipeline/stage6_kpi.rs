use tracing::warn;

use crate::model::profile::ZeroImportancePolicy;
use crate::model::scores::{DimensionAggregates, ImportanceWeights, ParticipantScore, ScoreStatus};
use crate::model::stats::mean;

#[derive(Debug)]
pub struct Stage6Output {
    pub scores: Vec<ParticipantScore>,
    /// KPIs that enter the population statistics, after the zero-importance policy.
    pub included_kpis: Vec<f64>,
    pub n_excluded: usize,
    pub overall_kpi: f64,
}

#[derive(Debug, Clone)]
pub struct Stage6Inputs<'a> {
    pub aggregates: &'a [DimensionAggregates],
    pub weights: &'a [ImportanceWeights],
    pub policy: ZeroImportancePolicy,
}

pub fn participant_kpi(avg_performance: &[f64], weights: &[f64]) -> f64 {
    avg_performance
        .iter()
        .zip(weights)
        .map(|(p, w)| p * w)
        .sum()
}

/// Mean of participant KPIs; NaN when there are none.
pub fn overall_kpi(kpis: &[f64]) -> f64 {
    mean(kpis)
}

pub fn run_stage6(inputs: &Stage6Inputs<'_>) -> Stage6Output {
    let n = inputs.aggregates.len();
    let mut scores = Vec::with_capacity(n);
    let mut included_kpis = Vec::with_capacity(n);
    let mut n_excluded = 0usize;

    for (idx, (agg, w)) in inputs.aggregates.iter().zip(inputs.weights).enumerate() {
        let kpi = if w.zero_sum {
            f64::NAN
        } else {
            participant_kpi(&agg.avg_performance, &w.weights)
        };
        let status = if w.zero_sum {
            ScoreStatus::ZeroImportance
        } else if kpi.is_nan() {
            ScoreStatus::Undefined
        } else {
            ScoreStatus::Ok
        };

        let excluded = status == ScoreStatus::ZeroImportance
            && inputs.policy == ZeroImportancePolicy::Exclude;
        if status == ScoreStatus::ZeroImportance {
            warn!(
                "participant {}: importance ratings sum to zero; KPI undefined{}",
                idx + 1,
                if excluded {
                    ", excluded from overall KPI"
                } else {
                    ""
                }
            );
        }
        if excluded {
            n_excluded += 1;
        } else {
            included_kpis.push(kpi);
        }

        scores.push(ParticipantScore {
            participant: idx + 1,
            avg_performance: agg.overall_performance,
            kpi,
            status,
            dimension_avg_performance: agg.avg_performance.clone(),
            dimension_weight: w.weights.clone(),
        });
    }

    let overall = overall_kpi(&included_kpis);
    if included_kpis.is_empty() {
        warn!("no participant contributes to the overall KPI; reported as NaN");
    }

    Stage6Output {
        scores,
        included_kpis,
        n_excluded,
        overall_kpi: overall,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_kpi.rs"]
mod tests;
