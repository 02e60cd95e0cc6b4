use tracing::debug;

use crate::model::scores::{DimensionAggregates, ImportanceWeights};

/// `weight[d] = importance[d] / sum(importance)`, no clamping.
///
/// A zero sum yields NaN weights with `zero_sum` set; the KPI stage applies
/// the configured policy.
pub fn relative_weights(importance: &[f64]) -> ImportanceWeights {
    let importance_sum = importance.iter().sum::<f64>();
    if importance_sum == 0.0 {
        return ImportanceWeights {
            weights: vec![f64::NAN; importance.len()],
            importance_sum,
            zero_sum: true,
        };
    }
    ImportanceWeights {
        weights: importance.iter().map(|v| v / importance_sum).collect(),
        importance_sum,
        zero_sum: false,
    }
}

pub fn run_stage5(aggregates: &[DimensionAggregates]) -> Vec<ImportanceWeights> {
    aggregates
        .iter()
        .enumerate()
        .map(|(idx, a)| {
            let w = relative_weights(&a.importance);
            debug!("participant {}: importance sum {}", idx + 1, w.importance_sum);
            w
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_weights.rs"]
mod tests;
