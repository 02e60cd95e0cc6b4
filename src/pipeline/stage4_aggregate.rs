use tracing::debug;

use crate::model::dimensions::{IMPORTANCE_ITEM, PERFORMANCE_ITEMS};
use crate::model::responses::CenteredResponses;
use crate::model::scores::DimensionAggregates;
use crate::model::stats::mean;

pub fn run_stage4(centered: &CenteredResponses) -> Vec<DimensionAggregates> {
    let table = &centered.table;
    let n_dims = table.n_dimensions();
    let mut out = Vec::with_capacity(table.n_participants());
    debug!(
        "aggregating {} participants x {} dimensions (performance centered at {})",
        table.n_participants(),
        n_dims,
        centered.offset
    );

    for row in 0..table.n_participants() {
        let mut avg_performance = Vec::with_capacity(n_dims);
        let mut importance = Vec::with_capacity(n_dims);
        let mut all_performance = Vec::with_capacity(n_dims * PERFORMANCE_ITEMS);
        for dim in 0..n_dims {
            let block = table.block(row, dim);
            let performance = &block[..PERFORMANCE_ITEMS];
            avg_performance.push(mean(performance));
            importance.push(block[IMPORTANCE_ITEM - 1]);
            all_performance.extend_from_slice(performance);
        }
        out.push(DimensionAggregates {
            avg_performance,
            importance,
            overall_performance: mean(&all_performance),
        });
    }

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_aggregate.rs"]
mod tests;
