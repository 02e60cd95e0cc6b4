use tracing::debug;

use crate::model::dimensions::PERFORMANCE_ITEMS;
use crate::model::responses::{CenteredResponses, ImputedResponses, ResponseTable};

/// Midpoint of a 1..7 Likert scale.
pub const LIKERT7_MIDPOINT: f64 = 4.0;

pub fn center_value(raw: f64, offset: f64) -> f64 {
    raw - offset
}

pub fn uncenter_value(centered: f64, offset: f64) -> f64 {
    centered + offset
}

/// Shift every performance item by `-offset`; importance items pass through.
pub fn run_stage3(imputed: ImputedResponses, offset: f64) -> CenteredResponses {
    let ImputedResponses(mut table) = imputed;
    let n_dims = table.n_dimensions();
    for row in &mut table.rows {
        for dim in 0..n_dims {
            for item in 1..=PERFORMANCE_ITEMS {
                let col = ResponseTable::column_index(dim, item);
                row[col] = center_value(row[col], offset);
            }
        }
    }
    debug!("performance items centered at {offset}");
    CenteredResponses { table, offset }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_center.rs"]
mod tests;
