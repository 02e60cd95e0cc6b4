use serde::Serialize;
use tracing::{info, warn};

use crate::model::profile::ImputationAxis;
use crate::model::responses::{ImputedResponses, ResponseTable};
use crate::model::stats::nan_mean;

#[derive(Debug, Clone, Serialize)]
pub struct ImputationAudit {
    pub axis: ImputationAxis,
    pub missing_cells: usize,
    pub filled_cells: usize,
    /// Cells still NaN because their whole row or column was missing.
    pub undefined_cells: usize,
    /// 1-based participants with every expected item missing (row axis).
    pub undefined_participants: Vec<usize>,
    /// Columns with every participant missing (column axis).
    pub undefined_columns: Vec<String>,
}

#[derive(Debug)]
pub struct Stage2Output {
    pub responses: ImputedResponses,
    pub audit: ImputationAudit,
}

pub fn run_stage2(table: &ResponseTable, axis: ImputationAxis) -> Stage2Output {
    let missing_cells = table.nan_cells();
    let (rows, undefined_participants, undefined_columns) = match axis {
        ImputationAxis::Row => impute_rows(&table.rows),
        ImputationAxis::Column => impute_columns(table),
    };

    let imputed = ResponseTable {
        dimensions: table.dimensions.clone(),
        columns: table.columns.clone(),
        rows,
    };
    let undefined_cells = imputed.nan_cells();
    let audit = ImputationAudit {
        axis,
        missing_cells,
        filled_cells: missing_cells - undefined_cells,
        undefined_cells,
        undefined_participants,
        undefined_columns,
    };

    info!(
        "imputation ({:?}): {} missing, {} filled, {} undefined",
        axis, audit.missing_cells, audit.filled_cells, audit.undefined_cells
    );
    for p in &audit.undefined_participants {
        warn!("participant {p} has no answered items; scores will be NaN");
    }
    if !audit.undefined_columns.is_empty() {
        warn!(
            "column mean undefined for: {}",
            audit.undefined_columns.join(",")
        );
    }

    Stage2Output {
        responses: ImputedResponses(imputed),
        audit,
    }
}

fn impute_rows(rows: &[Vec<f64>]) -> (Vec<Vec<f64>>, Vec<usize>, Vec<String>) {
    let mut out = Vec::with_capacity(rows.len());
    let mut undefined = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        let fill = nan_mean(row);
        if fill.is_nan() && !row.is_empty() {
            undefined.push(idx + 1);
        }
        out.push(fill_nan(row, fill));
    }
    (out, undefined, Vec::new())
}

fn impute_columns(table: &ResponseTable) -> (Vec<Vec<f64>>, Vec<usize>, Vec<String>) {
    let n_cols = table.columns.len();
    let mut fills = Vec::with_capacity(n_cols);
    let mut undefined = Vec::new();
    for col in 0..n_cols {
        let fill = nan_mean(&table.column_values(col));
        if fill.is_nan() && table.n_participants() > 0 {
            undefined.push(table.columns[col].clone());
        }
        fills.push(fill);
    }
    let rows = table
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .zip(&fills)
                .map(|(&v, &fill)| if v.is_nan() { fill } else { v })
                .collect()
        })
        .collect();
    (rows, Vec::new(), undefined)
}

fn fill_nan(values: &[f64], fill: f64) -> Vec<f64> {
    values
        .iter()
        .map(|&v| if v.is_nan() { fill } else { v })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_impute.rs"]
mod tests;
