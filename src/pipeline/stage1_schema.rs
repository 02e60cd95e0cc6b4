use serde::Serialize;
use tracing::{debug, warn};

use crate::input::RawTable;
use crate::model::dimensions::DimensionSet;
use crate::model::responses::ResponseTable;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SchemaAudit {
    pub expected_columns: usize,
    /// Expected columns absent from the input, filled with NaN.
    pub injected_columns: Vec<String>,
    /// Input columns that are not dimension items.
    pub ignored_columns: Vec<String>,
}

#[derive(Debug)]
pub struct Stage1Output {
    pub table: ResponseTable,
    pub audit: SchemaAudit,
}

/// Project the raw table onto the expected item columns, injecting absent ones as NaN.
pub fn run_stage1(raw: &RawTable, dimensions: &DimensionSet) -> Stage1Output {
    let expected = dimensions.expected_columns();
    let sources = expected
        .iter()
        .map(|name| raw.column_index(name))
        .collect::<Vec<_>>();

    let injected_columns = expected
        .iter()
        .zip(&sources)
        .filter(|(_, src)| src.is_none())
        .map(|(name, _)| name.clone())
        .collect::<Vec<_>>();
    let ignored_columns = raw
        .columns
        .iter()
        .filter(|c| !expected.contains(c))
        .cloned()
        .collect::<Vec<_>>();

    if !injected_columns.is_empty() {
        warn!(
            "{} expected column(s) missing from input, treated as missing values: {}",
            injected_columns.len(),
            injected_columns.join(",")
        );
    }
    if !ignored_columns.is_empty() {
        debug!("ignoring {} non-item column(s)", ignored_columns.len());
    }

    let mut rows = Vec::with_capacity(raw.n_rows());
    for row in 0..raw.n_rows() {
        let values = sources
            .iter()
            .map(|src| match src {
                Some(col) => raw.value(row, *col),
                None => f64::NAN,
            })
            .collect::<Vec<_>>();
        rows.push(values);
    }

    Stage1Output {
        table: ResponseTable {
            dimensions: dimensions.clone(),
            columns: expected.clone(),
            rows,
        },
        audit: SchemaAudit {
            expected_columns: expected.len(),
            injected_columns,
            ignored_columns,
        },
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_schema.rs"]
mod tests;
