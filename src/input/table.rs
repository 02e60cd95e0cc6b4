use std::collections::HashSet;
use std::io::Read;

use csv::{ReaderBuilder, Trim};
use tracing::{debug, warn};

use crate::input::{Delimiter, InputError};

/// Numeric table as read from disk; unparseable or empty cells are NaN.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Self {
        Self { columns, rows }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(f64::NAN)
    }
}

pub fn parse_cell(field: &str) -> f64 {
    let field = field.trim();
    if field.is_empty() {
        return f64::NAN;
    }
    match field {
        "NA" | "N/A" | "NaN" | "nan" | "null" => f64::NAN,
        other => other.parse::<f64>().unwrap_or(f64::NAN),
    }
}

pub fn read_table<R: Read>(reader: R, delimiter: Delimiter) -> Result<RawTable, InputError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter.byte())
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let header = rdr.headers()?.clone();
    if header.is_empty() || header.iter().all(|h| h.trim().is_empty()) {
        return Err(InputError::InvalidInput("table header is empty".to_string()));
    }

    let mut columns = Vec::with_capacity(header.len());
    let mut keep = Vec::with_capacity(header.len());
    let mut seen: HashSet<String> = HashSet::new();
    for (idx, name) in header.iter().enumerate() {
        let name = name.trim().to_string();
        if seen.contains(&name) {
            warn!("duplicate column {name:?} at position {}; keeping first", idx + 1);
            keep.push(false);
            continue;
        }
        seen.insert(name.clone());
        columns.push(name);
        keep.push(true);
    }

    let mut rows = Vec::new();
    for (line_no, record) in rdr.records().enumerate() {
        let record = record?;
        if record.iter().all(|f| f.trim().is_empty()) {
            debug!("skipping blank line {}", line_no + 2);
            continue;
        }
        let mut row = Vec::with_capacity(columns.len());
        for (idx, &kept) in keep.iter().enumerate() {
            if !kept {
                continue;
            }
            row.push(record.get(idx).map(parse_cell).unwrap_or(f64::NAN));
        }
        rows.push(row);
    }

    Ok(RawTable::new(columns, rows))
}
