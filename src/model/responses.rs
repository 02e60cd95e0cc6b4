use crate::model::dimensions::{DimensionSet, ITEMS_PER_DIMENSION};

/// Participant rows restricted to the expected item columns.
///
/// Column `d * 5 + (item - 1)` holds item `item` of dimension `d`, so every
/// dimension owns one contiguous block of five cells per row.
#[derive(Debug, Clone)]
pub struct ResponseTable {
    pub dimensions: DimensionSet,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl ResponseTable {
    pub fn n_participants(&self) -> usize {
        self.rows.len()
    }

    pub fn n_dimensions(&self) -> usize {
        self.dimensions.len()
    }

    pub fn column_index(dim: usize, item: usize) -> usize {
        dim * ITEMS_PER_DIMENSION + (item - 1)
    }

    /// Five item values of one dimension for one participant.
    pub fn block(&self, row: usize, dim: usize) -> &[f64] {
        let start = Self::column_index(dim, 1);
        &self.rows[row][start..start + ITEMS_PER_DIMENSION]
    }

    pub fn column_values(&self, col: usize) -> Vec<f64> {
        self.rows.iter().map(|r| r[col]).collect()
    }

    pub fn nan_cells(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.iter().filter(|v| v.is_nan()).count())
            .sum()
    }
}

/// Output of the imputer; the only input the centerer accepts.
#[derive(Debug, Clone)]
pub struct ImputedResponses(pub ResponseTable);

/// Output of the centerer. Performance items are shifted, importance is not.
#[derive(Debug, Clone)]
pub struct CenteredResponses {
    pub table: ResponseTable,
    pub offset: f64,
}
