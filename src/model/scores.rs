use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStatus {
    Ok,
    /// Importance items sum to zero; weights are undefined.
    ZeroImportance,
    /// Missing data propagated into the KPI.
    Undefined,
}

impl ScoreStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ScoreStatus::Ok => "ok",
            ScoreStatus::ZeroImportance => "zero_importance",
            ScoreStatus::Undefined => "undefined",
        }
    }
}

/// Per-participant means, one slot per dimension in schema order.
#[derive(Debug, Clone)]
pub struct DimensionAggregates {
    pub avg_performance: Vec<f64>,
    pub importance: Vec<f64>,
    /// Mean over every performance item of every dimension.
    pub overall_performance: f64,
}

#[derive(Debug, Clone)]
pub struct ImportanceWeights {
    pub weights: Vec<f64>,
    pub importance_sum: f64,
    pub zero_sum: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticipantScore {
    /// 1-based position in the input table.
    pub participant: usize,
    pub avg_performance: f64,
    pub kpi: f64,
    pub status: ScoreStatus,
    #[serde(skip)]
    pub dimension_avg_performance: Vec<f64>,
    #[serde(skip)]
    pub dimension_weight: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    pub low: f64,
    pub high: f64,
}

impl ConfidenceInterval {
    pub fn undefined() -> Self {
        Self {
            low: f64::NAN,
            high: f64::NAN,
        }
    }

    pub fn is_defined(&self) -> bool {
        self.low.is_finite() && self.high.is_finite()
    }

    pub fn half_width(&self) -> f64 {
        (self.high - self.low) / 2.0
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SampleStats {
    pub n: usize,
    pub mean: f64,
    pub sd: f64,
    pub ci: ConfidenceInterval,
}

#[derive(Debug, Clone, Serialize)]
pub struct DimensionSummary {
    pub code: String,
    pub name: String,
    pub performance: SampleStats,
    pub importance: SampleStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct KpiSummary {
    pub overall_kpi: f64,
    pub n_participants: usize,
    pub n_included: usize,
    pub n_excluded: usize,
    pub stats: SampleStats,
}
