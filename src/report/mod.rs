pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::profile::ScoringProfile;
use crate::model::scores::{DimensionSummary, KpiSummary, ParticipantScore, ScoreStatus};
use crate::pipeline::stage1_schema::SchemaAudit;
use crate::pipeline::stage2_impute::ImputationAudit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IpaQuadrant {
    /// High importance, high performance.
    KeepUpTheGoodWork,
    /// High importance, low performance.
    ConcentrateHere,
    /// Low importance, low performance.
    LowPriority,
    /// Low importance, high performance.
    PossibleOverkill,
    Undefined,
}

impl IpaQuadrant {
    pub fn as_str(self) -> &'static str {
        match self {
            IpaQuadrant::KeepUpTheGoodWork => "keep up the good work",
            IpaQuadrant::ConcentrateHere => "concentrate here",
            IpaQuadrant::LowPriority => "low priority",
            IpaQuadrant::PossibleOverkill => "possible overkill",
            IpaQuadrant::Undefined => "undefined",
        }
    }
}

/// Performance is split at zero (centered scale), importance at the scale midpoint.
pub fn ipa_quadrant(performance: f64, importance: f64, importance_midpoint: f64) -> IpaQuadrant {
    if performance.is_nan() || importance.is_nan() {
        return IpaQuadrant::Undefined;
    }
    match (importance >= importance_midpoint, performance >= 0.0) {
        (true, true) => IpaQuadrant::KeepUpTheGoodWork,
        (true, false) => IpaQuadrant::ConcentrateHere,
        (false, false) => IpaQuadrant::LowPriority,
        (false, true) => IpaQuadrant::PossibleOverkill,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StatusCounts {
    pub ok: usize,
    pub zero_importance: usize,
    pub undefined: usize,
}

impl StatusCounts {
    pub fn from_scores(scores: &[ParticipantScore]) -> Self {
        let mut counts = Self::default();
        for s in scores {
            match s.status {
                ScoreStatus::Ok => counts.ok += 1,
                ScoreStatus::ZeroImportance => counts.zero_importance += 1,
                ScoreStatus::Undefined => counts.undefined += 1,
            }
        }
        counts
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
    pub git_hash: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DimensionRow {
    #[serde(flatten)]
    pub summary: DimensionSummary,
    /// Mean performance shifted back onto the answer scale.
    pub performance_scale: f64,
    pub quadrant: IpaQuadrant,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub input: String,
    pub profile: ScoringProfile,
    pub schema: SchemaAudit,
    pub imputation: ImputationAudit,
    pub participants: StatusCounts,
    pub kpi: KpiSummary,
    pub dimensions: Vec<DimensionRow>,
}

/// Fixed-precision rendering; NaN stays visible as `NaN`.
pub fn format_fixed(v: f64, precision: usize) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:.*}", precision, v)
    }
}

pub fn format_f64_6(v: f64) -> String {
    format_fixed(v, 6)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
