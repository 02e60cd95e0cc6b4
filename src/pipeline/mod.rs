pub mod stage1_schema;
pub mod stage2_impute;
pub mod stage3_center;
pub mod stage4_aggregate;
pub mod stage5_weights;
pub mod stage6_kpi;
pub mod stage7_intervals;
pub mod stage8_report;

use thiserror::Error;
use tracing::info;

use crate::input::RawTable;
use crate::model::dimensions::DimensionSet;
use crate::model::profile::ScoringProfile;
use crate::model::scores::{DimensionSummary, KpiSummary, ParticipantScore};
use crate::pipeline::stage1_schema::{SchemaAudit, run_stage1};
use crate::pipeline::stage2_impute::{ImputationAudit, run_stage2};
use crate::pipeline::stage3_center::run_stage3;
use crate::pipeline::stage4_aggregate::run_stage4;
use crate::pipeline::stage5_weights::run_stage5;
use crate::pipeline::stage6_kpi::{Stage6Inputs, run_stage6};
use crate::pipeline::stage7_intervals::{Stage7Inputs, run_stage7};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("input table has no participant rows")]
    NoParticipants,
    #[error("no dimensions selected ({0})")]
    NoDimensions(String),
}

#[derive(Debug)]
pub struct PipelineOutput {
    pub dimensions: DimensionSet,
    pub schema: SchemaAudit,
    pub imputation: ImputationAudit,
    pub participants: Vec<ParticipantScore>,
    pub dimension_summaries: Vec<DimensionSummary>,
    pub kpi: KpiSummary,
}

/// Run stages 1..7 over an in-memory table.
pub fn run_pipeline(
    raw: &RawTable,
    profile: &ScoringProfile,
) -> Result<PipelineOutput, PipelineError> {
    if raw.n_rows() == 0 {
        return Err(PipelineError::NoParticipants);
    }
    let dimensions = DimensionSet::resolve(&profile.dimensions, &raw.columns);
    if dimensions.is_empty() {
        return Err(PipelineError::NoDimensions(profile.dimensions.label()));
    }
    info!(
        "scoring {} participants over {} dimensions (profile {})",
        raw.n_rows(),
        dimensions.len(),
        profile.name
    );

    let stage1 = run_stage1(raw, &dimensions);
    let stage2 = run_stage2(&stage1.table, profile.imputation);
    let centered = run_stage3(stage2.responses, profile.center_offset);
    let aggregates = run_stage4(&centered);
    let weights = run_stage5(&aggregates);
    let stage6 = run_stage6(&Stage6Inputs {
        aggregates: &aggregates,
        weights: &weights,
        policy: profile.zero_importance,
    });
    let stage7 = run_stage7(&Stage7Inputs {
        dimensions: &dimensions,
        aggregates: &aggregates,
        kpi: &stage6,
        confidence_level: profile.confidence_level,
    });

    Ok(PipelineOutput {
        dimensions,
        schema: stage1.audit,
        imputation: stage2.audit,
        participants: stage6.scores,
        dimension_summaries: stage7.dimensions,
        kpi: stage7.kpi,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
