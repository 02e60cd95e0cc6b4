use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::model::dimensions::DimensionSet;
use crate::model::profile::ScoringProfile;
use crate::model::scores::{DimensionSummary, ParticipantScore};
use crate::pipeline::PipelineOutput;
use crate::pipeline::stage3_center::uncenter_value;
use crate::report::json::render_summary_json;
use crate::report::text::{render_console_summary, render_report_text};
use crate::report::{DimensionRow, StatusCounts, SummaryData, ToolMeta, format_f64_6, ipa_quadrant};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct Stage8Input<'a> {
    pub output: &'a PipelineOutput,
    pub profile: &'a ScoringProfile,
    pub input_path: String,
    pub tool_name: String,
    pub tool_version: String,
    pub git_hash: Option<String>,
}

pub const PARTICIPANT_SCORES_FILE: &str = "participant_scores.tsv";
pub const PARTICIPANT_DIMENSIONS_FILE: &str = "participant_dimensions.tsv";
pub const DIMENSION_SUMMARY_FILE: &str = "dimension_summary.tsv";
pub const SUMMARY_JSON_FILE: &str = "summary.json";
pub const REPORT_TEXT_FILE: &str = "report.txt";

/// Write every report into `out_dir` and return the console summary.
pub fn write_reports(input: &Stage8Input<'_>, out_dir: &Path) -> Result<String, ReportError> {
    fs::create_dir_all(out_dir)?;

    write_participant_tsv(&input.output.participants, &out_dir.join(PARTICIPANT_SCORES_FILE))?;
    write_participant_dimensions_tsv(
        &input.output.participants,
        &input.output.dimensions,
        &out_dir.join(PARTICIPANT_DIMENSIONS_FILE),
    )?;
    write_dimension_tsv(
        &input.output.dimension_summaries,
        &out_dir.join(DIMENSION_SUMMARY_FILE),
    )?;

    let summary = build_summary(input);
    let json = render_summary_json(&summary)?;
    write_text(&out_dir.join(SUMMARY_JSON_FILE), &json)?;

    let report = render_report_text(&summary);
    write_text(&out_dir.join(REPORT_TEXT_FILE), &report)?;

    info!("reports written to {}", out_dir.display());

    Ok(render_console_summary(
        &input.output.kpi,
        input.profile.confidence_level,
        input.profile.precision,
    ))
}

pub fn build_summary(input: &Stage8Input<'_>) -> SummaryData {
    let dimensions = input
        .output
        .dimension_summaries
        .iter()
        .map(|d| DimensionRow {
            summary: d.clone(),
            performance_scale: uncenter_value(d.performance.mean, input.profile.center_offset),
            quadrant: ipa_quadrant(
                d.performance.mean,
                d.importance.mean,
                input.profile.center_offset,
            ),
        })
        .collect();

    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
            git_hash: input.git_hash.clone(),
        },
        input: input.input_path.clone(),
        profile: input.profile.clone(),
        schema: input.output.schema.clone(),
        imputation: input.output.imputation.clone(),
        participants: StatusCounts::from_scores(&input.output.participants),
        kpi: input.output.kpi.clone(),
        dimensions,
    }
}

fn write_participant_tsv(scores: &[ParticipantScore], path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "participant\tavg_performance\tkpi\tstatus")?;
    for s in scores {
        writeln!(
            w,
            "{}\t{}\t{}\t{}",
            s.participant,
            format_f64_6(s.avg_performance),
            format_f64_6(s.kpi),
            s.status.as_str()
        )?;
    }
    w.flush()
}

/// Long format: one line per participant and dimension.
fn write_participant_dimensions_tsv(
    scores: &[ParticipantScore],
    dimensions: &DimensionSet,
    path: &Path,
) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "participant\tcode\tavg_performance\tweight")?;
    for s in scores {
        for (dim, def) in dimensions.dimensions.iter().enumerate() {
            writeln!(
                w,
                "{}\t{}\t{}\t{}",
                s.participant,
                def.code,
                format_f64_6(s.dimension_avg_performance[dim]),
                format_f64_6(s.dimension_weight[dim])
            )?;
        }
    }
    w.flush()
}

fn write_dimension_tsv(summaries: &[DimensionSummary], path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "code",
        "dimension",
        "n",
        "performance",
        "performance_sd",
        "importance",
        "importance_sd",
        "ci_perf_low",
        "ci_perf_high",
        "ci_imp_low",
        "ci_imp_high",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;

    for d in summaries {
        let row = [
            d.code.clone(),
            d.name.clone(),
            d.performance.n.to_string(),
            format_f64_6(d.performance.mean),
            format_f64_6(d.performance.sd),
            format_f64_6(d.importance.mean),
            format_f64_6(d.importance.sd),
            format_f64_6(d.performance.ci.low),
            format_f64_6(d.performance.ci.high),
            format_f64_6(d.importance.ci.low),
            format_f64_6(d.importance.ci.high),
        ]
        .join("\t");
        writeln!(w, "{}", row)?;
    }
    w.flush()
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage8_report.rs"]
mod tests;
