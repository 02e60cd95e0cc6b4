mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;

use crate::input::{InputError, load_table};
use crate::model::dimensions::DimensionSelection;
use crate::model::profile::{ImputationAxis, ScoringProfile, ZeroImportancePolicy};
use crate::pipeline::stage8_report::{ReportError, Stage8Input, write_reports};
use crate::pipeline::{PipelineError, run_pipeline};

/// UEQ+ KPI scoring and importance-performance analysis.
#[derive(Debug, Parser)]
#[command(name = "kira-ueqkpi", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a questionnaire table and write the reports
    Run(RunArgs),
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// Questionnaire table (.csv, .tsv, optionally .gz)
    #[arg(long)]
    input: PathBuf,

    /// Output directory
    #[arg(long)]
    out: PathBuf,

    /// Scoring preset
    #[arg(long, value_enum, default_value_t = ProfileArg::Kp)]
    profile: ProfileArg,

    /// Dimension set: kp, ipa, discover, or a comma-separated code list
    #[arg(long)]
    dimensions: Option<String>,

    /// Axis used to fill missing answers
    #[arg(long, value_enum)]
    imputation: Option<ImputationArg>,

    /// Value subtracted from performance items (Likert midpoint)
    #[arg(long)]
    offset: Option<f64>,

    /// Handling of participants whose importance ratings sum to zero
    #[arg(long, value_enum)]
    zero_importance: Option<ZeroImportanceArg>,

    /// Decimal places in the console summary
    #[arg(long)]
    precision: Option<usize>,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ProfileArg {
    Kp,
    Ipa,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ImputationArg {
    Row,
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ZeroImportanceArg {
    Propagate,
    Exclude,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

fn main() {
    let cli = Cli::parse();
    let Command::Run(args) = &cli.command;
    logging::init(&args.log_level);
    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(args: &RunArgs) -> Result<(), CliError> {
    let profile = resolve_profile(args)?;
    let table = load_table(&args.input)?;
    let output = run_pipeline(&table, &profile)?;

    let input = Stage8Input {
        output: &output,
        profile: &profile,
        input_path: args.input.display().to_string(),
        tool_name: "kira-ueqkpi".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        git_hash: read_git_hash(&PathBuf::from(".")),
    };
    let console = write_reports(&input, &args.out)?;
    print!("{console}");

    Ok(())
}

fn resolve_profile(args: &RunArgs) -> Result<ScoringProfile, CliError> {
    let mut profile = match args.profile {
        ProfileArg::Kp => ScoringProfile::kp_v1(),
        ProfileArg::Ipa => ScoringProfile::ipa_v1(),
    };
    if let Some(dims) = &args.dimensions {
        profile.dimensions = DimensionSelection::parse(dims).map_err(CliError::InvalidArgument)?;
    }
    if let Some(axis) = args.imputation {
        profile.imputation = match axis {
            ImputationArg::Row => ImputationAxis::Row,
            ImputationArg::Column => ImputationAxis::Column,
        };
    }
    if let Some(offset) = args.offset {
        if !offset.is_finite() {
            return Err(CliError::InvalidArgument(format!(
                "--offset must be finite, got {offset}"
            )));
        }
        profile.center_offset = offset;
    }
    if let Some(policy) = args.zero_importance {
        profile.zero_importance = match policy {
            ZeroImportanceArg::Propagate => ZeroImportancePolicy::Propagate,
            ZeroImportanceArg::Exclude => ZeroImportancePolicy::Exclude,
        };
    }
    if let Some(precision) = args.precision {
        profile.precision = precision;
    }
    Ok(profile)
}

fn read_git_hash(repo_root: &Path) -> Option<String> {
    let head = repo_root.join(".git/HEAD");
    let content = std::fs::read_to_string(head).ok()?;
    if let Some(ref_line) = content.strip_prefix("ref: ") {
        let ref_path = repo_root.join(".git").join(ref_line.trim());
        return std::fs::read_to_string(ref_path)
            .ok()
            .map(|s| s.trim().to_string());
    }
    Some(content.trim().to_string())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
