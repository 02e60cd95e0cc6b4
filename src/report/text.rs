use crate::model::scores::KpiSummary;
use crate::report::{SummaryData, format_fixed};

pub fn render_console_summary(kpi: &KpiSummary, confidence_level: f64, precision: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Overall KPI: {}\n",
        format_fixed(kpi.overall_kpi, precision)
    ));
    out.push_str(&format!(
        "Mean KPI: {}\n",
        format_fixed(kpi.stats.mean, precision)
    ));
    out.push_str(&format!(
        "Standard Deviation: {}\n",
        format_fixed(kpi.stats.sd, precision)
    ));
    out.push_str(&format!(
        "{:.0}% Confidence Interval: ({}, {})\n",
        confidence_level * 100.0,
        format_fixed(kpi.stats.ci.low, precision),
        format_fixed(kpi.stats.ci.high, precision)
    ));
    out
}

pub fn render_report_text(data: &SummaryData) -> String {
    let precision = data.profile.precision;
    let mut out = String::new();

    out.push_str("UEQ+ KPI & Importance-Performance Report\n");
    out.push_str("========================================\n\n");

    out.push_str("1. Input\n");
    out.push_str(&format!("Input: {}\n", data.input));
    out.push_str(&format!("Profile: {}\n", data.profile.name));
    out.push_str(&format!(
        "Participants: {} (ok={}, zero_importance={}, undefined={})\n",
        data.kpi.n_participants,
        data.participants.ok,
        data.participants.zero_importance,
        data.participants.undefined
    ));
    out.push_str(&format!("Dimensions: {}\n", data.dimensions.len()));
    if !data.schema.injected_columns.is_empty() {
        out.push_str(&format!(
            "Missing columns (imputed): {}\n",
            data.schema.injected_columns.join(", ")
        ));
    }
    out.push_str(&format!(
        "Imputation: {:?} axis, {} missing cells, {} filled, {} undefined\n\n",
        data.imputation.axis,
        data.imputation.missing_cells,
        data.imputation.filled_cells,
        data.imputation.undefined_cells
    ));

    out.push_str("2. KPI\n");
    out.push_str(&render_console_summary(
        &data.kpi,
        data.profile.confidence_level,
        precision,
    ));
    if data.kpi.n_excluded > 0 {
        out.push_str(&format!(
            "Excluded (zero importance sum): {}\n",
            data.kpi.n_excluded
        ));
    }
    out.push('\n');

    out.push_str("3. Performance and importance by dimension\n");
    let width = data
        .dimensions
        .iter()
        .map(|d| d.summary.name.len())
        .max()
        .unwrap_or(0)
        .max("Dimension".len());
    out.push_str(&format!(
        "{:<width$}  {:>11}  {:>7}  {:>10}  {}\n",
        "Dimension", "Performance", "Scale", "Importance", "Quadrant"
    ));
    for row in &data.dimensions {
        out.push_str(&format!(
            "{:<width$}  {:>11}  {:>7}  {:>10}  {}\n",
            row.summary.name,
            format_fixed(row.summary.performance.mean, 2),
            format_fixed(row.performance_scale, 2),
            format_fixed(row.summary.importance.mean, 2),
            row.quadrant.as_str()
        ));
    }

    out
}
