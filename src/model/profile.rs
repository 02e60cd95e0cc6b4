use serde::Serialize;

use crate::model::dimensions::DimensionSelection;
use crate::pipeline::stage3_center::LIKERT7_MIDPOINT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImputationAxis {
    /// Missing cells take the participant's own mean over the expected items.
    Row,
    /// Missing cells take the column mean over all participants.
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroImportancePolicy {
    /// KPI is NaN and the participant still counts toward the overall KPI.
    Propagate,
    /// KPI is NaN and the participant is left out of the overall KPI.
    Exclude,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoringProfile {
    pub name: &'static str,
    #[serde(serialize_with = "serialize_selection")]
    pub dimensions: DimensionSelection,
    pub imputation: ImputationAxis,
    pub center_offset: f64,
    pub zero_importance: ZeroImportancePolicy,
    pub confidence_level: f64,
    pub precision: usize,
}

impl ScoringProfile {
    /// Participant KPI report over KP01..KP06 with row-mean imputation.
    pub fn kp_v1() -> Self {
        Self {
            name: "kp_v1",
            dimensions: DimensionSelection::Kp,
            imputation: ImputationAxis::Row,
            center_offset: LIKERT7_MIDPOINT,
            zero_importance: ZeroImportancePolicy::Exclude,
            confidence_level: 0.95,
            precision: 4,
        }
    }

    /// Importance-performance analysis over every dimension found in the input.
    pub fn ipa_v1() -> Self {
        let mut base = Self::kp_v1();
        base.name = "ipa_v1";
        base.dimensions = DimensionSelection::Discover;
        base.imputation = ImputationAxis::Column;
        base.precision = 2;
        base
    }
}

fn serialize_selection<S: serde::Serializer>(
    selection: &DimensionSelection,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&selection.label())
}
