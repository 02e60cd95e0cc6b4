/// Items per dimension: four performance items followed by one importance item.
pub const ITEMS_PER_DIMENSION: usize = 5;
pub const PERFORMANCE_ITEMS: usize = 4;
pub const IMPORTANCE_ITEM: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct DimensionDef {
    pub code: &'static str,
    pub name: &'static str,
}

const KP_CODES: &[&str] = &["KP01", "KP02", "KP03", "KP04", "KP05", "KP06"];

const BUILTIN_DIMENSIONS: &[DimensionDef] = &[
    DimensionDef {
        code: "KP01",
        name: "Perspicuity",
    },
    DimensionDef {
        code: "KP02",
        name: "Dependability",
    },
    DimensionDef {
        code: "KP03",
        name: "Usefulness",
    },
    DimensionDef {
        code: "KP04",
        name: "Clarity",
    },
    DimensionDef {
        code: "KP05",
        name: "Attractiveness",
    },
    DimensionDef {
        code: "KP06",
        name: "Adaptability",
    },
    DimensionDef {
        code: "CA01",
        name: "Assistive Technology Compatibility",
    },
    DimensionDef {
        code: "CA02",
        name: "Customization & Adaptability",
    },
    DimensionDef {
        code: "CA03",
        name: "Accessibility Support",
    },
    DimensionDef {
        code: "UA01",
        name: "Efficiency",
    },
    DimensionDef {
        code: "UA04",
        name: "Personalization",
    },
    DimensionDef {
        code: "UA06",
        name: "Intuitive Use",
    },
    DimensionDef {
        code: "UA07",
        name: "Trustworthiness of Content",
    },
    DimensionDef {
        code: "UA08",
        name: "Quality of Content",
    },
    DimensionDef {
        code: "UA11",
        name: "Social Interaction",
    },
    DimensionDef {
        code: "UA12",
        name: "Stimulation",
    },
    DimensionDef {
        code: "UA13",
        name: "Value",
    },
    DimensionDef {
        code: "UA14",
        name: "Trust",
    },
];

pub fn builtin_dimensions() -> &'static [DimensionDef] {
    BUILTIN_DIMENSIONS
}

/// Human-readable name for a dimension code; unknown codes map to themselves.
pub fn display_name(code: &str) -> &str {
    BUILTIN_DIMENSIONS
        .iter()
        .find(|d| d.code == code)
        .map(|d| d.name)
        .unwrap_or(code)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionSelection {
    Kp,
    Ipa,
    Discover,
    Codes(Vec<String>),
}

impl DimensionSelection {
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.trim() {
            "kp" => Ok(Self::Kp),
            "ipa" => Ok(Self::Ipa),
            "discover" => Ok(Self::Discover),
            other => {
                let codes = other
                    .split(',')
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>();
                if codes.is_empty() {
                    return Err(format!("invalid dimension selection: {value:?}"));
                }
                Ok(Self::Codes(codes))
            }
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Kp => "kp".to_string(),
            Self::Ipa => "ipa".to_string(),
            Self::Discover => "discover".to_string(),
            Self::Codes(codes) => codes.join(","),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    pub code: String,
    pub name: String,
}

impl Dimension {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            name: display_name(code).to_string(),
        }
    }

    /// Column name of item `item` (1-based), e.g. `KP01_03`.
    pub fn item_column(&self, item: usize) -> String {
        format!("{}_{:02}", self.code, item)
    }

    pub fn performance_columns(&self) -> Vec<String> {
        (1..=PERFORMANCE_ITEMS)
            .map(|i| self.item_column(i))
            .collect()
    }

    pub fn importance_column(&self) -> String {
        self.item_column(IMPORTANCE_ITEM)
    }

    pub fn all_columns(&self) -> Vec<String> {
        let mut columns = self.performance_columns();
        columns.push(self.importance_column());
        columns
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionSet {
    pub dimensions: Vec<Dimension>,
}

impl DimensionSet {
    pub fn from_codes<S: AsRef<str>>(codes: &[S]) -> Self {
        let mut dimensions: Vec<Dimension> = Vec::with_capacity(codes.len());
        for code in codes {
            let code = code.as_ref();
            if dimensions.iter().any(|d| d.code == code) {
                continue;
            }
            dimensions.push(Dimension::new(code));
        }
        Self { dimensions }
    }

    pub fn kp() -> Self {
        Self::from_codes(KP_CODES)
    }

    pub fn ipa() -> Self {
        let codes = builtin_dimensions().iter().map(|d| d.code).collect::<Vec<_>>();
        Self::from_codes(&codes)
    }

    /// Dimensions whose importance column (`*_05`) is present, sorted by code.
    pub fn discover(columns: &[String]) -> Self {
        let suffix = format!("_{:02}", IMPORTANCE_ITEM);
        let mut codes = columns
            .iter()
            .filter_map(|c| c.strip_suffix(suffix.as_str()))
            .filter(|c| !c.is_empty())
            .map(|c| c.to_string())
            .collect::<Vec<_>>();
        codes.sort();
        codes.dedup();
        Self::from_codes(&codes)
    }

    pub fn resolve(selection: &DimensionSelection, columns: &[String]) -> Self {
        match selection {
            DimensionSelection::Kp => Self::kp(),
            DimensionSelection::Ipa => Self::ipa(),
            DimensionSelection::Discover => Self::discover(columns),
            DimensionSelection::Codes(codes) => Self::from_codes(codes),
        }
    }

    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// Every expected item column, dimension by dimension.
    pub fn expected_columns(&self) -> Vec<String> {
        self.dimensions
            .iter()
            .flat_map(|d| d.all_columns())
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/dimensions.rs"]
mod tests;
