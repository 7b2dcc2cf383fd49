use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HustleType {
    Rideshare,
    Freelance,
    Tutoring,
    TaskBased,
    Creative,
    Other,
}

impl HustleType {
    pub fn all() -> &'static [HustleType] {
        &[
            HustleType::Rideshare,
            HustleType::Freelance,
            HustleType::Tutoring,
            HustleType::TaskBased,
            HustleType::Creative,
            HustleType::Other,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rideshare => "rideshare",
            Self::Freelance => "freelance",
            Self::Tutoring => "tutoring",
            Self::TaskBased => "taskbased",
            Self::Creative => "creative",
            Self::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "rideshare" => Some(Self::Rideshare),
            "freelance" => Some(Self::Freelance),
            "tutoring" => Some(Self::Tutoring),
            "taskbased" => Some(Self::TaskBased),
            "creative" => Some(Self::Creative),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Rideshare => "Rideshare / Delivery",
            Self::Freelance => "Freelance Services",
            Self::Tutoring => "Tutoring / Teaching",
            Self::TaskBased => "Task-Based (TaskRabbit, etc.)",
            Self::Creative => "Creative Work (Design, Writing)",
            Self::Other => "Other",
        }
    }

    /// Typical hourly rate range shown next to the selection.
    pub fn rate_range(&self) -> &'static str {
        match self {
            Self::Rideshare => "$15-30/hr",
            Self::Freelance => "$25-75/hr",
            Self::Tutoring => "$20-50/hr",
            Self::TaskBased => "$18-35/hr",
            Self::Creative => "$30-80/hr",
            Self::Other => "Varies",
        }
    }

    pub fn info(&self) -> HustleTypeInfo {
        HustleTypeInfo {
            tag: self.as_str(),
            label: self.label(),
            rate_range: self.rate_range(),
        }
    }
}

/// Display metadata for one hustle type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HustleTypeInfo {
    pub tag: &'static str,
    pub label: &'static str,
    pub rate_range: &'static str,
}

/// Looks up the display label and rate range for a hustle type tag.
///
/// Matching is exact. An unrecognized tag returns `None`; callers show no
/// rate hint in that case.
///
/// ```
/// use hustle_core::lookup_hustle_label;
///
/// let info = lookup_hustle_label("tutoring").unwrap();
/// assert_eq!(info.rate_range, "$20-50/hr");
/// assert!(lookup_hustle_label("dogwalking").is_none());
/// ```
pub fn lookup_hustle_label(tag: &str) -> Option<HustleTypeInfo> {
    HustleType::parse(tag).map(|t| t.info())
}
