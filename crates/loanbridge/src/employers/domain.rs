use serde::{Deserialize, Serialize};

/// Coarse employer risk tier, A being the lowest perceived credit risk.
///
/// The tier is assigned per classification call, surfaced next to the
/// employer field, and recorded on the captured lead; it is never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EmployerCategory {
    A,
    B,
    C,
    D,
}

impl EmployerCategory {
    pub const fn label(self) -> &'static str {
        match self {
            EmployerCategory::A => "A",
            EmployerCategory::B => "B",
            EmployerCategory::C => "C",
            EmployerCategory::D => "D",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            EmployerCategory::A => "Top Tier (MNC/Listed Companies)",
            EmployerCategory::B => "Mid Tier (Large Private Companies)",
            EmployerCategory::C => "Regular (SMEs/Government)",
            EmployerCategory::D => "Others (Small Business/Self-employed)",
        }
    }

    /// Lenient parse for imported data. Anything unrecognized lands in D,
    /// the most conservative tier.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "A" => EmployerCategory::A,
            "B" => EmployerCategory::B,
            "C" => EmployerCategory::C,
            _ => EmployerCategory::D,
        }
    }
}

/// Classification output: the tier plus the human-readable rationale
/// surfaced next to the employer field in the funnel UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMatch {
    pub category: EmployerCategory,
    pub description: String,
}

impl CategoryMatch {
    pub(crate) fn tier(category: EmployerCategory) -> Self {
        Self {
            category,
            description: category.description().to_string(),
        }
    }
}

/// One row of bulk-import input, already decoded from its tabular source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkEntry {
    pub name: String,
    pub category: EmployerCategory,
}

/// Outcome counters for a bulk import run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportStats {
    pub total: usize,
    pub added: usize,
    pub skipped: usize,
}
