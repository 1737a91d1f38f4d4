use serde::{Deserialize, Serialize};

use crate::core::{ControlStatus, Outcome, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceCounters {
    #[serde(default)]
    pub passed: u64,
    #[serde(default)]
    pub failed: u64,
    #[serde(default)]
    pub excluded: u64,
    #[serde(default)]
    pub all: u64,
}

impl ResourceCounters {
    /// Skipped, irrelevant and errored resources only ever add to `all`.
    pub fn is_consistent(&self) -> bool {
        self.passed
            .saturating_add(self.failed)
            .saturating_add(self.excluded)
            <= self.all
    }
}

/// How a control's resources are grouped in the verbose listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingScope {
    ByNamespace,
    ByKind,
    #[default]
    Ungrouped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub resource_id: String,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlResult {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub remediation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_key: Option<String>,
    pub severity: Severity,
    pub status: ControlStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_info: Option<String>,
    #[serde(default)]
    pub counters: ResourceCounters,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub grouping: GroupingScope,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ResourceRef>,
}

impl ControlResult {
    /// Key used to build the documentation link; falls back to the id.
    pub fn doc_key(&self) -> &str {
        self.doc_key.as_deref().unwrap_or(&self.id)
    }

    /// Free-text reason, `None` when absent or blank.
    pub fn reason(&self) -> Option<&str> {
        self.status_info
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
