use serde::{Deserialize, Serialize};

use crate::core::{ControlResult, Resource, ResourceCounters};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkSummary {
    pub name: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub control_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    #[serde(default)]
    pub counters: ResourceCounters,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub controls: Vec<ControlResult>,
    #[serde(default)]
    pub frameworks: Vec<FrameworkSummary>,
}

impl ReportSummary {
    /// First control carrying `id`. Ids are not guaranteed unique.
    pub fn control(&self, id: &str) -> Option<&ControlResult> {
        self.controls.iter().find(|c| c.id == id)
    }
}

/// Evaluated result set as produced by the scanner.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScanResults {
    pub summary: ReportSummary,
    #[serde(default)]
    pub resources: Vec<Resource>,
}
