use serde::{Deserialize, Serialize};
use std::fmt;

/// Status computed for a control by the evaluation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlStatus {
    Passed,
    Failed,
    Excluded,
    Skipped,
    Irrelevant,
    Error,
}

impl ControlStatus {
    pub const ALL: [ControlStatus; 6] = [
        ControlStatus::Passed,
        ControlStatus::Failed,
        ControlStatus::Excluded,
        ControlStatus::Skipped,
        ControlStatus::Irrelevant,
        ControlStatus::Error,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ControlStatus::Passed => "passed",
            ControlStatus::Failed => "failed",
            ControlStatus::Excluded => "excluded",
            ControlStatus::Skipped => "skipped",
            ControlStatus::Irrelevant => "irrelevant",
            ControlStatus::Error => "error",
        }
    }

    pub const fn is_skipped(self) -> bool {
        matches!(self, ControlStatus::Skipped)
    }

    pub const fn is_failed(self) -> bool {
        matches!(self, ControlStatus::Failed)
    }
}

impl fmt::Display for ControlStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-resource outcome of a single control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed,
    Excluded,
}
