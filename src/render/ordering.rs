use std::collections::BTreeMap;

use crate::core::{ControlResult, Severity};

/// Controls sharing one severity level, sorted by name then id.
#[derive(Debug, Clone, PartialEq)]
pub struct SeverityBucket<'a> {
    pub severity: Severity,
    pub controls: Vec<&'a ControlResult>,
}

impl SeverityBucket<'_> {
    pub fn control_ids(&self) -> Vec<&str> {
        self.controls.iter().map(|c| c.id.as_str()).collect()
    }
}

/// Buckets controls by severity, lowest severity first.
///
/// Buckets borrow the controls themselves, so two controls sharing an id
/// are both kept. Callers render the buckets in reverse so the most severe
/// findings come first regardless of input order.
pub fn severity_buckets(controls: &[ControlResult]) -> Vec<SeverityBucket<'_>> {
    let mut by_severity: BTreeMap<Severity, Vec<&ControlResult>> = BTreeMap::new();
    for control in controls {
        by_severity.entry(control.severity).or_default().push(control);
    }

    by_severity
        .into_iter()
        .map(|(severity, mut entries)| {
            entries.sort_by(|a, b| (&a.name, &a.id).cmp(&(&b.name, &b.id)));
            SeverityBucket {
                severity,
                controls: entries,
            }
        })
        .collect()
}

/// Controls in display order: highest severity first.
pub fn display_order<'a>(
    buckets: &[SeverityBucket<'a>],
) -> impl Iterator<Item = &'a ControlResult> {
    buckets
        .iter()
        .rev()
        .flat_map(|b| b.controls.iter().copied())
}
