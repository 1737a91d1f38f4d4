use std::collections::BTreeMap;

use crate::core::{Outcome, ReportSummary, ResourceIndex};
use crate::render::ordering::{display_order, severity_buckets};
use crate::render::related::resource_line;
use crate::render::table::{Align, TextTable};

const HEADERS: [&str; 4] = ["RESOURCE", "NAMESPACE", "FAILED CONTROLS", "EXCLUDED CONTROLS"];

#[derive(Debug, Default)]
struct ResourceFindings<'a> {
    failed: Vec<&'a str>,
    excluded: Vec<&'a str>,
}

/// Per-resource table: one row per resource with a failed or excluded
/// control, ordered by namespace, kind and name.
pub fn resource_table(summary: &ReportSummary, index: &ResourceIndex<'_>) -> TextTable {
    let buckets = severity_buckets(&summary.controls);

    let mut by_resource: BTreeMap<(&str, &str, &str, &str), ResourceFindings<'_>> =
        BTreeMap::new();
    for control in display_order(&buckets) {
        if control.status.is_skipped() {
            continue;
        }
        for r in &control.resources {
            let Some(resource) = index.get(&r.resource_id) else {
                continue;
            };
            let key = (
                resource.namespace.as_str(),
                resource.kind.as_str(),
                resource.name.as_str(),
                resource.id.as_str(),
            );
            match r.outcome {
                Outcome::Failed => by_resource
                    .entry(key)
                    .or_default()
                    .failed
                    .push(control.name.as_str()),
                Outcome::Excluded => by_resource
                    .entry(key)
                    .or_default()
                    .excluded
                    .push(control.name.as_str()),
                Outcome::Passed => {}
            }
        }
    }

    let mut table = TextTable::new(&HEADERS, &[Align::Left; 4]);
    for ((_, _, _, id), findings) in by_resource {
        let Some(resource) = index.get(id) else {
            continue;
        };
        table.push_row(vec![
            resource_line(resource),
            resource.namespace.clone(),
            findings.failed.join(", "),
            findings.excluded.join(", "),
        ]);
    }
    table
}
