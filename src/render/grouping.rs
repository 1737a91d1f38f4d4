use std::collections::BTreeMap;

use crate::core::{ControlResult, GroupingScope, Outcome, Resource, ResourceIndex, WorkloadResult};
use crate::render::related::resource_line;

const INDENT: &str = "  ";

/// Resources sharing one structural key, already rendered and sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceGroup {
    pub key: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeGroups {
    pub failed: Vec<ResourceGroup>,
    pub excluded: Vec<ResourceGroup>,
    pub passed: Vec<ResourceGroup>,
}

impl OutcomeGroups {
    pub fn is_empty(&self) -> bool {
        self.failed.is_empty() && self.excluded.is_empty() && self.passed.is_empty()
    }

    pub fn line_count(&self) -> usize {
        [&self.failed, &self.excluded, &self.passed]
            .into_iter()
            .flatten()
            .map(|g| g.lines.len())
            .sum()
    }
}

/// Resolves the resources a control evaluated. Unknown ids are dropped.
pub fn workload_results<'a>(
    control: &ControlResult,
    index: &ResourceIndex<'a>,
) -> Vec<WorkloadResult<'a>> {
    control
        .resources
        .iter()
        .filter_map(|r| match index.get(&r.resource_id) {
            Some(resource) => Some(WorkloadResult {
                resource,
                outcome: r.outcome,
            }),
            None => {
                log::debug!(
                    "control {}: resource {} not found, skipping",
                    control.id,
                    r.resource_id
                );
                None
            }
        })
        .collect()
}

pub fn group_key(scope: GroupingScope, resource: &Resource) -> String {
    match scope {
        GroupingScope::ByNamespace if !resource.namespace.is_empty() => {
            format!("Namespace {}", resource.namespace)
        }
        GroupingScope::ByKind => resource.kind.clone(),
        GroupingScope::ByNamespace | GroupingScope::Ungrouped => String::new(),
    }
}

/// Groups the results with the given outcome by the control's scope.
///
/// Groups come out in key order with the ungrouped (empty) key first. Lines
/// are sorted as rendered strings, so ties resolve on whatever text follows
/// the kind and name.
pub fn group_by_scope(
    results: &[WorkloadResult<'_>],
    outcome: Outcome,
    scope: GroupingScope,
) -> Vec<ResourceGroup> {
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for result in results.iter().filter(|r| r.outcome == outcome) {
        groups
            .entry(group_key(scope, result.resource))
            .or_default()
            .push(resource_line(result.resource));
    }

    groups
        .into_iter()
        .map(|(key, mut lines)| {
            lines.sort();
            ResourceGroup { key, lines }
        })
        .collect()
}

/// Failed, excluded and (verbose only) passed groups for one control.
/// Skipped controls list nothing.
pub fn group_outcomes(
    control: &ControlResult,
    index: &ResourceIndex<'_>,
    verbose: bool,
) -> OutcomeGroups {
    if control.status.is_skipped() {
        return OutcomeGroups::default();
    }

    let results = workload_results(control, index);
    OutcomeGroups {
        failed: group_by_scope(&results, Outcome::Failed, control.grouping),
        excluded: group_by_scope(&results, Outcome::Excluded, control.grouping),
        passed: if verbose {
            group_by_scope(&results, Outcome::Passed, control.grouping)
        } else {
            Vec::new()
        },
    }
}

/// Writes groups as an indented listing.
pub fn write_groups(out: &mut String, groups: &[ResourceGroup]) {
    for group in groups {
        let indent = if group.key.is_empty() {
            INDENT.to_string()
        } else {
            out.push_str(INDENT);
            out.push_str(&group.key);
            out.push('\n');
            INDENT.repeat(2)
        };
        for line in &group.lines {
            out.push_str(&indent);
            out.push_str(line);
            out.push('\n');
        }
    }
}
