use crate::core::{
    ControlResult, ControlStatus, FrameworkSummary, GroupingScope, ObjectType, Outcome,
    RelatedObject, ReportSummary, Resource, ResourceCounters, ResourceRef, ScanResults, Severity,
};

pub fn control(id: &str, name: &str, severity: Severity, status: ControlStatus) -> ControlResult {
    ControlResult {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} description"),
        remediation: format!("{name} remediation"),
        doc_key: None,
        severity,
        status,
        status_info: None,
        counters: ResourceCounters::default(),
        score: 0.0,
        grouping: GroupingScope::Ungrouped,
        resources: vec![],
    }
}

pub fn counters(passed: u64, failed: u64, excluded: u64, all: u64) -> ResourceCounters {
    ResourceCounters {
        passed,
        failed,
        excluded,
        all,
    }
}

pub fn evaluated(control: &mut ControlResult, resource_id: &str, outcome: Outcome) {
    control.resources.push(ResourceRef {
        resource_id: resource_id.to_string(),
        outcome,
    });
}

pub fn resource(id: &str, kind: &str, name: &str, namespace: &str) -> Resource {
    Resource {
        id: id.to_string(),
        kind: kind.to_string(),
        name: name.to_string(),
        namespace: namespace.to_string(),
        object_type: ObjectType::Other,
        related_objects: vec![],
    }
}

pub fn related(namespace: &str, kind: &str, name: &str) -> RelatedObject {
    RelatedObject {
        kind: kind.to_string(),
        name: name.to_string(),
        namespace: namespace.to_string(),
    }
}

pub fn framework(name: &str, score: f64) -> FrameworkSummary {
    FrameworkSummary {
        name: name.to_string(),
        score,
        control_ids: vec![],
    }
}

pub fn results(controls: Vec<ControlResult>, resources: Vec<Resource>) -> ScanResults {
    let mut totals = ResourceCounters::default();
    for c in &controls {
        totals.passed += c.counters.passed;
        totals.failed += c.counters.failed;
        totals.excluded += c.counters.excluded;
        totals.all += c.counters.all;
    }
    ScanResults {
        summary: ReportSummary {
            counters: totals,
            score: 0.0,
            controls,
            frameworks: vec![],
        },
        resources,
    }
}
