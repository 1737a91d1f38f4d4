use crate::core::Resource;

/// Bracketed list of the objects related to a workload, e.g.
/// `[Namespace - a, Pod - x, ReplicaSet - y]`.
///
/// Only the first related object contributes a namespace. Non-workload
/// resources and workloads without related objects yield an empty string.
pub fn related_objects_suffix(resource: &Resource) -> String {
    if !resource.is_workload() {
        return String::new();
    }

    let mut parts = Vec::with_capacity(resource.related_objects.len() + 1);
    for (i, related) in resource.related_objects.iter().enumerate() {
        if i == 0 && !related.namespace.is_empty() {
            parts.push(format!("Namespace - {}", related.namespace));
        }
        parts.push(format!("{} - {}", related.kind, related.name));
    }

    if parts.is_empty() {
        return String::new();
    }
    format!("[{}]", parts.join(", "))
}

/// Listing text for one resource: `<kind> - <name>` plus the related suffix.
pub fn resource_line(resource: &Resource) -> String {
    let suffix = related_objects_suffix(resource);
    if suffix.is_empty() {
        format!("{} - {}", resource.kind, resource.name)
    } else {
        format!("{} - {} {suffix}", resource.kind, resource.name)
    }
}
