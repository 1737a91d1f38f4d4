use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::Outcome;

/// Structural type tag of an evaluated resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Workload,
    #[default]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedObject {
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub namespace: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub object_type: ObjectType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_objects: Vec<RelatedObject>,
}

impl Resource {
    pub fn is_workload(&self) -> bool {
        self.object_type == ObjectType::Workload
    }
}

/// Lookup from resource id to the resource handle.
#[derive(Debug, Clone, Default)]
pub struct ResourceIndex<'a> {
    by_id: BTreeMap<&'a str, &'a Resource>,
}

impl<'a> ResourceIndex<'a> {
    pub fn new(resources: &'a [Resource]) -> Self {
        let by_id = resources.iter().map(|r| (r.id.as_str(), r)).collect();
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a Resource> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// A resource evaluated by one control, paired with its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadResult<'a> {
    pub resource: &'a Resource,
    pub outcome: Outcome,
}
