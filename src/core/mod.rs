mod control;
mod report;
mod resource;
mod severity;
mod status;

pub use control::{ControlResult, GroupingScope, ResourceCounters, ResourceRef};
pub use report::{FrameworkSummary, ReportSummary, ScanResults};
pub use resource::{ObjectType, RelatedObject, Resource, ResourceIndex, WorkloadResult};
pub use severity::Severity;
pub use status::{ControlStatus, Outcome};
