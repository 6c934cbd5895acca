//! Scanner over the host document.
//!
//! Scans are re-evaluated fresh on every call because the container set
//! changes between lifecycle signals; nothing here is cached.

use serde_json::Value;

use crate::descriptor::{ChartDescriptor, ChartKind};
use crate::dom::{Container, ContainerId, Document};
use crate::error::{MountError, MountResult};

/// Every chart container in document order, regardless of marker state.
/// Used by the full re-render paths (initial load, backend switch).
#[must_use]
pub fn all_containers(doc: &Document) -> Vec<ContainerId> {
    doc.ids().collect()
}

/// Containers whose rendered marker is not set, i.e. the ones an incremental
/// patch introduced since the last pass.
#[must_use]
pub fn creatable_containers(doc: &Document) -> Vec<ContainerId> {
    doc.containers()
        .filter(|(_, container)| !container.is_rendered())
        .map(|(id, _)| id)
        .collect()
}

/// Parses a container's declarative attributes into a descriptor.
///
/// An unknown kind name or unparseable payload text is a
/// `MalformedDescriptor`; the caller logs it and moves on to the next
/// container, so one bad container never aborts the scan of the rest.
pub fn extract_descriptor(container: &Container) -> MountResult<ChartDescriptor> {
    let kind = ChartKind::parse(container.chart_type()).ok_or_else(|| {
        MountError::MalformedDescriptor {
            reason: format!("unknown chart type '{}'", container.chart_type()),
        }
    })?;

    let payload: Value =
        serde_json::from_str(container.chart_data()).map_err(|err| {
            MountError::MalformedDescriptor {
                reason: format!("chart data is not valid JSON: {err}"),
            }
        })?;

    Ok(ChartDescriptor::new(kind, payload))
}
