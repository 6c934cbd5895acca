use serde_json::Value;
use tracing::debug;

use crate::descriptor::{ChartDescriptor, ChartKind};
use crate::dom::Surface;
use crate::error::{MountError, MountResult};

use super::{Adapter, VisualOptions};

/// The functional drawing backend.
///
/// Keeps a fully configured chart model per surface: validated payload plus
/// the visual options derived from the descriptor's kind. Stateless itself;
/// all per-chart state lives in the handle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CanvasAdapter;

/// Live chart state owned by the canvas backend.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasChart {
    surface_id: Option<String>,
    kind: ChartKind,
    data: Value,
    options: VisualOptions,
    destroyed: bool,
}

impl CanvasChart {
    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn data(&self) -> &Value {
        &self.data
    }

    #[must_use]
    pub fn options(&self) -> &VisualOptions {
        &self.options
    }

    #[must_use]
    pub fn surface_id(&self) -> Option<&str> {
        self.surface_id.as_deref()
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl Adapter for CanvasAdapter {
    type Handle = CanvasChart;

    fn create(&self, surface: &Surface, descriptor: &ChartDescriptor) -> MountResult<CanvasChart> {
        let data = validated_data(descriptor)?;
        debug!(kind = %descriptor.kind, "creating canvas chart");
        Ok(CanvasChart {
            surface_id: surface.id().map(str::to_owned),
            kind: descriptor.kind,
            data,
            options: VisualOptions::for_kind(descriptor.kind),
            destroyed: false,
        })
    }

    fn update(&self, handle: &mut CanvasChart, descriptor: &ChartDescriptor) -> MountResult<()> {
        let data = validated_data(descriptor)?;
        handle.kind = descriptor.kind;
        handle.data = data;
        handle.options = VisualOptions::for_kind(descriptor.kind);
        Ok(())
    }

    fn destroy(&self, handle: &mut CanvasChart) {
        if handle.destroyed {
            return;
        }
        handle.data = Value::Null;
        handle.destroyed = true;
    }
}

/// Checks the payload against the backend's data contract and extracts the
/// drawable part.
fn validated_data(descriptor: &ChartDescriptor) -> MountResult<Value> {
    let data = descriptor
        .payload
        .get("data")
        .filter(|value| value.is_object())
        .ok_or(MountError::Configuration {
            kind: descriptor.kind,
            field: "data",
        })?;

    let datasets = data.get("datasets").ok_or(MountError::Configuration {
        kind: descriptor.kind,
        field: "data.datasets",
    })?;
    if !datasets.is_array() {
        return Err(MountError::Configuration {
            kind: descriptor.kind,
            field: "data.datasets",
        });
    }

    Ok(data.clone())
}
