mod canvas;
mod null;
mod options;

pub use canvas::{CanvasAdapter, CanvasChart};
pub use null::{NullAdapter, NullChart};
pub use options::{
    AxisOptions, ElementOptions, LegendOptions, LegendPosition, TooltipOptions, VisualOptions,
};

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::descriptor::ChartDescriptor;
use crate::dom::Surface;
use crate::error::MountResult;

/// Contract implemented by every drawing backend.
///
/// `create` never panics for a well-formed descriptor; semantically invalid
/// payloads fail with `MountError::Configuration` naming the offending
/// field. `update` replaces visual content in place, preserving the handle's
/// identity. `destroy` is idempotent.
pub trait Adapter {
    type Handle;

    fn create(&self, surface: &Surface, descriptor: &ChartDescriptor) -> MountResult<Self::Handle>;

    fn update(&self, handle: &mut Self::Handle, descriptor: &ChartDescriptor) -> MountResult<()>;

    fn destroy(&self, handle: &mut Self::Handle);
}

/// Closed set of available drawing backends.
///
/// Selection from external string input goes through `from_name`, the single
/// runtime guard for unregistered names; everywhere else backend dispatch is
/// an exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Canvas,
    Null,
}

impl BackendKind {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "canvas" => Some(Self::Canvas),
            "null" => Some(Self::Null),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Canvas => "canvas",
            Self::Null => "null",
        }
    }

    #[must_use]
    pub const fn adapter(self) -> Backend {
        match self {
            Self::Canvas => Backend::Canvas(CanvasAdapter),
            Self::Null => Backend::Null(NullAdapter),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sum type pairing each backend variant with its concrete adapter.
#[derive(Debug, Clone, Copy)]
pub enum Backend {
    Canvas(CanvasAdapter),
    Null(NullAdapter),
}

impl Backend {
    #[must_use]
    pub const fn kind(&self) -> BackendKind {
        match self {
            Self::Canvas(_) => BackendKind::Canvas,
            Self::Null(_) => BackendKind::Null,
        }
    }

    pub fn create(
        &self,
        surface: &Surface,
        descriptor: &ChartDescriptor,
    ) -> MountResult<ChartHandle> {
        match self {
            Self::Canvas(adapter) => adapter.create(surface, descriptor).map(ChartHandle::Canvas),
            Self::Null(adapter) => adapter.create(surface, descriptor).map(ChartHandle::Null),
        }
    }

    pub fn update(&self, handle: &mut ChartHandle, descriptor: &ChartDescriptor) -> MountResult<()> {
        match (self, handle) {
            (Self::Canvas(adapter), ChartHandle::Canvas(chart)) => adapter.update(chart, descriptor),
            (Self::Null(adapter), ChartHandle::Null(chart)) => adapter.update(chart, descriptor),
            (_, handle) => {
                // The registry pairs every handle with its backend kind, so
                // this arm is unreachable through the orchestrator.
                warn!(
                    backend = %self.kind(),
                    handle = %handle.backend_kind(),
                    "refusing to update a handle owned by another backend"
                );
                Ok(())
            }
        }
    }

    pub fn destroy(&self, handle: &mut ChartHandle) {
        match (self, handle) {
            (Self::Canvas(adapter), ChartHandle::Canvas(chart)) => adapter.destroy(chart),
            (Self::Null(adapter), ChartHandle::Null(chart)) => adapter.destroy(chart),
            (_, handle) => {
                warn!(
                    backend = %self.kind(),
                    handle = %handle.backend_kind(),
                    "refusing to destroy a handle owned by another backend"
                );
            }
        }
    }
}

/// Opaque live chart object produced by an adapter's `create`.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartHandle {
    Canvas(CanvasChart),
    Null(NullChart),
}

impl ChartHandle {
    #[must_use]
    pub const fn backend_kind(&self) -> BackendKind {
        match self {
            Self::Canvas(_) => BackendKind::Canvas,
            Self::Null(_) => BackendKind::Null,
        }
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        match self {
            Self::Canvas(chart) => chart.is_destroyed(),
            Self::Null(chart) => chart.is_destroyed(),
        }
    }
}
