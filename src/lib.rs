//! chart-mount: chart instance lifecycle for server-rendered pages.
//!
//! The hard problem this crate solves is not chart math but lifecycle
//! management: a chart must be created exactly once per page container,
//! destroyed cleanly when its container disappears or is replaced, and
//! re-rendered when a remote-patching UI framework mutates the page without
//! a full reload. Drawing is delegated entirely to pluggable backend
//! adapters so the backend can be swapped without touching call sites.

pub mod api;
pub mod backend;
pub mod descriptor;
pub mod dom;
pub mod error;
pub mod registry;
pub mod scan;
pub mod telemetry;

pub use api::{ChartOrchestrator, OrchestratorState};
pub use backend::BackendKind;
pub use descriptor::{ChartDescriptor, ChartKind};
pub use dom::{Container, ContainerId, Document, Surface};
pub use error::{MountError, MountResult};
pub use registry::{ChartInstance, InstanceRegistry};
