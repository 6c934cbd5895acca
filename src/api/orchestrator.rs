use serde_json::Value;
use tracing::{debug, warn};

use crate::backend::BackendKind;
use crate::descriptor::ChartDescriptor;
use crate::dom::{ContainerId, Document};
use crate::error::{MountError, MountResult};
use crate::registry::{ChartInstance, InstanceRegistry};
use crate::scan;

use super::ids::mint_chart_id;

/// Lifecycle state of the page's chart set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrchestratorState {
    #[default]
    Uninitialized,
    Ready,
}

/// Wires scanner output to registry operations and reacts to the host
/// page's lifecycle signals.
///
/// The hosting environment owns the `Document` and invokes these handlers
/// at the right times ("document ready", "framework patch applied", explicit
/// API calls); the orchestrator installs no ambient listeners and runs each
/// handler to completion before the next begins. Constructed once at
/// page-lifetime start and dropped on page unload.
#[derive(Debug, Default)]
pub struct ChartOrchestrator {
    registry: InstanceRegistry,
    backend: BackendKind,
    state: OrchestratorState,
}

impl ChartOrchestrator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_backend(backend: BackendKind) -> Self {
        Self {
            backend,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn backend(&self) -> BackendKind {
        self.backend
    }

    #[must_use]
    pub fn state(&self) -> OrchestratorState {
        self.state
    }

    #[must_use]
    pub fn registry(&self) -> &InstanceRegistry {
        &self.registry
    }

    /// "Document ready" signal: renders every chart container on the page.
    pub fn handle_document_ready(&mut self, doc: &mut Document) {
        self.state = OrchestratorState::Ready;
        for id in scan::all_containers(doc) {
            self.render_container(doc, id);
        }
    }

    /// "Framework patch applied" signal: renders only containers that
    /// appeared since the last pass, never touching already-rendered ones.
    pub fn handle_patch_applied(&mut self, doc: &mut Document) {
        for id in scan::creatable_containers(doc) {
            self.render_container(doc, id);
        }
    }

    /// Switches the active backend and re-renders every container under it:
    /// all live instances are destroyed, every rendered marker is cleared,
    /// then the initial-load procedure runs with the new backend.
    ///
    /// An unknown backend name leaves the current backend and every live
    /// instance untouched; it is a warning, not an error.
    pub fn set_backend(&mut self, name: &str, doc: &mut Document) {
        let Some(kind) = BackendKind::from_name(name) else {
            let err = MountError::UnknownBackend(name.to_owned());
            warn!(error = %err, "keeping current chart backend");
            return;
        };

        debug!(backend = %kind, "switching chart backend");
        self.backend = kind;
        self.registry.clear();
        for id in scan::all_containers(doc) {
            if let Some(container) = doc.container_mut(id) {
                container.clear_rendered();
            }
        }
        self.handle_document_ready(doc);
    }

    /// Replaces a chart's payload in place through its adapter, keeping the
    /// handle's identity. An unknown identifier is a no-op.
    pub fn update(&mut self, identifier: &str, payload: Value) {
        let Some(instance) = self.registry.get_mut(identifier) else {
            return;
        };

        let descriptor = ChartDescriptor::new(instance.descriptor().kind, payload);
        let adapter = instance.backend_kind().adapter();
        match adapter.update(instance.handle_mut(), &descriptor) {
            Ok(()) => instance.set_descriptor(descriptor),
            Err(err) => warn!(identifier, error = %err, "chart update rejected"),
        }
    }

    /// Destroys a chart and forgets its identifier. Destroying an unknown or
    /// already-destroyed identifier is a no-op.
    pub fn destroy(&mut self, identifier: &str) {
        if self.registry.remove(identifier) {
            debug!(identifier, "chart destroyed");
        }
    }

    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&ChartInstance> {
        self.registry.get(identifier)
    }

    fn render_container(&mut self, doc: &mut Document, id: ContainerId) {
        if let Err(err) = self.try_render_container(doc, id) {
            warn!(container = id.value(), error = %err, "skipping chart container");
        }
    }

    fn try_render_container(&mut self, doc: &mut Document, id: ContainerId) -> MountResult<()> {
        let Some(container) = doc.container(id) else {
            return Ok(());
        };
        // Idempotent-creation guard: a marked container is never re-created
        // until its marker is explicitly cleared.
        if container.is_rendered() {
            return Ok(());
        }

        let descriptor = scan::extract_descriptor(container)?;
        let surface = container
            .surface()
            .cloned()
            .ok_or(MountError::MissingSurface { container: id })?;

        // Prefer the surface's pre-assigned id, then a chart id persisted on
        // the container by an earlier render, so lookups stay stable for the
        // container's lifetime.
        let identifier = surface
            .id()
            .or(container.chart_id())
            .map(str::to_owned)
            .unwrap_or_else(mint_chart_id);

        // Destroy any instance already live under this identifier before the
        // new handle exists, so the old chart has released the drawing
        // surface by the time the backend binds it again.
        self.registry.remove(&identifier);

        let handle = self.backend.adapter().create(&surface, &descriptor)?;
        self.registry.put(ChartInstance::new(
            identifier.clone(),
            descriptor,
            self.backend,
            handle,
        ));

        if let Some(container) = doc.container_mut(id) {
            container.mark_rendered();
            container.set_chart_id(identifier.clone());
        }
        debug!(identifier = %identifier, backend = %self.backend, "chart rendered");
        Ok(())
    }
}
