use indexmap::IndexMap;
use tracing::trace;

use crate::backend::{BackendKind, ChartHandle};
use crate::descriptor::ChartDescriptor;

/// One live chart tracked by the registry.
#[derive(Debug, Clone)]
pub struct ChartInstance {
    identifier: String,
    descriptor: ChartDescriptor,
    backend_kind: BackendKind,
    handle: ChartHandle,
}

impl ChartInstance {
    #[must_use]
    pub fn new(
        identifier: impl Into<String>,
        descriptor: ChartDescriptor,
        backend_kind: BackendKind,
        handle: ChartHandle,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            descriptor,
            backend_kind,
            handle,
        }
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[must_use]
    pub fn descriptor(&self) -> &ChartDescriptor {
        &self.descriptor
    }

    #[must_use]
    pub fn backend_kind(&self) -> BackendKind {
        self.backend_kind
    }

    #[must_use]
    pub fn handle(&self) -> &ChartHandle {
        &self.handle
    }

    pub(crate) fn handle_mut(&mut self) -> &mut ChartHandle {
        &mut self.handle
    }

    pub(crate) fn set_descriptor(&mut self, descriptor: ChartDescriptor) {
        self.descriptor = descriptor;
    }

    fn destroy(&mut self) {
        self.backend_kind.adapter().destroy(&mut self.handle);
    }
}

/// Exclusive owner of every live chart instance, keyed by chart identifier.
///
/// Invariant: at most one live instance per identifier. Every removal path
/// destroys through the instance's adapter first, so no destroyed instance
/// stays reachable through the mapping and no drawing resource leaks.
#[derive(Debug, Default)]
pub struct InstanceRegistry {
    instances: IndexMap<String, ChartInstance>,
}

impl InstanceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an instance, destroying any instance already stored under the
    /// same identifier before the new one becomes reachable.
    pub fn put(&mut self, instance: ChartInstance) {
        if let Some(existing) = self.instances.get_mut(instance.identifier()) {
            trace!(identifier = instance.identifier(), "replacing live chart instance");
            existing.destroy();
        }
        self.instances
            .insert(instance.identifier().to_owned(), instance);
    }

    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&ChartInstance> {
        self.instances.get(identifier)
    }

    pub(crate) fn get_mut(&mut self, identifier: &str) -> Option<&mut ChartInstance> {
        self.instances.get_mut(identifier)
    }

    /// Destroys and forgets the instance under `identifier`. Returns whether
    /// anything was removed; removing an absent identifier is a no-op.
    pub fn remove(&mut self, identifier: &str) -> bool {
        match self.instances.shift_remove(identifier) {
            Some(mut instance) => {
                instance.destroy();
                true
            }
            None => false,
        }
    }

    /// Destroys every instance, then empties the mapping. Used on backend
    /// switch and full re-render.
    pub fn clear(&mut self) {
        for instance in self.instances.values_mut() {
            instance.destroy();
        }
        self.instances.clear();
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.instances.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
