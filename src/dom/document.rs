use indexmap::IndexMap;

use super::{Container, ContainerId};

/// The host page's set of chart containers.
///
/// The hosting environment owns the document and mutates it between
/// lifecycle signals (inserting containers on incremental patches, removing
/// them when page fragments are replaced). Iteration order is insertion
/// order, matching document order of the rendered page.
#[derive(Debug, Default)]
pub struct Document {
    containers: IndexMap<ContainerId, Container>,
    next_id: u64,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, container: Container) -> ContainerId {
        let id = ContainerId(self.next_id);
        self.next_id += 1;
        self.containers.insert(id, container);
        id
    }

    pub fn remove(&mut self, id: ContainerId) -> Option<Container> {
        self.containers.shift_remove(&id)
    }

    #[must_use]
    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.get(&id)
    }

    #[must_use]
    pub fn container_mut(&mut self, id: ContainerId) -> Option<&mut Container> {
        self.containers.get_mut(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = ContainerId> + '_ {
        self.containers.keys().copied()
    }

    pub fn containers(&self) -> impl Iterator<Item = (ContainerId, &Container)> {
        self.containers.iter().map(|(id, container)| (*id, container))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}
