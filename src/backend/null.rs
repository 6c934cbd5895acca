use tracing::debug;

use crate::descriptor::{ChartDescriptor, ChartKind};
use crate::dom::Surface;
use crate::error::MountResult;

use super::Adapter;

/// Placeholder backend: declares the full adapter contract but performs no
/// drawing, so the orchestrator never has to special-case backend identity
/// beyond selection. Its handle records lifecycle calls, which also makes it
/// the backend of choice for tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullAdapter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullChart {
    kind: ChartKind,
    update_count: usize,
    destroyed: bool,
}

impl NullChart {
    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn update_count(&self) -> usize {
        self.update_count
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl Adapter for NullAdapter {
    type Handle = NullChart;

    fn create(&self, _surface: &Surface, descriptor: &ChartDescriptor) -> MountResult<NullChart> {
        debug!(kind = %descriptor.kind, "null backend placeholder, no drawing performed");
        Ok(NullChart {
            kind: descriptor.kind,
            update_count: 0,
            destroyed: false,
        })
    }

    fn update(&self, handle: &mut NullChart, descriptor: &ChartDescriptor) -> MountResult<()> {
        handle.kind = descriptor.kind;
        handle.update_count += 1;
        Ok(())
    }

    fn destroy(&self, handle: &mut NullChart) {
        handle.destroyed = true;
    }
}
