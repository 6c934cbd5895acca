use thiserror::Error;

use crate::descriptor::ChartKind;
use crate::dom::ContainerId;

pub type MountResult<T> = Result<T, MountError>;

/// Failures raised while mounting charts into the page.
///
/// None of these are fatal to the page: every variant degrades to "this one
/// chart did not render" and is recovered at the container that raised it.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("malformed chart descriptor: {reason}")]
    MalformedDescriptor { reason: String },

    #[error("invalid configuration for {kind} chart: missing or ill-typed `{field}`")]
    Configuration { kind: ChartKind, field: &'static str },

    #[error("container {container:?} has no drawing surface")]
    MissingSurface { container: ContainerId },

    #[error("unknown chart backend '{0}'")]
    UnknownBackend(String),
}
