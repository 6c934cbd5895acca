mod ids;
mod orchestrator;

pub use orchestrator::{ChartOrchestrator, OrchestratorState};
