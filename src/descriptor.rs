use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind tag of a chart container's declarative configuration.
///
/// The set is closed: a `chart_type` attribute naming anything else is
/// treated as a malformed descriptor by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
    Doughnut,
    Radar,
    PolarArea,
}

impl ChartKind {
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "line" => Some(Self::Line),
            "bar" => Some(Self::Bar),
            "pie" => Some(Self::Pie),
            "doughnut" => Some(Self::Doughnut),
            "radar" => Some(Self::Radar),
            "polar-area" | "polarArea" => Some(Self::PolarArea),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Pie => "pie",
            Self::Doughnut => "doughnut",
            Self::Radar => "radar",
            Self::PolarArea => "polar-area",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed, kind-tagged configuration for one chart's content.
///
/// The payload stays opaque structured data here; semantic validation is the
/// responsibility of the backend adapter that consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescriptor {
    pub kind: ChartKind,
    pub payload: Value,
}

impl ChartDescriptor {
    #[must_use]
    pub fn new(kind: ChartKind, payload: Value) -> Self {
        Self { kind, payload }
    }
}
