use serde::{Deserialize, Serialize};

/// Stable handle to one container within a `Document`.
///
/// Ids are assigned by the document on insertion and never reused, so a
/// handle held across an incremental patch either still resolves to the same
/// container or to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContainerId(pub(crate) u64);

impl ContainerId {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Drawing surface hosted by a container (the canvas analog).
///
/// A surface may carry a pre-assigned identifier from the server-rendered
/// markup; surfaces without one get a minted chart id persisted onto their
/// container instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Surface {
    id: Option<String>,
}

impl Surface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()) }
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// One chart-hosting element of the server-rendered page.
///
/// Carries the declarative attribute protocol consumed from the templating
/// collaborator: a `chart_type` name, the `chart_data` payload serialized as
/// text, and an optional drawing surface. The orchestrator writes back the
/// `chart_id` attribute and the boolean `rendered` marker; that marker is the
/// only state this crate persists into the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    chart_type: String,
    chart_data: String,
    surface: Option<Surface>,
    rendered: bool,
    chart_id: Option<String>,
}

impl Container {
    /// Creates a container with an anonymous drawing surface, the shape the
    /// templating collaborator normally emits.
    #[must_use]
    pub fn new(chart_type: impl Into<String>, chart_data: impl Into<String>) -> Self {
        Self {
            chart_type: chart_type.into(),
            chart_data: chart_data.into(),
            surface: Some(Surface::new()),
            rendered: false,
            chart_id: None,
        }
    }

    /// Replaces the drawing surface, typically with one carrying a
    /// pre-assigned identifier.
    #[must_use]
    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Drops the drawing surface. Such a container is skipped with a warning
    /// at render time rather than treated as an error.
    #[must_use]
    pub fn without_surface(mut self) -> Self {
        self.surface = None;
        self
    }

    #[must_use]
    pub fn chart_type(&self) -> &str {
        &self.chart_type
    }

    #[must_use]
    pub fn chart_data(&self) -> &str {
        &self.chart_data
    }

    /// Replaces the declarative payload text, as a framework patch that
    /// rewrites the container's attributes would.
    pub fn set_chart_data(&mut self, chart_data: impl Into<String>) {
        self.chart_data = chart_data.into();
    }

    #[must_use]
    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    /// Clears the rendered marker so the next creatable scan picks the
    /// container up again.
    pub fn clear_rendered(&mut self) {
        self.rendered = false;
    }

    pub(crate) fn mark_rendered(&mut self) {
        self.rendered = true;
    }

    #[must_use]
    pub fn chart_id(&self) -> Option<&str> {
        self.chart_id.as_deref()
    }

    pub(crate) fn set_chart_id(&mut self, chart_id: String) {
        self.chart_id = Some(chart_id);
    }
}
