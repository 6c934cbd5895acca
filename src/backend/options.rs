use serde::{Deserialize, Serialize};

use crate::descriptor::ChartKind;

// Dark-palette defaults shared by every kind.
const GRID_COLOR: &str = "#374151";
const TICK_COLOR: &str = "#9CA3AF";
const TOOLTIP_BACKGROUND: &str = "rgba(0, 0, 0, 0.8)";
const TOOLTIP_TEXT: &str = "#FFFFFF";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Right,
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendOptions {
    pub display: bool,
    pub position: LegendPosition,
    pub label_color: String,
    pub label_font_size: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipOptions {
    pub enabled: bool,
    /// Index mode surfaces every dataset at the hovered category instead of
    /// requiring the pointer to intersect a mark.
    pub index_mode: bool,
    pub intersect: bool,
    pub background: String,
    pub title_color: String,
    pub body_color: String,
    pub border_color: String,
    pub border_width: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisOptions {
    pub display: bool,
    pub grid_color: String,
    pub draw_grid_border: bool,
    pub tick_color: String,
    pub tick_font_size: u8,
    /// Format hint prepended to tick labels; the core does not draw, so
    /// backends forward this to whatever renders the axis.
    pub tick_prefix: Option<String>,
}

/// Per-kind mark emphasis. `None` leaves the drawing library's own default
/// in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ElementOptions {
    pub line_tension: Option<f64>,
    pub point_radius: Option<f64>,
    pub point_hover_radius: Option<f64>,
    pub bar_border_radius: Option<f64>,
}

/// Derived visual configuration handed to a backend alongside the payload.
///
/// Composition is pure: `for_kind` builds a fresh base every call and never
/// mutates shared state, so the same descriptor always yields the same
/// options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub legend: LegendOptions,
    pub tooltip: TooltipOptions,
    pub x_axis: AxisOptions,
    pub y_axis: AxisOptions,
    pub elements: ElementOptions,
}

impl VisualOptions {
    /// The shared base configuration: top legend, dark grid, index-mode
    /// tooltip, currency-prefixed value axis.
    #[must_use]
    pub fn base() -> Self {
        let axis = AxisOptions {
            display: true,
            grid_color: GRID_COLOR.to_owned(),
            draw_grid_border: false,
            tick_color: TICK_COLOR.to_owned(),
            tick_font_size: 11,
            tick_prefix: None,
        };

        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            legend: LegendOptions {
                display: true,
                position: LegendPosition::Top,
                label_color: TICK_COLOR.to_owned(),
                label_font_size: 12,
            },
            tooltip: TooltipOptions {
                enabled: true,
                index_mode: true,
                intersect: false,
                background: TOOLTIP_BACKGROUND.to_owned(),
                title_color: TOOLTIP_TEXT.to_owned(),
                body_color: TOOLTIP_TEXT.to_owned(),
                border_color: GRID_COLOR.to_owned(),
                border_width: 1,
            },
            x_axis: axis.clone(),
            y_axis: AxisOptions {
                tick_prefix: Some("$".to_owned()),
                ..axis
            },
            elements: ElementOptions::default(),
        }
    }

    /// Composes the base configuration with the overrides selected by the
    /// descriptor's kind.
    #[must_use]
    pub fn for_kind(kind: ChartKind) -> Self {
        let base = Self::base();
        match kind {
            ChartKind::Line => Self {
                elements: ElementOptions {
                    line_tension: Some(0.4),
                    point_radius: Some(4.0),
                    point_hover_radius: Some(6.0),
                    ..ElementOptions::default()
                },
                ..base
            },
            ChartKind::Bar => Self {
                elements: ElementOptions {
                    bar_border_radius: Some(4.0),
                    ..ElementOptions::default()
                },
                ..base
            },
            ChartKind::Pie | ChartKind::Doughnut => Self {
                legend: LegendOptions {
                    position: LegendPosition::Right,
                    ..base.legend.clone()
                },
                ..base
            },
            ChartKind::Radar | ChartKind::PolarArea => base,
        }
    }
}
