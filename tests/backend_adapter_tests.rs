use chart_mount::backend::{
    Adapter, CanvasAdapter, LegendPosition, NullAdapter, VisualOptions,
};
use chart_mount::descriptor::{ChartDescriptor, ChartKind};
use chart_mount::dom::Surface;
use chart_mount::error::MountError;
use serde_json::json;

fn well_formed(kind: ChartKind) -> ChartDescriptor {
    ChartDescriptor::new(
        kind,
        json!({"data": {"labels": ["A", "B"], "datasets": [{"data": [1, 2]}]}}),
    )
}

#[test]
fn base_options_carry_the_shared_dark_palette() {
    let base = VisualOptions::base();
    assert!(base.responsive);
    assert!(!base.maintain_aspect_ratio);
    assert_eq!(base.legend.position, LegendPosition::Top);
    assert_eq!(base.legend.label_color, "#9CA3AF");
    assert_eq!(base.legend.label_font_size, 12);
    assert_eq!(base.tooltip.background, "rgba(0, 0, 0, 0.8)");
    assert_eq!(base.tooltip.border_width, 1);
    assert!(base.tooltip.index_mode);
    assert!(!base.tooltip.intersect);
    assert_eq!(base.x_axis.grid_color, "#374151");
    assert!(!base.x_axis.draw_grid_border);
    assert_eq!(base.y_axis.tick_prefix.as_deref(), Some("$"));
    assert_eq!(base.x_axis.tick_prefix, None);
    assert_eq!(base.elements.line_tension, None);
}

#[test]
fn line_kind_gets_smoothing_and_point_emphasis() {
    let options = VisualOptions::for_kind(ChartKind::Line);
    assert_eq!(options.elements.line_tension, Some(0.4));
    assert_eq!(options.elements.point_radius, Some(4.0));
    assert_eq!(options.elements.point_hover_radius, Some(6.0));
    assert_eq!(options.elements.bar_border_radius, None);
    assert_eq!(options.legend.position, LegendPosition::Top);
}

#[test]
fn bar_kind_gets_rounded_corners_only() {
    let options = VisualOptions::for_kind(ChartKind::Bar);
    assert_eq!(options.elements.bar_border_radius, Some(4.0));
    assert_eq!(options.elements.line_tension, None);
    assert_eq!(options.legend.position, LegendPosition::Top);
}

#[test]
fn pie_and_doughnut_relocate_the_legend() {
    for kind in [ChartKind::Pie, ChartKind::Doughnut] {
        let options = VisualOptions::for_kind(kind);
        assert_eq!(options.legend.position, LegendPosition::Right);
        // The rest of the legend styling is inherited from the base.
        assert_eq!(options.legend.label_color, "#9CA3AF");
        assert_eq!(options.elements, Default::default());
    }
}

#[test]
fn composition_is_pure_and_never_mutates_the_base() {
    assert_eq!(
        VisualOptions::for_kind(ChartKind::Line),
        VisualOptions::for_kind(ChartKind::Line)
    );
    // Deriving pie options must not bleed into a later base or line request.
    let _ = VisualOptions::for_kind(ChartKind::Pie);
    assert_eq!(VisualOptions::base().legend.position, LegendPosition::Top);
    assert_eq!(
        VisualOptions::for_kind(ChartKind::Line).legend.position,
        LegendPosition::Top
    );
}

#[test]
fn canvas_create_produces_a_live_configured_handle() {
    let adapter = CanvasAdapter;
    let chart = adapter
        .create(&Surface::with_id("revenue"), &well_formed(ChartKind::Line))
        .expect("create");

    assert_eq!(chart.kind(), ChartKind::Line);
    assert_eq!(chart.surface_id(), Some("revenue"));
    assert!(!chart.is_destroyed());
    assert_eq!(chart.options(), &VisualOptions::for_kind(ChartKind::Line));
    assert_eq!(chart.data()["labels"].as_array().map(Vec::len), Some(2));
}

#[test]
fn canvas_create_rejects_payload_without_data_object() {
    let adapter = CanvasAdapter;
    let descriptor = ChartDescriptor::new(ChartKind::Bar, json!({"labels": ["A"]}));
    match adapter.create(&Surface::new(), &descriptor) {
        Err(MountError::Configuration { kind, field }) => {
            assert_eq!(kind, ChartKind::Bar);
            assert_eq!(field, "data");
        }
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn canvas_create_rejects_non_array_datasets() {
    let adapter = CanvasAdapter;
    for payload in [
        json!({"data": {"labels": ["A"]}}),
        json!({"data": {"labels": ["A"], "datasets": {"data": [1]}}}),
    ] {
        let descriptor = ChartDescriptor::new(ChartKind::Line, payload);
        match adapter.create(&Surface::new(), &descriptor) {
            Err(MountError::Configuration { field, .. }) => {
                assert_eq!(field, "data.datasets");
            }
            other => panic!("expected configuration error, got {other:?}"),
        }
    }
}

#[test]
fn canvas_update_replaces_content_in_place() {
    let adapter = CanvasAdapter;
    let mut chart = adapter
        .create(&Surface::with_id("spend"), &well_formed(ChartKind::Line))
        .expect("create");

    adapter
        .update(&mut chart, &well_formed(ChartKind::Bar))
        .expect("update");

    // Same handle, new content: the drawing surface binding survives.
    assert_eq!(chart.surface_id(), Some("spend"));
    assert_eq!(chart.kind(), ChartKind::Bar);
    assert_eq!(chart.options(), &VisualOptions::for_kind(ChartKind::Bar));
    assert!(!chart.is_destroyed());
}

#[test]
fn canvas_update_rejects_malformed_payload_and_keeps_old_content() {
    let adapter = CanvasAdapter;
    let mut chart = adapter
        .create(&Surface::new(), &well_formed(ChartKind::Line))
        .expect("create");

    let bad = ChartDescriptor::new(ChartKind::Line, json!({"nope": true}));
    assert!(adapter.update(&mut chart, &bad).is_err());
    assert_eq!(chart.kind(), ChartKind::Line);
    assert!(chart.data().get("datasets").is_some());
}

#[test]
fn canvas_destroy_is_idempotent() {
    let adapter = CanvasAdapter;
    let mut chart = adapter
        .create(&Surface::new(), &well_formed(ChartKind::Pie))
        .expect("create");

    adapter.destroy(&mut chart);
    assert!(chart.is_destroyed());
    adapter.destroy(&mut chart);
    assert!(chart.is_destroyed());
}

#[test]
fn null_adapter_satisfies_the_same_contract_without_drawing() {
    let adapter = NullAdapter;
    let mut chart = adapter
        .create(&Surface::new(), &well_formed(ChartKind::Doughnut))
        .expect("create");
    assert_eq!(chart.kind(), ChartKind::Doughnut);
    assert_eq!(chart.update_count(), 0);

    adapter
        .update(&mut chart, &well_formed(ChartKind::Line))
        .expect("update");
    assert_eq!(chart.kind(), ChartKind::Line);
    assert_eq!(chart.update_count(), 1);

    adapter.destroy(&mut chart);
    adapter.destroy(&mut chart);
    assert!(chart.is_destroyed());
}
