use chart_mount::backend::{BackendKind, ChartHandle};
use chart_mount::descriptor::{ChartDescriptor, ChartKind};
use chart_mount::dom::Surface;
use chart_mount::registry::{ChartInstance, InstanceRegistry};
use serde_json::json;

fn descriptor(kind: ChartKind, label: &str) -> ChartDescriptor {
    ChartDescriptor::new(
        kind,
        json!({"data": {"labels": [label], "datasets": [{"data": [1]}]}}),
    )
}

fn instance(identifier: &str, backend: BackendKind, label: &str) -> ChartInstance {
    let descriptor = descriptor(ChartKind::Line, label);
    let handle = backend
        .adapter()
        .create(&Surface::new(), &descriptor)
        .expect("adapter create");
    ChartInstance::new(identifier, descriptor, backend, handle)
}

#[test]
fn put_enforces_at_most_one_live_instance_per_identifier() {
    let mut registry = InstanceRegistry::new();
    registry.put(instance("revenue", BackendKind::Canvas, "first"));
    registry.put(instance("revenue", BackendKind::Canvas, "second"));

    assert_eq!(registry.len(), 1);
    let stored = registry.get("revenue").expect("instance present");
    assert!(!stored.handle().is_destroyed());
    match stored.handle() {
        ChartHandle::Canvas(chart) => {
            let labels = chart.data()["labels"].as_array().expect("labels");
            assert_eq!(labels[0], "second");
        }
        ChartHandle::Null(_) => panic!("expected canvas handle"),
    }
}

#[test]
fn get_absent_identifier_is_none() {
    let registry = InstanceRegistry::new();
    assert!(registry.get("nope").is_none());
}

#[test]
fn remove_destroys_and_double_remove_is_noop() {
    let mut registry = InstanceRegistry::new();
    registry.put(instance("spend", BackendKind::Null, "only"));

    assert!(registry.remove("spend"));
    assert!(registry.get("spend").is_none());
    assert!(!registry.remove("spend"));
    assert!(!registry.remove("never-existed"));
    assert!(registry.is_empty());
}

#[test]
fn clear_destroys_every_instance_and_empties_the_mapping() {
    let mut registry = InstanceRegistry::new();
    registry.put(instance("a", BackendKind::Canvas, "a"));
    registry.put(instance("b", BackendKind::Null, "b"));
    registry.put(instance("c", BackendKind::Canvas, "c"));
    assert_eq!(registry.len(), 3);

    registry.clear();
    assert!(registry.is_empty());
    assert_eq!(registry.identifiers().count(), 0);
}

#[test]
fn identifiers_follow_insertion_order() {
    let mut registry = InstanceRegistry::new();
    registry.put(instance("first", BackendKind::Null, "1"));
    registry.put(instance("second", BackendKind::Null, "2"));

    let ids: Vec<&str> = registry.identifiers().collect();
    assert_eq!(ids, vec!["first", "second"]);
}
