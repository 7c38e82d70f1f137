//! Programmatic positioning, conversion settings and injected collaborators.

use crate::helpers::TestAreaBuilder;
use areaviz::geometry::{Bounds, point};
use areaviz::{AreaConfig, AreaPositionManager};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_physical_round_trip_through_fields() {
    let mut area = TestAreaBuilder::new().with_units_per_pixel(0.25).build();

    area.manager.set_position(12.3, -4.5, true);

    assert_eq!(area.field_x(), Some("12.3"));
    assert_eq!(area.field_y(), Some("-4.5"));
    assert_eq!(area.updates(), 1);
}

#[test]
fn test_set_position_in_pixels_notifies() {
    let mut area = TestAreaBuilder::new().build();

    area.manager.set_position(250.0, 150.0, false);

    assert_eq!(area.style_position(), Some(point(250.0, 150.0)));
    assert_eq!(area.field_x(), Some("50.0"));
    assert_eq!(area.field_y(), Some("-50.0"));
    assert_eq!(area.updates(), 1);
}

#[test]
fn test_scale_change_applies_to_next_update() {
    let mut area = TestAreaBuilder::new().build();
    area.manager.begin_drag(0.0, 0.0);

    area.manager.set_scale(2.0);
    area.manager.update_drag(100.0, 60.0);
    area.flush(0.0);

    assert_eq!(area.manager.position(), Some(point(50.0, 30.0)));
}

#[test]
fn test_units_change_applies_to_next_update() {
    let mut area = TestAreaBuilder::new().build();
    area.manager.begin_drag(0.0, 0.0);
    area.manager.set_units_per_pixel(0.1);
    area.manager.update_drag(300.0, 200.0);
    area.flush(0.0);

    assert_eq!(area.field_x(), Some("10.0"));
    assert_eq!(area.field_y(), Some("0.0"));
}

#[test]
fn test_scale_provider_consulted_on_drag_start() {
    let scale = Rc::new(Cell::new(2.0));
    let provided = Rc::clone(&scale);
    let host = TestAreaBuilder::new().host();
    let mut manager = AreaPositionManager::builder(host)
        .scale_provider(move || provided.get())
        .initialize();

    manager.begin_drag(0.0, 0.0);
    manager.update_drag(100.0, 50.0);
    for token in manager.host_mut().take_pending_frames() {
        manager.on_frame(token, 0.0);
    }
    assert_eq!(manager.position(), Some(point(50.0, 25.0)));

    // Only read at drag start
    scale.set(4.0);
    assert_eq!(manager.scale(), 2.0);
    manager.end_drag();
    manager.begin_drag(50.0, 25.0);
    assert_eq!(manager.scale(), 4.0);
}

#[test]
fn test_custom_formatter() {
    let host = TestAreaBuilder::new().host();
    let mut manager = AreaPositionManager::builder(host)
        .formatter(|value: f64, _precision: Option<usize>| format!("{value:.2} mm"))
        .initialize();

    manager.set_position(1.5, -2.0, true);

    assert_eq!(manager.host().field("area-offset-x"), Some("1.50 mm"));
    assert_eq!(manager.host().field("area-offset-y"), Some("-2.00 mm"));
}

#[test]
fn test_missing_fields_are_skipped() {
    let mut area = TestAreaBuilder::new().without_fields().build();

    area.manager.set_position(10.0, 10.0, false);

    assert_eq!(area.field_x(), None);
    assert_eq!(area.style_position(), Some(point(10.0, 10.0)));
    assert_eq!(area.updates(), 1);
}

#[test]
fn test_config_without_fields_leaves_inputs_alone() {
    let mut area = TestAreaBuilder::new()
        .with_config(AreaConfig::default().without_fields())
        .build();

    area.manager.set_position(10.0, 10.0, false);

    assert_eq!(area.field_x(), Some(""));
    assert_eq!(area.field_y(), Some(""));
}

#[test]
fn test_refreshed_container_size_recenters_physical_units() {
    let mut area = TestAreaBuilder::new().build();
    area.manager
        .host_mut()
        .set_container_bounds(Bounds::from_xywh(0.0, 0.0, 100.0, 100.0));
    area.manager.refresh_container_size();

    area.manager.set_position(50.0, 50.0, false);

    assert_eq!(area.field_x(), Some("0.0"));
    assert_eq!(area.field_y(), Some("0.0"));
}

#[test]
fn test_invalid_container_size_is_rejected() {
    let mut area = TestAreaBuilder::new().build();
    area.manager.set_container_size(-10.0, 5.0);
    assert_eq!(area.manager.container_size().width, 400.0);
}
