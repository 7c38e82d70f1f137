//! End-to-end drag workflows against the headless host.

use crate::helpers::{TestAreaBuilder, mouse};
use areaviz::geometry::point;
use areaviz::InputPhase;

#[test]
fn test_drag_to_container_center() {
    // 400x400 container, scale 1, 0.5 units per pixel, element at the origin
    let mut area = TestAreaBuilder::new().with_units_per_pixel(0.5).build();

    area.manager.begin_drag(0.0, 0.0);
    area.manager.update_drag(200.0, 200.0);
    assert_eq!(area.flush(0.0), 1);

    assert_eq!(area.style_position(), Some(point(200.0, 200.0)));
    assert_eq!(area.field_x(), Some("0.0"));
    assert_eq!(area.field_y(), Some("0.0"));
    assert_eq!(area.updates(), 1);
}

#[test]
fn test_element_offset_reconstructed_from_single_drag() {
    let mut area = TestAreaBuilder::new()
        .with_container(30.0, 20.0, 400.0, 400.0)
        .with_element(80.0, 80.0, 40.0, 40.0)
        .with_scale(2.0)
        .build();

    area.manager.begin_drag(90.0, 95.0);
    area.manager.update_drag(250.0, 300.0);
    area.flush(0.0);

    // ((px - containerLeft - (px0 - elementLeft)) / s, ...)
    assert_eq!(area.manager.position(), Some(point(105.0, 132.5)));
}

#[test]
fn test_physical_fields_are_center_relative() {
    let mut area = TestAreaBuilder::new().with_units_per_pixel(0.5).build();

    area.manager.begin_drag(10.0, 10.0);
    area.manager.update_drag(60.0, 310.0);
    area.flush(0.0);

    assert_eq!(area.manager.position(), Some(point(50.0, 300.0)));
    assert_eq!(area.field_x(), Some("-75.0"));
    assert_eq!(area.field_y(), Some("50.0"));
}

#[test]
fn test_restart_uses_fresh_anchor_and_discards_old_frame() {
    let mut area = TestAreaBuilder::new().build();

    area.manager.begin_drag(5.0, 5.0);
    area.manager.update_drag(100.0, 100.0);
    let stale = area.manager.snapshot().pending_frame.unwrap();

    area.manager.begin_drag(20.0, 20.0);
    assert_eq!(area.manager.host().pending_frame_count(), 0);
    assert!(!area.manager.on_frame(stale, 0.0));
    assert_eq!(area.manager.host().style_writes(), 0);

    let session = area.manager.session().unwrap();
    assert_eq!(session.anchor_offset, point(20.0, 20.0));
    assert_eq!(area.manager.stats().stale, 1);
}

#[test]
fn test_end_drag_twice_matches_once() {
    let mut area = TestAreaBuilder::new().build();

    area.manager.begin_drag(0.0, 0.0);
    area.manager.update_drag(50.0, 50.0);
    area.manager.end_drag();
    let once = area.manager.snapshot();

    area.manager.end_drag();
    assert_eq!(area.manager.snapshot(), once);
    assert!(!once.active);
    assert!(once.pending_frame.is_none());
    assert!(!area.manager.host().style().drag_hints);
}

#[test]
fn test_mouse_flow_through_handle_input() {
    let mut area = TestAreaBuilder::new().build();

    assert!(area.manager.handle_input(&mouse(InputPhase::Start, 10.0, 10.0)));
    assert!(area.manager.handle_input(&mouse(InputPhase::Move, 110.0, 60.0)));
    area.flush(0.0);
    assert!(area.manager.handle_input(&mouse(InputPhase::End, 110.0, 60.0)));

    assert!(!area.manager.is_active());
    assert_eq!(area.manager.position(), Some(point(100.0, 50.0)));
}

#[test]
fn test_release_before_frame_drops_pending_move() {
    let mut area = TestAreaBuilder::new().build();

    area.manager.handle_input(&mouse(InputPhase::Start, 10.0, 10.0));
    area.manager.handle_input(&mouse(InputPhase::Move, 110.0, 60.0));
    area.manager.handle_input(&mouse(InputPhase::End, 110.0, 60.0));

    assert_eq!(area.flush(0.0), 0);
    assert_eq!(area.manager.position(), None);
}

#[test]
fn test_moves_without_session_are_ignored() {
    let mut area = TestAreaBuilder::new().build();

    assert!(!area.manager.handle_input(&mouse(InputPhase::Move, 50.0, 50.0)));
    area.manager.update_drag(50.0, 50.0);
    assert_eq!(area.manager.host().pending_frame_count(), 0);
}

#[test]
fn test_zero_container_size_does_not_break_updates() {
    let mut area = TestAreaBuilder::new().with_units_per_pixel(2.0).build();
    area.manager.set_container_size(0.0, 0.0);

    area.manager.begin_drag(0.0, 0.0);
    area.manager.update_drag(25.0, 10.0);
    area.flush(0.0);

    assert_eq!(area.manager.position(), Some(point(25.0, 10.0)));
    assert_eq!(area.manager.physical_position(), Some(point(50.0, 20.0)));
}

#[test]
fn test_missing_element_makes_manager_inert() {
    let builder = TestAreaBuilder::new();
    let host = builder.host().without_element();
    let mut manager = areaviz::AreaPositionManager::new(host);

    manager.begin_drag(0.0, 0.0);
    manager.update_drag(10.0, 10.0);
    manager.set_position(1.0, 1.0, false);
    manager.end_drag();
    manager.teardown();

    assert!(!manager.is_enabled());
    assert_eq!(manager.host().pending_frame_count(), 0);
    assert_eq!(manager.host().style_writes(), 0);
}

#[test]
fn test_independent_managers_do_not_interact() {
    let mut left = TestAreaBuilder::new().build();
    let mut right = TestAreaBuilder::new().build();

    left.manager.begin_drag(0.0, 0.0);
    left.manager.update_drag(30.0, 30.0);
    left.flush(0.0);
    right.flush(0.0);

    assert_eq!(left.updates(), 1);
    assert_eq!(right.updates(), 0);
    assert!(!right.manager.is_active());
    assert_eq!(right.style_position(), None);
}
