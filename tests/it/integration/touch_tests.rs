//! Touch input: single finger only, first touch point drives the drag.

use crate::helpers::{TestAreaBuilder, touch};
use areaviz::InputPhase;
use areaviz::geometry::point;

#[test]
fn test_single_finger_drag() {
    let mut area = TestAreaBuilder::new().build();

    assert!(area.manager.handle_input(&touch(InputPhase::Start, &[(1, 10.0, 10.0)], &[(1, 10.0, 10.0)])));
    assert!(area.manager.handle_input(&touch(InputPhase::Move, &[(1, 110.0, 110.0)], &[(1, 110.0, 110.0)])));
    area.flush(0.0);
    assert!(area.manager.handle_input(&touch(InputPhase::End, &[], &[(1, 110.0, 110.0)])));

    assert_eq!(area.manager.position(), Some(point(100.0, 100.0)));
    assert!(!area.manager.is_active());
}

#[test]
fn test_two_finger_start_is_ignored() {
    let mut area = TestAreaBuilder::new().build();

    let start = touch(
        InputPhase::Start,
        &[(1, 10.0, 10.0), (2, 20.0, 20.0)],
        &[(1, 10.0, 10.0), (2, 20.0, 20.0)],
    );
    assert!(!area.manager.handle_input(&start));
    assert!(!area.manager.is_active());
}

#[test]
fn test_second_finger_does_not_hijack_session() {
    let mut area = TestAreaBuilder::new().build();
    area.manager.handle_input(&touch(InputPhase::Start, &[(1, 10.0, 10.0)], &[(1, 10.0, 10.0)]));

    let second = touch(InputPhase::Start, &[(1, 10.0, 10.0), (2, 300.0, 300.0)], &[(2, 300.0, 300.0)]);
    assert!(!area.manager.handle_input(&second));
    assert_eq!(area.manager.session().unwrap().anchor_offset, point(10.0, 10.0));

    let moved = touch(InputPhase::Move, &[(1, 60.0, 60.0), (2, 350.0, 350.0)], &[(2, 350.0, 350.0)]);
    area.manager.handle_input(&moved);
    area.flush(0.0);
    assert_eq!(area.manager.position(), Some(point(50.0, 50.0)));
}

#[test]
fn test_lifting_other_finger_keeps_session() {
    let mut area = TestAreaBuilder::new().build();
    area.manager.handle_input(&touch(InputPhase::Start, &[(1, 10.0, 10.0)], &[(1, 10.0, 10.0)]));

    let other_lifted = touch(InputPhase::End, &[(1, 10.0, 10.0)], &[(2, 300.0, 300.0)]);
    assert!(!area.manager.handle_input(&other_lifted));
    assert!(area.manager.is_active());
}

#[test]
fn test_touch_cancel_ends_session() {
    let mut area = TestAreaBuilder::new().build();
    area.manager.handle_input(&touch(InputPhase::Start, &[(4, 10.0, 10.0)], &[(4, 10.0, 10.0)]));
    area.manager.handle_input(&touch(InputPhase::Move, &[(4, 50.0, 50.0)], &[(4, 50.0, 50.0)]));

    assert!(area.manager.handle_input(&touch(InputPhase::Cancel, &[], &[(4, 50.0, 50.0)])));
    assert!(!area.manager.is_active());
    assert_eq!(area.manager.host().pending_frame_count(), 0);
}

#[test]
fn test_touch_move_without_session_is_not_consumed() {
    let mut area = TestAreaBuilder::new().build();
    let moved = touch(InputPhase::Move, &[(1, 60.0, 60.0)], &[(1, 60.0, 60.0)]);
    assert!(!area.manager.handle_input(&moved));
}
