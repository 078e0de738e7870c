//! Mouse tests - click placement, double-click, drag selection and autoscroll

mod common;

use std::time::{Duration, Instant};

use common::{test_area, test_area_with, test_settings};
use taskpanel::editable::{PointerEvent, TimerKind};

#[test]
fn test_click_places_cursor() {
    let (mut area, mut host) = test_area("hello world");
    area.clicked(&PointerEvent::new(34.0, 5.0), &mut host);

    assert_eq!(area.state().cursor(), 3);
    assert!(!area.state().has_selection());
    assert_eq!(area.state().preferred_x, 30.0);
}

#[test]
fn test_click_trailing_half_rounds_up() {
    let (mut area, mut host) = test_area("hello");
    area.clicked(&PointerEvent::new(36.0, 5.0), &mut host);
    assert_eq!(area.state().cursor(), 4);
}

#[test]
fn test_click_past_end_clamps() {
    let (mut area, mut host) = test_area("ab\ncd");
    area.clicked(&PointerEvent::new(190.0, 35.0), &mut host);
    assert_eq!(area.state().cursor(), 5);

    let (mut area, mut host) = test_area("ab\ncd");
    area.clicked(&PointerEvent::new(-5.0, -5.0), &mut host);
    assert_eq!(area.state().cursor(), 0);
}

#[test]
fn test_shift_click_extends_selection() {
    let (mut area, mut host) = test_area("hello world");
    area.mouse_down(&PointerEvent::new(0.0, 5.0), &mut host);
    area.mouse_down(&PointerEvent::new(50.0, 5.0).with_shift(true), &mut host);

    assert_eq!(area.state().selection_range(), Some((0, 5)));
}

#[test]
fn test_double_click_selects_all() {
    let (mut area, mut host) = test_area("hello world");
    let start = Instant::now();
    area.clicked(&PointerEvent::new(20.0, 5.0).at(start), &mut host);
    area.clicked(
        &PointerEvent::new(20.0, 5.0).at(start + Duration::from_millis(100)),
        &mut host,
    );

    assert_eq!(area.state().selection_range(), Some((0, 11)));
}

#[test]
fn test_slow_second_click_places_cursor() {
    let (mut area, mut host) = test_area("hello world");
    let start = Instant::now();
    area.clicked(&PointerEvent::new(20.0, 5.0).at(start), &mut host);
    area.clicked(
        &PointerEvent::new(40.0, 5.0).at(start + Duration::from_millis(500)),
        &mut host,
    );

    assert!(!area.state().has_selection());
    assert_eq!(area.state().cursor(), 4);
}

#[test]
fn test_drag_selects_range() {
    let (mut area, mut host) = test_area("hello world");
    area.drag_start(&PointerEvent::new(0.0, 5.0), &mut host);
    area.drag(&PointerEvent::new(30.0, 5.0), &mut host);
    area.drag_end(&PointerEvent::new(50.0, 5.0), &mut host);

    assert_eq!(area.state().selection_anchor(), Some(0));
    assert_eq!(area.state().cursor(), 5);
    assert_eq!(area.state().preferred_x, 50.0);
    assert!(!area.interaction().dragging);
    assert!(host.pending(TimerKind::DragScroll).is_none());
}

#[test]
fn test_drag_outside_viewport_autoscrolls() {
    let text = "012345678901234567890123456789";
    let (mut area, mut host) = test_area_with(test_settings(), 100.0, 20.0, text);
    area.mouse_down(&PointerEvent::new(0.0, 5.0), &mut host);
    host.settle(&mut area);
    assert_eq!(area.viewport().scroll_x, 0.0);

    area.drag_start(&PointerEvent::new(10.0, 5.0), &mut host);
    let timer = host.pending(TimerKind::DragScroll).unwrap();
    assert_eq!(timer.delay, Duration::ZERO);

    area.drag(&PointerEvent::new(150.0, 5.0), &mut host);
    assert_eq!(area.state().cursor(), 15);

    assert!(host.fire(TimerKind::DragScroll, &mut area));
    assert_eq!(area.viewport().scroll_x, 50.0);
    assert_eq!(area.state().cursor(), 20);

    assert!(host.fire(TimerKind::DragScroll, &mut area));
    assert_eq!(area.viewport().scroll_x, 100.0);
    assert_eq!(area.state().cursor(), 25);
    assert_eq!(area.state().selection_anchor(), Some(1));

    area.drag_end(&PointerEvent::new(150.0, 5.0), &mut host);
    assert!(host.pending(TimerKind::DragScroll).is_none());
}

#[test]
fn test_drag_tick_inside_viewport_does_not_scroll() {
    let (mut area, mut host) = test_area_with(test_settings(), 100.0, 20.0, "hello");
    area.drag_start(&PointerEvent::new(10.0, 5.0), &mut host);
    area.drag(&PointerEvent::new(30.0, 5.0), &mut host);

    assert!(host.fire(TimerKind::DragScroll, &mut area));
    assert_eq!(area.viewport().scroll_x, 0.0);
    assert_eq!(area.state().cursor(), 3);
    assert!(host.pending(TimerKind::DragScroll).is_some());
}

#[test]
fn test_drag_restarts_blink() {
    let (mut area, mut host) = test_area("hello");
    assert!(host.fire(TimerKind::Blink, &mut area));
    assert!(!area.cursor_visible());

    area.drag_start(&PointerEvent::new(10.0, 5.0), &mut host);
    assert!(area.cursor_visible());
}
