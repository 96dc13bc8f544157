use tactus_desktop_demo::{Demo, ScalePolicy};
use tactus_foundation::{ManualClock, PointerEvent};
use tactus_geometry::Rect;
use tactus_testing::robot_assertions::{assert_approx_eq, assert_rect_approx_eq};

fn demo() -> (Demo, ManualClock) {
    let clock = ManualClock::new(0);
    let demo = Demo::new(clock.clone(), 800.0).expect("demo targets register");
    (demo, clock)
}

fn tap_toolbar(demo: &mut Demo, clock: &ManualClock) {
    demo.handle(PointerEvent::down(9, 40.0, 24.0));
    clock.advance(30);
    demo.handle(PointerEvent::up(9, 40.0, 24.0));
    clock.advance(200);
}

/// Two contacts 60px apart around `(cx, cy)`, spread to 120px.
fn pinch_open(demo: &mut Demo, clock: &ManualClock, cx: f32, cy: f32) {
    demo.handle(PointerEvent::down(1, cx - 30.0, cy));
    demo.handle(PointerEvent::down(2, cx + 30.0, cy));
    clock.advance(16);
    demo.handle(PointerEvent::moved(2, cx + 90.0, cy));
    clock.advance(16);
    demo.handle(PointerEvent::up(1, cx - 30.0, cy));
    demo.handle(PointerEvent::up(2, cx + 90.0, cy));
}

#[test]
fn default_policy_zooms_the_view() {
    let (mut demo, clock) = demo();
    pinch_open(&mut demo, &clock, 450.0, 500.0);

    assert_approx_eq(demo.scene().view().scale, 2.0, 1e-4, "view zoom");
    assert_eq!(demo.scene().item(0), Some(Rect::new(120.0, 120.0, 160.0, 120.0)));
    assert_eq!(demo.scene().grabbed(), None, "released after the last lift");
}

#[test]
fn items_policy_resizes_the_pinched_item() {
    let (mut demo, clock) = demo();
    tap_toolbar(&mut demo, &clock);
    assert_eq!(demo.scene().policy(), ScalePolicy::Items);

    pinch_open(&mut demo, &clock, 200.0, 180.0);

    let item = demo.scene().item(0).expect("item exists");
    assert_rect_approx_eq(item, Rect::new(10.0, 60.0, 320.0, 240.0), 1e-3, "item 0");
    assert_eq!(demo.scene().view().scale, 1.0);
}

#[test]
fn items_policy_ignores_pinches_on_empty_space() {
    let (mut demo, clock) = demo();
    tap_toolbar(&mut demo, &clock);
    pinch_open(&mut demo, &clock, 450.0, 500.0);

    assert_eq!(demo.scene().view().scale, 1.0);
    assert_eq!(demo.scene().item(1), Some(Rect::new(360.0, 200.0, 200.0, 160.0)));
}

#[test]
fn items_and_view_policy_falls_back_to_view() {
    let (mut demo, clock) = demo();
    tap_toolbar(&mut demo, &clock);
    tap_toolbar(&mut demo, &clock);
    assert_eq!(demo.scene().policy(), ScalePolicy::ItemsAndView);

    pinch_open(&mut demo, &clock, 450.0, 500.0);
    assert_approx_eq(demo.scene().view().scale, 2.0, 1e-4, "view zoom");
}

#[test]
fn long_press_selects_an_item() {
    let (mut demo, clock) = demo();
    demo.handle(PointerEvent::down(1, 450.0, 280.0));
    clock.advance(1100);
    assert!(demo.handle(PointerEvent::moved(1, 451.0, 280.0)) > 0);
    demo.handle(PointerEvent::up(1, 451.0, 280.0));

    assert_eq!(demo.selected(), Some(1));
}
