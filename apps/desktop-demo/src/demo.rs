use crate::scales::{ScalePolicy, Scene};
use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;
use tactus_foundation::{
    Clock, DispatchError, Everywhere, GestureEvent, GestureKind, GestureResult, HitFn,
    PinchGesture, PointerEvent, PointerPhase, Region, TargetId,
};
use tactus_geometry::{Point, Rect};

pub const TOOLBAR_HEIGHT: f32 = 48.0;

const ITEMS: [Rect; 2] = [
    Rect::new(120.0, 120.0, 160.0, 120.0),
    Rect::new(360.0, 200.0, 200.0, 160.0),
];

/// One-line summary of a recognized gesture for the log.
pub fn describe(result: &GestureResult) -> String {
    match result {
        GestureResult::Tap(tap) => format!(
            "tap x{} at ({:.0}, {:.0}) after {}ms",
            tap.inputs, tap.point.x, tap.point.y, tap.duration_ms
        ),
        GestureResult::Pan(pan) => format!(
            "pan x{} by ({:.1}, {:.1})",
            pan.inputs, pan.translation.x, pan.translation.y
        ),
        GestureResult::Swipe(swipe) => format!(
            "swipe towards {:.0}° at {:.2}px/ms",
            swipe.direction.to_degrees(),
            swipe.velocity
        ),
        GestureResult::Pinch(pinch) => format!(
            "pinch to {:.2}x around ({:.0}, {:.0})",
            pinch.scale, pinch.point.x, pinch.point.y
        ),
        GestureResult::Rotate(rotate) => format!(
            "rotate by {:.1}° (total {:.1}°)",
            rotate.delta.to_degrees(),
            rotate.rotation.to_degrees()
        ),
        GestureResult::Press(press) => format!(
            "press x{} at ({:.0}, {:.0}) held {}ms",
            press.inputs, press.point.x, press.point.y, press.duration_ms
        ),
    }
}

fn log_gesture(event: &GestureEvent) {
    match event.result.kind() {
        // Continuous gestures fire on every move.
        GestureKind::Pan | GestureKind::Pinch | GestureKind::Rotate => {
            log::debug!("[target {}] {}", event.target.0, describe(&event.result))
        }
        _ => log::info!("[target {}] {}", event.target.0, describe(&event.result)),
    }
}

/// The demo's gesture wiring, independent of any window.
///
/// Targets, in dispatch order:
/// - the toolbar strip, where a tap switches the scale policy;
/// - one target per scene item, where a long press selects the item;
/// - the whole surface, with every recognizer bound and pinches scaling the scene.
pub struct Demo {
    region: Region,
    scene: Rc<RefCell<Scene>>,
    selected: Rc<RefCell<Option<usize>>>,
    /// Shared with the region's toolbar target so it can follow window resizes.
    toolbar: Rc<Cell<Rect>>,
    surface: TargetId,
}

impl Demo {
    pub fn new(clock: impl Clock + 'static, width: f32) -> Result<Self, DispatchError> {
        let mut scene = Scene::new(ScalePolicy::default());
        for bounds in ITEMS {
            scene.add_item(bounds);
        }
        let scene = Rc::new(RefCell::new(scene));
        let selected = Rc::new(RefCell::new(None));
        let mut region = Region::with_clock(clock);

        let toolbar = Rc::new(Cell::new(Rect::new(0.0, 0.0, width, TOOLBAR_HEIGHT)));
        let toolbar_target = region.add_target(toolbar.clone());
        let policy_scene = scene.clone();
        region.bind_kind(toolbar_target, GestureKind::Tap, move |_| {
            let mut scene = policy_scene.borrow_mut();
            let policy = scene.policy().next();
            scene.set_policy(policy);
            log::info!("scale policy: {policy}");
        })?;

        for index in 0..ITEMS.len() {
            let hit_scene = scene.clone();
            let item = region.add_target(HitFn(move |x: f32, y: f32| {
                hit_scene.borrow().item_at(Point::new(x, y)) == Some(index)
            }));
            let selection = selected.clone();
            region.bind_kind(item, GestureKind::Press, move |_| {
                log::info!("item {index} selected");
                *selection.borrow_mut() = Some(index);
            })?;
        }

        let surface = region.add_target(Everywhere);
        for kind in GestureKind::ALL {
            if kind != GestureKind::Pinch {
                region.bind_kind(surface, kind, log_gesture)?;
            }
        }
        let pinch_scene = scene.clone();
        region.bind(surface, PinchGesture::default(), move |event| {
            log_gesture(event);
            if let GestureResult::Pinch(pinch) = &event.result {
                pinch_scene.borrow_mut().pinch(pinch);
            }
        })?;

        Ok(Self {
            region,
            scene,
            selected,
            toolbar,
            surface,
        })
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn scene(&self) -> Ref<'_, Scene> {
        self.scene.borrow()
    }

    pub fn selected(&self) -> Option<usize> {
        *self.selected.borrow()
    }

    pub fn surface(&self) -> TargetId {
        self.surface
    }

    pub fn toolbar(&self) -> Rect {
        self.toolbar.get()
    }

    /// Stretches the toolbar across a window that is now `width` logical px wide.
    pub fn resize(&mut self, width: f32) {
        self.toolbar.set(Rect::new(0.0, 0.0, width, TOOLBAR_HEIGHT));
    }

    /// Feeds one pointer event through the region. Returns how many gestures
    /// were recognized; malformed events are logged and dropped.
    pub fn handle(&mut self, event: PointerEvent) -> usize {
        if event.phase() == PointerPhase::Start && self.region.state().is_empty() {
            self.scene.borrow_mut().grab(event.position);
        }
        let recognized = match self.region.dispatch(event) {
            Ok(events) => events.len(),
            Err(err) => {
                log::warn!("dropped pointer event: {err}");
                0
            }
        };
        if self.region.state().is_empty() {
            self.scene.borrow_mut().release();
        }
        recognized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactus_foundation::{ManualClock, TapData};

    #[test]
    fn test_describe_tap() {
        let tap = GestureResult::Tap(TapData {
            point: Point::new(10.0, 20.0),
            time: 0,
            duration_ms: 42,
            inputs: 1,
        });
        assert_eq!(describe(&tap), "tap x1 at (10, 20) after 42ms");
    }

    #[test]
    fn test_toolbar_tap_cycles_policy() {
        let clock = ManualClock::new(0);
        let mut demo = Demo::new(clock.clone(), 800.0).expect("targets exist");
        demo.handle(PointerEvent::down(1, 100.0, 20.0));
        clock.advance(30);
        demo.handle(PointerEvent::up(1, 100.0, 20.0));
        assert_eq!(demo.scene().policy(), ScalePolicy::Items);
    }

    #[test]
    fn test_toolbar_follows_resize() {
        let clock = ManualClock::new(0);
        let mut demo = Demo::new(clock.clone(), 800.0).expect("targets exist");
        demo.resize(400.0);
        assert_eq!(demo.toolbar(), Rect::new(0.0, 0.0, 400.0, TOOLBAR_HEIGHT));

        demo.handle(PointerEvent::down(1, 600.0, 20.0));
        clock.advance(30);
        demo.handle(PointerEvent::up(1, 600.0, 20.0));
        assert_eq!(demo.scene().policy(), ScalePolicy::View, "tap landed past the toolbar");

        demo.handle(PointerEvent::down(2, 300.0, 20.0));
        clock.advance(30);
        demo.handle(PointerEvent::up(2, 300.0, 20.0));
        assert_eq!(demo.scene().policy(), ScalePolicy::Items);
    }

    #[test]
    fn test_malformed_event_is_dropped() {
        let mut demo = Demo::new(ManualClock::new(0), 800.0).expect("targets exist");
        assert_eq!(demo.handle(PointerEvent::moved(5, 1.0, 1.0)), 0);
        assert!(demo.region().state().is_empty());
    }
}
