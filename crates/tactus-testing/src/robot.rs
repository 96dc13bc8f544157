//! Robot testing framework for gesture scenarios
//!
//! This module provides a robot-style testing API that drives a real
//! [`Region`] with scripted pointer events:
//! - Bind any mix of recognizers to a full-surface target
//! - Press, move and lift contacts with a manually advanced clock
//! - Inspect every gesture the region reported, in order
//!
//! # Example
//!
//! ```
//! use tactus_foundation::{GestureKind, GestureResult};
//! use tactus_testing::GestureRobot;
//!
//! let mut robot = GestureRobot::with_kinds(&[GestureKind::Tap]);
//!
//! robot.touch_down(1, 100.0, 100.0);
//! robot.advance(50);
//! robot.touch_up(1);
//!
//! assert!(matches!(robot.results().as_slice(), [GestureResult::Tap(_)]));
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use tactus_foundation::{
    Clock, DispatchError, Everywhere, Gesture, GestureEvent, GestureKind, GestureResult, ManualClock,
    PointerEvent, PointerId, Region, TargetId,
};
use tactus_geometry::Point;

/// Interval between synthesized moves, roughly one frame at 60Hz.
pub const FRAME_MS: u64 = 16;

/// Scripted driver for a [`Region`] with a manual clock.
///
/// Contacts remember their last position, so `touch_up` and `touch_cancel`
/// lift them where they are.
pub struct GestureRobot {
    region: Region,
    clock: ManualClock,
    target: TargetId,
    recorded: Rc<RefCell<Vec<GestureEvent>>>,
}

impl Default for GestureRobot {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureRobot {
    /// Region with one full-surface target and no recognizers; time starts at 0.
    pub fn new() -> Self {
        let clock = ManualClock::new(0);
        let mut region = Region::with_clock(clock.clone());
        let target = region.add_target(Everywhere);
        Self {
            region,
            clock,
            target,
            recorded: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Robot with a default-configured recognizer of each given kind, bound
    /// in order.
    pub fn with_kinds(kinds: &[GestureKind]) -> Self {
        let mut robot = Self::new();
        for kind in kinds {
            robot.bind_boxed(kind.create());
        }
        robot
    }

    /// Binds a recognizer to the full-surface target.
    pub fn bind(&mut self, gesture: impl Gesture + 'static) -> &mut Self {
        self.bind_boxed(Box::new(gesture))
    }

    pub fn bind_boxed(&mut self, gesture: Box<dyn Gesture>) -> &mut Self {
        let sink = self.recorded.clone();
        let bound = self.region.bind_boxed(self.target, gesture, move |event| {
            sink.borrow_mut().push(*event);
        });
        if let Err(err) = bound {
            panic!("robot target must accept bindings: {err}");
        }
        self
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn region_mut(&mut self) -> &mut Region {
        &mut self.region
    }

    pub fn target(&self) -> TargetId {
        self.target
    }

    /// Current clock time in milliseconds.
    pub fn now(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Advance the clock by the given number of milliseconds.
    pub fn advance(&mut self, ms: u64) -> &mut Self {
        self.clock.advance(ms);
        self
    }

    /// Dispatches an arbitrary event, surfacing malformed sequences.
    pub fn try_dispatch(&mut self, event: PointerEvent) -> Result<Vec<GestureResult>, DispatchError> {
        log::trace!("robot dispatch {:?} for pointer {} at {}ms", event.kind, event.id, self.now());
        let emitted = self.region.dispatch(event)?;
        Ok(emitted.into_iter().map(|event| event.result).collect())
    }

    /// Dispatches an event the script expects to be well formed.
    pub fn dispatch(&mut self, event: PointerEvent) -> Vec<GestureResult> {
        match self.try_dispatch(event) {
            Ok(results) => results,
            Err(err) => panic!("robot dispatched a malformed event {event:?}: {err}"),
        }
    }

    pub fn touch_down(&mut self, id: PointerId, x: f32, y: f32) -> Vec<GestureResult> {
        self.dispatch(PointerEvent::down(id, x, y))
    }

    pub fn touch_move(&mut self, id: PointerId, x: f32, y: f32) -> Vec<GestureResult> {
        self.dispatch(PointerEvent::moved(id, x, y))
    }

    /// Lifts a contact at its last known position.
    pub fn touch_up(&mut self, id: PointerId) -> Vec<GestureResult> {
        let point = self.position(id);
        self.dispatch(PointerEvent::up(id, point.x, point.y))
    }

    /// Cancels a contact at its last known position.
    pub fn touch_cancel(&mut self, id: PointerId) -> Vec<GestureResult> {
        let point = self.position(id);
        self.dispatch(PointerEvent::cancel(id, point.x, point.y))
    }

    /// Moves a contact in a straight line to `(to_x, to_y)` over `steps`
    /// moves, advancing the clock by `step_ms` before each one.
    pub fn drag(
        &mut self,
        id: PointerId,
        to_x: f32,
        to_y: f32,
        steps: u32,
        step_ms: u64,
    ) -> Vec<GestureResult> {
        let from = self.position(id);
        let steps = steps.max(1);
        let mut results = Vec::new();
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let x = from.x + (to_x - from.x) * t;
            let y = from.y + (to_y - from.y) * t;
            self.advance(step_ms);
            results.extend(self.touch_move(id, x, y));
        }
        results
    }

    /// Presses, drags one frame at a time and lifts a single contact.
    pub fn swipe(&mut self, id: PointerId, from: Point, to: Point, steps: u32) -> Vec<GestureResult> {
        let mut results = self.touch_down(id, from.x, from.y);
        results.extend(self.drag(id, to.x, to.y, steps, FRAME_MS));
        results.extend(self.touch_up(id));
        results
    }

    /// Every gesture reported by the handlers so far, in order.
    pub fn recorded(&self) -> Vec<GestureEvent> {
        self.recorded.borrow().clone()
    }

    pub fn results(&self) -> Vec<GestureResult> {
        self.recorded.borrow().iter().map(|event| event.result).collect()
    }

    pub fn results_of(&self, kind: GestureKind) -> Vec<GestureResult> {
        self.recorded
            .borrow()
            .iter()
            .map(|event| event.result)
            .filter(|result| result.kind() == kind)
            .collect()
    }

    pub fn clear_recorded(&mut self) {
        self.recorded.borrow_mut().clear();
    }

    fn position(&self, id: PointerId) -> Point {
        match self.region.state().get(id) {
            Some(input) => input.point(),
            None => panic!("pointer {id} is not down"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactus_foundation::TapGesture;

    #[test]
    fn test_robot_tracks_positions() {
        let mut robot = GestureRobot::new();
        robot.touch_down(7, 10.0, 20.0);
        robot.drag(7, 50.0, 20.0, 4, FRAME_MS);
        assert_eq!(robot.now(), 4 * FRAME_MS);
        assert_eq!(
            robot.region().state().get(7).map(|input| input.point()),
            Some(Point::new(50.0, 20.0))
        );
        robot.touch_up(7);
        assert!(robot.region().state().is_empty());
    }

    #[test]
    fn test_recorded_results_match_handler_calls() {
        let mut robot = GestureRobot::new();
        robot.bind(TapGesture::default());
        robot.touch_down(1, 0.0, 0.0);
        let emitted = robot.touch_up(1);
        assert_eq!(emitted, robot.results());
        assert_eq!(robot.recorded()[0].target, robot.target());
        robot.clear_recorded();
        assert!(robot.results().is_empty());
    }

    #[test]
    fn test_malformed_event_surfaces_error() {
        let mut robot = GestureRobot::new();
        assert_eq!(
            robot.try_dispatch(PointerEvent::moved(1, 0.0, 0.0)),
            Err(DispatchError::UnknownPointer(1))
        );
    }
}
