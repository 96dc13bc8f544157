//! Pointer event routing.
//!
//! A [`Region`] is the single entry point for raw pointer events. For every
//! event it:
//!
//! 1. stamps a [`PointerSample`] (explicit event time, else the region clock),
//! 2. validates and applies it to the shared [`InteractionState`],
//! 3. runs the matching hook of every binding on the engaged targets, in
//!    registration order,
//! 4. hands each recognized gesture to the binding's handler and returns them.
//!
//! Targets are engaged by hit-testing the first contact of an interaction; the
//! remaining contacts of that interaction go to the same targets regardless of
//! where they land, until every contact has lifted.

use super::gestures::{Gesture, GestureKind, GestureResult};
use super::state::InteractionState;
use super::types::{PointerEvent, PointerPhase, PointerSample};
use crate::clock::{Clock, SystemClock};
use crate::error::DispatchError;
use smallvec::SmallVec;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use tactus_geometry::{Point, Rect};

/// Stable identity of a target registered with a [`Region`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u32);

/// Hit-test capability of something gestures can be bound to.
pub trait HitTarget {
    fn contains(&self, x: f32, y: f32) -> bool;
}

impl HitTarget for Rect {
    fn contains(&self, x: f32, y: f32) -> bool {
        Rect::contains(self, x, y)
    }
}

/// Bounds the application can move after registering the target.
impl HitTarget for Cell<Rect> {
    fn contains(&self, x: f32, y: f32) -> bool {
        self.get().contains(x, y)
    }
}

impl<T: HitTarget + ?Sized> HitTarget for Rc<T> {
    fn contains(&self, x: f32, y: f32) -> bool {
        (**self).contains(x, y)
    }
}

/// Adapts a closure into a [`HitTarget`].
///
/// ```
/// use tactus_foundation::input::region::HitFn;
///
/// let circle = HitFn(|x: f32, y: f32| x * x + y * y <= 100.0);
/// # use tactus_foundation::HitTarget;
/// assert!(circle.contains(6.0, 8.0));
/// ```
pub struct HitFn<F>(pub F);

impl<F> HitTarget for HitFn<F>
where
    F: Fn(f32, f32) -> bool,
{
    fn contains(&self, x: f32, y: f32) -> bool {
        (self.0)(x, y)
    }
}

/// Target that accepts every point, for binding gestures to the whole surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Everywhere;

impl HitTarget for Everywhere {
    fn contains(&self, _x: f32, _y: f32) -> bool {
        true
    }
}

/// A recognized gesture together with the target it was recognized on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureEvent {
    pub target: TargetId,
    pub result: GestureResult,
}

type GestureHandler = Box<dyn FnMut(&GestureEvent)>;

struct Binding {
    gesture: Box<dyn Gesture>,
    handler: GestureHandler,
}

struct Target {
    id: TargetId,
    hit: Box<dyn HitTarget>,
    bindings: Vec<Binding>,
}

pub struct Region {
    state: InteractionState,
    clock: Box<dyn Clock>,
    targets: Vec<Target>,
    engaged: SmallVec<[TargetId; 4]>,
    next_target: u32,
}

impl Default for Region {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("state", &self.state)
            .field("targets", &self.targets.len())
            .field("engaged", &self.engaged)
            .finish()
    }
}

impl Region {
    /// Creates a region stamping events with a [`SystemClock`].
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            state: InteractionState::new(),
            clock: Box::new(clock),
            targets: Vec::new(),
            engaged: SmallVec::new(),
            next_target: 0,
        }
    }

    /// Registers a target. Targets are hit-tested and dispatched to in the
    /// order they were added.
    pub fn add_target(&mut self, hit: impl HitTarget + 'static) -> TargetId {
        let id = TargetId(self.next_target);
        self.next_target += 1;
        self.targets.push(Target {
            id,
            hit: Box::new(hit),
            bindings: Vec::new(),
        });
        id
    }

    /// Unregisters a target and drops its bindings. Returns `false` if the
    /// target was not registered.
    pub fn remove_target(&mut self, id: TargetId) -> bool {
        let before = self.targets.len();
        self.targets.retain(|target| target.id != id);
        self.engaged.retain(|engaged| *engaged != id);
        self.targets.len() != before
    }

    /// Binds a recognizer to a target; `handler` receives every result it
    /// produces on that target.
    pub fn bind(
        &mut self,
        target: TargetId,
        gesture: impl Gesture + 'static,
        handler: impl FnMut(&GestureEvent) + 'static,
    ) -> Result<(), DispatchError> {
        self.bind_boxed(target, Box::new(gesture), handler)
    }

    /// Binds a default-configured recognizer of `kind`.
    pub fn bind_kind(
        &mut self,
        target: TargetId,
        kind: GestureKind,
        handler: impl FnMut(&GestureEvent) + 'static,
    ) -> Result<(), DispatchError> {
        self.bind_boxed(target, kind.create(), handler)
    }

    pub fn bind_boxed(
        &mut self,
        target: TargetId,
        gesture: Box<dyn Gesture>,
        handler: impl FnMut(&GestureEvent) + 'static,
    ) -> Result<(), DispatchError> {
        let entry = self
            .targets
            .iter_mut()
            .find(|entry| entry.id == target)
            .ok_or(DispatchError::UnknownTarget(target))?;
        entry.bindings.push(Binding {
            gesture,
            handler: Box::new(handler),
        });
        Ok(())
    }

    /// Removes every binding of `kind` from `target`, returning how many were
    /// removed.
    pub fn unbind(&mut self, target: TargetId, kind: GestureKind) -> Result<usize, DispatchError> {
        let entry = self
            .targets
            .iter_mut()
            .find(|entry| entry.id == target)
            .ok_or(DispatchError::UnknownTarget(target))?;
        let before = entry.bindings.len();
        entry.bindings.retain(|binding| binding.gesture.kind() != kind);
        Ok(before - entry.bindings.len())
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Targets receiving the current interaction, in dispatch order.
    pub fn engaged(&self) -> &[TargetId] {
        &self.engaged
    }

    pub fn is_engaged(&self, target: TargetId) -> bool {
        self.engaged.contains(&target)
    }

    /// Processes one raw pointer event to completion.
    ///
    /// Returns every gesture recognized while handling it, in the order the
    /// handlers were called. Malformed sequences (a move, end or cancel for a
    /// pointer that is not down, or a second start for one that is) leave all
    /// state untouched and run no recognizer hooks.
    pub fn dispatch(
        &mut self,
        event: PointerEvent,
    ) -> Result<SmallVec<[GestureEvent; 4]>, DispatchError> {
        let time = event.time_ms.unwrap_or_else(|| self.clock.now_ms());
        let phase = event.phase();
        let sample = PointerSample::new(phase, time, event.position);

        match phase {
            PointerPhase::Start => {
                let first = self.state.is_empty();
                if !self.state.add_pointer(event.id, sample) {
                    log::warn!("ignoring start for pointer {} which is already down", event.id);
                    return Err(DispatchError::DuplicatePointer(event.id));
                }
                if first {
                    self.engage(event.position);
                }
            }
            PointerPhase::Move => {
                if !self.state.update_pointer(event.id, sample) {
                    log::warn!("ignoring move for unknown pointer {}", event.id);
                    return Err(DispatchError::UnknownPointer(event.id));
                }
            }
            PointerPhase::End | PointerPhase::Cancel => {
                if !self.state.update_pointer(event.id, sample) {
                    log::warn!("ignoring {:?} for unknown pointer {}", phase, event.id);
                    return Err(DispatchError::UnknownPointer(event.id));
                }
                self.state.remove_pointer(event.id);
            }
        }

        let emitted = self.run_hooks(phase);

        if self.state.is_empty() && !self.engaged.is_empty() {
            log::trace!("interaction finished, releasing {} target(s)", self.engaged.len());
            self.engaged.clear();
        }
        Ok(emitted)
    }

    /// Abandons the current interaction: every engaged recognizer is cancelled
    /// and all contacts are forgotten. Nothing is emitted.
    pub fn cancel_all(&mut self) {
        let state = &self.state;
        for target in self.targets.iter_mut() {
            if !self.engaged.contains(&target.id) {
                continue;
            }
            for binding in target.bindings.iter_mut() {
                binding.gesture.on_cancel(state);
            }
        }
        self.state.clear();
        self.engaged.clear();
    }

    fn engage(&mut self, point: Point) {
        self.engaged = self
            .targets
            .iter()
            .filter(|target| target.hit.contains(point.x, point.y))
            .map(|target| target.id)
            .collect();
        log::debug!(
            "contact at ({:.1}, {:.1}) engaged {} target(s)",
            point.x,
            point.y,
            self.engaged.len()
        );
    }

    fn run_hooks(&mut self, phase: PointerPhase) -> SmallVec<[GestureEvent; 4]> {
        let mut emitted = SmallVec::new();
        let state = &self.state;
        for target in self.targets.iter_mut() {
            if !self.engaged.contains(&target.id) {
                continue;
            }
            for binding in target.bindings.iter_mut() {
                let Some(result) = binding.gesture.handle(phase, state) else {
                    continue;
                };
                let event = GestureEvent {
                    target: target.id,
                    result,
                };
                log::debug!(
                    "{} recognized on target {} at ({:.1}, {:.1})",
                    result.kind(),
                    target.id.0,
                    result.point().x,
                    result.point().y
                );
                (binding.handler)(&event);
                emitted.push(event);
            }
        }
        emitted
    }
}
