//! Press (long-press) recognizer.

use super::{Gesture, GestureKind, GestureResult};
use crate::gesture_constants::{DRAG_THRESHOLD, PRESS_DELAY_MS};
use crate::input::state::InteractionState;
use tactus_geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PressConfig {
    /// How long the contacts must be held.
    pub delay_ms: u64,
    /// How far the centroid may drift while held.
    pub tolerance: f32,
    /// Exact number of contacts that make up the press.
    pub inputs: usize,
}

impl Default for PressConfig {
    fn default() -> Self {
        Self {
            delay_ms: PRESS_DELAY_MS,
            tolerance: DRAG_THRESHOLD,
            inputs: 1,
        }
    }
}

impl PressConfig {
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_inputs(mut self, inputs: usize) -> Self {
        self.inputs = inputs.max(1);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PressData {
    /// Centroid when the required contacts were first all down.
    pub point: Point,
    pub time: u64,
    /// How long the contacts had been held when the press was recognized.
    pub duration_ms: u64,
    pub inputs: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Hold {
    since: u64,
    anchor: Point,
}

/// Recognizes contacts held in place for a while.
///
/// The engine owns no timers, so the hold is evaluated whenever an event
/// arrives: on each move and when a contact lifts. A press fires at most once
/// per interaction.
#[derive(Clone, Debug, Default)]
pub struct PressGesture {
    config: PressConfig,
    hold: Option<Hold>,
    fired: bool,
}

impl PressGesture {
    pub fn new(config: PressConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &PressConfig {
        &self.config
    }

    fn fire(&mut self, hold: Hold, now: u64) -> Option<GestureResult> {
        let duration_ms = now.saturating_sub(hold.since);
        if self.fired || duration_ms < self.config.delay_ms {
            return None;
        }
        self.fired = true;
        self.hold = None;
        Some(GestureResult::Press(PressData {
            point: hold.anchor,
            time: now,
            duration_ms,
            inputs: self.config.inputs,
        }))
    }
}

impl Gesture for PressGesture {
    fn kind(&self) -> GestureKind {
        GestureKind::Press
    }

    fn on_start(&mut self, state: &InteractionState) -> Option<GestureResult> {
        if state.len() == 1 {
            self.reset();
        }
        self.hold = match state.centroid() {
            Some(anchor) if state.len() == self.config.inputs && !self.fired => Some(Hold {
                since: state.time(),
                anchor,
            }),
            _ => None,
        };
        None
    }

    fn on_move(&mut self, state: &InteractionState) -> Option<GestureResult> {
        let hold = self.hold?;
        let drifted = state
            .centroid()
            .map_or(true, |point| point.distance_to(hold.anchor) > self.config.tolerance);
        if drifted || state.len() != self.config.inputs {
            self.hold = None;
            return None;
        }
        self.fire(hold, state.time())
    }

    fn on_end(&mut self, state: &InteractionState) -> Option<GestureResult> {
        let hold = self.hold.take();
        let result = match (hold, state.changed()) {
            (Some(hold), Some(lifted)) if lifted.total_distance() <= self.config.tolerance => {
                self.fire(hold, state.time())
            }
            _ => None,
        };
        if state.is_empty() {
            self.reset();
        }
        result
    }

    fn reset(&mut self) {
        self.hold = None;
        self.fired = false;
    }
}
