//! Tap recognizer.

use super::{Gesture, GestureKind, GestureResult};
use crate::gesture_constants::{DRAG_THRESHOLD, TAP_MAX_DELAY_MS};
use crate::input::state::InteractionState;
use smallvec::SmallVec;
use tactus_geometry::{centroid, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapConfig {
    /// Longest interaction, first contact down to last contact up.
    pub max_delay_ms: u64,
    /// How far any contact may drift from where it went down.
    pub tolerance: f32,
    /// Exact number of contacts the tap is made of.
    pub inputs: usize,
}

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            max_delay_ms: TAP_MAX_DELAY_MS,
            tolerance: DRAG_THRESHOLD,
            inputs: 1,
        }
    }
}

impl TapConfig {
    pub fn with_max_delay(mut self, max_delay_ms: u64) -> Self {
        self.max_delay_ms = max_delay_ms;
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
pub struct TapData {
    /// Mean of the points where the contacts lifted.
    pub point: Point,
    /// Time the last contact lifted.
    pub time: u64,
    pub duration_ms: u64,
    pub inputs: usize,
}

/// Recognizes a quick touch-and-release that stays in place.
///
/// Emits once, when the last contact lifts, if the interaction was short
/// enough, no contact strayed past the tolerance, and the number of contacts
/// matched the configured count.
#[derive(Clone, Debug, Default)]
pub struct TapGesture {
    config: TapConfig,
    started_at: Option<u64>,
    contacts: usize,
    strayed: bool,
    lifted: SmallVec<[Point; 4]>,
}

impl TapGesture {
    pub fn new(config: TapConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &TapConfig {
        &self.config
    }

    fn check_drift(&mut self, state: &InteractionState) {
        if let Some(input) = state.changed() {
            if input.total_distance() > self.config.tolerance {
                self.strayed = true;
            }
        }
    }
}

impl Gesture for TapGesture {
    fn kind(&self) -> GestureKind {
        GestureKind::Tap
    }

    fn on_start(&mut self, state: &InteractionState) -> Option<GestureResult> {
        if state.len() == 1 {
            self.reset();
            self.started_at = Some(state.time());
        }
        self.contacts += 1;
        None
    }

    fn on_move(&mut self, state: &InteractionState) -> Option<GestureResult> {
        self.check_drift(state);
        None
    }

    fn on_end(&mut self, state: &InteractionState) -> Option<GestureResult> {
        self.check_drift(state);
        if let Some(input) = state.changed() {
            self.lifted.push(input.point());
        }
        if !state.is_empty() {
            return None;
        }

        let started_at = self.started_at?;
        let duration_ms = state.time().saturating_sub(started_at);
        let recognized = !self.strayed
            && self.contacts == self.config.inputs
            && duration_ms <= self.config.max_delay_ms;
        let point = centroid(self.lifted.iter().copied());
        let inputs = self.contacts;
        self.reset();

        if !recognized {
            return None;
        }
        Some(GestureResult::Tap(TapData {
            point: point?,
            time: state.time(),
            duration_ms,
            inputs,
        }))
    }

    fn reset(&mut self) {
        self.started_at = None;
        self.contacts = 0;
        self.strayed = false;
        self.lifted.clear();
    }
}
