//! Pan recognizer.

use super::{Gesture, GestureKind, GestureResult};
use crate::input::state::InteractionState;
use tactus_geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanConfig {
    /// Contacts that must be down before movement is reported.
    pub min_inputs: usize,
}

impl Default for PanConfig {
    fn default() -> Self {
        Self { min_inputs: 1 }
    }
}

impl PanConfig {
    pub fn with_min_inputs(mut self, min_inputs: usize) -> Self {
        self.min_inputs = min_inputs.max(1);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanData {
    /// Current centroid.
    pub point: Point,
    /// Centroid movement since the previous pan event.
    pub translation: Point,
    pub time: u64,
    pub inputs: usize,
}

/// Reports centroid movement on every move while enough contacts are down.
///
/// The reference centroid is re-taken whenever a contact goes down or lifts,
/// so the centroid jump caused by a changing contact set is never reported as
/// movement.
#[derive(Clone, Debug, Default)]
pub struct PanGesture {
    config: PanConfig,
    last: Option<Point>,
}

impl PanGesture {
    pub fn new(config: PanConfig) -> Self {
        Self { config, last: None }
    }

    pub fn config(&self) -> &PanConfig {
        &self.config
    }

    fn rebase(&mut self, state: &InteractionState) {
        self.last = if state.len() >= self.config.min_inputs {
            state.centroid()
        } else {
            None
        };
    }
}

impl Gesture for PanGesture {
    fn kind(&self) -> GestureKind {
        GestureKind::Pan
    }

    fn on_start(&mut self, state: &InteractionState) -> Option<GestureResult> {
        self.rebase(state);
        None
    }

    fn on_move(&mut self, state: &InteractionState) -> Option<GestureResult> {
        if state.len() < self.config.min_inputs {
            self.last = None;
            return None;
        }
        let point = state.centroid()?;
        let previous = self.last.replace(point)?;
        Some(GestureResult::Pan(PanData {
            point,
            translation: point - previous,
            time: state.time(),
            inputs: state.len(),
        }))
    }

    fn on_end(&mut self, state: &InteractionState) -> Option<GestureResult> {
        self.rebase(state);
        None
    }

    fn reset(&mut self) {
        self.last = None;
    }
}
