//! Rotate recognizer.

use super::{Gesture, GestureKind, GestureResult};
use crate::input::state::InteractionState;
use crate::input::types::PointerId;
use smallvec::SmallVec;
use tactus_geometry::{angle_delta, circular_mean, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotateConfig {
    /// Contacts that must be down, at least two.
    pub min_inputs: usize,
}

impl Default for RotateConfig {
    fn default() -> Self {
        Self { min_inputs: 2 }
    }
}

impl RotateConfig {
    pub fn with_min_inputs(mut self, min_inputs: usize) -> Self {
        self.min_inputs = min_inputs.max(2);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotateData {
    /// Current centroid; the pivot of the rotation.
    pub point: Point,
    /// Rotation since the previous rotate event, radians in `(-π, π]`.
    pub delta: f32,
    /// Rotation accumulated since the gesture began, radians, unwrapped.
    pub rotation: f32,
    pub time: u64,
}

/// Reports how the contacts turn around their centroid.
///
/// Each contact's bearing from the centroid is remembered between moves; the
/// reported delta is the circular mean of the per-contact bearing changes,
/// which stays correct when a bearing crosses the ±π boundary.
#[derive(Clone, Debug)]
pub struct RotateGesture {
    config: RotateConfig,
    bearings: SmallVec<[(PointerId, f32); 8]>,
    rotation: f32,
}

impl Default for RotateGesture {
    fn default() -> Self {
        Self::new(RotateConfig::default())
    }
}

impl RotateGesture {
    pub fn new(config: RotateConfig) -> Self {
        Self {
            config: RotateConfig::default().with_min_inputs(config.min_inputs),
            bearings: SmallVec::new(),
            rotation: 0.0,
        }
    }

    pub fn config(&self) -> &RotateConfig {
        &self.config
    }

    fn measure(state: &InteractionState) -> SmallVec<[(PointerId, f32); 8]> {
        let Some(pivot) = state.centroid() else {
            return SmallVec::new();
        };
        state
            .active()
            .map(|input| (input.id, pivot.angle_to(input.point())))
            .collect()
    }

    fn previous_bearing(&self, id: PointerId) -> Option<f32> {
        self.bearings
            .iter()
            .find(|(known, _)| *known == id)
            .map(|(_, bearing)| *bearing)
    }
}

impl Gesture for RotateGesture {
    fn kind(&self) -> GestureKind {
        GestureKind::Rotate
    }

    fn on_start(&mut self, state: &InteractionState) -> Option<GestureResult> {
        if state.len() == 1 {
            self.reset();
        }
        self.bearings = Self::measure(state);
        None
    }

    fn on_move(&mut self, state: &InteractionState) -> Option<GestureResult> {
        let current = Self::measure(state);
        if state.len() < self.config.min_inputs {
            self.bearings = current;
            return None;
        }

        let deltas: SmallVec<[f32; 8]> = current
            .iter()
            .filter_map(|(id, bearing)| {
                self.previous_bearing(*id)
                    .map(|previous| angle_delta(previous, *bearing))
            })
            .collect();
        self.bearings = current;

        let delta = circular_mean(deltas)?;
        self.rotation += delta;
        Some(GestureResult::Rotate(RotateData {
            point: state.centroid()?,
            delta,
            rotation: self.rotation,
            time: state.time(),
        }))
    }

    fn on_end(&mut self, state: &InteractionState) -> Option<GestureResult> {
        if state.is_empty() {
            self.reset();
        } else {
            self.bearings = Self::measure(state);
        }
        None
    }

    fn reset(&mut self) {
        self.bearings.clear();
        self.rotation = 0.0;
    }
}
