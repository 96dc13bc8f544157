//! Pinch (scale) recognizer.

use super::{Gesture, GestureKind, GestureResult};
use crate::gesture_constants::MIN_PINCH_SPREAD;
use crate::input::state::InteractionState;
use tactus_geometry::{average_pairwise_distance, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchConfig {
    /// Contacts that must be down, at least two.
    pub min_inputs: usize,
}

impl Default for PinchConfig {
    fn default() -> Self {
        Self { min_inputs: 2 }
    }
}

impl PinchConfig {
    pub fn with_min_inputs(mut self, min_inputs: usize) -> Self {
        self.min_inputs = min_inputs.max(2);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchData {
    /// Current centroid; the natural anchor for scaling.
    pub point: Point,
    /// Current average pairwise distance between the contacts.
    pub distance: f32,
    /// Scale relative to the spread when the pinch began.
    pub scale: f32,
    /// Scale relative to the previous pinch event.
    pub change: f32,
    pub time: u64,
}

/// Reports how the spread of the contacts changes while enough are down.
///
/// Spread is the average pairwise distance between active contacts. When a
/// contact joins or leaves mid-pinch the spread is re-measured and the scale
/// reached so far is carried over, so `scale` stays continuous.
#[derive(Clone, Debug)]
pub struct PinchGesture {
    config: PinchConfig,
    /// Spread at the start of the current contact set.
    baseline: Option<f32>,
    previous: f32,
    /// Scale accumulated by earlier contact sets of this pinch.
    carried: f32,
}

impl Default for PinchGesture {
    fn default() -> Self {
        Self::new(PinchConfig::default())
    }
}

impl PinchGesture {
    pub fn new(config: PinchConfig) -> Self {
        Self {
            config: PinchConfig::default().with_min_inputs(config.min_inputs),
            baseline: None,
            previous: 0.0,
            carried: 1.0,
        }
    }

    pub fn config(&self) -> &PinchConfig {
        &self.config
    }

    fn spread(&self, state: &InteractionState) -> Option<f32> {
        if state.len() < self.config.min_inputs {
            return None;
        }
        average_pairwise_distance(&state.active_points()).filter(|spread| *spread >= MIN_PINCH_SPREAD)
    }

    /// Closes the current contact set and measures the new one.
    fn rebase(&mut self, state: &InteractionState) {
        if let Some(baseline) = self.baseline.take() {
            self.carried *= self.previous / baseline;
        }
        if let Some(spread) = self.spread(state) {
            self.baseline = Some(spread);
            self.previous = spread;
        }
    }
}

impl Gesture for PinchGesture {
    fn kind(&self) -> GestureKind {
        GestureKind::Pinch
    }

    fn on_start(&mut self, state: &InteractionState) -> Option<GestureResult> {
        if state.len() == 1 {
            self.reset();
        }
        self.rebase(state);
        None
    }

    fn on_move(&mut self, state: &InteractionState) -> Option<GestureResult> {
        let Some(baseline) = self.baseline else {
            // Contacts may have started out too close together to measure.
            self.rebase(state);
            return None;
        };
        let distance = self.spread(state)?;
        let change = distance / self.previous;
        self.previous = distance;
        Some(GestureResult::Pinch(PinchData {
            point: state.centroid()?,
            distance,
            scale: self.carried * distance / baseline,
            change,
            time: state.time(),
        }))
    }

    fn on_end(&mut self, state: &InteractionState) -> Option<GestureResult> {
        if state.is_empty() {
            self.reset();
        } else {
            self.rebase(state);
        }
        None
    }

    fn reset(&mut self) {
        self.baseline = None;
        self.previous = 0.0;
        self.carried = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::types::{PointerPhase, PointerSample};

    fn at(phase: PointerPhase, time: u64, x: f32, y: f32) -> PointerSample {
        PointerSample::new(phase, time, Point::new(x, y))
    }

    fn pinch_data(result: Option<GestureResult>) -> PinchData {
        match result {
            Some(GestureResult::Pinch(data)) => data,
            other => panic!("expected pinch data, got {other:?}"),
        }
    }

    fn two_fingers(pinch: &mut PinchGesture, state: &mut InteractionState) {
        state.add_pointer(1, at(PointerPhase::Start, 0, 0.0, 0.0));
        pinch.on_start(state);
        state.add_pointer(2, at(PointerPhase::Start, 0, 100.0, 0.0));
        pinch.on_start(state);
    }

    #[test]
    fn test_spreading_fingers_scales_up() {
        let mut pinch = PinchGesture::default();
        let mut state = InteractionState::new();
        two_fingers(&mut pinch, &mut state);

        state.update_pointer(2, at(PointerPhase::Move, 10, 150.0, 0.0));
        let first = pinch_data(pinch.on_move(&state));
        assert!((first.scale - 1.5).abs() < 1e-5);
        assert!((first.change - 1.5).abs() < 1e-5);
        assert_eq!(first.point, Point::new(75.0, 0.0));

        state.update_pointer(2, at(PointerPhase::Move, 20, 200.0, 0.0));
        let second = pinch_data(pinch.on_move(&state));
        assert!((second.scale - 2.0).abs() < 1e-5);
        assert!((second.change - 200.0 / 150.0).abs() < 1e-5);
    }

    #[test]
    fn test_single_contact_is_ignored() {
        let mut pinch = PinchGesture::default();
        let mut state = InteractionState::new();
        state.add_pointer(1, at(PointerPhase::Start, 0, 0.0, 0.0));
        pinch.on_start(&state);
        state.update_pointer(1, at(PointerPhase::Move, 10, 50.0, 0.0));
        assert_eq!(pinch.on_move(&state), None);
    }

    #[test]
    fn test_coincident_contacts_do_not_divide_by_zero() {
        let mut pinch = PinchGesture::default();
        let mut state = InteractionState::new();
        state.add_pointer(1, at(PointerPhase::Start, 0, 10.0, 10.0));
        pinch.on_start(&state);
        state.add_pointer(2, at(PointerPhase::Start, 0, 10.0, 10.0));
        pinch.on_start(&state);

        state.update_pointer(2, at(PointerPhase::Move, 10, 10.0, 10.0));
        assert_eq!(pinch.on_move(&state), None);

        // Once the contacts separate the pinch measures from there.
        state.update_pointer(2, at(PointerPhase::Move, 20, 30.0, 10.0));
        assert_eq!(pinch.on_move(&state), None);
        state.update_pointer(2, at(PointerPhase::Move, 30, 50.0, 10.0));
        let data = pinch_data(pinch.on_move(&state));
        assert!((data.scale - 2.0).abs() < 1e-5);
        assert!(data.scale.is_finite());
    }

    #[test]
    fn test_scale_carries_across_third_contact() {
        let mut pinch = PinchGesture::default();
        let mut state = InteractionState::new();
        two_fingers(&mut pinch, &mut state);
        state.update_pointer(2, at(PointerPhase::Move, 10, 200.0, 0.0));
        let before = pinch_data(pinch.on_move(&state));
        assert!((before.scale - 2.0).abs() < 1e-5);

        state.add_pointer(3, at(PointerPhase::Start, 20, 100.0, 300.0));
        pinch.on_start(&state);
        state.update_pointer(3, at(PointerPhase::Move, 30, 100.0, 300.0));
        let after = pinch_data(pinch.on_move(&state));
        assert!((after.scale - 2.0).abs() < 1e-4, "scale {}", after.scale);
        assert!((after.change - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_lifting_all_contacts_resets() {
        let mut pinch = PinchGesture::default();
        let mut state = InteractionState::new();
        two_fingers(&mut pinch, &mut state);
        state.update_pointer(2, at(PointerPhase::Move, 10, 300.0, 0.0));
        pinch.on_move(&state);
        for id in [1, 2] {
            state.remove_pointer(id);
            pinch.on_end(&state);
        }

        two_fingers(&mut pinch, &mut state);
        state.update_pointer(2, at(PointerPhase::Move, 50, 50.0, 0.0));
        let data = pinch_data(pinch.on_move(&state));
        assert!((data.scale - 0.5).abs() < 1e-5, "scale {}", data.scale);
    }
}
