//! Swipe recognizer.
//!
//! A swipe is one or more contacts moving in roughly the same direction and
//! leaving the surface while still moving fast. The recognizer samples the
//! centroid on every move and, when the last contact lifts, estimates the
//! release direction and peak speed from the most recent window of samples.

use super::{Gesture, GestureKind, GestureResult};
use crate::gesture_constants::{SWIPE_HISTORY_SIZE, SWIPE_REQUIRED_INPUTS, SWIPE_VALIDITY_MS};
use crate::history::History;
use crate::input::state::InteractionState;
use tactus_geometry::{circular_mean, wrap_angle, Point};

/// Data emitted when a swipe is recognized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeData {
    /// Centroid at the newest sample of the window.
    pub point: Point,
    /// Peak speed across the window, in logical pixels per millisecond.
    pub velocity: f32,
    /// Direction of travel in radians, wrapped into `(-π, π]`, zero along +x.
    pub direction: f32,
    /// Time of the newest sample of the window.
    pub time: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Move {
    time: u64,
    point: Point,
}

#[derive(Clone, Debug, Default)]
pub struct SwipeGesture {
    moves: History<Move, SWIPE_HISTORY_SIZE>,
    /// Candidate computed when a contact lifted while others stayed down.
    saved: Option<SwipeData>,
}

impl SwipeGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// The candidate waiting for the remaining contacts to lift.
    pub fn saved(&self) -> Option<SwipeData> {
        self.saved
    }

    /// Number of centroid samples currently buffered.
    pub fn buffered(&self) -> usize {
        self.moves.len()
    }

    /// Clears the sample window and the cached candidate.
    pub fn refresh(&mut self) {
        self.moves.clear();
        self.saved = None;
    }

    /// Estimates a swipe from the sample window.
    ///
    /// Without a full window there is not enough history for a fresh estimate,
    /// so the cached candidate (if any) is returned unchanged.
    fn candidate(&self) -> Option<SwipeData> {
        if !self.moves.is_full() {
            return self.saved;
        }
        let newest = self.moves.newest()?;
        let velocity = peak_velocity(&self.moves);
        let direction = release_direction(&self.moves, newest.point)?;
        Some(SwipeData {
            point: newest.point,
            velocity,
            direction,
            time: newest.time,
        })
    }

    /// Only a candidate still in flight when the last contact lifts is kept.
    ///
    /// Freshness is measured from the candidate's own newest sample, so a
    /// candidate cached by an early lift ages while the other contacts stay down.
    fn validate(data: Option<SwipeData>, now: u64) -> Option<SwipeData> {
        let data = data?;
        if now.saturating_sub(data.time) > SWIPE_VALIDITY_MS {
            log::debug!(
                "swipe candidate rejected: {}ms old",
                now.saturating_sub(data.time)
            );
            return None;
        }
        Some(data)
    }
}

/// Circular mean of the angles from every older sample to the newest one.
fn release_direction(moves: &History<Move, SWIPE_HISTORY_SIZE>, newest: Point) -> Option<f32> {
    let older = moves.len().saturating_sub(1);
    circular_mean(moves.iter().take(older).map(|m| m.point.angle_to(newest))).map(wrap_angle)
}

/// Fastest step between consecutive samples.
///
/// One millisecond is added to every interval so samples sharing a timestamp
/// do not divide by zero.
fn peak_velocity(moves: &History<Move, SWIPE_HISTORY_SIZE>) -> f32 {
    moves
        .pairs()
        .map(|(start, end)| {
            let distance = end.point.distance_to(start.point);
            let elapsed = end.time.saturating_sub(start.time) as f32 + 1.0;
            distance / elapsed
        })
        .fold(0.0f32, f32::max)
}

impl Gesture for SwipeGesture {
    fn kind(&self) -> GestureKind {
        GestureKind::Swipe
    }

    fn on_start(&mut self, _state: &InteractionState) -> Option<GestureResult> {
        self.refresh();
        None
    }

    fn on_move(&mut self, state: &InteractionState) -> Option<GestureResult> {
        if state.len() >= SWIPE_REQUIRED_INPUTS {
            if let Some(point) = state.centroid() {
                self.moves.push(Move {
                    time: state.time(),
                    point,
                });
            }
        }
        None
    }

    fn on_end(&mut self, state: &InteractionState) -> Option<GestureResult> {
        let result = self.candidate();
        self.moves.clear();

        if !state.is_empty() {
            self.saved = result;
            return None;
        }

        self.saved = None;
        Self::validate(result, state.time()).map(GestureResult::Swipe)
    }

    fn reset(&mut self) {
        self.refresh();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::types::{PointerPhase, PointerSample};
    use std::f32::consts::{FRAC_PI_2, PI};

    fn at(phase: PointerPhase, time: u64, x: f32, y: f32) -> PointerSample {
        PointerSample::new(phase, time, Point::new(x, y))
    }

    /// Single contact: down at the origin, then seven moves along +x, 10ms apart.
    fn drive_line(swipe: &mut SwipeGesture, state: &mut InteractionState) {
        state.add_pointer(1, at(PointerPhase::Start, 0, 0.0, 0.0));
        swipe.on_start(state);
        for step in 0..7u64 {
            let x = step as f32 * 10.0;
            state.update_pointer(1, at(PointerPhase::Move, step * 10, x, 0.0));
            assert_eq!(swipe.on_move(state), None);
        }
    }

    fn lift(state: &mut InteractionState, id: u64, time: u64) {
        let point = state.get(id).map(|input| input.point()).unwrap_or_default();
        state.update_pointer(id, PointerSample::new(PointerPhase::End, time, point));
        state.remove_pointer(id);
    }

    #[test]
    fn test_straight_swipe_is_recognized() {
        let mut swipe = SwipeGesture::new();
        let mut state = InteractionState::new();
        drive_line(&mut swipe, &mut state);
        lift(&mut state, 1, 60);

        let Some(GestureResult::Swipe(data)) = swipe.on_end(&state) else {
            panic!("expected a swipe");
        };
        assert!(data.direction.abs() < 1e-5, "direction {}", data.direction);
        assert!(data.velocity > 0.0);
        assert!((data.velocity - 10.0 / 11.0).abs() < 1e-5, "velocity {}", data.velocity);
        assert_eq!(data.point, Point::new(60.0, 0.0));
        assert_eq!(data.time, 60);
    }

    #[test]
    fn test_stale_swipe_is_rejected() {
        let mut swipe = SwipeGesture::new();
        let mut state = InteractionState::new();
        drive_line(&mut swipe, &mut state);
        lift(&mut state, 1, 560);

        assert_eq!(swipe.on_end(&state), None);
        assert_eq!(swipe.saved(), None);
    }

    #[test]
    fn test_validity_window_is_inclusive() {
        let mut swipe = SwipeGesture::new();
        let mut state = InteractionState::new();
        drive_line(&mut swipe, &mut state);
        lift(&mut state, 1, 60 + SWIPE_VALIDITY_MS);

        assert!(swipe.on_end(&state).is_some());
    }

    #[test]
    fn test_short_history_falls_back_to_saved() {
        let mut swipe = SwipeGesture::new();
        let mut state = InteractionState::new();
        state.add_pointer(1, at(PointerPhase::Start, 0, 0.0, 0.0));
        swipe.on_start(&state);
        for step in 0..6u64 {
            state.update_pointer(1, at(PointerPhase::Move, step * 10, step as f32 * 10.0, 0.0));
            swipe.on_move(&state);
        }
        lift(&mut state, 1, 55);

        assert_eq!(swipe.on_end(&state), None, "nothing was ever cached");
    }

    #[test]
    fn test_velocity_is_peak_not_mean() {
        let mut swipe = SwipeGesture::new();
        let mut state = InteractionState::new();
        state.add_pointer(1, at(PointerPhase::Start, 0, 0.0, 0.0));
        swipe.on_start(&state);
        // Six slow 1px steps, then one fast 50px step.
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 55.0];
        for (step, x) in xs.iter().enumerate() {
            state.update_pointer(1, at(PointerPhase::Move, step as u64 * 10, *x, 0.0));
            swipe.on_move(&state);
        }
        lift(&mut state, 1, 61);

        let Some(GestureResult::Swipe(data)) = swipe.on_end(&state) else {
            panic!("expected a swipe");
        };
        assert!((data.velocity - 50.0 / 11.0).abs() < 1e-5, "velocity {}", data.velocity);
    }

    #[test]
    fn test_same_timestamp_samples_do_not_divide_by_zero() {
        let mut swipe = SwipeGesture::new();
        let mut state = InteractionState::new();
        state.add_pointer(1, at(PointerPhase::Start, 0, 0.0, 0.0));
        swipe.on_start(&state);
        for step in 0..7 {
            state.update_pointer(1, at(PointerPhase::Move, 0, 0.0, step as f32 * 5.0));
            swipe.on_move(&state);
        }
        lift(&mut state, 1, 0);

        let Some(GestureResult::Swipe(data)) = swipe.on_end(&state) else {
            panic!("expected a swipe");
        };
        assert!(data.velocity.is_finite());
        assert_eq!(data.velocity, 5.0);
        assert!((data.direction - FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn test_leftward_direction_is_wrapped() {
        let mut swipe = SwipeGesture::new();
        let mut state = InteractionState::new();
        state.add_pointer(1, at(PointerPhase::Start, 0, 0.0, 0.0));
        swipe.on_start(&state);
        for step in 0..7u64 {
            state.update_pointer(1, at(PointerPhase::Move, step * 10, -(step as f32) * 10.0, 0.0));
            swipe.on_move(&state);
        }
        lift(&mut state, 1, 60);

        let Some(GestureResult::Swipe(data)) = swipe.on_end(&state) else {
            panic!("expected a swipe");
        };
        assert!(data.direction > -PI && data.direction <= PI, "direction {}", data.direction);
        assert!((data.direction.abs() - PI).abs() < 1e-5, "direction {}", data.direction);
    }

    #[test]
    fn test_window_keeps_most_recent_samples() {
        let mut swipe = SwipeGesture::new();
        let mut state = InteractionState::new();
        state.add_pointer(1, at(PointerPhase::Start, 0, 0.0, 0.0));
        swipe.on_start(&state);
        // Moving left first, then right: only the rightward tail is kept.
        for step in 0..10u64 {
            state.update_pointer(1, at(PointerPhase::Move, step, -(step as f32), 0.0));
            swipe.on_move(&state);
        }
        for step in 0..7u64 {
            state.update_pointer(1, at(PointerPhase::Move, 10 + step, step as f32 * 4.0, 0.0));
            swipe.on_move(&state);
        }
        assert_eq!(swipe.buffered(), SWIPE_HISTORY_SIZE);
        lift(&mut state, 1, 20);

        let Some(GestureResult::Swipe(data)) = swipe.on_end(&state) else {
            panic!("expected a swipe");
        };
        assert!(data.direction.abs() < 1e-5, "direction {}", data.direction);
    }

    #[test]
    fn test_end_with_contacts_remaining_caches_candidate() {
        let mut swipe = SwipeGesture::new();
        let mut state = InteractionState::new();
        state.add_pointer(1, at(PointerPhase::Start, 0, 0.0, 0.0));
        swipe.on_start(&state);
        state.add_pointer(2, at(PointerPhase::Start, 0, 0.0, 20.0));
        swipe.on_start(&state);
        for step in 0..7u64 {
            let x = step as f32 * 10.0;
            state.update_pointer(1, at(PointerPhase::Move, step * 10, x, 0.0));
            swipe.on_move(&state);
            state.update_pointer(2, at(PointerPhase::Move, step * 10, x, 20.0));
            swipe.on_move(&state);
        }

        lift(&mut state, 1, 65);
        assert_eq!(swipe.on_end(&state), None);
        let saved = swipe.saved().expect("candidate cached while a contact remains");
        assert_eq!(swipe.buffered(), 0);

        lift(&mut state, 2, 70);
        assert_eq!(swipe.on_end(&state), Some(GestureResult::Swipe(saved)));
        assert_eq!(swipe.saved(), None);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut swipe = SwipeGesture::new();
        let mut state = InteractionState::new();
        drive_line(&mut swipe, &mut state);

        swipe.on_cancel(&state);
        let once = (swipe.buffered(), swipe.saved());
        swipe.on_cancel(&state);
        assert_eq!((swipe.buffered(), swipe.saved()), once);
        assert_eq!(once, (0, None));
    }

    #[test]
    fn test_moves_without_contacts_are_ignored() {
        let mut swipe = SwipeGesture::new();
        let state = InteractionState::new();
        swipe.on_move(&state);
        assert_eq!(swipe.buffered(), 0);
    }
}
