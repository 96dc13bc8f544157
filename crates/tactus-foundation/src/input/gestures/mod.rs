//! Gesture recognizers.
//!
//! Every recognizer is a small state machine driven by the region through the
//! [`Gesture`] hooks, one hook per pointer phase:
//!
//! ```text
//! idle ──start──▶ tracking ──move*──▶ tracking ──end──▶ idle (maybe emits)
//!                    │                                   ▲
//!                    └──────────────cancel───────────────┘ (never emits)
//! ```
//!
//! Recognizers read the shared [`InteractionState`] and keep everything else in
//! private buffers, so any combination of them can be bound to one target
//! without interfering. An event that does not satisfy a recognizer's input
//! count simply leaves that recognizer's buffers untouched.

pub mod pan;
pub mod pinch;
pub mod press;
pub mod rotate;
pub mod swipe;
pub mod tap;

pub use pan::{PanConfig, PanData, PanGesture};
pub use pinch::{PinchConfig, PinchData, PinchGesture};
pub use press::{PressConfig, PressData, PressGesture};
pub use rotate::{RotateConfig, RotateData, RotateGesture};
pub use swipe::{SwipeData, SwipeGesture};
pub use tap::{TapConfig, TapData, TapGesture};

use super::state::InteractionState;
use super::types::PointerPhase;
use std::fmt;
use tactus_geometry::Point;

/// Lifecycle contract shared by all recognizers.
///
/// Hooks return `None` when nothing was recognized on this call; that is the
/// common case and never an error. The same instance is reused across
/// interactions and resets itself on `start`/`cancel` as needed.
pub trait Gesture {
    fn kind(&self) -> GestureKind;

    /// A contact went down.
    fn on_start(&mut self, state: &InteractionState) -> Option<GestureResult>;

    /// A contact moved. Must only touch bounded buffers.
    fn on_move(&mut self, state: &InteractionState) -> Option<GestureResult>;

    /// A contact lifted. `state` no longer lists it as active.
    fn on_end(&mut self, state: &InteractionState) -> Option<GestureResult>;

    /// The platform invalidated a contact. Resets without emitting.
    fn on_cancel(&mut self, _state: &InteractionState) {
        self.reset();
    }

    /// Returns to the idle state, discarding buffered and cached data.
    fn reset(&mut self);

    /// Routes a phase to the matching hook.
    fn handle(&mut self, phase: PointerPhase, state: &InteractionState) -> Option<GestureResult> {
        match phase {
            PointerPhase::Start => self.on_start(state),
            PointerPhase::Move => self.on_move(state),
            PointerPhase::End => self.on_end(state),
            PointerPhase::Cancel => {
                self.on_cancel(state);
                None
            }
        }
    }
}

/// Registry of the built-in recognizers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    Tap,
    Pan,
    Swipe,
    Pinch,
    Rotate,
    Press,
}

impl GestureKind {
    pub const ALL: [GestureKind; 6] = [
        GestureKind::Tap,
        GestureKind::Pan,
        GestureKind::Swipe,
        GestureKind::Pinch,
        GestureKind::Rotate,
        GestureKind::Press,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GestureKind::Tap => "tap",
            GestureKind::Pan => "pan",
            GestureKind::Swipe => "swipe",
            GestureKind::Pinch => "pinch",
            GestureKind::Rotate => "rotate",
            GestureKind::Press => "press",
        }
    }

    /// Builds a recognizer of this kind with its default configuration.
    pub fn create(self) -> Box<dyn Gesture> {
        match self {
            GestureKind::Tap => Box::new(TapGesture::default()),
            GestureKind::Pan => Box::new(PanGesture::default()),
            GestureKind::Swipe => Box::new(SwipeGesture::default()),
            GestureKind::Pinch => Box::new(PinchGesture::default()),
            GestureKind::Rotate => Box::new(RotateGesture::default()),
            GestureKind::Press => Box::new(PressGesture::default()),
        }
    }
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A recognized gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureResult {
    Tap(TapData),
    Pan(PanData),
    Swipe(SwipeData),
    Pinch(PinchData),
    Rotate(RotateData),
    Press(PressData),
}

impl GestureResult {
    pub fn kind(&self) -> GestureKind {
        match self {
            GestureResult::Tap(_) => GestureKind::Tap,
            GestureResult::Pan(_) => GestureKind::Pan,
            GestureResult::Swipe(_) => GestureKind::Swipe,
            GestureResult::Pinch(_) => GestureKind::Pinch,
            GestureResult::Rotate(_) => GestureKind::Rotate,
            GestureResult::Press(_) => GestureKind::Press,
        }
    }

    /// Where the gesture happened.
    pub fn point(&self) -> Point {
        match self {
            GestureResult::Tap(data) => data.point,
            GestureResult::Pan(data) => data.point,
            GestureResult::Swipe(data) => data.point,
            GestureResult::Pinch(data) => data.point,
            GestureResult::Rotate(data) => data.point,
            GestureResult::Press(data) => data.point,
        }
    }

    /// When the gesture happened, in milliseconds.
    pub fn time(&self) -> u64 {
        match self {
            GestureResult::Tap(data) => data.time,
            GestureResult::Pan(data) => data.time,
            GestureResult::Swipe(data) => data.time,
            GestureResult::Pinch(data) => data.time,
            GestureResult::Rotate(data) => data.time,
            GestureResult::Press(data) => data.time,
        }
    }
}
