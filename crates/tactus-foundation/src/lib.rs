//! Foundation of Tactus: pointer input, interaction state, gesture recognizers
//! and the region dispatcher that ties them together.

pub mod clock;
pub mod error;
pub mod gesture_constants;
pub mod history;
pub mod input;

// Re-export commonly used items
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::DispatchError;
pub use history::History;
pub use input::gestures::{
    Gesture, GestureKind, GestureResult, PanConfig, PanData, PanGesture, PinchConfig, PinchData,
    PinchGesture, PressConfig, PressData, PressGesture, RotateConfig, RotateData, RotateGesture,
    SwipeData, SwipeGesture, TapConfig, TapData, TapGesture,
};
pub use input::region::{Everywhere, GestureEvent, HitFn, HitTarget, Region, TargetId};
pub use input::state::{InteractionState, PointerInput};
pub use input::{PointerEvent, PointerEventKind, PointerId, PointerPhase, PointerSample};
pub use tactus_geometry::{Point, Rect};

pub mod prelude {
    pub use crate::clock::{Clock, ManualClock, SystemClock};
    pub use crate::error::DispatchError;
    pub use crate::input::gestures::{Gesture, GestureKind, GestureResult};
    pub use crate::input::prelude::*;
    pub use crate::input::region::{Everywhere, GestureEvent, HitFn, HitTarget, Region, TargetId};
    pub use crate::input::state::InteractionState;
}
