pub mod gestures;
pub mod region;
pub mod state;
pub mod types;

pub use types::{PointerEvent, PointerEventKind, PointerId, PointerPhase, PointerSample};

pub mod prelude {
    pub use super::types::{
        PointerEvent, PointerEventKind, PointerId, PointerPhase, PointerSample,
    };
}
