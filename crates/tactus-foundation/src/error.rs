use crate::input::PointerId;
use crate::input::region::TargetId;
use thiserror::Error;

/// Integration errors reported by [`Region`](crate::Region).
///
/// "No gesture recognized" is never an error; these only surface for call
/// sequences the platform layer should not have produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// A move, end or cancel arrived for a pointer that never started.
    #[error("pointer {0} is not active")]
    UnknownPointer(PointerId),
    /// A start arrived for a pointer that is already down.
    #[error("pointer {0} is already active")]
    DuplicatePointer(PointerId),
    /// A binding referred to a target that is not registered.
    #[error("target {0:?} is not registered")]
    UnknownTarget(TargetId),
}
