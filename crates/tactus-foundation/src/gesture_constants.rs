//! Shared gesture constants for consistent touch/pointer handling.
//!
//! Every configurable recognizer builds its `Default` configuration from the
//! values below, so tap slop and press slop agree with each other unless a
//! caller overrides one of them explicitly.
//!
//! # DPI Considerations
//!
//! Distances are in logical pixels. Platform adapters convert physical pixels
//! before events reach the engine, so these values hold across densities.

/// Drag threshold in logical pixels.
///
/// A contact that travels further than this from where it went down is no
/// longer a candidate for a tap or a press.
///
/// Matches common platform conventions (Android uses ~8dp for
/// ViewConfiguration.TOUCH_SLOP).
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Longest time, in milliseconds, between the first contact going down and the
/// last contact lifting for the interaction to still count as a tap.
pub const TAP_MAX_DELAY_MS: u64 = 300;

/// How long, in milliseconds, contacts must be held still before a press is
/// recognized.
pub const PRESS_DELAY_MS: u64 = 1_000;

/// Number of centroid samples a swipe keeps while contacts are moving.
pub const SWIPE_HISTORY_SIZE: usize = 7;

/// Maximum age, in milliseconds, of a swipe candidate at the moment the last
/// contact lifts.
pub const SWIPE_VALIDITY_MS: u64 = 300;

/// Contacts a swipe needs before it records movement.
pub const SWIPE_REQUIRED_INPUTS: usize = 1;

/// Smallest average contact spread, in logical pixels, a pinch will divide by.
///
/// Two contacts reported at the same coordinate would otherwise produce an
/// infinite scale ratio.
pub const MIN_PINCH_SPREAD: f32 = 1.0;
