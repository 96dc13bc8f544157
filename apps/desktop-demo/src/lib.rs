//! Tactus desktop demo: every recognizer bound to a window, with pinches
//! driving a small scene under a switchable scale policy.

pub mod app;
pub mod demo;
pub mod scales;

pub use app::run;
pub use demo::{describe, Demo};
pub use scales::{ScalePolicy, ScaleTarget, Scene, View};
