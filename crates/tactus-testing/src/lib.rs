//! Testing utilities and harness for Tactus

pub mod robot;
pub mod robot_assertions;

// Re-export testing utilities
pub use robot::*;

pub mod prelude {
    pub use crate::robot::*;
    pub use crate::robot_assertions;
}
