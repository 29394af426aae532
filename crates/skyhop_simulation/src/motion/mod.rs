//! Motion domain — engine-independent контроллер персонажа
//!
//! Содержит:
//! - MotionController (state machine + кинематика, две фазы за tick)
//! - MotionDriver (контроллер + injected collaborators)
//! - контракты collaborators: InputSource, SpatialQuery, PhysicsIntegrator
//! - MotionConfig (tunables) и MotionError (configuration faults)

pub mod config;
pub mod controller;
pub mod driver;
pub mod error;
pub mod input;
pub mod integrator;
pub mod rotation;
pub mod sensors;

// Test doubles + tests (separate files with _tests suffix)
#[cfg(test)]
mod test_support;
#[cfg(test)]
mod config_tests;

pub use config::{JumpMode, LayerMask, MotionConfig, SpeedProfile};
pub use controller::{JumpOutcome, MotionController, MotionSnapshot};
pub use driver::MotionDriver;
pub use error::MotionError;
pub use input::{InputSample, InputSource};
pub use integrator::PhysicsIntegrator;
pub use sensors::SpatialQuery;
