//! Ошибки активации контроллера
//!
//! Только configuration faults: обнаруживаются один раз при создании
//! и отменяют активацию. Per-frame логика не возвращает ошибок.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("{name} must be a positive finite number, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("{name} must be a non-negative finite number, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("{name} must be finite")]
    NotFinite { name: &'static str },

    #[error("crouch height {crouch} must be strictly less than standing height {standing}")]
    CrouchNotShorter { crouch: f32, standing: f32 },

    #[error("ground mask is empty: ground/wall/ceiling checks could never hit")]
    EmptyGroundMask,

    #[error("entity {0} has no {1}: motion controller cannot be activated")]
    MissingBodyPart(String, &'static str),
}
