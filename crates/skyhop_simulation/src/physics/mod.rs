//! Physics integration module
//!
//! Motion контроллер поверх bevy_rapier3d: сенсоры, тело, ECS системы.

pub mod collision;
pub mod movement;
pub mod rapier;

// Re-export основных типов
pub use movement::{
    activate_motion_controllers,
    motion_frame_system,
    motion_physics_system,
    spawn_motion_character,
    MotionPlugin,
};
pub use rapier::{MotionCollider, RapierBody, RapierSensors};
