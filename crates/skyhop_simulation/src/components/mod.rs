//! ECS Components персонажа
//!
//! Организация:
//! - motion: режим движения, facing, контакт со стеной, присед
//! - input: per-frame input (пишет host, читает frame система)

pub mod input;
pub mod motion;

// Re-exports для удобного импорта
pub use input::*;
pub use motion::*;
