//! Skyhop Simulation Core
//!
//! Side-view платформер контроллер персонажа на Bevy 0.16 + bevy_rapier3d.
//!
//! Слои:
//! - `motion` = engine-agnostic контроллер (input → решение → команды телу)
//! - `physics` = ECS системы и адаптеры поверх rapier
//! - `sandbox` = headless мир из AABB блоков (тесты, determinism, бинарь)

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod components;
pub mod logger;
pub mod motion;
pub mod physics;
pub mod sandbox;

// Re-export базовых типов для удобства
pub use components::*;
pub use logger::{init_logger, log, log_error, log_info, log_warning, LogLevel, LogPrinter};
pub use motion::{
    InputSample, InputSource, JumpMode, JumpOutcome, LayerMask, MotionConfig, MotionController, MotionDriver,
    MotionError, PhysicsIntegrator, SpatialQuery, SpeedProfile,
};
pub use physics::{spawn_motion_character, MotionPlugin};
pub use sandbox::{SandboxSim, SandboxWorld};

/// Главный plugin симуляции
///
/// RapierPhysicsPlugin host добавляет сам: timestep mode и scale зависят от host'а.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для physics фазы контроллера
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            // Детерминистичный RNG (seed по умолчанию)
            .insert_resource(DeterministicRng::new(42))
            .add_plugins(MotionPlugin);
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}
