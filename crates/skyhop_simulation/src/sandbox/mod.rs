//! Sandbox — headless прогон motion контроллера без rapier
//!
//! `SandboxSim` повторяет порядок host'а: frame фаза на каждый rendered frame,
//! затем столько fixed physics шагов, сколько набралось в accumulator'е
//! (контроллер → интеграция тела). Используется в тестах, в determinism
//! проверках и в headless бинаре.

pub mod body;
pub mod world;

pub use body::{SandboxBody, SANDBOX_GRAVITY};
pub use world::{Block, SandboxWorld};

use bevy::prelude::*;
use rand::Rng;

use crate::motion::{InputSample, JumpOutcome, MotionConfig, MotionDriver, MotionError, MotionSnapshot};
use crate::DeterministicRng;

/// Fixed physics rate (совпадает с Time<Fixed> в SimulationPlugin)
pub const SANDBOX_FIXED_HZ: f32 = 60.0;

/// Один шаг сценария: input держится `frames` кадров подряд
///
/// Edge-события (jump, crouch press/release) доставляются только
/// в первый кадр шага, оси и sprint — во все.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScriptStep {
    pub input: InputSample,
    pub frames: u32,
}

impl ScriptStep {
    pub fn new(input: InputSample, frames: u32) -> Self {
        Self { input, frames }
    }

    /// Пустой input (отпущенные клавиши)
    pub fn idle(frames: u32) -> Self {
        Self::new(InputSample::default(), frames)
    }

    pub fn jump(axis_x: f32) -> Self {
        Self::new(
            InputSample {
                jump: true,
                ..InputSample::horizontal(axis_x)
            },
            1,
        )
    }
}

/// Input без edge-событий (удержание после первого кадра)
fn held(input: InputSample) -> InputSample {
    InputSample {
        jump: false,
        crouch_pressed: false,
        crouch_released: false,
        ..input
    }
}

/// Состояние sandbox'а для сравнения прогонов
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SandboxSnapshot {
    pub frame: u64,
    pub physics_steps: u64,
    pub position: Vec3,
    pub velocity: Vec3,
    pub motion: MotionSnapshot,
}

pub struct SandboxSim {
    driver: MotionDriver<InputSample, SandboxWorld, SandboxBody>,
    fixed_delta: f32,
    accumulator: f32,
    frame: u64,
    physics_steps: u64,
}

impl SandboxSim {
    pub fn new(config: MotionConfig, world: SandboxWorld, spawn: Vec3) -> Result<Self, MotionError> {
        let body = SandboxBody::new(spawn, &config);
        let driver = MotionDriver::new(config, InputSample::default(), world, body)?;

        Ok(Self {
            driver,
            fixed_delta: 1.0 / SANDBOX_FIXED_HZ,
            accumulator: 0.0,
            frame: 0,
            physics_steps: 0,
        })
    }

    /// Один rendered frame: frame фаза + накопленные physics шаги
    ///
    /// Возвращает последний не-None результат jump resolution за этот frame.
    pub fn frame(&mut self, delta: f32, input: InputSample) -> JumpOutcome {
        *self.driver.input_mut() = input.sanitized();
        self.driver.advance_frame(delta);
        self.frame += 1;

        self.accumulator += delta;
        let mut outcome = JumpOutcome::None;
        while self.accumulator >= self.fixed_delta {
            self.accumulator -= self.fixed_delta;

            let step = self.driver.advance_physics_step(self.fixed_delta);
            if step != JumpOutcome::None {
                outcome = step;
            }

            let (world, body) = self.driver.sensors_and_body_mut();
            body.step(self.fixed_delta, world);
            self.physics_steps += 1;
        }

        outcome
    }

    /// Прогон шага сценария с частотой кадров = fixed rate
    ///
    /// Возвращает все не-None результаты прыжков в порядке появления.
    pub fn run_step(&mut self, step: ScriptStep) -> Vec<JumpOutcome> {
        let delta = self.fixed_delta;
        let mut outcomes = Vec::new();

        for index in 0..step.frames {
            let input = if index == 0 { step.input } else { held(step.input) };
            let outcome = self.frame(delta, input);
            if outcome != JumpOutcome::None {
                outcomes.push(outcome);
            }
        }

        outcomes
    }

    pub fn run_script(&mut self, script: &[ScriptStep]) -> Vec<JumpOutcome> {
        script.iter().flat_map(|step| self.run_step(*step)).collect()
    }

    pub fn driver(&self) -> &MotionDriver<InputSample, SandboxWorld, SandboxBody> {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut MotionDriver<InputSample, SandboxWorld, SandboxBody> {
        &mut self.driver
    }

    pub fn body(&self) -> &SandboxBody {
        self.driver.body()
    }

    pub fn snapshot(&self) -> SandboxSnapshot {
        let body = self.driver.body();
        SandboxSnapshot {
            frame: self.frame,
            physics_steps: self.physics_steps,
            position: body.position,
            velocity: body.velocity,
            motion: self.driver.controller().snapshot(),
        }
    }
}

/// Тестовый уровень: пол, низкий потолок (только ползком) и высокая стена
///
/// - пол: x ∈ [-20, 40], верх на y = 0
/// - потолок: x ∈ [8, 12], y ∈ [1.5, 3] (стоя не пролезть, присев — да)
/// - стена: x ∈ [20, 21], до y = 10
/// - по краям и сверху уровень закрыт (случайные прогоны не улетают)
pub fn course() -> SandboxWorld {
    SandboxWorld::new()
        .with_block(Vec2::new(-20.0, -1.0), Vec2::new(40.0, 0.0))
        .with_block(Vec2::new(8.0, 1.5), Vec2::new(12.0, 3.0))
        .with_block(Vec2::new(20.0, 0.0), Vec2::new(21.0, 10.0))
        // Границы
        .with_block(Vec2::new(-21.0, -1.0), Vec2::new(-20.0, 50.0))
        .with_block(Vec2::new(40.0, -1.0), Vec2::new(41.0, 50.0))
        .with_block(Vec2::new(-21.0, 50.0), Vec2::new(41.0, 51.0))
}

/// Скриптовый проход по `course()` со spawn в x = 0
///
/// Ходьба → ползком под потолком → спринт до стены → wall-jump →
/// двойное нажатие в flight, подъём, обратно на землю.
pub fn course_script() -> Vec<ScriptStep> {
    let right = InputSample::horizontal(1.0);

    vec![
        ScriptStep::new(right, 60),
        ScriptStep::new(
            InputSample {
                crouch_pressed: true,
                ..right
            },
            140,
        ),
        ScriptStep::new(
            InputSample {
                crouch_released: true,
                sprint: true,
                ..right
            },
            100,
        ),
        ScriptStep::jump(0.0),
        ScriptStep::idle(20),
        ScriptStep::jump(0.0),
        ScriptStep::idle(240),
        ScriptStep::jump(0.0),
        ScriptStep::idle(3),
        ScriptStep::jump(0.0),
        ScriptStep::new(
            InputSample {
                axes: Vec2::new(0.0, 1.0),
                ..default()
            },
            30,
        ),
        ScriptStep::jump(0.0),
        ScriptStep::idle(3),
        ScriptStep::jump(0.0),
        ScriptStep::idle(120),
    ]
}

/// Случайный сценарий из seeded RNG (один seed → один сценарий)
pub fn random_script(rng: &mut DeterministicRng, steps: usize) -> Vec<ScriptStep> {
    let rng = &mut rng.rng;

    (0..steps)
        .map(|_| {
            let input = InputSample {
                axes: Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0)),
                jump: rng.gen_bool(0.15),
                crouch_pressed: rng.gen_bool(0.05),
                crouch_released: rng.gen_bool(0.05),
                sprint: rng.gen_bool(0.3),
            };
            ScriptStep::new(input, rng.gen_range(1..=30))
        })
        .collect()
}
