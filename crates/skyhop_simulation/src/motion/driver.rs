//! MotionDriver — контроллер + его collaborators в одном владельце
//!
//! Dependency injection вместо поиска компонентов по иерархии:
//! input, сенсоры и тело передаются при создании. Сам driver не содержит
//! цикла — `advance_frame`/`advance_physics_step` дёргает внешний simulation loop.

use super::config::MotionConfig;
use super::controller::{JumpOutcome, MotionController};
use super::error::MotionError;
use super::input::InputSource;
use super::integrator::PhysicsIntegrator;
use super::sensors::SpatialQuery;

pub struct MotionDriver<I, S, P> {
    controller: MotionController,
    input: I,
    sensors: S,
    body: P,
}

impl<I, S, P> MotionDriver<I, S, P>
where
    I: InputSource,
    S: SpatialQuery,
    P: PhysicsIntegrator,
{
    pub fn new(config: MotionConfig, input: I, sensors: S, mut body: P) -> Result<Self, MotionError> {
        let controller = MotionController::new(config)?;
        controller.attach(&mut body);

        Ok(Self {
            controller,
            input,
            sensors,
            body,
        })
    }

    pub fn advance_frame(&mut self, delta: f32) {
        self.controller
            .advance_frame(delta, &self.input, &self.sensors, &mut self.body);
    }

    pub fn advance_physics_step(&mut self, delta: f32) -> JumpOutcome {
        self.controller.advance_physics_step(delta, &mut self.body)
    }

    pub fn toggle_flight(&mut self) -> bool {
        self.controller.toggle_flight(&mut self.body)
    }

    pub fn controller(&self) -> &MotionController {
        &self.controller
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn body(&self) -> &P {
        &self.body
    }

    /// Раздельный доступ: тело мутируется integrator'ом, сенсоры читаются
    pub fn sensors_and_body_mut(&mut self) -> (&S, &mut P) {
        (&self.sensors, &mut self.body)
    }
}
