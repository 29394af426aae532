//! Test doubles: сенсоры с фиксированными ответами и тело, записывающее команды

use bevy::prelude::*;

use super::config::LayerMask;
use super::integrator::PhysicsIntegrator;
use super::sensors::SpatialQuery;

/// Сенсоры с заранее заданными ответами
///
/// Горизонтальные лучи выше `split_height` считаются "верхним" wall probe,
/// ниже — "нижним". Лучи вверх — проверка потолка.
#[derive(Debug, Clone, Copy)]
pub struct StubSensors {
    pub grounded: bool,
    pub lower_wall: bool,
    pub upper_wall: bool,
    pub ceiling: bool,
    pub split_height: f32,
}

impl Default for StubSensors {
    fn default() -> Self {
        Self {
            grounded: true,
            lower_wall: false,
            upper_wall: false,
            ceiling: false,
            split_height: 1.5,
        }
    }
}

impl StubSensors {
    pub fn airborne_at_wall() -> Self {
        Self {
            grounded: false,
            lower_wall: true,
            upper_wall: true,
            ..default()
        }
    }
}

impl SpatialQuery for StubSensors {
    fn is_grounded(&self, _position: Vec3, _radius: f32, _mask: LayerMask) -> bool {
        self.grounded
    }

    fn raycast_hits(&self, origin: Vec3, direction: Vec3, _max_distance: f32, _mask: LayerMask) -> bool {
        if direction.y > 0.5 {
            self.ceiling
        } else if origin.y > self.split_height {
            self.upper_wall
        } else {
            self.lower_wall
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyCommand {
    SetVelocity(Vec3),
    Impulse(Vec3),
}

/// Тело, которое только запоминает что с ним делали
///
/// Impulse сразу добавляется к velocity (unit mass).
#[derive(Debug, Clone)]
pub struct RecordingBody {
    pub position: Vec3,
    pub velocity: Vec3,
    pub gravity_enabled: bool,
    pub collider_height: f32,
    pub collider_center: Vec3,
    pub rotation: Quat,
    pub commands: Vec<BodyCommand>,
}

impl Default for RecordingBody {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            gravity_enabled: true,
            collider_height: 0.0,
            collider_center: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            commands: Vec::new(),
        }
    }
}

impl RecordingBody {
    pub fn last_commands(&self, count: usize) -> &[BodyCommand] {
        let start = self.commands.len().saturating_sub(count);
        &self.commands[start..]
    }

    pub fn impulses(&self) -> Vec<Vec3> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                BodyCommand::Impulse(impulse) => Some(*impulse),
                BodyCommand::SetVelocity(_) => None,
            })
            .collect()
    }
}

impl PhysicsIntegrator for RecordingBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
        self.commands.push(BodyCommand::SetVelocity(velocity));
    }

    fn add_impulse(&mut self, impulse: Vec3) {
        self.velocity += impulse;
        self.commands.push(BodyCommand::Impulse(impulse));
    }

    fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity_enabled = enabled;
    }

    fn set_collider_height(&mut self, height: f32) {
        self.collider_height = height;
    }

    fn set_collider_center(&mut self, offset: Vec3) {
        self.collider_center = offset;
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }
}
