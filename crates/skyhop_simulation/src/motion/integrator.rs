//! Physics Integrator контракт
//!
//! Контроллер — клиент внешнего integrator'а: сам ничего не интегрирует,
//! только пишет velocity/impulse/gravity/collider/orientation одного тела.
//! Single-writer: никто кроме владеющего контроллера не меняет эти значения.

use bevy::prelude::*;

pub trait PhysicsIntegrator {
    /// Позиция тела (точка у ног, от неё считаются ground/wall/ceiling probes)
    fn position(&self) -> Vec3;
    fn velocity(&self) -> Vec3;
    fn set_velocity(&mut self, velocity: Vec3);
    /// Мгновенное изменение скорости (не зависит от длины шага)
    fn add_impulse(&mut self, impulse: Vec3);
    fn set_gravity_enabled(&mut self, enabled: bool);
    fn set_collider_height(&mut self, height: f32);
    /// Offset центра collider'а относительно позиции тела
    fn set_collider_center(&mut self, offset: Vec3);
    fn set_rotation(&mut self, rotation: Quat);
}
