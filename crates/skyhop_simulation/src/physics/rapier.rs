//! Rapier адаптеры для motion контроллера
//!
//! - `RapierSensors`: SpatialQuery поверх RapierContext (`intersect_shape` + `cast_ray`)
//! - `RapierBody`: PhysicsIntegrator поверх компонентов rapier тела
//!
//! Адаптеры живут один вызов системы: собираются из query item'ов,
//! контроллер через них читает/пишет, после чего они отбрасываются.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::motion::{LayerMask, MotionConfig, PhysicsIntegrator, SpatialQuery};

use super::collision::probe_filter;

/// Форма capsule collider'а персонажа (позиция тела = точка у ног)
///
/// Rapier Collider неизменяем, поэтому храним параметры отдельно
/// и пересобираем Collider только когда они реально поменялись.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MotionCollider {
    pub radius: f32,
    pub height: f32,
    /// Offset центра capsule от позиции тела
    pub center: Vec3,
}

impl MotionCollider {
    pub fn standing(config: &MotionConfig) -> Self {
        Self {
            radius: config.collider_radius,
            height: config.standing_height,
            center: Vec3::Y * (config.standing_height * 0.5),
        }
    }

    /// Capsule вдоль Y, сдвинутая на center
    pub fn build(&self) -> Collider {
        let half_height = (self.height * 0.5 - self.radius).max(0.0);
        Collider::compound(vec![(
            self.center,
            Quat::IDENTITY,
            Collider::capsule_y(half_height, self.radius),
        )])
    }
}

pub struct RapierSensors<'a, 'w> {
    pub context: &'a RapierContext<'w>,
    /// Собственное тело персонажа (исключается из запросов)
    pub body: Entity,
}

impl SpatialQuery for RapierSensors<'_, '_> {
    fn is_grounded(&self, position: Vec3, radius: f32, mask: LayerMask) -> bool {
        let probe = Collider::ball(radius);
        let mut hit = false;
        self.context.intersect_shape(
            position,
            Quat::IDENTITY,
            &*probe.raw,
            probe_filter(mask, self.body),
            |_| {
                hit = true;
                // Первого пересечения достаточно
                false
            },
        );
        hit
    }

    fn raycast_hits(&self, origin: Vec3, direction: Vec3, max_distance: f32, mask: LayerMask) -> bool {
        self.context
            .cast_ray(origin, direction, max_distance, true, probe_filter(mask, self.body))
            .is_some()
    }
}

pub struct RapierBody<'a> {
    pub transform: &'a mut Transform,
    pub velocity: &'a mut Velocity,
    pub impulse: &'a mut ExternalImpulse,
    pub gravity: &'a mut GravityScale,
    pub collider: &'a mut Collider,
    pub shape: &'a mut MotionCollider,
}

impl RapierBody<'_> {
    fn update_shape(&mut self, shape: MotionCollider) {
        if *self.shape != shape {
            *self.shape = shape;
            *self.collider = shape.build();
        }
    }
}

impl PhysicsIntegrator for RapierBody<'_> {
    fn position(&self) -> Vec3 {
        self.transform.translation
    }

    fn velocity(&self) -> Vec3 {
        self.velocity.linvel
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity.linvel = velocity;
    }

    fn add_impulse(&mut self, impulse: Vec3) {
        // Rapier сбрасывает ExternalImpulse после каждого шага
        self.impulse.impulse += impulse;
    }

    fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity.0 = if enabled { 1.0 } else { 0.0 };
    }

    fn set_collider_height(&mut self, height: f32) {
        let shape = MotionCollider {
            height,
            ..*self.shape
        };
        self.update_shape(shape);
    }

    fn set_collider_center(&mut self, offset: Vec3) {
        let shape = MotionCollider {
            center: offset,
            ..*self.shape
        };
        self.update_shape(shape);
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.transform.rotation = rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standing_shape_sits_on_feet() {
        let shape = MotionCollider::standing(&MotionConfig::default());

        assert_eq!(shape.radius, 0.5);
        assert_eq!(shape.height, 2.0);
        assert_eq!(shape.center, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_rapier_body_rebuilds_collider_on_crouch() {
        let config = MotionConfig::default();
        let mut transform = Transform::default();
        let mut velocity = Velocity::default();
        let mut impulse = ExternalImpulse::default();
        let mut gravity = GravityScale(1.0);
        let mut shape = MotionCollider::standing(&config);
        let mut collider = shape.build();

        let mut body = RapierBody {
            transform: &mut transform,
            velocity: &mut velocity,
            impulse: &mut impulse,
            gravity: &mut gravity,
            collider: &mut collider,
            shape: &mut shape,
        };

        body.set_collider_height(config.crouch_height);
        body.set_collider_center(Vec3::Y * 0.5);
        body.add_impulse(Vec3::Y * 10.0);
        body.add_impulse(Vec3::X);
        body.set_gravity_enabled(false);

        assert_eq!(shape.height, 1.0);
        assert_eq!(shape.center, Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(impulse.impulse, Vec3::new(1.0, 10.0, 0.0));
        assert_eq!(gravity.0, 0.0);
    }
}
