//! SandboxBody — минимальный rigid body для headless прогонов
//!
//! Unit mass, impulses применяются в начале шага, гравитация опциональна.
//! Коллизии: axis-separated движение, упор в грань блока с обнулением скорости
//! по этой оси. Блоки, с которыми тело уже пересекалось до шага, игнорируются
//! (тело выталкивается только из новых пересечений).

use bevy::prelude::*;

use crate::motion::{MotionConfig, PhysicsIntegrator};

use super::world::SandboxWorld;

pub const SANDBOX_GRAVITY: f32 = -9.81;

#[derive(Debug, Clone, PartialEq)]
pub struct SandboxBody {
    pub position: Vec3,
    pub velocity: Vec3,
    pub mass: f32,
    pub gravity: f32,
    pub gravity_enabled: bool,
    pub radius: f32,
    pub collider_height: f32,
    pub collider_center: Vec3,
    pub rotation: Quat,
    pending_impulse: Vec3,
}

impl SandboxBody {
    pub fn new(position: Vec3, config: &MotionConfig) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            mass: 1.0,
            gravity: SANDBOX_GRAVITY,
            gravity_enabled: true,
            radius: config.collider_radius,
            collider_height: config.standing_height,
            collider_center: Vec3::Y * (config.standing_height * 0.5),
            rotation: Quat::IDENTITY,
            pending_impulse: Vec3::ZERO,
        }
    }

    /// Offsets (min, max) AABB collider'а относительно позиции тела
    fn bounds_offsets(&self) -> (Vec3, Vec3) {
        let half = Vec3::new(self.radius, self.collider_height * 0.5, self.radius);
        (self.collider_center - half, self.collider_center + half)
    }

    /// AABB collider'а в точке `position`
    pub fn bounds_at(&self, position: Vec3) -> (Vec3, Vec3) {
        let (offset_min, offset_max) = self.bounds_offsets();
        (position + offset_min, position + offset_max)
    }

    /// Один шаг интеграции
    pub fn step(&mut self, delta: f32, world: &SandboxWorld) {
        self.velocity += std::mem::take(&mut self.pending_impulse) / self.mass;
        if self.gravity_enabled {
            self.velocity.y += self.gravity * delta;
        }

        // Z заблокирован (side-view)
        self.velocity.z = 0.0;
        for axis in 0..2 {
            self.move_axis(axis, self.velocity[axis] * delta, world);
        }
    }

    fn move_axis(&mut self, axis: usize, distance: f32, world: &SandboxWorld) {
        if distance == 0.0 {
            return;
        }

        let (offset_min, offset_max) = self.bounds_offsets();
        let (old_min, old_max) = self.bounds_at(self.position);
        let mut target = self.position;
        target[axis] += distance;
        let (new_min, new_max) = self.bounds_at(target);

        // Swept AABB: без него быстрое тело проскакивает тонкие блоки
        let swept_min = old_min.min(new_min);
        let swept_max = old_max.max(new_max);

        let mut blocked = false;
        for block in world.blocks() {
            if block.intersects_box(old_min, old_max) || !block.intersects_box(swept_min, swept_max) {
                continue;
            }

            blocked = true;
            // Упираемся в ближайшую грань по направлению движения
            if distance > 0.0 {
                target[axis] = target[axis].min(block.min[axis] - offset_max[axis]);
            } else {
                target[axis] = target[axis].max(block.max[axis] - offset_min[axis]);
            }
        }

        self.position = target;
        if blocked {
            self.velocity[axis] = 0.0;
        }
    }

    pub fn pending_impulse(&self) -> Vec3 {
        self.pending_impulse
    }
}

impl PhysicsIntegrator for SandboxBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn add_impulse(&mut self, impulse: Vec3) {
        self.pending_impulse += impulse;
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

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> SandboxWorld {
        SandboxWorld::new().with_block(Vec2::new(-10.0, -1.0), Vec2::new(10.0, 0.0))
    }

    #[test]
    fn test_body_rests_on_floor() {
        let world = floor();
        let mut body = SandboxBody::new(Vec3::new(0.0, 1.0, 0.0), &MotionConfig::default());

        for _ in 0..120 {
            body.step(1.0 / 60.0, &world);
        }

        assert_eq!(body.position.y, 0.0);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn test_impulse_applied_once() {
        let world = floor();
        let mut body = SandboxBody::new(Vec3::ZERO, &MotionConfig::default());
        body.gravity_enabled = false;

        body.add_impulse(Vec3::Y * 10.0);
        body.step(0.1, &world);
        assert_eq!(body.velocity.y, 10.0);
        assert_eq!(body.pending_impulse(), Vec3::ZERO);

        body.step(0.1, &world);
        assert_eq!(body.velocity.y, 10.0);
        assert!((body.position.y - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_wall_stops_horizontal_motion() {
        let world = floor().with_block(Vec2::new(3.0, 0.0), Vec2::new(4.0, 10.0));
        let mut body = SandboxBody::new(Vec3::new(2.0, 0.0, 0.0), &MotionConfig::default());

        body.velocity.x = 5.0;
        body.step(0.5, &world);

        assert_eq!(body.position.x, 2.5);
        assert_eq!(body.velocity.x, 0.0);
    }
}
