//! SandboxWorld — статичный уровень из axis-aligned блоков
//!
//! Реализует SpatialQuery без физического движка: overlap сфера/AABB
//! и slab raycast. Детерминистично, без аллокаций на запрос.

use bevy::prelude::*;

use crate::motion::{LayerMask, SpatialQuery};
use crate::physics::collision::COLLISION_LAYER_GROUND;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub min: Vec3,
    pub max: Vec3,
    pub layer: u32,
}

impl Block {
    /// Блок на ground слое. Z у sandbox'а не используется: блок бесконечен по Z
    pub fn ground(min: Vec2, max: Vec2) -> Self {
        Self {
            min: Vec3::new(min.x, min.y, f32::NEG_INFINITY),
            max: Vec3::new(max.x, max.y, f32::INFINITY),
            layer: COLLISION_LAYER_GROUND,
        }
    }

    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        let closest = center.clamp(self.min, self.max);
        closest.distance_squared(center) <= radius * radius
    }

    /// Строгое пересечение AABB (касание гранями не считается)
    pub fn intersects_box(&self, min: Vec3, max: Vec3) -> bool {
        min.x < self.max.x
            && max.x > self.min.x
            && min.y < self.max.y
            && max.y > self.min.y
            && min.z < self.max.z
            && max.z > self.min.z
    }

    /// Расстояние вдоль луча до входа в блок (0 если origin внутри)
    pub fn ray_distance(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        let mut t_enter = 0.0_f32;
        let mut t_exit = f32::INFINITY;

        for axis in 0..3 {
            let o = origin[axis];
            let d = direction[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);

            if d.abs() < 1e-8 {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }

            let t1 = (lo - o) / d;
            let t2 = (hi - o) / d;
            t_enter = t_enter.max(t1.min(t2));
            t_exit = t_exit.min(t1.max(t2));
            if t_enter > t_exit {
                return None;
            }
        }

        Some(t_enter)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SandboxWorld {
    blocks: Vec<Block>,
}

impl SandboxWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_block(mut self, min: Vec2, max: Vec2) -> Self {
        self.blocks.push(Block::ground(min, max));
        self
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

impl SpatialQuery for SandboxWorld {
    fn is_grounded(&self, position: Vec3, radius: f32, mask: LayerMask) -> bool {
        self.blocks
            .iter()
            .filter(|block| mask.contains(block.layer))
            .any(|block| block.intersects_sphere(position, radius))
    }

    fn raycast_hits(&self, origin: Vec3, direction: Vec3, max_distance: f32, mask: LayerMask) -> bool {
        let direction = direction.normalize_or_zero();
        if direction == Vec3::ZERO {
            return false;
        }

        self.blocks
            .iter()
            .filter(|block| mask.contains(block.layer))
            .filter_map(|block| block.ray_distance(origin, direction))
            .any(|distance| distance <= max_distance)
    }
}
