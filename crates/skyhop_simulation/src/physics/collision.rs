//! Collision Layers Constants
//!
//! ## Layers (битовая маска):
//! - Layer 1 (0b1 = 1): Reserved
//! - Layer 2 (0b10 = 2): Characters (motion controller bodies)
//! - Layer 3 (0b100 = 4): Ground (пол, стены, потолки — всё по чему ходят и от чего прыгают)
//!
//! `MotionConfig::ground_mask` по умолчанию = Layer 3.

use bevy::prelude::Entity;
use bevy_rapier3d::prelude::*;

use crate::motion::LayerMask;

/// Layer 2: Characters
pub const COLLISION_LAYER_CHARACTERS: u32 = 0b10; // 2

/// Layer 3: Ground / environment
pub const COLLISION_LAYER_GROUND: u32 = 0b100; // 4

/// Mask: Characters collide with Characters + Ground
pub const COLLISION_MASK_CHARACTERS: u32 = COLLISION_LAYER_CHARACTERS | COLLISION_LAYER_GROUND;

/// Collision groups для тела персонажа
pub fn character_groups() -> CollisionGroups {
    CollisionGroups::new(
        Group::from_bits_truncate(COLLISION_LAYER_CHARACTERS),
        Group::from_bits_truncate(COLLISION_MASK_CHARACTERS),
    )
}

/// Collision groups для статичной геометрии уровня
pub fn ground_groups() -> CollisionGroups {
    CollisionGroups::new(Group::from_bits_truncate(COLLISION_LAYER_GROUND), Group::ALL)
}

/// Query filter: только colliders из mask, без собственного тела
pub fn probe_filter<'a>(mask: LayerMask, exclude: Entity) -> QueryFilter<'a> {
    QueryFilter::new()
        .groups(CollisionGroups::new(Group::ALL, Group::from_bits_truncate(mask.0)))
        .exclude_rigid_body(exclude)
}
