//! Spatial Query Service контракт
//!
//! Все запросы синхронные и ограниченные (один overlap, максимум два-три луча
//! за frame). Отсутствие результата = false, никогда не ошибка.

use bevy::prelude::*;

use super::config::LayerMask;

pub trait SpatialQuery {
    /// Пересекает ли сфера (position, radius) хоть один collider из mask
    fn is_grounded(&self, position: Vec3, radius: f32, mask: LayerMask) -> bool;

    /// Попадает ли луч origin + direction * t, t ∈ [0, max_distance] в collider из mask
    fn raycast_hits(&self, origin: Vec3, direction: Vec3, max_distance: f32, mask: LayerMask) -> bool;
}
