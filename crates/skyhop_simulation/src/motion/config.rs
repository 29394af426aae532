//! Параметры движения персонажа
//!
//! Все значения в метрах/секундах/градусах. Defaults подобраны под
//! персонажа высотой 2м (capsule радиус 0.5м).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::MotionError;

/// Bitmask слоёв, которые считаются "землёй" (пол, стены, потолки)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const NONE: Self = Self(0);

    /// Маска из одного слоя (0..32)
    pub const fn layer(index: u32) -> Self {
        Self(1 << index)
    }

    pub const fn contains(self, layer_bits: u32) -> bool {
        self.0 & layer_bits != 0
    }
}

impl Default for LayerMask {
    /// Layer 3 (0b100): окружение — пол, стены, платформы
    fn default() -> Self {
        Self::layer(2)
    }
}

/// Скорости движения
///
/// Приоритет выбора: crouch > sprint > walk.
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
pub struct SpeedProfile {
    pub walk: f32,
    pub sprint: f32,
    pub crouch: f32,
}

impl Default for SpeedProfile {
    fn default() -> Self {
        Self {
            walk: 5.0,
            sprint: 7.0,
            crouch: 3.0,
        }
    }
}

impl SpeedProfile {
    pub fn select(&self, crouching: bool, sprinting: bool) -> f32 {
        if crouching {
            self.crouch
        } else if sprinting {
            self.sprint
        } else {
            self.walk
        }
    }
}

/// Что делает jump кнопка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum JumpMode {
    /// Первое нажатие = прыжок + открывает grace window,
    /// второе нажатие внутри окна переключает OnGround ↔ Flight
    #[default]
    GraceToggle,
    /// Только прыжок. Flight доступен лишь через явный `toggle_flight`
    Immediate,
}

/// Полная конфигурация контроллера
#[derive(Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub speeds: SpeedProfile,
    /// Вертикальный impulse обычного прыжка
    pub jump_strength: f32,
    /// Вертикальный impulse прыжка от стены (горизонтальный = jump_strength / 1.5)
    pub wall_jump_strength: f32,
    /// Скорость поворота корпуса (градусы/сек)
    pub rotation_speed: f32,
    pub jump_mode: JumpMode,
    /// Длина grace window для double-press (сек)
    pub flight_grace_time: f32,
    /// true: toggle закрывает окно, третье быстрое нажатие открывает новое.
    /// false: окно продолжает убывать, третье нажатие переключает обратно
    pub close_grace_on_toggle: bool,
    /// Сколько horizontal input игнорируется после wall-jump (сек)
    pub wall_lock_time: f32,
    /// Добавка к радиусу для длины wall probe лучей
    pub wall_probe_margin: f32,
    /// Вертикальная скорость скольжения по стене (отрицательная = вниз)
    pub wall_slide_speed: f32,
    /// Радиус overlap-сферы ground check у ног
    pub ground_check_radius: f32,
    pub ground_mask: LayerMask,
    pub collider_radius: f32,
    pub standing_height: f32,
    pub crouch_height: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            speeds: SpeedProfile::default(),
            jump_strength: 10.0,
            wall_jump_strength: 14.0,
            rotation_speed: 700.0,
            jump_mode: JumpMode::GraceToggle,
            flight_grace_time: 0.2,
            close_grace_on_toggle: false,
            wall_lock_time: 0.35,
            wall_probe_margin: 0.25,
            wall_slide_speed: -1.0,
            ground_check_radius: 0.2,
            ground_mask: LayerMask::default(),
            collider_radius: 0.5,
            standing_height: 2.0,
            crouch_height: 1.0,
        }
    }
}

impl MotionConfig {
    /// Проверка конфигурации (вызывается один раз при создании контроллера)
    pub fn validate(&self) -> Result<(), MotionError> {
        let positive = [
            ("speeds.walk", self.speeds.walk),
            ("speeds.sprint", self.speeds.sprint),
            ("speeds.crouch", self.speeds.crouch),
            ("rotation_speed", self.rotation_speed),
            ("ground_check_radius", self.ground_check_radius),
            ("collider_radius", self.collider_radius),
            ("standing_height", self.standing_height),
            ("crouch_height", self.crouch_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(MotionError::NonPositive { name, value });
            }
        }

        let non_negative = [
            ("jump_strength", self.jump_strength),
            ("wall_jump_strength", self.wall_jump_strength),
            ("flight_grace_time", self.flight_grace_time),
            ("wall_lock_time", self.wall_lock_time),
            ("wall_probe_margin", self.wall_probe_margin),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(MotionError::Negative { name, value });
            }
        }

        if !self.wall_slide_speed.is_finite() {
            return Err(MotionError::NotFinite {
                name: "wall_slide_speed",
            });
        }

        if self.crouch_height >= self.standing_height {
            return Err(MotionError::CrouchNotShorter {
                crouch: self.crouch_height,
                standing: self.standing_height,
            });
        }

        if self.ground_mask == LayerMask::NONE {
            return Err(MotionError::EmptyGroundMask);
        }

        Ok(())
    }

    /// Длина upward луча проверки потолка при uncrouch
    pub fn ceiling_probe_length(&self) -> f32 {
        self.standing_height - self.crouch_height
    }

    /// Длина horizontal лучей wall probe
    pub fn wall_probe_length(&self) -> f32 {
        self.collider_radius + self.wall_probe_margin
    }
}
