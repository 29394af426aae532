//! Motion состояние персонажа: режим движения, facing, стена, присед

use bevy::prelude::*;

/// Режим движения (ровно один активен)
///
/// Переход только через явный toggle (double-press внутри grace window
/// или `MotionController::toggle_flight`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum MotionState {
    /// Обычное движение: гравитация включена, прыжки, стены, присед
    #[default]
    OnGround,
    /// Свободный полёт по обеим осям, гравитация выключена
    Flight,
}

impl MotionState {
    pub fn toggled(self) -> Self {
        match self {
            Self::OnGround => Self::Flight,
            Self::Flight => Self::OnGround,
        }
    }

    pub fn gravity_enabled(self) -> bool {
        matches!(self, Self::OnGround)
    }
}

/// Куда смотрит персонаж (side-view, ось X)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Facing по знаку horizontal input. None для нулевого input
    pub fn from_horizontal(x: f32) -> Option<Self> {
        if x > 0.0 {
            Some(Self::Right)
        } else if x < 0.0 {
            Some(Self::Left)
        } else {
            None
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            Self::Right => 1.0,
            Self::Left => -1.0,
        }
    }

    /// Единичный вектор направления взгляда
    pub fn direction(self) -> Vec3 {
        Vec3::X * self.sign()
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }

    /// Целевой yaw корпуса: вправо = 0°, влево = 180°
    pub fn target_yaw_degrees(self) -> f32 {
        match self {
            Self::Right => 0.0,
            Self::Left => 180.0,
        }
    }
}

/// Контакт со стеной + lock horizontal input после wall-jump
#[derive(Debug, Clone, Copy, PartialEq, Default, Reflect)]
pub struct WallContact {
    /// Оба probe луча (середина и верх collider'а) попали в стену
    pub on_wall: bool,
    /// Пока > 0 horizontal input игнорируется
    pub lock_remaining: f32,
}

impl WallContact {
    pub fn is_locked(&self) -> bool {
        self.lock_remaining > 0.0
    }

    pub fn arm(&mut self, duration: f32) {
        self.lock_remaining = duration;
    }

    pub fn tick(&mut self, delta: f32) {
        if self.lock_remaining > 0.0 {
            self.lock_remaining = (self.lock_remaining - delta).max(0.0);
        }
    }
}

/// Присед: флаг, состояние кнопки и текущая высота collider'а
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct CrouchState {
    pub is_crouching: bool,
    /// Кнопка приседа удерживается (между press и release edge)
    pub held: bool,
    pub collider_height: f32,
}

impl CrouchState {
    pub fn standing(height: f32) -> Self {
        Self {
            is_crouching: false,
            held: false,
            collider_height: height,
        }
    }
}
