//! Input Source контракт
//!
//! Контроллер читает input ровно один раз за frame (в `advance_frame`).
//! Edge-события (`jump_pressed`, `crouch_pressed`, `crouch_released`) должны быть
//! true только в frame перехода; `sprint_held` — level-triggered.

use bevy::prelude::*;

pub trait InputSource {
    /// Оси (horizontal, vertical), ожидаются в [-1, 1]
    fn sample_axes(&self) -> Vec2;
    fn jump_pressed(&self) -> bool;
    fn crouch_pressed(&self) -> bool;
    fn crouch_released(&self) -> bool;
    fn sprint_held(&self) -> bool;
}

/// Снимок input за один frame
///
/// Сам реализует `InputSource`, поэтому подходит и для тестов,
/// и для host'ов которые собирают input заранее.
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct InputSample {
    pub axes: Vec2,
    pub jump: bool,
    pub crouch_pressed: bool,
    pub crouch_released: bool,
    pub sprint: bool,
}

impl InputSample {
    /// Считывает все поля из произвольного source и сразу чистит оси
    pub fn capture(source: &impl InputSource) -> Self {
        Self {
            axes: source.sample_axes(),
            jump: source.jump_pressed(),
            crouch_pressed: source.crouch_pressed(),
            crouch_released: source.crouch_released(),
            sprint: source.sprint_held(),
        }
        .sanitized()
    }

    /// NaN → 0, остальное clamp в [-1, 1]
    pub fn sanitized(mut self) -> Self {
        self.axes = Vec2::new(sanitize_axis(self.axes.x), sanitize_axis(self.axes.y));
        self
    }

    pub fn horizontal(x: f32) -> Self {
        Self {
            axes: Vec2::new(x, 0.0),
            ..default()
        }
    }
}

impl InputSource for InputSample {
    fn sample_axes(&self) -> Vec2 {
        self.axes
    }

    fn jump_pressed(&self) -> bool {
        self.jump
    }

    fn crouch_pressed(&self) -> bool {
        self.crouch_pressed
    }

    fn crouch_released(&self) -> bool {
        self.crouch_released
    }

    fn sprint_held(&self) -> bool {
        self.sprint
    }
}

pub fn sanitize_axis(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}
