//! Input компонент для ECS варианта контроллера
//!
//! Host (клавиатура, геймпад, AI, replay) пишет сюда каждый frame.
//! Edge-события копятся до ближайшего frame системы и сбрасываются после чтения,
//! поэтому нажатие между двумя frame'ами не теряется.

use bevy::prelude::*;

use crate::motion::input::{InputSample, InputSource};

#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct MotionInput {
    /// Оси (horizontal, vertical). Level-triggered, не сбрасываются
    pub axes: Vec2,
    pub sprint: bool,
    jump: bool,
    crouch_pressed: bool,
    crouch_released: bool,
}

impl MotionInput {
    pub fn press_jump(&mut self) {
        self.jump = true;
    }

    pub fn press_crouch(&mut self) {
        self.crouch_pressed = true;
    }

    pub fn release_crouch(&mut self) {
        self.crouch_released = true;
    }

    /// Забирает накопленное состояние и сбрасывает edge-флаги
    pub fn take_sample(&mut self) -> InputSample {
        let sample = InputSample::capture(&*self);
        self.jump = false;
        self.crouch_pressed = false;
        self.crouch_released = false;
        sample
    }
}

impl InputSource for MotionInput {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_sample_clears_edges_only() {
        let mut input = MotionInput {
            axes: Vec2::new(1.0, 0.0),
            sprint: true,
            ..default()
        };
        input.press_jump();
        input.press_crouch();

        let first = input.take_sample();
        assert!(first.jump);
        assert!(first.crouch_pressed);
        assert!(first.sprint);

        let second = input.take_sample();
        assert!(!second.jump);
        assert!(!second.crouch_pressed);
        assert!(second.sprint, "level-triggered sprint сохраняется");
        assert_eq!(second.axes, Vec2::new(1.0, 0.0));
    }
}
