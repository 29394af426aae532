//! CharacterMotionController — side-view платформер контроллер
//!
//! Две фазы за simulation tick:
//! - `advance_frame` (variable rate, каждый rendered frame): сенсоры, input,
//!   jump/flight toggle, поворот, стена, присед. Решает ЧТО делать.
//! - `advance_physics_step` (fixed rate): скорость, прыжки. Применяет решение
//!   через PhysicsIntegrator.
//!
//! Всё состояние между фазами (move direction, facing, crouch, jump request)
//! лежит в полях контроллера, без глобалов.

use bevy::prelude::*;

use crate::components::motion::{CrouchState, Facing, MotionState, WallContact};
use crate::logger;

use super::config::{JumpMode, MotionConfig};
use super::error::MotionError;
use super::input::{InputSample, InputSource};
use super::integrator::PhysicsIntegrator;
use super::rotation::rotate_towards_degrees;
use super::sensors::SpatialQuery;

/// Что произошло при разрешении jump request в physics step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumpOutcome {
    /// Request не было
    None,
    Jumped { impulse: Vec3 },
    WallJumped { impulse: Vec3 },
    /// Не на земле и не на стене: request выброшен, не переносится дальше
    Dropped,
}

#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct MotionController {
    config: MotionConfig,
    state: MotionState,
    grounded: bool,
    sprinting: bool,
    move_direction: Vec3,
    facing: Facing,
    yaw_degrees: f32,
    wall: WallContact,
    crouch: CrouchState,
    /// Открыт после jump press: повторное нажатие переключает режим
    grace_remaining: f32,
    /// Выставляется в frame фазе, потребляется ближайшим physics step
    jump_requested: bool,
}

impl MotionController {
    pub fn new(config: MotionConfig) -> Result<Self, MotionError> {
        config.validate()?;

        let crouch = CrouchState::standing(config.standing_height);
        Ok(Self {
            config,
            state: MotionState::OnGround,
            grounded: false,
            sprinting: false,
            move_direction: Vec3::ZERO,
            facing: Facing::Right,
            yaw_degrees: Facing::Right.target_yaw_degrees(),
            wall: WallContact::default(),
            crouch,
            grace_remaining: 0.0,
            jump_requested: false,
        })
    }

    /// Выставляет начальные значения тела: гравитация, полный рост, поворот
    pub fn attach(&self, body: &mut impl PhysicsIntegrator) {
        body.set_gravity_enabled(self.state.gravity_enabled());
        self.apply_collider(body);
        body.set_rotation(self.rotation());
    }

    // ------------------------------------------------------------------
    // Variable-rate фаза
    // ------------------------------------------------------------------

    pub fn advance_frame(
        &mut self,
        delta: f32,
        input: &impl InputSource,
        sensors: &impl SpatialQuery,
        body: &mut impl PhysicsIntegrator,
    ) {
        let delta = delta.max(0.0);
        let input = InputSample::capture(input);
        let position = body.position();

        self.update_grounded(position, sensors);
        self.sample_movement(&input);
        if input.jump {
            self.handle_jump_press(body);
        }
        self.tick_grace(delta);
        self.update_rotation(delta, body);
        self.update_wall_contact(position, sensors);
        self.wall.tick(delta);
        self.update_crouch(&input, position, sensors, body);
        self.sprinting = input.sprint && !self.crouch.is_crouching;
    }

    fn update_grounded(&mut self, position: Vec3, sensors: &impl SpatialQuery) {
        self.grounded =
            sensors.is_grounded(position, self.config.ground_check_radius, self.config.ground_mask);
    }

    fn sample_movement(&mut self, input: &InputSample) {
        match self.state {
            MotionState::OnGround => {
                // После wall-jump держим направление "от стены" пока идёт lock
                if !self.wall.is_locked() {
                    self.move_direction = Vec3::new(input.axes.x, 0.0, 0.0);
                }
            }
            MotionState::Flight => {
                self.move_direction = Vec3::new(input.axes.x, input.axes.y, 0.0).normalize_or_zero();
            }
        }
    }

    fn handle_jump_press(&mut self, body: &mut impl PhysicsIntegrator) {
        match self.config.jump_mode {
            JumpMode::GraceToggle => {
                if self.grace_remaining > 0.0 {
                    if self.config.close_grace_on_toggle {
                        self.grace_remaining = 0.0;
                    }
                    self.toggle_flight(body);
                } else {
                    if self.state == MotionState::OnGround {
                        self.jump_requested = true;
                    }
                    self.grace_remaining = self.config.flight_grace_time;
                }
            }
            JumpMode::Immediate => {
                if self.state == MotionState::OnGround {
                    self.jump_requested = true;
                }
            }
        }
    }

    fn tick_grace(&mut self, delta: f32) {
        if self.grace_remaining > 0.0 {
            self.grace_remaining = (self.grace_remaining - delta).max(0.0);
        }
    }

    fn update_rotation(&mut self, delta: f32, body: &mut impl PhysicsIntegrator) {
        if self.move_direction == Vec3::ZERO {
            return;
        }

        if let Some(facing) = Facing::from_horizontal(self.move_direction.x) {
            self.facing = facing;
        }

        let target = self.facing.target_yaw_degrees();
        if self.yaw_degrees != target {
            self.yaw_degrees =
                rotate_towards_degrees(self.yaw_degrees, target, self.config.rotation_speed * delta);
            body.set_rotation(self.rotation());
        }
    }

    fn update_wall_contact(&mut self, position: Vec3, sensors: &impl SpatialQuery) {
        if self.state != MotionState::OnGround || self.grounded {
            self.wall.on_wall = false;
            return;
        }

        let height = self.crouch.collider_height;
        let direction = self.facing.direction();
        let distance = self.config.wall_probe_length();
        let mask = self.config.ground_mask;

        let lower = position + Vec3::Y * (height * 0.5);
        let upper = position + Vec3::Y * height;

        // Один нижний луч = край платформы, а не стена
        self.wall.on_wall = sensors.raycast_hits(lower, direction, distance, mask)
            && sensors.raycast_hits(upper, direction, distance, mask);
    }

    fn update_crouch(
        &mut self,
        input: &InputSample,
        position: Vec3,
        sensors: &impl SpatialQuery,
        body: &mut impl PhysicsIntegrator,
    ) {
        if input.crouch_pressed {
            self.crouch.held = true;
            if self.state == MotionState::OnGround && !self.crouch.is_crouching {
                self.enter_crouch(body);
            }
        }
        if input.crouch_released {
            self.crouch.held = false;
        }

        if self.crouch.is_crouching
            && !self.crouch.held
            && !self.try_uncrouch(position, sensors, body)
            && input.crouch_released
        {
            logger::log("Uncrouch refused: ceiling above, retrying every frame");
        }
    }

    fn enter_crouch(&mut self, body: &mut impl PhysicsIntegrator) {
        self.crouch.is_crouching = true;
        self.crouch.collider_height = self.config.crouch_height;
        self.sprinting = false;
        self.apply_collider(body);
    }

    /// Встаёт если над головой свободно. Возвращает true если стоит после вызова
    fn try_uncrouch(
        &mut self,
        position: Vec3,
        sensors: &impl SpatialQuery,
        body: &mut impl PhysicsIntegrator,
    ) -> bool {
        if !self.crouch.is_crouching {
            return true;
        }

        let origin = position + Vec3::Y * self.config.crouch_height;
        if sensors.raycast_hits(
            origin,
            Vec3::Y,
            self.config.ceiling_probe_length(),
            self.config.ground_mask,
        ) {
            return false;
        }

        self.crouch.is_crouching = false;
        self.crouch.collider_height = self.config.standing_height;
        self.apply_collider(body);
        true
    }

    fn apply_collider(&self, body: &mut impl PhysicsIntegrator) {
        let height = self.crouch.collider_height;
        body.set_collider_height(height);
        body.set_collider_center(Vec3::Y * (height * 0.5));
    }

    /// Явный toggle OnGround ↔ Flight
    ///
    /// Отказ если персонаж сидит: присед существует только в OnGround.
    /// Возвращает true если режим переключился.
    pub fn toggle_flight(&mut self, body: &mut impl PhysicsIntegrator) -> bool {
        if self.crouch.is_crouching {
            logger::log("Flight toggle refused: character is crouching");
            return false;
        }

        self.state = self.state.toggled();
        self.jump_requested = false;
        self.wall.on_wall = false;
        body.set_gravity_enabled(self.state.gravity_enabled());

        logger::log_info(&format!("Motion state → {:?}", self.state));
        true
    }

    // ------------------------------------------------------------------
    // Fixed-rate фаза
    // ------------------------------------------------------------------

    pub fn advance_physics_step(&mut self, _delta: f32, body: &mut impl PhysicsIntegrator) -> JumpOutcome {
        let speed = self.current_speed();

        match self.state {
            MotionState::OnGround => {
                // Во время lock horizontal command не выдаём: несёт impulse от стены
                if !self.wall.is_locked() {
                    let current = body.velocity();
                    let mut velocity =
                        Vec3::new(self.move_direction.x * speed, current.y, current.z);
                    if self.move_direction != Vec3::ZERO && self.wall.on_wall {
                        velocity.y = self.config.wall_slide_speed;
                    }
                    body.set_velocity(velocity);
                }
            }
            MotionState::Flight => {
                body.set_velocity(self.move_direction.normalize_or_zero() * speed);
            }
        }

        self.resolve_jump(body)
    }

    fn resolve_jump(&mut self, body: &mut impl PhysicsIntegrator) -> JumpOutcome {
        if !std::mem::take(&mut self.jump_requested) {
            return JumpOutcome::None;
        }

        if self.state != MotionState::OnGround {
            return JumpOutcome::Dropped;
        }

        if self.wall.on_wall {
            let away = self.facing.opposite();
            let impulse = Vec3::Y * self.config.wall_jump_strength
                + away.direction() * (self.config.jump_strength / 1.5);

            body.set_velocity(Vec3::ZERO);
            body.add_impulse(impulse);

            self.facing = away;
            self.move_direction.x = away.sign();
            self.wall.arm(self.config.wall_lock_time);

            logger::log(&format!("Wall jump: impulse = {:?}", impulse));
            return JumpOutcome::WallJumped { impulse };
        }

        if !self.grounded {
            logger::log("Jump dropped: not grounded and not on wall");
            return JumpOutcome::Dropped;
        }

        let impulse = Vec3::Y * self.config.jump_strength;
        body.add_impulse(impulse);
        JumpOutcome::Jumped { impulse }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn is_sprinting(&self) -> bool {
        self.sprinting
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn wall(&self) -> WallContact {
        self.wall
    }

    pub fn crouch(&self) -> CrouchState {
        self.crouch
    }

    pub fn move_direction(&self) -> Vec3 {
        self.move_direction
    }

    pub fn yaw_degrees(&self) -> f32 {
        self.yaw_degrees
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw_degrees.to_radians())
    }

    pub fn jump_pending(&self) -> bool {
        self.jump_requested
    }

    pub fn grace_remaining(&self) -> f32 {
        self.grace_remaining
    }

    /// Скорость по приоритету crouch > sprint > walk
    pub fn current_speed(&self) -> f32 {
        self.config
            .speeds
            .select(self.crouch.is_crouching, self.sprinting)
    }

    pub fn snapshot(&self) -> MotionSnapshot {
        MotionSnapshot {
            state: self.state,
            grounded: self.grounded,
            sprinting: self.sprinting,
            facing: self.facing,
            yaw_degrees: self.yaw_degrees,
            move_direction: self.move_direction,
            wall: self.wall,
            crouch: self.crouch,
        }
    }
}

/// Снимок состояния для логов и сравнения прогонов
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSnapshot {
    pub state: MotionState,
    pub grounded: bool,
    pub sprinting: bool,
    pub facing: Facing,
    pub yaw_degrees: f32,
    pub move_direction: Vec3,
    pub wall: WallContact,
    pub crouch: CrouchState,
}
