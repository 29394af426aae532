//! Motion контроллер в Bevy + Rapier
//!
//! Архитектура:
//! - Rapier dynamic body (RigidBody::Dynamic): гравитация, коллизии, impulses
//! - MotionController пишет velocity/impulse/gravity scale/collider
//! - Frame фаза в Update (каждый rendered frame), physics фаза в FixedUpdate
//!
//! Тело без RigidBody или Collider не активируется: контроллер снимается
//! один раз при добавлении, с ошибкой в логе.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::MotionInput;
use crate::logger;
use crate::motion::{MotionConfig, MotionController, MotionError};

use super::collision;
use super::rapier::{MotionCollider, RapierBody, RapierSensors};

/// Части rapier тела, которые пишет контроллер
type BodyParts = (
    &'static mut Transform,
    &'static mut Velocity,
    &'static mut ExternalImpulse,
    &'static mut GravityScale,
    &'static mut Collider,
    &'static mut MotionCollider,
);

/// Система активации: проверяет тело и достраивает недостающие компоненты
///
/// Configuration fault (нет RigidBody/Collider) → контроллер снимается,
/// без повторных попыток. Collider host'а нужен только как признак
/// готового тела: при активации он заменяется capsule из MotionConfig
/// (standing height, radius), дальше форму ведёт контроллер (присед).
pub fn activate_motion_controllers(
    mut commands: Commands,
    query: Query<(Entity, &MotionController, Has<RigidBody>, Has<Collider>), Added<MotionController>>,
) {
    for (entity, controller, has_body, has_collider) in query.iter() {
        let missing = if !has_body {
            Some("RigidBody")
        } else if !has_collider {
            Some("Collider")
        } else {
            None
        };

        if let Some(part) = missing {
            let error = MotionError::MissingBodyPart(format!("{:?}", entity), part);
            logger::log_error(&error.to_string());
            commands.entity(entity).remove::<MotionController>();
            continue;
        }

        let shape = MotionCollider::standing(controller.config());
        commands
            .entity(entity)
            .insert((shape.build(), shape, GravityScale(1.0)));
        commands.entity(entity).insert_if_new((
            Velocity::default(),
            ExternalImpulse::default(),
            MotionInput::default(),
        ));

        logger::log_info(&format!("Motion controller activated on {:?}", entity));
    }
}

/// Frame фаза: сенсоры через RapierContext, input из MotionInput
pub fn motion_frame_system(
    time: Res<Time>,
    rapier_context: ReadRapierContext,
    mut query: Query<(Entity, &mut MotionController, &mut MotionInput, BodyParts)>,
) {
    let Ok(context) = rapier_context.single() else {
        return;
    };
    let delta = time.delta_secs();

    for (entity, mut controller, mut input, body_parts) in query.iter_mut() {
        let (mut transform, mut velocity, mut impulse, mut gravity, mut collider, mut shape) =
            body_parts;

        let sample = input.take_sample();
        let sensors = RapierSensors {
            context: &context,
            body: entity,
        };
        let mut body = RapierBody {
            transform: &mut *transform,
            velocity: &mut *velocity,
            impulse: &mut *impulse,
            gravity: &mut *gravity,
            collider: &mut *collider,
            shape: &mut *shape,
        };

        controller.advance_frame(delta, &sample, &sensors, &mut body);
    }
}

/// Physics фаза: velocity + разрешение прыжков перед шагом rapier
pub fn motion_physics_system(
    time: Res<Time<Fixed>>,
    mut query: Query<(&mut MotionController, BodyParts)>,
) {
    let delta = time.delta_secs();

    for (mut controller, body_parts) in query.iter_mut() {
        let (mut transform, mut velocity, mut impulse, mut gravity, mut collider, mut shape) =
            body_parts;

        let mut body = RapierBody {
            transform: &mut *transform,
            velocity: &mut *velocity,
            impulse: &mut *impulse,
            gravity: &mut *gravity,
            collider: &mut *collider,
            shape: &mut *shape,
        };

        controller.advance_physics_step(delta, &mut body);
    }
}

/// Plugin для motion контроллера
///
/// Rapier plugin host добавляет сам (вместе с нужным timestep mode).
/// Порядок `before(PhysicsSet::SyncBackend)` работает только когда rapier
/// тоже в FixedUpdate (`RapierPhysicsPlugin::in_fixed_schedule()`). С rapier
/// в дефолтном PostUpdate physics фаза просто идёт раньше шага rapier
/// в том же frame, где FixedUpdate успел отработать.
pub struct MotionPlugin;

impl Plugin for MotionPlugin {
    fn build(&self, app: &mut App) {
        use bevy_rapier3d::plugin::PhysicsSet;

        app.register_type::<MotionController>()
            .register_type::<MotionInput>()
            .register_type::<MotionCollider>()
            .add_systems(
                Update,
                (activate_motion_controllers, motion_frame_system).chain(),
            )
            .add_systems(
                FixedUpdate,
                motion_physics_system.before(PhysicsSet::SyncBackend),
            );
    }
}

/// Spawn helper для персонажа с motion контроллером
///
/// Создает entity с полным набором компонентов:
/// - Transform (позиция = точка у ног)
/// - MotionController + MotionInput
/// - Rapier: dynamic RigidBody, capsule Collider, Velocity, ExternalImpulse, GravityScale
/// - Вращение заблокировано, Z заблокирован (side-view)
pub fn spawn_motion_character(
    commands: &mut Commands,
    position: Vec3,
    config: MotionConfig,
) -> Result<Entity, MotionError> {
    let controller = MotionController::new(config)?;
    let shape = MotionCollider::standing(controller.config());

    let entity = commands
        .spawn((
            Transform::from_translation(position).with_rotation(controller.rotation()),
            MotionInput::default(),
            shape,
            // Rapier physics
            RigidBody::Dynamic,
            shape.build(),
            LockedAxes::ROTATION_LOCKED | LockedAxes::TRANSLATION_LOCKED_Z,
            Velocity::default(),
            ExternalImpulse::default(),
            GravityScale(1.0),
            // Без трения: иначе wall slide залипает на стене
            Friction::coefficient(0.0),
            collision::character_groups(),
            controller,
        ))
        .id();

    Ok(entity)
}
