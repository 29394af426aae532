//! Интеграционный тест ECS пути: MotionPlugin + RapierPhysicsPlugin
//!
//! Frame система (RapierSensors), physics система (RapierBody) и шаг rapier
//! на реальном ground collider. Время двигаем вручную по 1/60 сек на update.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier3d::prelude::*;
use skyhop_simulation::physics::collision::ground_groups;
use skyhop_simulation::{spawn_motion_character, Facing, MotionConfig, MotionController, MotionInput, MotionPlugin};

fn create_physics_app() -> App {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        TransformPlugin,
        RapierPhysicsPlugin::<NoUserData>::default(),
        MotionPlugin,
    ))
    .insert_resource(Time::<Fixed>::from_hz(60.0))
    .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(1.0 / 60.0)))
    .add_systems(Startup, |mut commands: Commands| {
        // Пол: верхняя грань на y = 0
        commands.spawn((
            Transform::from_xyz(0.0, -0.5, 0.0),
            RigidBody::Fixed,
            Collider::cuboid(100.0, 0.5, 100.0),
            ground_groups(),
        ));
        spawn_motion_character(&mut commands, Vec3::new(0.0, 0.05, 0.0), MotionConfig::default()).unwrap();
    });
    app
}

fn character(app: &mut App) -> Entity {
    let world = app.world_mut();
    let mut query = world.query_filtered::<Entity, With<MotionController>>();
    query.single(world).unwrap()
}

fn run(app: &mut App, updates: usize) {
    for _ in 0..updates {
        app.update();
    }
}

#[test]
fn test_character_walks_and_jumps_on_rapier_ground() {
    let mut app = create_physics_app();

    // Даём телу осесть на пол
    run(&mut app, 60);
    let entity = character(&mut app);
    {
        let world = app.world();
        let controller = world.get::<MotionController>(entity).unwrap();
        assert!(controller.is_grounded(), "персонаж должен стоять на полу");
        assert!(world.get::<Transform>(entity).unwrap().translation.y > -0.1);
    }

    // Идём вправо полсекунды
    app.world_mut().get_mut::<MotionInput>(entity).unwrap().axes = Vec2::new(1.0, 0.0);
    run(&mut app, 30);
    {
        let world = app.world();
        let velocity = world.get::<Velocity>(entity).unwrap();
        let controller = world.get::<MotionController>(entity).unwrap();
        assert!((velocity.linvel.x - 5.0).abs() < 0.25, "vel = {:?}", velocity.linvel);
        assert_eq!(controller.facing(), Facing::Right);
        assert!(world.get::<Transform>(entity).unwrap().translation.x > 1.0);
    }

    // Прыжок поднимает тело
    let start_y = app.world().get::<Transform>(entity).unwrap().translation.y;
    app.world_mut().get_mut::<MotionInput>(entity).unwrap().press_jump();
    let mut max_y = start_y;
    for _ in 0..60 {
        app.update();
        max_y = max_y.max(app.world().get::<Transform>(entity).unwrap().translation.y);
    }
    assert!(max_y - start_y > 1.0, "max y = {}, start y = {}", max_y, start_y);
}
