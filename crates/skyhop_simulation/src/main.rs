//! Headless прогон Skyhop
//!
//! Проходит тестовый уровень скриптом (ходьба, присед, wall-jump, flight),
//! затем гоняет seeded случайный input через sandbox и печатает состояние
//! контроллера. Seed можно передать первым аргументом, флаг `--debug`
//! включает debug логи (wall-jump, dropped jump, отказы uncrouch).

use bevy::prelude::Vec3;
use skyhop_simulation::sandbox::{course, course_script, random_script, SandboxSim};
use skyhop_simulation::logger::set_log_level;
use skyhop_simulation::{init_logger, log_error, log_info, DeterministicRng, JumpOutcome, LogLevel, MotionConfig};

fn main() {
    init_logger();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|arg| arg == "--debug") {
        set_log_level(LogLevel::Debug);
    }

    let seed = args
        .get(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(42);
    log_info(&format!("Starting Skyhop headless simulation (seed: {})", seed));

    let mut sim = match SandboxSim::new(MotionConfig::default(), course(), Vec3::ZERO) {
        Ok(sim) => sim,
        Err(error) => {
            log_error(&format!("Invalid motion config: {}", error));
            std::process::exit(1);
        }
    };

    for outcome in sim.run_script(&course_script()) {
        log_info(&format!("Course: {:?}", outcome));
    }
    log_info(&format!("Course complete: {:?}", sim.snapshot()));

    let script = random_script(&mut DeterministicRng::new(seed), 200);
    for (index, step) in script.iter().enumerate() {
        for outcome in sim.run_step(*step) {
            if outcome != JumpOutcome::Dropped {
                log_info(&format!("Step {}: {:?}", index, outcome));
            }
        }

        if index % 20 == 0 {
            let snapshot = sim.snapshot();
            log_info(&format!(
                "Step {}: frame {} pos {:?} state {:?}",
                index, snapshot.frame, snapshot.position, snapshot.motion.state
            ));
        }
    }

    log_info(&format!("Simulation complete: {:?}", sim.snapshot()));
}
