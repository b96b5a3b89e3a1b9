//! Wingflap entry point
//!
//! Window, input and drawing belong to the host application. This binary
//! drives the simulation headlessly through a scripted flight and reports
//! what happened.

use std::path::Path;

use wingflap::Settings;
use wingflap::sim::{GameEvent, GameplayState, TickInput, tick};

/// Fixed frame time for the scripted run (60 Hz)
const STEP_DT: f32 = 1.0 / 60.0;
/// Length of the scripted run
const RUN_TICKS: u32 = 600;

fn main() {
    env_logger::init();
    log::info!("Wingflap (headless) starting...");

    let settings_path = Path::new(Settings::FILE_NAME);
    let settings = Settings::load(settings_path);
    if !settings_path.exists() {
        if let Err(err) = settings.save(settings_path) {
            log::warn!("Could not write default settings: {err}");
        }
    }
    let mut state = GameplayState::from_settings(&settings);
    log::info!(
        "Level {} has {} segments, goal {:?}",
        state.level_index,
        state.level.segment_count(),
        state.level.goal
    );

    let mut crashes = 0;
    let mut goals = 0;
    for tick_index in 0..RUN_TICKS {
        tick(&mut state, &scripted_input(tick_index), STEP_DT);
        for event in &state.events {
            match event {
                GameEvent::CraftCrashed { .. } => crashes += 1,
                GameEvent::GoalReached { .. } => goals += 1,
                _ => {}
            }
        }
    }

    let craft = &state.craft;
    log::info!(
        "After {RUN_TICKS} ticks: level {}, pos ({:.1}, {:.1}), rotation {:.1}, speed {:.2}, {crashes} crashes, {goals} goals",
        state.level_index,
        craft.pos.x,
        craft.pos.y,
        craft.rotation,
        craft.vel.length()
    );
}

/// Flap in short bursts once a second, drifting right then left
fn scripted_input(tick_index: u32) -> TickInput {
    let phase = tick_index % 60;
    let leaning_right = (tick_index / 180) % 2 == 0;
    TickInput {
        flap: phase < 6,
        turn_right: leaning_right && phase == 30,
        turn_left: !leaning_right && phase == 30,
        ..Default::default()
    }
}
