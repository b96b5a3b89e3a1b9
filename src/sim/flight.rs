//! Flight simulation step
//!
//! Turn, flap, thrust, gravity, integrate, then resolve crashes and the goal.
//! Thrust and gravity are scaled by dt but velocity is added to position
//! unscaled, so `vel` is effectively a per-tick displacement.

use glam::Vec2;

use super::state::{CraftState, GameEvent, GameplayState};
use super::tick::TickInput;
use crate::consts::*;
use crate::rotate_deg;

/// Advance the craft by one tick
pub fn step_flight(state: &mut GameplayState, input: &TickInput, dt: f32) {
    let craft = &mut state.craft;

    if input.turn_right {
        craft.rotation += ROT_SPEED * dt;
    }
    if input.turn_left {
        craft.rotation -= ROT_SPEED * dt;
    }

    update_flap(craft, input.flap, dt);

    // Thrust pushes along the craft's "up" (-y at zero rotation)
    let thrust = rotate_deg(
        Vec2::new(0.0, -craft.flap_velocity * THRUST_FACTOR * dt),
        craft.rotation,
    );
    craft.vel += thrust;
    craft.vel += Vec2::new(0.0, GRAVITY * dt);
    craft.pos += craft.vel;

    state.camera.follow(state.craft.pos);

    resolve_crashes(state);
    check_goal(state);
}

/// Charge the wings while held, let them fall back when released
///
/// The flap velocity compounds on itself each tick and is added straight to
/// the angle, so a held flap snaps the wings up within a few ticks.
pub fn update_flap(craft: &mut CraftState, held: bool, dt: f32) {
    if held {
        if craft.flap_amount < MAX_FLAP_AMOUNT {
            craft.flap_velocity += FLAP_CHARGE * dt + craft.flap_velocity;
        }
        craft.flap_velocity = craft.flap_velocity.min(MAX_FLAP_VELOCITY);
        craft.flap_amount += craft.flap_velocity;
        if craft.flap_amount >= MAX_FLAP_AMOUNT {
            craft.flap_amount = MAX_FLAP_AMOUNT;
            craft.flap_velocity = 0.0;
        }
    } else {
        craft.flap_velocity = 0.0;
        craft.flap_amount = (craft.flap_amount - FLAP_DECAY * dt).max(0.0);
    }
}

/// Test every obstacle against the craft, respawning it on each hit
///
/// The sweep does not stop at the first hit: later segments are tested
/// against the respawned pose.
pub fn resolve_crashes(state: &mut GameplayState) {
    for (index, seg) in state.level.segments().iter().enumerate() {
        if state.craft.hits(seg.start, seg.end) {
            log::debug!("Craft hit segment {index} at {:?}", state.craft.pos);
            state.craft.reset_to(CRASH_RESPAWN_POS);
            state.events.push(GameEvent::CraftCrashed { segment: index });
        }
    }
}

/// Advance to the next level when the craft reaches the goal
fn check_goal(state: &mut GameplayState) {
    let Some(goal) = state.level.goal.filter(|goal| *goal != Vec2::ZERO) else {
        return;
    };
    if state.craft.pos.distance(goal) < GOAL_RADIUS {
        let next_level = state.level_index + 1;
        log::info!("Goal reached on level {}, advancing to {next_level}", state.level_index);
        state.events.push(GameEvent::GoalReached { next_level });
        state.load_level(next_level);
        state.craft.reset_to(SPAWN_POS);
    }
}
