//! Per-frame update and mode switching
//!
//! Each tick samples telemetry, applies the global toggles, then routes input
//! to either the flight simulation or the level editor, never both.

use glam::Vec2;

use super::editor::step_editor;
use super::flight::step_flight;
use super::state::{GameEvent, GameplayState, PlayMode};
use crate::consts::SPAWN_POS;

/// Input for a single tick
///
/// Held inputs are true for as long as the key is down; the toggles and
/// `click` are one-shot presses.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub flap: bool,
    /// Put the craft back at the spawn point
    pub reset: bool,
    pub toggle_edit: bool,
    pub toggle_graph: bool,
    pub toggle_debug: bool,

    // Editor
    pub save: bool,
    pub cycle_edit_mode: bool,
    pub next_level: bool,
    pub prev_level: bool,
    pub pan_left: bool,
    pub pan_right: bool,
    pub pan_up: bool,
    pub pan_down: bool,
    /// Pointer position in world coordinates
    pub pointer: Vec2,
    /// Primary button pressed this tick
    pub click: bool,
    /// Scroll wheel notches (positive zooms in)
    pub scroll: f32,
}

/// Advance the gameplay state by one frame of `dt` seconds
pub fn tick(state: &mut GameplayState, input: &TickInput, dt: f32) {
    state.events.clear();

    state.telemetry.update(
        dt,
        state.craft.flap_velocity,
        state.craft.flap_amount,
        state.craft.vel.length(),
    );

    if input.toggle_edit {
        state.mode = match state.mode {
            PlayMode::Playing => {
                state.editor.cursor = state.craft.pos;
                PlayMode::Editing
            }
            PlayMode::Editing => PlayMode::Playing,
        };
        log::info!("Switched to {:?}", state.mode);
        state.events.push(GameEvent::ModeChanged(state.mode));
    }

    if input.toggle_graph {
        state.show_graph = !state.show_graph;
    }
    if input.toggle_debug {
        state.show_debug = !state.show_debug;
    }

    if input.reset {
        state.craft.reset_to(SPAWN_POS);
    }

    match state.mode {
        PlayMode::Playing => step_flight(state, input, dt),
        PlayMode::Editing => step_editor(state, input, dt),
    }
}
