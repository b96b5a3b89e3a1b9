//! Game state and core simulation types
//!
//! Everything a tick reads or writes is owned by `GameplayState`; there is no
//! ambient global state.

use glam::Vec2;

use super::geometry::craft_hits_segment;
use super::telemetry::Telemetry;
use crate::consts::*;
use crate::persistence::{Level, LevelStore};
use crate::rotate_deg;
use crate::settings::Settings;

/// Which subsystem receives input this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayMode {
    /// Flight simulation runs
    #[default]
    Playing,
    /// Level editor runs; the craft is frozen
    Editing,
}

/// What a primary click does while editing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    AddLines,
    RemoveLines,
    PlaceGoal,
}

impl EditMode {
    /// Next submode in the cycle
    pub fn next(self) -> Self {
        match self {
            EditMode::AddLines => EditMode::RemoveLines,
            EditMode::RemoveLines => EditMode::PlaceGoal,
            EditMode::PlaceGoal => EditMode::AddLines,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EditMode::AddLines => "ADD LINES",
            EditMode::RemoveLines => "REMOVE LINES",
            EditMode::PlaceGoal => "PLACE GOAL",
        }
    }
}

/// The player's craft
#[derive(Debug, Clone, PartialEq)]
pub struct CraftState {
    pub pos: Vec2,
    /// Body rotation in degrees (unbounded)
    pub rotation: f32,
    /// Wing raise angle in degrees, within [0, MAX_FLAP_AMOUNT]
    pub flap_amount: f32,
    /// Within [0, MAX_FLAP_VELOCITY]
    pub flap_velocity: f32,
    /// Displacement applied to `pos` every tick
    pub vel: Vec2,
}

impl Default for CraftState {
    fn default() -> Self {
        Self {
            pos: SPAWN_POS,
            rotation: 0.0,
            flap_amount: 0.0,
            flap_velocity: 0.0,
            vel: Vec2::ZERO,
        }
    }
}

impl CraftState {
    /// Put the craft at rest at `pos`, upright; flap state is kept
    pub fn reset_to(&mut self, pos: Vec2) {
        self.rotation = 0.0;
        self.pos = pos;
        self.vel = Vec2::ZERO;
    }

    /// World-space (left, right) wing tips
    pub fn wings(&self) -> (Vec2, Vec2) {
        let left = rotate_deg(Vec2::new(-WING_WIDTH, 0.0), self.rotation);
        let right = rotate_deg(Vec2::new(WING_WIDTH, 0.0), self.rotation);
        let left = rotate_deg(left, -self.flap_amount);
        let right = rotate_deg(right, self.flap_amount);
        (left + self.pos, right + self.pos)
    }

    /// Whether either wing crosses the given obstacle edge
    pub fn hits(&self, start: Vec2, end: Vec2) -> bool {
        let (left, right) = self.wings();
        craft_hits_segment(self.pos, left, right, start, end)
    }
}

/// View anchor and scale shared by both modes
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub target: Vec2,
    /// Within [MIN_ZOOM, MAX_ZOOM]
    pub zoom: f32,
}

impl Camera {
    pub fn new(target: Vec2, zoom: f32) -> Self {
        Self {
            target,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    /// Drag the target toward `pos` just enough to keep it within the leash
    pub fn follow(&mut self, pos: Vec2) {
        let distance = pos.distance(self.target);
        if distance > CAMERA_LEASH {
            let direction = (pos - self.target).normalize_or_zero();
            self.target += direction * (distance - CAMERA_LEASH);
        }
    }

    /// Exponential zoom: each scroll notch scales by the same factor
    pub fn apply_scroll(&mut self, scroll: f32) {
        self.zoom = (self.zoom.ln() + scroll * ZOOM_STEP)
            .exp()
            .clamp(MIN_ZOOM, MAX_ZOOM);
    }
}

/// Level editor state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    /// View anchor panned by the directional inputs
    pub cursor: Vec2,
    pub edit_mode: EditMode,
    /// Start of a segment awaiting its second click
    pub pending_start: Option<Vec2>,
    /// Last click made while adding lines (drawn as a marker)
    pub last_click: Option<Vec2>,
}

/// Observable outcomes of a tick
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    ModeChanged(PlayMode),
    /// Craft hit the obstacle at this storage index
    CraftCrashed { segment: usize },
    GoalReached { next_level: i32 },
    LevelLoaded(i32),
    LevelSaved(i32),
    SaveFailed(i32),
    EditModeChanged(EditMode),
    SegmentStarted(Vec2),
    SegmentAdded { index: usize },
    /// Level is at capacity; the add was dropped
    SegmentRejected,
    SegmentRemoved { index: usize },
    /// The last remaining segment cannot be removed
    RemovalRefused,
    GoalPlaced(Vec2),
}

/// Complete gameplay state, owned by the caller and passed to `tick`
#[derive(Debug, Clone)]
pub struct GameplayState {
    pub mode: PlayMode,
    pub craft: CraftState,
    pub camera: Camera,
    pub editor: EditorState,
    pub level: Level,
    pub level_index: i32,
    pub store: LevelStore,
    pub telemetry: Telemetry,
    pub show_graph: bool,
    pub show_debug: bool,
    /// Outcomes of the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameplayState {
    /// Start at `level_index`, loading it from `store`
    pub fn new(store: LevelStore, level_index: i32, zoom: f32) -> Self {
        let craft = CraftState::default();
        let camera = Camera::new(craft.pos + Vec2::new(20.0, 20.0), zoom);
        let level = store.load(level_index);
        Self {
            mode: PlayMode::Playing,
            craft,
            camera,
            editor: EditorState::default(),
            level,
            level_index,
            store,
            telemetry: Telemetry::default(),
            show_graph: false,
            show_debug: false,
            events: Vec::new(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut state = Self::new(
            LevelStore::new(settings.level_dir.clone()),
            settings.start_level,
            settings.initial_zoom,
        );
        state.show_graph = settings.show_graph;
        state.show_debug = settings.show_debug;
        state
    }

    /// Replace the in-memory level with the stored one at `index`
    pub fn load_level(&mut self, index: i32) {
        self.level_index = index;
        self.level = self.store.load(index);
        self.events.push(GameEvent::LevelLoaded(index));
    }

    /// Persist the current level; failures leave the in-memory level authoritative
    pub fn save_level(&mut self) {
        match self.store.save(&self.level, self.level_index) {
            Ok(()) => self.events.push(GameEvent::LevelSaved(self.level_index)),
            Err(err) => {
                log::warn!("Could not save level {}: {err}", self.level_index);
                self.events.push(GameEvent::SaveFailed(self.level_index));
            }
        }
    }

    /// Segments the editor would highlight under the pointer
    ///
    /// Only populated while removing lines.
    pub fn highlighted_segments(&self, pointer: Vec2) -> Vec<usize> {
        if self.mode != PlayMode::Editing || self.editor.edit_mode != EditMode::RemoveLines {
            return Vec::new();
        }
        super::editor::segments_under(&self.level, pointer).collect()
    }
}
