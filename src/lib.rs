//! Wingflap - A gravity-bound wing flapping arcade game
//!
//! Core modules:
//! - `sim`: Simulation (flight dynamics, collisions, level editor, mode control)
//! - `persistence`: Levels and their fixed-layout binary files
//! - `settings`: Runtime configuration

pub mod persistence;
pub mod settings;
pub mod sim;

pub use persistence::{Level, LevelFull, LevelStore, LineSegment};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Half span of a wing (body to wing tip, before rotation)
    pub const WING_WIDTH: f32 = 40.0;
    /// Maximum obstacle segments per level
    pub const MAX_SEGMENTS: usize = 100;

    /// Turn rate (degrees per second)
    pub const ROT_SPEED: f32 = 300.0;
    /// Wings stop rising at this angle (degrees)
    pub const MAX_FLAP_AMOUNT: f32 = 90.0;
    pub const MAX_FLAP_VELOCITY: f32 = 2000.0;
    /// Flap velocity gained per second while the flap input is held
    pub const FLAP_CHARGE: f32 = 30.0;
    /// Wing fall rate when the flap input is released (degrees per second)
    pub const FLAP_DECAY: f32 = 500.0;
    /// Thrust per unit of flap velocity
    pub const THRUST_FACTOR: f32 = 8.0;
    /// Downward acceleration (units/s²)
    pub const GRAVITY: f32 = 10.0;

    /// Slack between craft and camera target before the camera is dragged along
    pub const CAMERA_LEASH: f32 = 100.0;
    /// Craft closer than this to the goal finishes the level
    pub const GOAL_RADIUS: f32 = 40.0;

    /// Start of a level and target of the reset input
    pub const SPAWN_POS: Vec2 = Vec2::new(100.0, 100.0);
    /// Where the craft reappears after hitting an obstacle
    pub const CRASH_RESPAWN_POS: Vec2 = Vec2::new(100.0, 50.0);

    /// Editor cursor pan speed (units per second)
    pub const EDIT_PAN_SPEED: f32 = 400.0;
    pub const MIN_ZOOM: f32 = 0.1;
    pub const MAX_ZOOM: f32 = 3.0;
    /// Log-zoom change per scroll notch
    pub const ZOOM_STEP: f32 = 0.1;
    pub const DEFAULT_ZOOM: f32 = 0.5;
    /// Half extent of the diagonal probe used to pick segments under the pointer
    pub const PICK_OFFSET: f32 = 5.0;

    /// Telemetry sampling period (seconds)
    pub const TELEMETRY_PERIOD: f32 = 0.05;
    /// Telemetry ring buffer length
    pub const TELEMETRY_SAMPLES: usize = 150;
    /// Samples shown by the graph overlay
    pub const TELEMETRY_DISPLAY_SAMPLES: usize = 50;
}

/// Rotate a vector by an angle in degrees (counter-clockwise in y-up space)
#[inline]
pub fn rotate_deg(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}
