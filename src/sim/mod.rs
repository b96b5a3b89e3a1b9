//! Simulation module
//!
//! All gameplay logic lives here:
//! - Flight dynamics and crash/goal resolution
//! - Level editing
//! - Mode switching between the two
//! - No rendering or platform dependencies

pub mod editor;
pub mod flight;
pub mod geometry;
pub mod state;
pub mod telemetry;
pub mod tick;

pub use geometry::{Orientation, craft_hits_segment, orientation, segments_intersect};
pub use state::{Camera, CraftState, EditMode, EditorState, GameEvent, GameplayState, PlayMode};
pub use telemetry::{Channel, Telemetry};
pub use tick::{TickInput, tick};
