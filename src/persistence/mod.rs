//! Level persistence
//!
//! Features:
//! - Bounded in-memory level (segments + optional goal)
//! - One fixed-size binary record per level index
//! - Atomic save (tmp → rename)
//! - Missing or corrupt files load as an empty level

pub mod level;
pub mod store;

pub use level::{Level, LevelFull, LineSegment};
pub use store::{LevelStore, RECORD_SIZE};
