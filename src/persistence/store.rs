//! File-backed level storage
//!
//! Each level lives in its own file named `level<N>` holding exactly one
//! fixed-size record: the segment array at full capacity, the segment count,
//! then the goal. Unused slots are zeroed and a goal at the origin means
//! "no goal". Values are stored in native byte order with no header.

use std::fs;
use std::io;
use std::path::PathBuf;

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::level::{Level, LineSegment};
use crate::consts::MAX_SEGMENTS;

/// On-disk layout of a level file
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct LevelRecord {
    segments: [[Vec2; 2]; MAX_SEGMENTS],
    segment_count: i32,
    goal: Vec2,
}

/// Size in bytes of every level file
pub const RECORD_SIZE: usize = std::mem::size_of::<LevelRecord>();

impl LevelRecord {
    fn from_level(level: &Level) -> Self {
        let mut record = Self::zeroed();
        for (slot, seg) in record.segments.iter_mut().zip(level.segments()) {
            *slot = [seg.start, seg.end];
        }
        // Bounded by MAX_SEGMENTS, always fits
        record.segment_count = level.segment_count() as i32;
        record.goal = level.goal.unwrap_or(Vec2::ZERO);
        record
    }

    /// Rebuild a level, or `None` if the stored count is out of range
    fn into_level(self) -> Option<Level> {
        let count = usize::try_from(self.segment_count)
            .ok()
            .filter(|&count| count <= MAX_SEGMENTS)?;

        let mut level = Level::new();
        for [start, end] in &self.segments[..count] {
            level.push_segment(LineSegment::new(*start, *end)).ok()?;
        }
        level.goal = (self.goal != Vec2::ZERO).then_some(self.goal);
        Some(level)
    }
}

/// Loads and saves levels by index inside one directory
#[derive(Debug, Clone)]
pub struct LevelStore {
    dir: PathBuf,
}

impl LevelStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File holding the given level (`level-1` is the level before level 0)
    pub fn path_for(&self, index: i32) -> PathBuf {
        self.dir.join(format!("level{index}"))
    }

    /// Load a level, substituting an empty one if it has not been authored yet
    ///
    /// Missing, short, or corrupt files all yield an empty level with no goal.
    pub fn load(&self, index: i32) -> Level {
        let path = self.path_for(index);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::info!("No level file at {} ({err}), starting empty", path.display());
                return Level::new();
            }
        };

        let Some(record_bytes) = bytes.get(..RECORD_SIZE) else {
            log::warn!(
                "Level file {} is truncated ({} of {RECORD_SIZE} bytes), starting empty",
                path.display(),
                bytes.len()
            );
            return Level::new();
        };

        let record: LevelRecord = bytemuck::pod_read_unaligned(record_bytes);
        match record.into_level() {
            Some(level) => {
                log::info!(
                    "Loaded level {index} ({} segments, goal {:?})",
                    level.segment_count(),
                    level.goal
                );
                level
            }
            None => {
                log::warn!(
                    "Level file {} has invalid segment count {}, starting empty",
                    path.display(),
                    record.segment_count
                );
                Level::new()
            }
        }
    }

    /// Write a level's full record
    ///
    /// The record goes to a temporary file first and is renamed into place,
    /// so a failed save leaves the previous file untouched.
    pub fn save(&self, level: &Level, index: i32) -> io::Result<()> {
        let path = self.path_for(index);
        let tmp = path.with_extension("tmp");
        let record = LevelRecord::from_level(level);

        fs::write(&tmp, bytemuck::bytes_of(&record))?;
        if let Err(err) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }

        log::info!(
            "Saved level {index} ({} segments) to {}",
            level.segment_count(),
            path.display()
        );
        Ok(())
    }
}
