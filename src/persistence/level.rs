//! Level geometry: obstacle segments and an optional goal

use std::fmt;

use glam::Vec2;

use crate::consts::MAX_SEGMENTS;

/// An immovable obstacle edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Vec2,
    pub end: Vec2,
}

impl LineSegment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }
}

/// Returned when adding a segment to a level already holding `MAX_SEGMENTS`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelFull;

impl fmt::Display for LevelFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level already holds {MAX_SEGMENTS} segments")
    }
}

impl std::error::Error for LevelFull {}

/// Obstacles plus goal of one level
///
/// Segment count never exceeds `MAX_SEGMENTS`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Level {
    segments: Vec<LineSegment>,
    /// Reaching this point finishes the level; `None` means no goal was placed
    pub goal: Option<Vec2>,
}

impl Level {
    /// Empty level with no goal
    pub fn new() -> Self {
        Self {
            segments: Vec::with_capacity(MAX_SEGMENTS),
            goal: None,
        }
    }

    /// Segments in storage order
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_full(&self) -> bool {
        self.segments.len() >= MAX_SEGMENTS
    }

    /// Append a segment, refusing once the level is at capacity
    pub fn push_segment(&mut self, segment: LineSegment) -> Result<(), LevelFull> {
        if self.is_full() {
            return Err(LevelFull);
        }
        self.segments.push(segment);
        Ok(())
    }

    /// Remove by swapping in the last segment (order is not preserved)
    pub fn swap_remove_segment(&mut self, index: usize) -> Option<LineSegment> {
        (index < self.segments.len()).then(|| self.segments.swap_remove(index))
    }
}
