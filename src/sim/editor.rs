//! Level editor step
//!
//! Pans and zooms the editor view, navigates between level files, and applies
//! primary clicks according to the current `EditMode`.

use glam::Vec2;

use super::geometry::craft_hits_segment;
use super::state::{EditMode, GameEvent, GameplayState};
use super::tick::TickInput;
use crate::consts::*;
use crate::persistence::{Level, LineSegment};

/// Advance the editor by one tick
pub fn step_editor(state: &mut GameplayState, input: &TickInput, dt: f32) {
    let pan = EDIT_PAN_SPEED * dt;
    let cursor = &mut state.editor.cursor;
    if input.pan_left {
        cursor.x -= pan;
    }
    if input.pan_right {
        cursor.x += pan;
    }
    if input.pan_up {
        cursor.y -= pan;
    }
    if input.pan_down {
        cursor.y += pan;
    }

    if input.save {
        state.save_level();
    }
    if input.cycle_edit_mode {
        let mode = state.editor.edit_mode.next();
        state.editor.edit_mode = mode;
        log::debug!("Edit mode: {}", mode.label());
        state.events.push(GameEvent::EditModeChanged(mode));
    }

    // Navigation discards unsaved edits
    if input.next_level {
        state.load_level(state.level_index + 1);
    }
    if input.prev_level {
        state.load_level(state.level_index - 1);
    }

    if input.click {
        match state.editor.edit_mode {
            EditMode::AddLines => add_line_click(state, input.pointer),
            EditMode::RemoveLines => remove_line_click(state, input.pointer),
            EditMode::PlaceGoal => place_goal(state, input.pointer),
        }
    }

    state.camera.apply_scroll(input.scroll);
    state.camera.target = state.editor.cursor;
}

/// Indices of every segment under the pointer, in storage order
///
/// The pointer is thickened into a short diagonal probe and run through the
/// same test used for craft crashes.
pub fn segments_under(level: &Level, pointer: Vec2) -> impl Iterator<Item = usize> + '_ {
    let offset = Vec2::splat(PICK_OFFSET);
    level
        .segments()
        .iter()
        .enumerate()
        .filter(move |(_, seg)| {
            craft_hits_segment(pointer, pointer + offset, pointer - offset, seg.start, seg.end)
        })
        .map(|(index, _)| index)
}

/// First click stores a start point, second click commits the segment
fn add_line_click(state: &mut GameplayState, pointer: Vec2) {
    state.editor.last_click = Some(pointer);
    let Some(start) = state.editor.pending_start.take() else {
        state.editor.pending_start = Some(pointer);
        state.events.push(GameEvent::SegmentStarted(pointer));
        return;
    };

    match state.level.push_segment(LineSegment::new(start, pointer)) {
        Ok(()) => {
            let index = state.level.segment_count() - 1;
            log::debug!("Added segment {index}: {start:?} -> {pointer:?}");
            state.events.push(GameEvent::SegmentAdded { index });
        }
        Err(err) => {
            log::warn!("Segment {start:?} -> {pointer:?} dropped: {err}");
            state.events.push(GameEvent::SegmentRejected);
        }
    }
}

/// Move the goal to the pointer
///
/// The origin is the stored "no goal" marker, so a click there clears the goal.
fn place_goal(state: &mut GameplayState, pointer: Vec2) {
    state.level.goal = (pointer != Vec2::ZERO).then_some(pointer);
    match state.level.goal {
        Some(goal) => state.events.push(GameEvent::GoalPlaced(goal)),
        None => log::debug!("Goal cleared by click at origin"),
    }
}

/// Remove the first segment under the pointer and save the level
///
/// The last remaining segment is never removed.
fn remove_line_click(state: &mut GameplayState, pointer: Vec2) {
    let Some(index) = segments_under(&state.level, pointer).next() else {
        return;
    };
    if state.level.segment_count() == 1 {
        state.events.push(GameEvent::RemovalRefused);
        return;
    }

    state.level.swap_remove_segment(index);
    log::debug!("Removed segment {index}");
    state.events.push(GameEvent::SegmentRemoved { index });
    state.save_level();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::LevelStore;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    fn temp_state(name: &str) -> GameplayState {
        let dir = std::env::temp_dir().join(format!("wingflap-editor-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        GameplayState::new(LevelStore::new(dir), 0, DEFAULT_ZOOM)
    }

    fn click_at(pointer: Vec2) -> TickInput {
        TickInput {
            click: true,
            pointer,
            ..Default::default()
        }
    }

    fn horizontal(y: f32) -> LineSegment {
        LineSegment::new(Vec2::new(-100.0, y), Vec2::new(100.0, y))
    }

    #[test]
    fn test_two_clicks_add_one_segment() {
        let mut state = temp_state("add");
        step_editor(&mut state, &click_at(Vec2::new(0.0, 0.0)), DT);
        assert_eq!(state.level.segment_count(), 0);
        assert_eq!(state.editor.pending_start, Some(Vec2::ZERO));

        step_editor(&mut state, &click_at(Vec2::new(50.0, 20.0)), DT);
        assert_eq!(
            state.level.segments(),
            &[LineSegment::new(Vec2::ZERO, Vec2::new(50.0, 20.0))]
        );
        assert_eq!(state.editor.pending_start, None);
        assert_eq!(state.editor.last_click, Some(Vec2::new(50.0, 20.0)));

        // Third click starts a fresh segment rather than chaining
        step_editor(&mut state, &click_at(Vec2::new(80.0, 80.0)), DT);
        assert_eq!(state.level.segment_count(), 1);
        assert_eq!(state.editor.pending_start, Some(Vec2::new(80.0, 80.0)));
    }

    #[test]
    fn test_add_rejected_when_full() {
        let mut state = temp_state("full");
        for i in 0..MAX_SEGMENTS {
            state.level.push_segment(horizontal(i as f32 * 20.0)).unwrap();
        }
        step_editor(&mut state, &click_at(Vec2::new(0.0, -50.0)), DT);
        step_editor(&mut state, &click_at(Vec2::new(10.0, -50.0)), DT);
        assert_eq!(state.level.segment_count(), MAX_SEGMENTS);
        assert!(state.events.contains(&GameEvent::SegmentRejected));
        assert_eq!(state.editor.pending_start, None);
    }

    #[test]
    fn test_remove_swaps_last_and_saves() {
        let mut state = temp_state("remove");
        state.editor.edit_mode = EditMode::RemoveLines;
        for y in [0.0, 100.0, 200.0] {
            state.level.push_segment(horizontal(y)).unwrap();
        }

        step_editor(&mut state, &click_at(Vec2::new(0.0, 1.0)), DT);
        assert_eq!(state.level.segments(), &[horizontal(200.0), horizontal(100.0)]);
        assert!(state.events.contains(&GameEvent::SegmentRemoved { index: 0 }));
        assert!(state.events.contains(&GameEvent::LevelSaved(0)));
        assert_eq!(state.store.load(0), state.level);
    }

    #[test]
    fn test_remove_misses_leave_level_alone() {
        let mut state = temp_state("remove-miss");
        state.editor.edit_mode = EditMode::RemoveLines;
        state.level.push_segment(horizontal(0.0)).unwrap();
        state.level.push_segment(horizontal(100.0)).unwrap();

        step_editor(&mut state, &click_at(Vec2::new(0.0, 50.0)), DT);
        assert_eq!(state.level.segment_count(), 2);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_sole_segment_is_never_removed() {
        let mut state = temp_state("remove-sole");
        state.editor.edit_mode = EditMode::RemoveLines;
        state.level.push_segment(horizontal(0.0)).unwrap();

        step_editor(&mut state, &click_at(Vec2::new(0.0, 1.0)), DT);
        assert_eq!(state.level.segment_count(), 1);
        assert_eq!(state.events, vec![GameEvent::RemovalRefused]);
        assert!(!state.store.path_for(0).exists());
    }

    #[test]
    fn test_place_goal_overwrites() {
        let mut state = temp_state("goal");
        state.editor.edit_mode = EditMode::PlaceGoal;
        step_editor(&mut state, &click_at(Vec2::new(300.0, -40.0)), DT);
        step_editor(&mut state, &click_at(Vec2::new(500.0, 60.0)), DT);
        assert_eq!(state.level.goal, Some(Vec2::new(500.0, 60.0)));
    }

    #[test]
    fn test_goal_at_origin_matches_saved_level() {
        let mut state = temp_state("goal-origin");
        state.editor.edit_mode = EditMode::PlaceGoal;
        step_editor(&mut state, &click_at(Vec2::new(300.0, -40.0)), DT);
        step_editor(&mut state, &click_at(Vec2::ZERO), DT);
        assert_eq!(state.level.goal, None);

        state.save_level();
        assert_eq!(state.store.load(0).goal, state.level.goal);

        // Flying onto the origin does not finish the level
        state.mode = crate::sim::PlayMode::Playing;
        state.craft.pos = Vec2::new(5.0, 5.0);
        state.craft.vel = Vec2::ZERO;
        crate::sim::flight::step_flight(&mut state, &TickInput::default(), DT);
        assert_eq!(state.level_index, 0);
    }

    #[test]
    fn test_save_and_navigate_levels() {
        let mut state = temp_state("navigate");
        state.level.push_segment(horizontal(0.0)).unwrap();
        let save = TickInput {
            save: true,
            ..Default::default()
        };
        step_editor(&mut state, &save, DT);
        assert!(state.store.path_for(0).exists());

        // Unsaved edit is dropped by navigation
        state.level.push_segment(horizontal(10.0)).unwrap();
        let next = TickInput {
            next_level: true,
            ..Default::default()
        };
        step_editor(&mut state, &next, DT);
        assert_eq!(state.level_index, 1);
        assert_eq!(state.level.segment_count(), 0);

        let prev = TickInput {
            prev_level: true,
            ..Default::default()
        };
        step_editor(&mut state, &prev, DT);
        step_editor(&mut state, &prev, DT);
        assert_eq!(state.level_index, -1);
        assert!(!state.store.path_for(1).exists());

        step_editor(&mut state, &next, DT);
        assert_eq!(state.level_index, 0);
        assert_eq!(state.level.segments(), &[horizontal(0.0)]);
    }

    #[test]
    fn test_cycle_edit_mode() {
        let mut state = temp_state("cycle");
        let cycle = TickInput {
            cycle_edit_mode: true,
            ..Default::default()
        };
        step_editor(&mut state, &cycle, DT);
        assert_eq!(state.editor.edit_mode, EditMode::RemoveLines);
        step_editor(&mut state, &cycle, DT);
        step_editor(&mut state, &cycle, DT);
        assert_eq!(state.editor.edit_mode, EditMode::AddLines);
    }

    #[test]
    fn test_pan_moves_cursor_and_camera() {
        let mut state = temp_state("pan");
        let input = TickInput {
            pan_right: true,
            pan_up: true,
            ..Default::default()
        };
        step_editor(&mut state, &input, 0.5);
        assert_eq!(state.editor.cursor, Vec2::new(200.0, -200.0));
        assert_eq!(state.camera.target, state.editor.cursor);
    }

    #[test]
    fn test_segments_under_lists_every_hit() {
        let mut level = Level::new();
        level.push_segment(horizontal(0.0)).unwrap();
        level.push_segment(horizontal(300.0)).unwrap();
        level
            .push_segment(LineSegment::new(Vec2::new(2.0, -50.0), Vec2::new(2.0, 50.0)))
            .unwrap();
        let hits: Vec<usize> = segments_under(&level, Vec2::new(0.0, 1.0)).collect();
        assert_eq!(hits, vec![0, 2]);
    }

    proptest! {
        #[test]
        fn prop_zoom_stays_in_bounds(scrolls in prop::collection::vec(-20.0f32..20.0, 1..100)) {
            let mut state = temp_state("prop-zoom");
            for scroll in scrolls {
                let input = TickInput { scroll, ..Default::default() };
                step_editor(&mut state, &input, DT);
                prop_assert!((MIN_ZOOM..=MAX_ZOOM).contains(&state.camera.zoom));
            }
        }
    }
}
