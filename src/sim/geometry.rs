//! Segment intersection tests used for crashes and editor picking
//!
//! Everything here is a pure function over points. Colinear overlaps are not
//! treated as intersections; the game only cares about wings crossing edges.

use glam::Vec2;

/// Winding of an ordered point triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Colinear,
    Clockwise,
    CounterClockwise,
}

/// Offset of the second body probe used by `craft_hits_segment`
pub const BODY_PROBE_OFFSET: Vec2 = Vec2::new(10.0, 10.0);

/// Orientation of the triple (a, b, c) from the sign of (b - a) × (c - b)
///
/// Exact zero is colinear; there is no epsilon.
pub fn orientation(a: Vec2, b: Vec2, c: Vec2) -> Orientation {
    let val = (b.y - a.y) * (c.x - b.x) - (b.x - a.x) * (c.y - b.y);
    if val == 0.0 {
        Orientation::Colinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// General-position crossing test between segments p1p2 and q1q2
pub fn segments_intersect(p1: Vec2, p2: Vec2, q1: Vec2, q2: Vec2) -> bool {
    let o1 = orientation(p1, p2, q1);
    let o2 = orientation(p1, p2, q2);
    let o3 = orientation(q1, q2, p1);
    let o4 = orientation(q1, q2, p2);
    o1 != o2 && o3 != o4
}

/// Check whether either wing of a craft crosses an obstacle segment
///
/// Each wing is tested from the body and again from a body point shifted by
/// `BODY_PROBE_OFFSET`, which thickens the probe enough to catch most fast
/// crossings between ticks.
pub fn craft_hits_segment(
    body: Vec2,
    left_wing: Vec2,
    right_wing: Vec2,
    seg_start: Vec2,
    seg_end: Vec2,
) -> bool {
    let offset_body = body + BODY_PROBE_OFFSET;
    [body, offset_body].into_iter().any(|origin| {
        segments_intersect(origin, left_wing, seg_start, seg_end)
            || segments_intersect(origin, right_wing, seg_start, seg_end)
    })
}
