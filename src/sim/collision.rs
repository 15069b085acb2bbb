//! Axis-aligned collision predicates
//!
//! Shared by the physics engine (landing, blocking, capture) and the state
//! machine (spike and clear checks). Edges follow the strict-overlap
//! convention: boxes that merely touch do not intersect, while containment
//! allows coinciding edges.

use glam::Vec2;

/// True if the spans [a_min, a_max] and [b_min, b_max] overlap.
/// Touching endpoints do not count.
#[inline]
pub fn spans_overlap(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> bool {
    a_max > b_min && a_min < b_max
}

/// True if box A (origin + size) intersects box B
pub fn aabb_intersects(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    spans_overlap(a_pos.x, a_pos.x + a_size.x, b_pos.x, b_pos.x + b_size.x)
        && spans_overlap(a_pos.y, a_pos.y + a_size.y, b_pos.y, b_pos.y + b_size.y)
}

/// True if the inner box lies fully within the outer box, edges allowed to
/// coincide. This is the goal-capture predicate: partial overlap is not
/// containment.
pub fn aabb_contains(outer_pos: Vec2, outer_size: Vec2, inner_pos: Vec2, inner_size: Vec2) -> bool {
    inner_pos.x >= outer_pos.x
        && inner_pos.x + inner_size.x <= outer_pos.x + outer_size.x
        && inner_pos.y >= outer_pos.y
        && inner_pos.y + inner_size.y <= outer_pos.y + outer_size.y
}

/// True if a box bottom sits on a surface top within the given tolerance band
#[inline]
pub fn rests_on(bottom: f32, surface_top: f32, tolerance: f32) -> bool {
    (bottom - surface_top).abs() <= tolerance
}
