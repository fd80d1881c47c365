//! Catch and miss geometry
//!
//! Axis-aligned overlap on entity centers, with the grace margin shrinking
//! both half-extents so the effective hitbox is smaller than the sprites.

use glam::Vec2;

/// True when two centered boxes overlap after shrinking the combined
/// half-extents by `grace` on each axis
pub fn catch_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2, grace: f32) -> bool {
    let d = (a_pos - b_pos).abs();
    d.x <= (a_size.x + b_size.x) / 2.0 - grace && d.y <= (a_size.y + b_size.y) / 2.0 - grace
}

/// True when a centered box's bottom edge has passed the arena's bottom edge
pub fn past_bottom(pos_y: f32, height: f32, arena_h: f32) -> bool {
    pos_y + height / 2.0 > arena_h
}
