//! Collision rules
//!
//! Everything is an axis-aligned bounding-box test. Landing on a platform
//! gets one extra gate: the hero only lands while falling, and only when
//! its feet were near the platform top this tick. The tolerance term scales
//! with the fall speed so a fast fall cannot tunnel straight through a
//! platform, and keeps a sideways brush against a platform's edge from
//! snapping the hero on top of it.

use crate::geom::Rect;

/// Slack added on top of the per-tick fall distance when deciding whether
/// an overlap counts as a landing. Tuning this changes the game feel;
/// the value is load-bearing.
pub const LANDING_TOLERANCE: f32 = 10.0;

/// Does a falling body land on this platform?
///
/// True only when the boxes overlap, the body is falling (`vel_y >= 0`),
/// and its bottom edge is within `vel_y + LANDING_TOLERANCE` of the
/// platform top.
pub fn lands_on(body: &Rect, vel_y: f32, platform: &Rect) -> bool {
    body.overlaps(platform) && vel_y >= 0.0 && body.bottom() <= platform.y + vel_y + LANDING_TOLERANCE
}
