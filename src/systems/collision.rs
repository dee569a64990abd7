//! Geometry shared by every collision check in the game.
//!
//! Combat uses circles (fireballs, projectiles and enemy hit radii); the door and
//! power-ups use axis-aligned rectangles.

use glam::Vec2;

use crate::constants::ARENA_SIZE;

/// Returns true when two circles overlap.
///
/// Touching circles (distance exactly `r1 + r2`) do not collide.
pub fn collide(a: Vec2, r1: f32, b: Vec2, r2: f32) -> bool {
    a.distance(b) < r1 + r2
}

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// A rectangle of the given size centred on `center`.
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self::new(center - size / 2.0, size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Strict overlap test; rectangles sharing only an edge don't overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        a_max.x > other.pos.x && self.pos.x < b_max.x && a_max.y > other.pos.y && self.pos.y < b_max.y
    }
}

/// Whether a point lies inside the arena, edges included.
pub fn in_arena(point: Vec2) -> bool {
    point.cmpge(Vec2::ZERO).all() && point.cmple(ARENA_SIZE).all()
}

/// Clamps a rectangle's position so that it lies entirely inside the arena.
pub fn clamp_to_arena(pos: Vec2, size: Vec2) -> Vec2 {
    pos.clamp(Vec2::ZERO, (ARENA_SIZE - size).max(Vec2::ZERO))
}
