//! Axis-aligned bounding box overlap
//!
//! The only collision primitive in the game. Intervals are half-open, so
//! rectangles that merely touch along an edge do not overlap.

use glam::Vec2;

/// An axis-aligned rectangle (top-left origin, like the canvas)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// A square box, which is all this game ever needs
    pub fn square(pos: Vec2, edge: f32) -> Self {
        Self::new(pos, Vec2::splat(edge))
    }

    /// Half-open interval overlap test on both axes
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && self.pos.x + self.size.x > other.pos.x
            && self.pos.y < other.pos.y + other.size.y
            && self.pos.y + self.size.y > other.pos.y
    }
}
