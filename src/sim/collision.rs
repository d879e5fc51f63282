//! Axis-aligned bounding box overlap
//!
//! Screen space, y grows downward. Touching edges count as overlap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Build from a top-left anchor and a size
    pub fn from_anchor(anchor: Vec2, size: Vec2) -> Self {
        Self::new(anchor.x, anchor.y, size.x, size.y)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Overlap test against another rectangle
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        aabb_overlap(self, other)
    }
}

/// Check whether two rectangles overlap, edges inclusive
///
/// Zero or negative extents are not normalized: a degenerate rectangle is
/// still run through the same four inequalities, so the result is
/// deterministic but may not match geometric intuition.
#[inline]
pub fn aabb_overlap(a: &Rect, b: &Rect) -> bool {
    a.right() >= b.x && a.x <= b.right() && a.bottom() >= b.y && a.y <= b.bottom()
}
