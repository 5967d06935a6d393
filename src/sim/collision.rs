//! Axis-aligned rectangle overlap testing.
//!
//! The only collision shape in the game is the AABB: obstacles and the player
//! are both rectangles, and a hit requires genuine area overlap on both axes.

use glam::Vec2;

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }
}

/// Strict AABB overlap: all four inequalities must hold, so rectangles that
/// merely share an edge do not collide.
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.bottom() > b.pos.y && a.pos.y < b.bottom() && a.right() > b.pos.x && a.pos.x < b.right()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(rects_overlap(&a, &b));
        assert!(rects_overlap(&b, &a));
    }

    #[test]
    fn test_contained_rect_collides() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(rects_overlap(&outer, &inner));
    }

    #[test]
    fn test_adjacent_edges_do_not_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Touching on the right edge, no overlap
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &right));
        // Touching on the bottom edge
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &below));
    }

    #[test]
    fn test_separated_rects_do_not_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(50.0, 50.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &b));
    }

    #[test]
    fn test_axis_overlap_on_one_axis_only() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Overlaps horizontally, clear vertically
        let b = Rect::new(5.0, 30.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &b));
    }
}
