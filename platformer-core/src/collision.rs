//! Stateless overlap tests and the ground probe.

use crate::constants::GROUND_Y;
use crate::fixed::Fix32;

/// Axis-aligned rectangle in pixel coordinates. A value type for overlap
/// queries, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl CollisionBox {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> CollisionBox {
        CollisionBox {
            x,
            y,
            width,
            height,
        }
    }
}

/// AABB overlap with a strict trailing edge: boxes that merely touch do not
/// overlap.
#[inline]
pub fn boxes_overlap(a: &CollisionBox, b: &CollisionBox) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

/// Point-in-rectangle, inclusive on all four edges.
#[inline]
pub fn point_in_box(px: i32, py: i32, b: &CollisionBox) -> bool {
    px >= b.x && px <= b.x + b.width && py >= b.y && py <= b.y + b.height
}

/// Flat ground line: at or below the threshold counts as grounded.
/// Placeholder until tilemap collision lands.
#[inline]
pub fn on_ground(pos_y: Fix32) -> bool {
    pos_y.to_int() >= GROUND_Y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_boxes_are_detected() {
        let a = CollisionBox::new(0, 0, 16, 16);
        let b = CollisionBox::new(8, 8, 16, 16);
        assert!(boxes_overlap(&a, &b));
        assert!(boxes_overlap(&b, &a));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = CollisionBox::new(0, 0, 16, 16);
        let right = CollisionBox::new(16, 0, 16, 16);
        let below = CollisionBox::new(0, 16, 16, 16);
        assert!(!boxes_overlap(&a, &right));
        assert!(!boxes_overlap(&a, &below));
    }

    #[test]
    fn disjoint_boxes_do_not_overlap() {
        let a = CollisionBox::new(0, 0, 8, 8);
        let b = CollisionBox::new(100, 100, 8, 8);
        assert!(!boxes_overlap(&a, &b));
    }

    #[test]
    fn point_test_is_inclusive_on_all_edges() {
        let b = CollisionBox::new(10, 20, 30, 40);
        assert!(point_in_box(10, 20, &b));
        assert!(point_in_box(40, 60, &b));
        assert!(point_in_box(25, 40, &b));
        assert!(!point_in_box(9, 20, &b));
        assert!(!point_in_box(41, 60, &b));
    }

    #[test]
    fn ground_probe_uses_integer_threshold() {
        assert!(!on_ground(Fix32::from_int(GROUND_Y - 1)));
        assert!(on_ground(Fix32::from_int(GROUND_Y)));
        assert!(on_ground(Fix32::from_int(GROUND_Y + 5)));
        // Sub-pixel above the line is still airborne.
        assert!(!on_ground(
            Fix32::from_int(GROUND_Y) - Fix32::from_fraction(1, 2)
        ));
    }
}
