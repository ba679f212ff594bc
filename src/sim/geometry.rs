//! Axis-aligned rectangle geometry
//!
//! Screen coordinates: origin at the top-left of the field, y grows downward.
//! A rectangle stores only its top-left corner and size; every edge is
//! derived on read so the edges can never disagree with (x, y, w, h).

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Top-left corner
    #[inline]
    pub fn pos(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn bottom_left(&self) -> DVec2 {
        DVec2::new(self.left(), self.bottom())
    }

    pub fn bottom_right(&self) -> DVec2 {
        DVec2::new(self.right(), self.bottom())
    }

    /// Move the rectangle by a displacement
    #[inline]
    pub fn translate(&mut self, delta: DVec2) {
        self.x += delta.x;
        self.y += delta.y;
    }
}

/// Check whether two rectangles overlap
///
/// Separation is strict on every side, so rectangles that merely share an
/// edge are NOT separated and therefore count as overlapping.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    let separated =
        a.bottom() < b.top() || a.top() > b.bottom() || a.left() > b.right() || a.right() < b.left();
    !separated
}

/// Euclidean distance between two points
#[inline]
pub fn distance(p: DVec2, q: DVec2) -> f64 {
    p.distance(q)
}

/// Approximate "point lies on segment" test
///
/// Uses the triangle inequality: `p` is treated as touching segment `ab`
/// when going a -> p -> b is no longer than a -> b plus `epsilon`. The
/// accepted band is widest mid-segment and narrows to `epsilon` at the ends.
pub fn near_segment(a: DVec2, b: DVec2, p: DVec2, epsilon: f64) -> bool {
    distance(a, b) + epsilon >= distance(a, p) + distance(p, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_derived_edges() {
        let r = Rect::new(10.0, 20.0, 8.0, 22.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 42.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 18.0);
        assert_eq!(r.center(), DVec2::new(14.0, 31.0));
        assert_eq!(r.bottom_left(), DVec2::new(10.0, 42.0));
        assert_eq!(r.bottom_right(), DVec2::new(18.0, 42.0));
    }

    #[test]
    fn test_edges_follow_translation() {
        let mut r = Rect::new(0.0, 0.0, 4.0, 4.0);
        r.translate(DVec2::new(1.5, -2.0));
        assert_eq!(r.left(), 1.5);
        assert_eq!(r.right(), 5.5);
        assert_eq!(r.top(), -2.0);
        assert_eq!(r.bottom(), 2.0);
    }

    #[test]
    fn test_overlap_intersecting() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_overlap_contained() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 4.0, 4.0);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn test_overlap_separated_each_side() {
        let b = Rect::new(100.0, 100.0, 10.0, 10.0);
        // Above, below, left, right
        assert!(!overlaps(&Rect::new(100.0, 80.0, 10.0, 10.0), &b));
        assert!(!overlaps(&Rect::new(100.0, 120.0, 10.0, 10.0), &b));
        assert!(!overlaps(&Rect::new(80.0, 100.0, 10.0, 10.0), &b));
        assert!(!overlaps(&Rect::new(120.0, 100.0, 10.0, 10.0), &b));
    }

    #[test]
    fn test_overlap_touching_edges_counts() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares a's bottom edge
        assert!(overlaps(&a, &Rect::new(0.0, 10.0, 10.0, 10.0)));
        // Shares a's right edge
        assert!(overlaps(&a, &Rect::new(10.0, 0.0, 10.0, 10.0)));
        // Corner contact
        assert!(overlaps(&a, &Rect::new(10.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_overlap_just_apart() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &Rect::new(0.0, 10.0001, 10.0, 10.0)));
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(DVec2::new(0.0, 0.0), DVec2::new(3.0, 4.0)), 5.0);
        assert_eq!(distance(DVec2::new(-1.0, 2.0), DVec2::new(-1.0, 2.0)), 0.0);
    }

    #[test]
    fn test_near_segment() {
        let a = DVec2::new(0.0, 100.0);
        let b = DVec2::new(100.0, 100.0);
        // On the segment
        assert!(near_segment(a, b, DVec2::new(50.0, 100.0), 0.1));
        // Slightly above the middle: detour is tiny relative to the slack
        assert!(near_segment(a, b, DVec2::new(50.0, 99.9), 0.1));
        // Well above
        assert!(!near_segment(a, b, DVec2::new(50.0, 90.0), 0.1));
        // Beyond an endpoint on the same line
        assert!(!near_segment(a, b, DVec2::new(110.0, 100.0), 0.1));
    }

    #[test]
    fn test_near_segment_slack_widest_mid_segment() {
        // Same height off the line: accepted mid-segment, rejected above an endpoint
        let a = DVec2::new(0.0, 100.0);
        let b = DVec2::new(100.0, 100.0);
        assert!(near_segment(a, b, DVec2::new(50.0, 98.0), 0.1));
        assert!(!near_segment(a, b, DVec2::new(0.0, 98.0), 0.1));
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-500.0..500.0f64, -500.0..500.0f64, 0.1..200.0f64, 0.1..200.0f64)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_overlap_symmetric(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn prop_rect_overlaps_itself(a in rect_strategy()) {
            prop_assert!(overlaps(&a, &a));
        }
    }
}
