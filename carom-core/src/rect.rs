//! Inclusive pixel rectangles and dirty-region math
//!
//! Rectangles carry signed coordinates on purpose: bounds taken around a
//! ball near the panel edge may extend past it, and the math stays exact
//! until a final clamp brings the region back onto the panel.

use crate::config::PanelConfig;

/// Axis-aligned rectangle with inclusive corners
///
/// `x1` and `y1` name the last covered column and row, so a single pixel
/// at the origin is `(0, 0, 0, 0)`. Constructors keep `x0 <= x1` and
/// `y0 <= y1`; the arithmetic here assumes callers do the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    /// First covered column
    pub x0: i32,
    /// First covered row
    pub y0: i32,
    /// Last covered column
    pub x1: i32,
    /// Last covered row
    pub y1: i32,
}

impl Rect {
    /// Create a rectangle from inclusive corners
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Square bounds around a ball center, padded by `margin`
    ///
    /// Not clamped; near the panel edge the result extends past it.
    pub const fn around(cx: i32, cy: i32, radius: i32, margin: i32) -> Self {
        let reach = radius + margin;
        Self {
            x0: cx - reach,
            y0: cy - reach,
            x1: cx + reach,
            y1: cy + reach,
        }
    }

    /// Smallest rectangle covering both inputs
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// Clamp every coordinate onto the panel
    ///
    /// Assumes the rectangle overlaps the panel, which holds for bounds
    /// taken around a ball that the motion step keeps on screen.
    pub fn clamp_to(&self, panel: &PanelConfig) -> Rect {
        Rect {
            x0: self.x0.clamp(0, panel.max_x()),
            y0: self.y0.clamp(0, panel.max_y()),
            x1: self.x1.clamp(0, panel.max_x()),
            y1: self.y1.clamp(0, panel.max_y()),
        }
    }

    /// Covered columns
    pub const fn width(&self) -> i32 {
        self.x1 - self.x0 + 1
    }

    /// Covered rows
    pub const fn height(&self) -> i32 {
        self.y1 - self.y0 + 1
    }

    /// Covered pixels
    pub const fn pixel_count(&self) -> usize {
        (self.width() * self.height()) as usize
    }

    /// Bytes needed to hold the covered pixels at two bytes per pixel
    pub const fn byte_len(&self) -> usize {
        self.pixel_count() * 2
    }

    /// Whether `other` lies fully inside this rectangle
    pub fn contains(&self, other: &Rect) -> bool {
        self.x0 <= other.x0 && self.y0 <= other.y0 && self.x1 >= other.x1 && self.y1 >= other.y1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_around_pads_by_radius_plus_margin() {
        let r = Rect::around(100, 50, 18, 2);
        assert_eq!(r, Rect::new(80, 30, 120, 70));
        assert_eq!(r.width(), 41);
        assert_eq!(r.height(), 41);
    }

    #[test]
    fn test_around_near_edge_goes_negative() {
        let r = Rect::around(18, 18, 18, 2);
        assert_eq!(r, Rect::new(-2, -2, 38, 38));
    }

    #[test]
    fn test_union_covers_both() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, -3, 20, 8);
        let u = a.union(&b);
        assert_eq!(u, Rect::new(0, -3, 20, 10));
        assert!(u.contains(&a));
        assert!(u.contains(&b));
    }

    #[test]
    fn test_union_is_commutative() {
        let a = Rect::around(22, 22, 18, 2);
        let b = Rect::around(24, 24, 18, 2);
        assert_eq!(a.union(&b), b.union(&a));
    }

    #[test]
    fn test_clamp_to_panel() {
        let panel = PanelConfig::new(240, 240);
        let r = Rect::new(-2, -5, 241, 239).clamp_to(&panel);
        assert_eq!(r, Rect::new(0, 0, 239, 239));

        // Interior rectangles pass through untouched
        let inner = Rect::new(10, 20, 30, 40);
        assert_eq!(inner.clamp_to(&panel), inner);
    }

    #[test]
    fn test_single_pixel_sizes() {
        let px = Rect::new(7, 7, 7, 7);
        assert_eq!(px.width(), 1);
        assert_eq!(px.height(), 1);
        assert_eq!(px.pixel_count(), 1);
        assert_eq!(px.byte_len(), 2);
    }

    #[test]
    fn test_byte_len_is_two_per_pixel() {
        let r = Rect::new(0, 0, 239, 239);
        assert_eq!(r.pixel_count(), 240 * 240);
        assert_eq!(r.byte_len(), 240 * 240 * 2);

        let band = Rect::new(0, 80, 239, 159);
        assert_eq!(band.byte_len(), 240 * 80 * 2);
    }

    #[test]
    fn test_dirty_patch_roundtrip() {
        // Two consecutive ball bounds near a corner: union then clamp
        // produces the exact on-panel patch that covers both.
        let panel = PanelConfig::new(240, 240);
        let prev = Rect::around(20, 20, 18, 2);
        let next = Rect::around(22, 22, 18, 2);
        let patch = prev.union(&next).clamp_to(&panel);
        assert_eq!(patch, Rect::new(0, 0, 42, 42));
        assert!(patch.contains(&next.clamp_to(&panel)));
    }
}
