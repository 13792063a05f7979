//! Scene composition
//!
//! The demo scene is a backdrop of three horizontal color bands with a
//! ball on top. The full backdrop is only painted once; after that the
//! animation repaints just the dirty patch around the ball, so the
//! composition here works over an arbitrary rectangle and reproduces
//! whatever backdrop lies beneath it.

use crate::color::Rgb565;
use crate::config::PanelConfig;
use crate::motion::Ball;
use crate::rect::Rect;

/// Number of backdrop bands
pub const BAND_COUNT: usize = 3;

/// Backdrop bands plus the ball color
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Scene {
    panel: PanelConfig,
    bands: [Rgb565; BAND_COUNT],
    ball_color: Rgb565,
}

impl Scene {
    /// Describe a scene for the given panel
    pub const fn new(panel: PanelConfig, bands: [Rgb565; BAND_COUNT], ball_color: Rgb565) -> Self {
        Self {
            panel,
            bands,
            ball_color,
        }
    }

    /// Panel this scene is laid out for
    pub fn panel(&self) -> &PanelConfig {
        &self.panel
    }

    /// Backdrop color for a row
    ///
    /// Bands split the panel into thirds; when the height does not divide
    /// evenly the remainder rows extend the bottom band.
    pub fn band_at(&self, y: i32) -> Rgb565 {
        let third = self.panel.height as i32 / BAND_COUNT as i32;
        let idx = (y / third).min(BAND_COUNT as i32 - 1) as usize;
        self.bands[idx]
    }

    /// Fill color of band `i`
    pub fn band_color(&self, i: usize) -> Rgb565 {
        self.bands[i]
    }

    /// First row and row count of band `i`
    ///
    /// Matches [`band_at`](Self::band_at): the bottom band absorbs the
    /// remainder rows of a height that is not a multiple of three.
    pub fn band_rows(&self, i: usize) -> (u16, u16) {
        let third = self.panel.height / BAND_COUNT as u16;
        let start = i as u16 * third;
        let count = if i == BAND_COUNT - 1 {
            self.panel.height - start
        } else {
            third
        };
        (start, count)
    }

    /// Compose the patch under `area` into `out`, ball over backdrop
    ///
    /// Writes pixels row-major in wire order (big-endian), two bytes per
    /// pixel. A pixel belongs to the ball when its center distance is at
    /// most the radius. `out` must hold at least `area.byte_len()` bytes;
    /// `area` must already be clamped onto the panel.
    pub fn compose(&self, ball: &Ball, area: &Rect, out: &mut [u8]) {
        let r2 = ball.radius * ball.radius;
        let mut i = 0;
        for y in area.y0..=area.y1 {
            let band = self.band_at(y);
            let dy = y - ball.y;
            for x in area.x0..=area.x1 {
                let dx = x - ball.x;
                let color = if dx * dx + dy * dy <= r2 {
                    self.ball_color
                } else {
                    band
                };
                let [hi, lo] = color.to_be_bytes();
                out[i] = hi;
                out[i + 1] = lo;
                i += 2;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLUE, GREEN, RED, WHITE};

    fn scene() -> Scene {
        Scene::new(PanelConfig::new(240, 240), [RED, GREEN, BLUE], WHITE)
    }

    fn pixel_at(out: &[u8], area: &Rect, x: i32, y: i32) -> [u8; 2] {
        let row = (y - area.y0) as usize;
        let col = (x - area.x0) as usize;
        let i = (row * area.width() as usize + col) * 2;
        [out[i], out[i + 1]]
    }

    #[test]
    fn test_band_boundaries() {
        let s = scene();
        assert_eq!(s.band_at(0), RED);
        assert_eq!(s.band_at(79), RED);
        assert_eq!(s.band_at(80), GREEN);
        assert_eq!(s.band_at(159), GREEN);
        assert_eq!(s.band_at(160), BLUE);
        assert_eq!(s.band_at(239), BLUE);
    }

    #[test]
    fn test_band_rows_cover_panel() {
        let s = scene();
        assert_eq!(s.band_rows(0), (0, 80));
        assert_eq!(s.band_rows(1), (80, 80));
        assert_eq!(s.band_rows(2), (160, 80));
    }

    #[test]
    fn test_uneven_height_extends_bottom_band() {
        let s = Scene::new(PanelConfig::new(240, 250), [RED, GREEN, BLUE], WHITE);
        assert_eq!(s.band_rows(0), (0, 83));
        assert_eq!(s.band_rows(1), (83, 83));
        assert_eq!(s.band_rows(2), (166, 84));
        // band_at agrees with the row layout at the seams
        assert_eq!(s.band_at(165), GREEN);
        assert_eq!(s.band_at(166), BLUE);
        assert_eq!(s.band_at(249), BLUE);
    }

    #[test]
    fn test_compose_fills_row_major_wire_order() {
        let s = scene();
        let ball = Ball::new(120, 120, 0, 0, 18);
        // A patch well away from the ball: pure backdrop
        let area = Rect::new(0, 78, 2, 81);
        let mut out = [0u8; 3 * 4 * 2];
        s.compose(&ball, &area, &mut out);

        // Two rows of red, then two rows of green, each pixel big-endian
        for x in 0..3 {
            assert_eq!(pixel_at(&out, &area, x, 78), RED.to_be_bytes());
            assert_eq!(pixel_at(&out, &area, x, 79), RED.to_be_bytes());
            assert_eq!(pixel_at(&out, &area, x, 80), GREEN.to_be_bytes());
            assert_eq!(pixel_at(&out, &area, x, 81), GREEN.to_be_bytes());
        }
    }

    #[test]
    fn test_compose_ball_over_backdrop() {
        let s = scene();
        let ball = Ball::new(120, 120, 0, 0, 18);
        let area = Rect::around(120, 120, 18, 2);
        let mut out = [0u8; 41 * 41 * 2];
        s.compose(&ball, &area, &mut out);

        // Center is ball, the patch corner is backdrop
        assert_eq!(pixel_at(&out, &area, 120, 120), WHITE.to_be_bytes());
        assert_eq!(pixel_at(&out, &area, 100, 100), GREEN.to_be_bytes());
    }

    #[test]
    fn test_compose_radius_is_inclusive() {
        let s = scene();
        let ball = Ball::new(120, 120, 0, 0, 18);
        let area = Rect::around(120, 120, 18, 2);
        let mut out = [0u8; 41 * 41 * 2];
        s.compose(&ball, &area, &mut out);

        // Distance exactly radius is ball; one further is backdrop
        assert_eq!(pixel_at(&out, &area, 138, 120), WHITE.to_be_bytes());
        assert_eq!(pixel_at(&out, &area, 139, 120), GREEN.to_be_bytes());
        assert_eq!(pixel_at(&out, &area, 120, 102), WHITE.to_be_bytes());
        assert_eq!(pixel_at(&out, &area, 120, 101), GREEN.to_be_bytes());
    }

    #[test]
    fn test_compose_patch_spanning_band_seam() {
        let s = scene();
        // Ball sitting across the red/green seam
        let ball = Ball::new(30, 80, 0, 0, 18);
        let area = Rect::around(30, 80, 18, 2).clamp_to(&PanelConfig::new(240, 240));
        let mut out = [0u8; 41 * 41 * 2];
        s.compose(&ball, &area, &mut out);

        assert_eq!(pixel_at(&out, &area, 10, 62), RED.to_be_bytes());
        assert_eq!(pixel_at(&out, &area, 10, 98), GREEN.to_be_bytes());
        assert_eq!(pixel_at(&out, &area, 30, 80), WHITE.to_be_bytes());
    }
}
