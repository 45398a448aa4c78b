//! Retro screen overlays: scanlines and blinking pixels.
//!
//! Both overlays are redrawn by host-scheduled callbacks that run at their
//! own cadence, independent of the frame loop. They share nothing with the
//! simulation beyond the current canvas size; this module produces the
//! rectangles to draw and leaves the drawing to the host.

use serde::{Deserialize, Serialize};

/// Thickness of each scanline in pixels.
pub const SCANLINE_HEIGHT: u32 = 2;

/// Gap between scanlines in pixels.
pub const SCANLINE_GAP: u32 = 4;

/// Opacity of the scanline fill (semi-transparent black).
pub const SCANLINE_ALPHA: f32 = 0.1;

/// Number of blink pixel candidates per redraw.
pub const BLINK_CANDIDATES: u32 = 10;

/// Probability that a candidate pixel lights up.
pub const BLINK_CHANCE: f32 = 0.3;

/// Side length of a blink pixel.
pub const BLINK_PIXEL_SIZE: u32 = 2;

/// A rectangle for the host to fill on an overlay canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayRect {
    /// Left edge in pixels.
    pub x: f32,
    /// Top edge in pixels.
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
    /// Fill opacity in [0, 1].
    pub alpha: f32,
}

/// Produces the scanline rectangles for a canvas of the given size.
///
/// Lines run the full canvas width at a fixed pitch from the top.
#[must_use]
pub fn scanline_rects(canvas_width: u32, canvas_height: u32) -> Vec<OverlayRect> {
    let pitch = SCANLINE_HEIGHT + SCANLINE_GAP;
    let mut rects = Vec::with_capacity((canvas_height / pitch + 1) as usize);
    let mut y = 0;
    while y < canvas_height {
        rects.push(OverlayRect {
            x: 0.0,
            y: y as f32,
            width: canvas_width as f32,
            height: SCANLINE_HEIGHT as f32,
            alpha: SCANLINE_ALPHA,
        });
        y += pitch;
    }
    rects
}

/// Produces one redraw's worth of blinking pixels.
///
/// Each of the fixed candidates lights up independently with
/// [`BLINK_CHANCE`]; positions are uniform over the canvas. Returns at most
/// [`BLINK_CANDIDATES`] rectangles.
#[must_use]
pub fn blink_rects(canvas_width: u32, canvas_height: u32, rng: &mut fastrand::Rng) -> Vec<OverlayRect> {
    let mut rects = Vec::new();
    for _ in 0..BLINK_CANDIDATES {
        if rng.f32() < BLINK_CHANCE {
            rects.push(OverlayRect {
                x: rng.f32() * canvas_width as f32,
                y: rng.f32() * canvas_height as f32,
                width: BLINK_PIXEL_SIZE as f32,
                height: BLINK_PIXEL_SIZE as f32,
                alpha: 1.0,
            });
        }
    }
    rects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanline_pitch() {
        let rects = scanline_rects(100, 20);
        // Lines at y = 0, 6, 12, 18
        assert_eq!(rects.len(), 4);
        assert_eq!(rects[1].y, 6.0);
        assert_eq!(rects[0].width, 100.0);
        assert_eq!(rects[0].height, SCANLINE_HEIGHT as f32);
    }

    #[test]
    fn test_scanlines_cover_only_canvas() {
        let rects = scanline_rects(640, 480);
        for rect in &rects {
            assert!(rect.y < 480.0);
            assert!((rect.alpha - SCANLINE_ALPHA).abs() < 1e-6);
        }
    }

    #[test]
    fn test_blink_bounded_and_in_canvas() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..50 {
            let rects = blink_rects(320, 200, &mut rng);
            assert!(rects.len() <= BLINK_CANDIDATES as usize);
            for rect in &rects {
                assert!(rect.x >= 0.0 && rect.x < 320.0);
                assert!(rect.y >= 0.0 && rect.y < 200.0);
                assert_eq!(rect.width, BLINK_PIXEL_SIZE as f32);
            }
        }
    }

    #[test]
    fn test_blink_lights_some_pixels_eventually() {
        let mut rng = fastrand::Rng::with_seed(42);
        let total: usize = (0..20).map(|_| blink_rects(320, 200, &mut rng).len()).sum();
        assert!(total > 0);
    }
}
