//! Render resolution management.
//!
//! The game renders at a fraction of the window size and upscales for a
//! pixelated look. This module tracks the window size, the low-resolution
//! render target extent, and the full-size overlay canvases, and recomputes
//! them on resize.

use serde::{Deserialize, Serialize};

/// Fixed divisor between window size and render target size.
pub const DOWNSCALE_DIVISOR: f32 = 1.5;

/// Window and render target dimensions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RenderResolution {
    window_width: u32,
    window_height: u32,
    render_width: u32,
    render_height: u32,
}

impl RenderResolution {
    /// Creates a resolution state for the given window size.
    #[must_use]
    pub fn new(window_width: u32, window_height: u32) -> Self {
        let mut res = Self {
            window_width: 0,
            window_height: 0,
            render_width: 1,
            render_height: 1,
        };
        res.resize(window_width, window_height);
        res
    }

    /// Recomputes the render target extent for a new window size.
    pub fn resize(&mut self, window_width: u32, window_height: u32) {
        self.window_width = window_width;
        self.window_height = window_height;
        self.render_width = ((window_width as f32 / DOWNSCALE_DIVISOR) as u32).max(1);
        self.render_height = ((window_height as f32 / DOWNSCALE_DIVISOR) as u32).max(1);
    }

    /// The window size in pixels.
    #[must_use]
    pub const fn window_extent(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// The low-resolution render target extent.
    #[must_use]
    pub const fn render_extent(&self) -> (u32, u32) {
        (self.render_width, self.render_height)
    }

    /// The size the render target is displayed at (the full window).
    #[must_use]
    pub const fn display_extent(&self) -> (u32, u32) {
        self.window_extent()
    }

    /// Overlay canvases (scanlines, blink pixels) cover the full window.
    #[must_use]
    pub const fn overlay_extent(&self) -> (u32, u32) {
        self.window_extent()
    }

    /// Aspect ratio derived from the window, not the render target.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.window_height == 0 {
            1.0
        } else {
            self.window_width as f32 / self.window_height as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downscale_factor() {
        let res = RenderResolution::new(1920, 1080);
        assert_eq!(res.render_extent(), (1280, 720));
        assert_eq!(res.display_extent(), (1920, 1080));
        assert_eq!(res.overlay_extent(), (1920, 1080));
    }

    #[test]
    fn test_resize_recomputes() {
        let mut res = RenderResolution::new(1920, 1080);
        res.resize(600, 300);
        assert_eq!(res.render_extent(), (400, 200));
        assert!((res.aspect() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_tiny_window_clamps_to_one() {
        let res = RenderResolution::new(1, 1);
        assert_eq!(res.render_extent(), (1, 1));
    }

    #[test]
    fn test_zero_height_aspect_is_safe() {
        let res = RenderResolution::new(100, 0);
        assert!((res.aspect() - 1.0).abs() < 1e-6);
    }
}
