//! # Fogvale Kernel
//!
//! Engine-facing layer for Fogvale. This crate describes everything the host
//! engine needs to render and play the game without doing any of the
//! rendering itself:
//! - Scene layout (ground, path, houses, lights, fog) and obstacle volumes
//! - Collision primitives (sphere vs. obstacle set)
//! - Perspective camera state and the projection uniform for the host
//! - Render resolution management with the pixelation downscale
//! - Retro overlay patterns (scanlines, blinking pixels)
//! - Asset manifest with texture sampling settings
//! - Ambient audio mix model
//!
//! Mesh construction, texture decoding, shadow mapping, and audio playback
//! are the host's concern and attach at the seams defined here.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod assets;
pub mod audio;
pub mod camera;
pub mod collision;
pub mod overlay;
pub mod resolution;
pub mod scene;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::assets::*;
    pub use crate::audio::*;
    pub use crate::camera::*;
    pub use crate::collision::*;
    pub use crate::overlay::*;
    pub use crate::resolution::*;
    pub use crate::scene::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_scene_obstacles_block_houses() {
        let layout = SceneLayout::village();
        let obstacles = layout.obstacle_set();

        // Walking into the center of a house is blocked
        assert!(obstacles.blocks(Vec3::new(-10.0, 2.0, 0.0), 0.5));
        // The path between the rows is clear
        assert!(!obstacles.blocks(Vec3::new(0.0, 2.0, 0.0), 0.5));
    }

    #[test]
    fn test_resolution_downscale() {
        let mut res = RenderResolution::new(1920, 1080);
        assert_eq!(res.render_extent(), (1280, 720));
        res.resize(960, 540);
        assert_eq!(res.render_extent(), (640, 360));
    }
}
