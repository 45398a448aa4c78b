//! Player movement and collision step.
//!
//! Each frame the player turns, then attempts forward and backward
//! translations independently. A candidate position that intersects any
//! obstacle is discarded exactly, leaving the prior position untouched.
//! Turning is never blocked by collision.

use fogvale_kernel::collision::ObstacleSet;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::input::InputState;

/// Player movement configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Translation speed in world units per frame.
    pub speed: f32,
    /// Turn speed in radians per frame.
    pub rotation_speed: f32,
    /// Collision sphere radius.
    pub collision_radius: f32,
    /// Eye height when standing still.
    pub base_height: f32,
    /// The eye never drops below this height.
    pub floor_clamp: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: 0.1,
            rotation_speed: 0.05,
            collision_radius: 0.5,
            base_height: 2.0,
            floor_clamp: 1.5,
        }
    }
}

/// The player: eye position and yaw orientation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Eye position in world space.
    pub position: Vec3,
    /// Yaw in radians. Zero faces negative z; positive turns left.
    pub yaw: f32,
    config: PlayerConfig,
}

impl Player {
    /// Creates a player at the given spawn position.
    #[must_use]
    pub fn new(spawn: Vec3) -> Self {
        Self {
            position: spawn,
            yaw: 0.0,
            config: PlayerConfig::default(),
        }
    }

    /// Creates a player with a custom configuration.
    #[must_use]
    pub fn with_config(spawn: Vec3, config: PlayerConfig) -> Self {
        Self {
            position: spawn,
            yaw: 0.0,
            config,
        }
    }

    /// The player's configuration.
    #[must_use]
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Horizontal forward direction derived from yaw, unit length.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Runs one movement step. Returns whether the player walked this frame.
    ///
    /// Yaw turning applies unconditionally before translation. Forward and
    /// backward attempts are tested against the obstacle set separately; a
    /// blocked attempt keeps the prior position bit for bit.
    pub fn step(&mut self, input: &InputState, obstacles: &ObstacleSet) -> bool {
        if input.turn_left {
            self.yaw += self.config.rotation_speed;
        }
        if input.turn_right {
            self.yaw -= self.config.rotation_speed;
        }

        let forward = self.forward();
        let mut walking = false;

        if input.forward {
            walking |= self.try_translate(forward * self.config.speed, obstacles);
        }
        if input.backward {
            walking |= self.try_translate(-forward * self.config.speed, obstacles);
        }

        walking
    }

    /// Clamps the eye height to the floor. Applied after camera effects.
    pub fn clamp_floor(&mut self) {
        if self.position.y < self.config.floor_clamp {
            self.position.y = self.config.floor_clamp;
        }
    }

    fn try_translate(&mut self, delta: Vec3, obstacles: &ObstacleSet) -> bool {
        let candidate = self.position + delta;
        if obstacles.blocks(candidate, self.config.collision_radius) {
            false
        } else {
            self.position = candidate;
            true
        }
    }
}
