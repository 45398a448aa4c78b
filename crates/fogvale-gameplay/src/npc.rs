//! The wandering companion sprite.
//!
//! The NPC always faces the camera (the host billboards the sprite). Two
//! behaviors run on it each frame and may both fire in the same frame:
//! - Teleport: when the player drifts beyond the lost threshold, the NPC
//!   reappears a fixed offset behind the player, fades in from zero
//!   opacity, and starts a fixed re-entry cooldown that blocks further
//!   teleports until it expires.
//! - Avoidance: when the player gets too close, the NPC is pushed directly
//!   away along the horizontal plane. This is not gated by the cooldown.
//!
//! The fade-in is an explicit per-frame progress counter advanced by the
//! update step, not a self-rescheduling callback chain.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// NPC behavior configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NpcConfig {
    /// Distance beyond which the NPC is lost in the fog and teleports back.
    pub lost_distance: f32,
    /// Distance below which the NPC backs away from the player.
    pub too_close_distance: f32,
    /// Horizontal speed of the avoidance push, units per frame.
    pub avoid_speed: f32,
    /// How far behind the player the NPC reappears.
    pub teleport_offset: f32,
    /// Sprite center height after a teleport.
    pub teleport_height: f32,
    /// Opacity gained per frame while fading in.
    pub fade_step: f32,
    /// Fixed re-entry cooldown after a teleport, in seconds.
    pub cooldown_seconds: f32,
    /// Sprite height in world units.
    pub sprite_height: f32,
    /// Sprite width/height aspect ratio.
    pub sprite_aspect: f32,
    /// Chance the sprite spawns upside down, rolled once per session.
    pub flipped_chance: f32,
}

impl Default for NpcConfig {
    fn default() -> Self {
        Self {
            lost_distance: 35.0,
            too_close_distance: 3.0,
            avoid_speed: 0.097,
            teleport_offset: 3.0,
            teleport_height: 1.5,
            fade_step: 0.05,
            cooldown_seconds: 6.0,
            sprite_height: 2.5,
            sprite_aspect: 100.0 / 256.0,
            flipped_chance: 0.05,
        }
    }
}

/// Teleport re-entry cooldown state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Cooldown {
    /// No cooldown running; a teleport may fire.
    Idle,
    /// Cooling down; teleports are blocked until the timer expires.
    Active {
        /// Seconds until the cooldown expires.
        remaining: f32,
    },
}

/// The companion NPC.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Npc {
    /// Sprite center position in world space.
    pub position: Vec3,
    /// Sprite opacity in [0, 1].
    pub opacity: f32,
    config: NpcConfig,
    cooldown: Cooldown,
    fading_in: bool,
    flipped: bool,
}

impl Npc {
    /// Creates the NPC at its scene starting position, fully opaque.
    #[must_use]
    pub fn new(config: NpcConfig) -> Self {
        Self {
            position: Vec3::new(0.0, config.sprite_height / 2.0, -5.0),
            opacity: 1.0,
            config,
            cooldown: Cooldown::Idle,
            fading_in: false,
            flipped: false,
        }
    }

    /// The NPC's configuration.
    #[must_use]
    pub fn config(&self) -> &NpcConfig {
        &self.config
    }

    /// Current cooldown state.
    #[must_use]
    pub fn cooldown(&self) -> Cooldown {
        self.cooldown
    }

    /// Whether the sprite rendered upside down this session.
    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Rolls the once-per-session upside-down variant.
    pub fn roll_variant(&mut self, rng: &mut fastrand::Rng) {
        self.flipped = rng.f32() < self.config.flipped_chance;
    }

    /// Sprite scale for the host: (width, height). Height is negative when
    /// the sprite is flipped.
    #[must_use]
    pub fn sprite_scale(&self) -> (f32, f32) {
        let height = self.config.sprite_height;
        let width = height * self.config.sprite_aspect;
        (width, if self.flipped { -height } else { height })
    }

    /// Runs one frame of NPC behavior.
    ///
    /// `player_forward` is the player's horizontal facing direction, unit
    /// length. Behaviors run in the original order: teleport check, fade
    /// advance, avoidance push, cooldown tick.
    pub fn update(&mut self, player_position: Vec3, player_forward: Vec3, dt: f32) {
        let distance = player_position.distance(self.position);

        if self.cooldown == Cooldown::Idle && distance > self.config.lost_distance {
            let mut behind = player_position - player_forward * self.config.teleport_offset;
            behind.y = self.config.teleport_height;
            self.position = behind;
            self.opacity = 0.0;
            self.fading_in = true;
            self.cooldown = Cooldown::Active {
                remaining: self.config.cooldown_seconds,
            };
            debug!(?behind, "npc lost in fog, teleported behind player");
        }

        if self.fading_in {
            self.opacity = (self.opacity + self.config.fade_step).min(1.0);
            if self.opacity >= 1.0 {
                self.fading_in = false;
            }
        }

        // Avoidance runs every frame, cooldown or not
        let to_npc = self.position - player_position;
        if to_npc.length() < self.config.too_close_distance {
            let mut away = to_npc;
            away.y = 0.0;
            let away = away.normalize_or_zero();
            self.position += away * self.config.avoid_speed;
        }

        if let Cooldown::Active { remaining } = self.cooldown {
            let remaining = remaining - dt;
            self.cooldown = if remaining <= 0.0 {
                Cooldown::Idle
            } else {
                Cooldown::Active { remaining }
            };
        }
    }
}

impl Default for Npc {
    fn default() -> Self {
        Self::new(NpcConfig::default())
    }
}
