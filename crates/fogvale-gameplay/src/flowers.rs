//! Procedural flower field.
//!
//! Maintains a bounded set of decorative flower sprites around the player.
//! When the player has moved far enough from the last update point, distant
//! flowers are pruned and new ones are sampled into the annulus between the
//! minimum spawn distance and the field radius, avoiding the path corridor.
//! Sampling retries are capped with a deterministic fallback so a
//! misconfigured corridor cannot stall the frame.

use fogvale_kernel::assets::TextureSlot;
use fogvale_kernel::scene::PathCorridor;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Height flowers sit above the ground.
pub const FLOWER_LIFT: f32 = 0.02;

/// Flower field configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FlowerFieldConfig {
    /// Target population cap.
    pub max_flowers: usize,
    /// Flowers farther than this from the player are pruned; new flowers
    /// spawn inside this radius.
    pub radius: f32,
    /// New flowers spawn no closer than this to the player.
    pub min_distance: f32,
    /// The field repopulates only after the player moves this far from the
    /// position recorded at the last update.
    pub update_distance: f32,
    /// Cap on rejection-sampling attempts per flower.
    pub max_sample_tries: u32,
}

impl Default for FlowerFieldConfig {
    fn default() -> Self {
        Self {
            max_flowers: 150,
            radius: 50.0,
            min_distance: 10.0,
            update_distance: 8.0,
            max_sample_tries: 64,
        }
    }
}

/// Visual variant of a flower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowerVariant {
    /// First flower texture.
    One,
    /// Second flower texture.
    Two,
    /// Third flower texture.
    Three,
}

impl FlowerVariant {
    /// All variants, in texture order.
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];

    /// The texture slot for this variant.
    #[must_use]
    pub fn texture_slot(self) -> TextureSlot {
        match self {
            Self::One => TextureSlot::Flower1,
            Self::Two => TextureSlot::Flower2,
            Self::Three => TextureSlot::Flower3,
        }
    }
}

/// One flower sprite.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Flower {
    /// World position of the sprite base.
    pub position: Vec3,
    /// Which texture the sprite uses.
    pub variant: FlowerVariant,
    /// Uniform sprite scale.
    pub scale: f32,
}

/// The bounded, player-relative flower population.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowerField {
    flowers: Vec<Flower>,
    last_update_position: Vec3,
    config: FlowerFieldConfig,
}

impl FlowerField {
    /// Creates the field and populates it around the starting position.
    #[must_use]
    pub fn seeded(
        player_position: Vec3,
        corridor: &PathCorridor,
        rng: &mut fastrand::Rng,
    ) -> Self {
        let mut field = Self {
            flowers: Vec::new(),
            last_update_position: player_position,
            config: FlowerFieldConfig::default(),
        };
        field.repopulate(player_position, corridor, rng);
        field
    }

    /// Creates an empty field with a custom configuration.
    #[must_use]
    pub fn with_config(player_position: Vec3, config: FlowerFieldConfig) -> Self {
        Self {
            flowers: Vec::new(),
            last_update_position: player_position,
            config,
        }
    }

    /// The live flowers.
    #[must_use]
    pub fn flowers(&self) -> &[Flower] {
        &self.flowers
    }

    /// Number of live flowers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flowers.len()
    }

    /// Whether the field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flowers.is_empty()
    }

    /// Position recorded at the most recent repopulation.
    #[must_use]
    pub fn last_update_position(&self) -> Vec3 {
        self.last_update_position
    }

    /// The field's configuration.
    #[must_use]
    pub fn config(&self) -> &FlowerFieldConfig {
        &self.config
    }

    /// Repopulates if the player has moved beyond the update distance.
    ///
    /// This hysteresis bounds how often the field is recomputed.
    pub fn maybe_update(
        &mut self,
        player_position: Vec3,
        corridor: &PathCorridor,
        rng: &mut fastrand::Rng,
    ) {
        if player_position.distance(self.last_update_position) > self.config.update_distance {
            self.repopulate(player_position, corridor, rng);
            self.last_update_position = player_position;
        }
    }

    /// Prunes distant flowers and spawns new ones up to the cap.
    fn repopulate(
        &mut self,
        player_position: Vec3,
        corridor: &PathCorridor,
        rng: &mut fastrand::Rng,
    ) {
        let radius_sq = self.config.radius * self.config.radius;
        self.flowers.retain(|flower| {
            let dx = flower.position.x - player_position.x;
            let dz = flower.position.z - player_position.z;
            dx * dx + dz * dz < radius_sq
        });

        let needed = self.config.max_flowers.saturating_sub(self.flowers.len());
        for _ in 0..needed {
            let (x, z) = self.sample_position(player_position, corridor, rng);
            self.flowers.push(Flower {
                position: Vec3::new(x, FLOWER_LIFT, z),
                variant: FlowerVariant::ALL[rng.usize(0..FlowerVariant::ALL.len())],
                scale: 0.3 + rng.f32() * 0.1,
            });
        }
        debug!(count = self.flowers.len(), spawned = needed, "flower field updated");
    }

    /// Samples a spawn point in the annulus around the player, outside the
    /// path corridor. Retries are capped; on exhaustion a deterministic
    /// sideways placement is used instead of looping forever.
    fn sample_position(
        &self,
        player_position: Vec3,
        corridor: &PathCorridor,
        rng: &mut fastrand::Rng,
    ) -> (f32, f32) {
        for _ in 0..self.config.max_sample_tries {
            let angle = rng.f32() * std::f32::consts::TAU;
            let distance =
                self.config.min_distance + rng.f32() * (self.config.radius - self.config.min_distance);
            let x = player_position.x + angle.cos() * distance;
            let z = player_position.z + angle.sin() * distance;
            if !corridor.contains(x, z) {
                return (x, z);
            }
        }

        // Fallback: step min_distance to one side of the player. The
        // corridor is narrower than twice the minimum spawn distance, so
        // one of the two sides always clears it.
        warn!("flower sampling exhausted retries, using fallback placement");
        let right = (player_position.x + self.config.min_distance, player_position.z);
        if corridor.contains(right.0, right.1) {
            (player_position.x - self.config.min_distance, player_position.z)
        } else {
            right
        }
    }
}
