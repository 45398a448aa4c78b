//! Asset manifest and load tracking.
//!
//! The game loads a fixed list of textures and sounds once at startup.
//! Loads are asynchronous fire-and-forget operations on the host; this
//! module names the assets, carries their sampling settings, and records
//! completions as the host's callbacks land. Decoding and upload are the
//! host's concern, as is its default handling of load failures.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Texture slots the renderer binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextureSlot {
    /// Grass tile for the ground plane.
    Grass,
    /// Path tile for the path plane.
    Path,
    /// Stone tile for house walls.
    Stone,
    /// First flower variant.
    Flower1,
    /// Second flower variant.
    Flower2,
    /// Third flower variant.
    Flower3,
    /// NPC sprite, normal orientation.
    NpcNormal,
    /// NPC sprite, upside down.
    NpcFlipped,
}

impl TextureSlot {
    /// All texture slots in load order.
    pub const ALL: [Self; 8] = [
        Self::Grass,
        Self::Path,
        Self::Stone,
        Self::Flower1,
        Self::Flower2,
        Self::Flower3,
        Self::NpcNormal,
        Self::NpcFlipped,
    ];

    /// Relative asset path for this texture.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Grass => "assets/textures/grassTexture.png",
            Self::Path => "assets/textures/pathTexture.png",
            Self::Stone => "assets/textures/stoneTexture.png",
            Self::Flower1 => "assets/textures/flowers/flower1.png",
            Self::Flower2 => "assets/textures/flowers/flower2.png",
            Self::Flower3 => "assets/textures/flowers/flower3.png",
            Self::NpcNormal => "assets/textures/uhoh.png",
            Self::NpcFlipped => "assets/textures/uhohFlipped.png",
        }
    }

    /// Sampling settings for this texture.
    #[must_use]
    pub fn settings(self) -> TextureSettings {
        let repeat = match self {
            Self::Grass => Some((600.0, 600.0)),
            Self::Path => Some((5.0, 600.0)),
            Self::Stone => Some((4.0, 4.0)),
            _ => None,
        };
        TextureSettings {
            repeat,
            ..TextureSettings::default()
        }
    }
}

/// Sound slots for the ambient mixer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundSlot {
    /// Footstep loop, audible while walking.
    Steps,
    /// Static noise loop, gain tied to NPC proximity.
    Static,
    /// Wind loop, always on.
    Wind,
}

impl SoundSlot {
    /// All sound slots in load order.
    pub const ALL: [Self; 3] = [Self::Steps, Self::Static, Self::Wind];

    /// Relative asset path for this sound.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Steps => "assets/sounds/steps.mp3",
            Self::Static => "assets/sounds/staticSound.mp3",
            Self::Wind => "assets/sounds/wind.mp3",
        }
    }
}

/// Texture sampling settings.
///
/// Every texture uses nearest-neighbor filtering with mipmaps disabled for
/// the crisp pixelated look.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextureSettings {
    /// Use nearest-neighbor min/mag filtering.
    pub nearest_filter: bool,
    /// Generate mipmaps on upload.
    pub generate_mipmaps: bool,
    /// Repeat-wrap counts (u, v) when tiled, `None` for clamped sprites.
    pub repeat: Option<(f32, f32)>,
}

impl Default for TextureSettings {
    fn default() -> Self {
        Self {
            nearest_filter: true,
            generate_mipmaps: false,
            repeat: None,
        }
    }
}

/// Tracks which manifest entries the host has finished loading.
#[derive(Debug, Clone, Default)]
pub struct LoadTracker {
    textures: HashSet<TextureSlot>,
    sounds: HashSet<SoundSlot>,
}

impl LoadTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completed texture load.
    pub fn texture_loaded(&mut self, slot: TextureSlot) {
        debug!(?slot, "texture loaded");
        self.textures.insert(slot);
    }

    /// Records a completed sound load.
    pub fn sound_loaded(&mut self, slot: SoundSlot) {
        debug!(?slot, "sound loaded");
        self.sounds.insert(slot);
    }

    /// Whether a texture has finished loading.
    #[must_use]
    pub fn has_texture(&self, slot: TextureSlot) -> bool {
        self.textures.contains(&slot)
    }

    /// Whether a sound has finished loading.
    #[must_use]
    pub fn has_sound(&self, slot: SoundSlot) -> bool {
        self.sounds.contains(&slot)
    }

    /// Whether every manifest entry has loaded.
    #[must_use]
    pub fn all_loaded(&self) -> bool {
        self.textures.len() == TextureSlot::ALL.len() && self.sounds.len() == SoundSlot::ALL.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiled_textures_have_repeat() {
        assert_eq!(TextureSlot::Grass.settings().repeat, Some((600.0, 600.0)));
        assert_eq!(TextureSlot::Path.settings().repeat, Some((5.0, 600.0)));
        assert_eq!(TextureSlot::NpcNormal.settings().repeat, None);
    }

    #[test]
    fn test_all_textures_nearest_no_mipmaps() {
        for slot in TextureSlot::ALL {
            let settings = slot.settings();
            assert!(settings.nearest_filter);
            assert!(!settings.generate_mipmaps);
        }
    }

    #[test]
    fn test_load_tracker_completion() {
        let mut tracker = LoadTracker::new();
        assert!(!tracker.all_loaded());

        for slot in TextureSlot::ALL {
            tracker.texture_loaded(slot);
        }
        assert!(!tracker.all_loaded());

        for slot in SoundSlot::ALL {
            tracker.sound_loaded(slot);
        }
        assert!(tracker.all_loaded());
        assert!(tracker.has_texture(TextureSlot::Grass));
        assert!(tracker.has_sound(SoundSlot::Wind));
    }
}
