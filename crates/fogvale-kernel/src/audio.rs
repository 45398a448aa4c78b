//! Ambient audio mix model.
//!
//! Three looping channels play for the whole session: wind at a fixed gain,
//! footsteps gated by the walking flag, and static noise whose gain follows
//! the NPC proximity intensity. This module computes the per-channel gains;
//! decoding and playback are the host's.

use fogvale_common::clamp01;
use serde::{Deserialize, Serialize};

use crate::assets::SoundSlot;

/// Gain of the wind loop.
pub const WIND_GAIN: f32 = 0.2;

/// Gain of the footstep loop while walking.
pub const STEPS_GAIN: f32 = 0.4;

/// Per-channel output gains for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChannelGains {
    /// Footstep loop gain.
    pub steps: f32,
    /// Static noise loop gain.
    pub static_noise: f32,
    /// Wind loop gain.
    pub wind: f32,
}

impl ChannelGains {
    /// Gain for a given sound slot.
    #[must_use]
    pub fn for_slot(&self, slot: SoundSlot) -> f32 {
        match slot {
            SoundSlot::Steps => self.steps,
            SoundSlot::Static => self.static_noise,
            SoundSlot::Wind => self.wind,
        }
    }
}

/// Ambient mixer producing loop gains from game state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AmbientMixer {
    gains: ChannelGains,
}

impl AmbientMixer {
    /// Creates a mixer with all channels silent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes channel gains for the frame.
    ///
    /// `proximity` is the glitch intensity in [0, 1]; the static channel
    /// tracks it directly.
    pub fn update(&mut self, walking: bool, proximity: f32) -> ChannelGains {
        self.gains = ChannelGains {
            steps: if walking { STEPS_GAIN } else { 0.0 },
            static_noise: clamp01(proximity),
            wind: WIND_GAIN,
        };
        self.gains
    }

    /// The most recently computed gains.
    #[must_use]
    pub fn gains(&self) -> ChannelGains {
        self.gains
    }
}
