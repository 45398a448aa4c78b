//! Camera effect modulation: vertigo and bobbing.
//!
//! When the player stands still, the field of view oscillates slowly (the
//! vertigo effect). While walking, the eye bobs vertically instead. The two
//! effects are mutually exclusive per frame: the inactive effect's timer
//! resets to zero and its contribution is exactly zero.

use fogvale_kernel::camera::BASE_FOV;
use serde::{Deserialize, Serialize};

/// Rate the vertigo timer advances per frame-second.
pub const VERTIGO_SPEED: f32 = 1.5;

/// Field-of-view swing of the vertigo oscillation, in degrees.
pub const VERTIGO_AMOUNT: f32 = 1.2;

/// Rate the bobbing timer advances per frame-second.
pub const BOBBING_SPEED: f32 = 15.0;

/// Vertical swing of the bobbing oscillation, in world units.
pub const BOBBING_AMOUNT: f32 = 0.12;

/// Eye height the effects oscillate around.
pub const BASE_EYE_HEIGHT: f32 = 2.0;

/// Per-frame delta the timers advance by (the loop targets 60 fps).
const FRAME_DT: f32 = 0.016;

/// Camera pose output for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Eye height in world units.
    pub eye_height: f32,
}

/// Accumulating effect timers.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CameraEffects {
    vertigo_time: f32,
    bobbing_time: f32,
}

impl CameraEffects {
    /// Creates effects with both timers at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the active timer and returns the pose for this frame.
    ///
    /// Idle advances vertigo and holds the eye at base height; walking
    /// advances bobbing and holds the fov at base. The inactive timer
    /// resets to zero.
    pub fn update(&mut self, walking: bool) -> CameraPose {
        if walking {
            self.vertigo_time = 0.0;
            self.bobbing_time += BOBBING_SPEED * FRAME_DT;
            CameraPose {
                fov: BASE_FOV,
                eye_height: BASE_EYE_HEIGHT + self.bobbing_time.sin() * BOBBING_AMOUNT,
            }
        } else {
            self.bobbing_time = 0.0;
            self.vertigo_time += VERTIGO_SPEED * FRAME_DT;
            CameraPose {
                fov: BASE_FOV + self.vertigo_time.sin() * VERTIGO_AMOUNT,
                eye_height: BASE_EYE_HEIGHT,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walking_has_no_vertigo() {
        let mut effects = CameraEffects::new();
        for _ in 0..200 {
            let pose = effects.update(true);
            assert_eq!(pose.fov, BASE_FOV);
        }
    }

    #[test]
    fn test_idle_has_no_bobbing() {
        let mut effects = CameraEffects::new();
        for _ in 0..200 {
            let pose = effects.update(false);
            assert_eq!(pose.eye_height, BASE_EYE_HEIGHT);
        }
    }

    #[test]
    fn test_vertigo_oscillates_within_bounds() {
        let mut effects = CameraEffects::new();
        let mut saw_high = false;
        let mut saw_low = false;
        for _ in 0..1000 {
            let pose = effects.update(false);
            assert!(pose.fov >= BASE_FOV - VERTIGO_AMOUNT);
            assert!(pose.fov <= BASE_FOV + VERTIGO_AMOUNT);
            saw_high |= pose.fov > BASE_FOV + VERTIGO_AMOUNT * 0.9;
            saw_low |= pose.fov < BASE_FOV - VERTIGO_AMOUNT * 0.9;
        }
        assert!(saw_high && saw_low);
    }

    #[test]
    fn test_bobbing_oscillates_within_bounds() {
        let mut effects = CameraEffects::new();
        for _ in 0..1000 {
            let pose = effects.update(true);
            assert!(pose.eye_height >= BASE_EYE_HEIGHT - BOBBING_AMOUNT);
            assert!(pose.eye_height <= BASE_EYE_HEIGHT + BOBBING_AMOUNT);
        }
    }

    #[test]
    fn test_stopping_resets_bob_timer() {
        let mut effects = CameraEffects::new();
        for _ in 0..10 {
            let _ = effects.update(true);
        }
        let _ = effects.update(false);

        // Walking again restarts the bob from phase zero
        let pose = effects.update(true);
        let fresh = CameraEffects::new().update(true);
        assert_eq!(pose.eye_height, fresh.eye_height);
    }
}
