//! Proximity-driven glitch intensity.
//!
//! Maps the player-to-NPC distance to the opacity of the film-grain
//! overlay. Stateless: the value is recomputed from the distance every
//! frame. The same intensity drives the static-noise channel of the
//! ambient mixer.

use fogvale_common::clamp01;

/// Distance at which the glitch starts to appear.
pub const GLITCH_MAX_DISTANCE: f32 = 3.0;

/// Distance at which the glitch reaches full strength.
pub const GLITCH_MIN_DISTANCE: f32 = 0.8;

/// Upper bound on the overlay opacity.
pub const GLITCH_MAX_OPACITY: f32 = 0.6;

/// Computes the grain overlay opacity for a player-to-NPC distance.
///
/// Linear ramp from zero at [`GLITCH_MAX_DISTANCE`] to
/// [`GLITCH_MAX_OPACITY`] at [`GLITCH_MIN_DISTANCE`], clamped.
#[must_use]
pub fn glitch_intensity(distance: f32) -> f32 {
    let t = (GLITCH_MAX_DISTANCE - distance) / (GLITCH_MAX_DISTANCE - GLITCH_MIN_DISTANCE);
    clamp01(t) * GLITCH_MAX_OPACITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_beyond_max_distance() {
        assert_eq!(glitch_intensity(3.0), 0.0);
        assert_eq!(glitch_intensity(10.0), 0.0);
    }

    #[test]
    fn test_full_at_min_distance() {
        assert!((glitch_intensity(0.8) - GLITCH_MAX_OPACITY).abs() < 1e-6);
        assert!((glitch_intensity(0.0) - GLITCH_MAX_OPACITY).abs() < 1e-6);
    }

    #[test]
    fn test_linear_midpoint() {
        let mid = (GLITCH_MAX_DISTANCE + GLITCH_MIN_DISTANCE) / 2.0;
        assert!((glitch_intensity(mid) - GLITCH_MAX_OPACITY / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_monotonic_in_distance() {
        let mut last = f32::INFINITY;
        let mut d = 0.0;
        while d < 5.0 {
            let v = glitch_intensity(d);
            assert!(v <= last + 1e-6);
            last = v;
            d += 0.05;
        }
    }
}
