//! # Fogvale Gameplay
//!
//! Per-frame game logic for Fogvale:
//! - Input intent tracking (arrows + WASD, gated on session start)
//! - Player movement with sphere-vs-box collision rejection
//! - Camera effect modulation (vertigo when idle, bobbing when walking)
//! - NPC teleport/avoidance behaviors with fade-in and cooldown
//! - Proximity-driven glitch intensity
//! - The procedural flower field
//! - The session object owning all of the above

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod camera_effects;
pub mod flowers;
pub mod input;
pub mod npc;
pub mod player;
pub mod proximity;
pub mod session;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::camera_effects::*;
    pub use crate::flowers::*;
    pub use crate::input::*;
    pub use crate::npc::*;
    pub use crate::player::*;
    pub use crate::proximity::*;
    pub use crate::session::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_smoke() {
        let mut session = Session::new(1280, 720, Some(0));
        session.start();
        session.key_down(Key::W);

        for _ in 0..120 {
            let out = session.frame(1.0 / 60.0);
            assert!(out.simulated);
        }
        assert!(session.player().position.z < 5.0);
    }
}
