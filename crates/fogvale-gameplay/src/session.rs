//! Game session: owns all per-frame state and advances it one frame at a
//! time.
//!
//! Everything the original kept in module-level globals lives here as
//! fields: the player, camera effects, NPC, flower field, input state, and
//! the static scene. The host calls [`Session::frame`] from its animation
//! loop and consumes the returned [`FrameOutput`].

use fogvale_kernel::audio::{AmbientMixer, ChannelGains};
use fogvale_kernel::camera::Camera;
use fogvale_kernel::collision::ObstacleSet;
use fogvale_kernel::resolution::RenderResolution;
use fogvale_kernel::scene::{SceneLayout, PLAYER_SPAWN};
use glam::Vec3;
use tracing::info;

use crate::camera_effects::CameraEffects;
use crate::flowers::FlowerField;
use crate::input::{InputState, Key};
use crate::npc::Npc;
use crate::player::Player;
use crate::proximity::glitch_intensity;

/// Divisor mapping player position to ground texture scroll offset.
pub const GROUND_SCROLL_DIVISOR: f32 = 50.0;

/// Everything the host needs from one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    /// Whether gameplay simulation ran (false before the session starts).
    pub simulated: bool,
    /// Whether the player walked this frame.
    pub walking: bool,
    /// Ground texture scroll offset (u, v).
    pub ground_scroll: (f32, f32),
    /// Opacity for the film-grain overlay.
    pub grain_opacity: f32,
    /// Ambient channel gains.
    pub audio: ChannelGains,
}

/// The running game session.
#[derive(Debug)]
pub struct Session {
    started: bool,
    scene: SceneLayout,
    obstacles: ObstacleSet,
    resolution: RenderResolution,
    camera: Camera,
    player: Player,
    effects: CameraEffects,
    npc: Npc,
    flowers: FlowerField,
    input: InputState,
    mixer: AmbientMixer,
    rng: fastrand::Rng,
}

impl Session {
    /// Builds a session for the village scene.
    ///
    /// `seed` fixes the RNG for deterministic runs; `None` seeds randomly.
    #[must_use]
    pub fn new(window_width: u32, window_height: u32, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };

        let scene = SceneLayout::village();
        let obstacles = scene.obstacle_set();
        let resolution = RenderResolution::new(window_width, window_height);
        let camera = Camera::new(PLAYER_SPAWN, resolution.aspect());
        let flowers = FlowerField::seeded(PLAYER_SPAWN, &scene.path, &mut rng);

        Self {
            started: false,
            scene,
            obstacles,
            resolution,
            camera,
            player: Player::new(PLAYER_SPAWN),
            effects: CameraEffects::new(),
            npc: Npc::default(),
            flowers,
            input: InputState::new(),
            mixer: AmbientMixer::new(),
            rng,
        }
    }

    /// Whether the session has been started.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Starts the session: enables input, rolls the NPC sprite variant,
    /// and unlocks per-frame gameplay. Idempotent.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.input.set_enabled(true);
        self.npc.roll_variant(&mut self.rng);
        info!(flipped = self.npc.is_flipped(), "session started");
    }

    /// Forwards a key press to the input tracker.
    pub fn key_down(&mut self, key: Key) {
        self.input.key_down(key);
    }

    /// Forwards a key release to the input tracker.
    pub fn key_up(&mut self, key: Key) {
        self.input.key_up(key);
    }

    /// Handles a window resize: recomputes the render extents and the
    /// camera aspect.
    pub fn resize(&mut self, window_width: u32, window_height: u32) {
        self.resolution.resize(window_width, window_height);
        self.camera.set_aspect(self.resolution.aspect());
    }

    /// The camera the host renders with.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access (the host takes the projection-dirty flag).
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// The player.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The NPC sprite state.
    #[must_use]
    pub fn npc(&self) -> &Npc {
        &self.npc
    }

    /// The flower field.
    #[must_use]
    pub fn flowers(&self) -> &FlowerField {
        &self.flowers
    }

    /// The static scene layout.
    #[must_use]
    pub fn scene(&self) -> &SceneLayout {
        &self.scene
    }

    /// Current render resolution state.
    #[must_use]
    pub fn resolution(&self) -> &RenderResolution {
        &self.resolution
    }

    /// Advances the session by one frame.
    ///
    /// Before the session starts this only returns a render request: the
    /// scene is drawn but nothing simulates. After start, the update order
    /// mirrors the original loop: turning and movement, camera effects,
    /// floor clamp, ground scroll, NPC behaviors, proximity glitch, audio
    /// gains, flower field.
    pub fn frame(&mut self, dt: f32) -> FrameOutput {
        if !self.started {
            return FrameOutput {
                simulated: false,
                walking: false,
                ground_scroll: (0.0, 0.0),
                grain_opacity: 0.0,
                audio: self.mixer.update(false, 0.0),
            };
        }

        let walking = self.player.step(&self.input, &self.obstacles);

        let pose = self.effects.update(walking);
        self.player.position.y = pose.eye_height;
        self.player.clamp_floor();

        self.camera.position = self.player.position;
        self.camera.yaw = self.player.yaw;
        self.camera.set_fov(pose.fov);

        let ground_scroll = (
            self.player.position.x / GROUND_SCROLL_DIVISOR,
            self.player.position.z / GROUND_SCROLL_DIVISOR,
        );

        self.npc
            .update(self.player.position, self.player.forward(), dt);

        let grain_opacity = glitch_intensity(self.player.position.distance(self.npc.position));
        let audio = self.mixer.update(walking, grain_opacity);

        self.flowers
            .maybe_update(self.player.position, &self.scene.path, &mut self.rng);

        FrameOutput {
            simulated: true,
            walking,
            ground_scroll,
            grain_opacity,
            audio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fogvale_kernel::audio::{STEPS_GAIN, WIND_GAIN};
    use fogvale_kernel::camera::BASE_FOV;

    const DT: f32 = 1.0 / 60.0;

    fn started_session() -> Session {
        let mut session = Session::new(1920, 1080, Some(99));
        session.start();
        session
    }

    #[test]
    fn test_input_gated_until_start() {
        let mut session = Session::new(1920, 1080, Some(1));
        session.key_down(Key::W);
        let out = session.frame(DT);
        assert!(!out.simulated);
        assert_eq!(session.player().position, PLAYER_SPAWN);

        session.start();
        session.key_down(Key::W);
        let out = session.frame(DT);
        assert!(out.simulated);
        assert!(out.walking);
        assert!(session.player().position.z < PLAYER_SPAWN.z);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut session = started_session();
        let flipped = session.npc().is_flipped();
        session.start();
        assert_eq!(session.npc().is_flipped(), flipped);
    }

    #[test]
    fn test_wind_plays_before_start() {
        let mut session = Session::new(1920, 1080, Some(2));
        let out = session.frame(DT);
        assert_eq!(out.audio.wind, WIND_GAIN);
        assert_eq!(out.audio.steps, 0.0);
    }

    #[test]
    fn test_walking_drives_steps_and_bobbing() {
        let mut session = started_session();
        session.key_down(Key::ArrowUp);

        let out = session.frame(DT);
        assert!(out.walking);
        assert_eq!(out.audio.steps, STEPS_GAIN);
        // Walking frames never show vertigo
        assert_eq!(session.camera().fov(), BASE_FOV);
    }

    #[test]
    fn test_idle_drives_vertigo_not_bobbing() {
        let mut session = started_session();
        let base_y = session.player().position.y;

        let out = session.frame(DT);
        assert!(!out.walking);
        assert_ne!(session.camera().fov(), BASE_FOV);
        assert_eq!(session.player().position.y, base_y);
    }

    #[test]
    fn test_floor_clamp_holds_through_input_sequences() {
        let mut session = started_session();
        session.key_down(Key::W);
        session.key_down(Key::A);
        for i in 0..500 {
            if i == 200 {
                session.key_up(Key::W);
            }
            if i == 300 {
                session.key_down(Key::S);
            }
            session.frame(DT);
            assert!(session.player().position.y >= 1.5);
        }
    }

    #[test]
    fn test_ground_scroll_tracks_position() {
        let mut session = started_session();
        session.key_down(Key::W);
        let mut out = FrameOutput {
            simulated: false,
            walking: false,
            ground_scroll: (0.0, 0.0),
            grain_opacity: 0.0,
            audio: ChannelGains::default(),
        };
        for _ in 0..30 {
            out = session.frame(DT);
        }
        let pos = session.player().position;
        assert!((out.ground_scroll.0 - pos.x / 50.0).abs() < 1e-6);
        assert!((out.ground_scroll.1 - pos.z / 50.0).abs() < 1e-6);
    }

    #[test]
    fn test_grain_zero_when_npc_far() {
        let mut session = started_session();
        // NPC starts 10 units away at spawn distances; beyond the 3-unit
        // ramp the overlay stays clear
        let out = session.frame(DT);
        assert_eq!(out.grain_opacity, 0.0);
    }

    #[test]
    fn test_resize_updates_aspect_and_extent() {
        let mut session = started_session();
        session.resize(960, 540);
        assert_eq!(session.resolution().render_extent(), (640, 360));
        assert!(session.camera_mut().take_projection_dirty());
    }

    #[test]
    fn test_flower_invariants_during_long_walk() {
        let mut session = started_session();
        session.key_down(Key::W);
        for _ in 0..2000 {
            session.frame(DT);
            let field = session.flowers();
            assert!(field.len() <= field.config().max_flowers);
        }
        // The player covered ~20 units; the field kept up
        let field = session.flowers();
        let last = field.last_update_position();
        for flower in field.flowers() {
            let dx = flower.position.x - last.x;
            let dz = flower.position.z - last.z;
            assert!((dx * dx + dz * dz).sqrt() <= field.config().radius);
        }
    }
}
