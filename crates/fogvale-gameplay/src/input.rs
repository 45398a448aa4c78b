//! Keyboard input tracking.
//!
//! The game has four directional intents, each bound to an arrow key and a
//! WASD key. Input is disabled until the session has been explicitly
//! started; key events arriving before that are ignored.

use serde::{Deserialize, Serialize};

/// Logical movement intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Move in the facing direction.
    Forward,
    /// Move against the facing direction.
    Backward,
    /// Turn left (increase yaw).
    TurnLeft,
    /// Turn right (decrease yaw).
    TurnRight,
}

/// Keys the game binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// W key.
    W,
    /// A key.
    A,
    /// S key.
    S,
    /// D key.
    D,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
}

impl Key {
    /// The intent this key maps to.
    #[must_use]
    pub fn intent(self) -> Intent {
        match self {
            Self::W | Self::ArrowUp => Intent::Forward,
            Self::S | Self::ArrowDown => Intent::Backward,
            Self::A | Self::ArrowLeft => Intent::TurnLeft,
            Self::D | Self::ArrowRight => Intent::TurnRight,
        }
    }
}

/// Current boolean state of the four intents.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InputState {
    /// Forward intent is held.
    pub forward: bool,
    /// Backward intent is held.
    pub backward: bool,
    /// Turn-left intent is held.
    pub turn_left: bool,
    /// Turn-right intent is held.
    pub turn_right: bool,
    enabled: bool,
}

impl InputState {
    /// Creates a disabled input state; events are ignored until enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables event handling. Disabling clears all intents.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.clear();
        }
    }

    /// Whether events are currently handled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Handles a key press.
    pub fn key_down(&mut self, key: Key) {
        if self.enabled {
            self.set_intent(key.intent(), true);
        }
    }

    /// Handles a key release.
    pub fn key_up(&mut self, key: Key) {
        if self.enabled {
            self.set_intent(key.intent(), false);
        }
    }

    /// Drops all held intents.
    pub fn clear(&mut self) {
        self.forward = false;
        self.backward = false;
        self.turn_left = false;
        self.turn_right = false;
    }

    fn set_intent(&mut self, intent: Intent, held: bool) {
        match intent {
            Intent::Forward => self.forward = held,
            Intent::Backward => self.backward = held,
            Intent::TurnLeft => self.turn_left = held,
            Intent::TurnRight => self.turn_right = held,
        }
    }
}
