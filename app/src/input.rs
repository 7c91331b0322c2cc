//! Per-frame keyboard input.
//!
//! The host collects key-down edges into an [`InputFrame`] and hands it to
//! the debug manager's update hook. [`map_winit_key`] translates winit key
//! codes into [`linesmith_core::input::KeyCode`].

use linesmith_core::input::{KeyCode, KeyInput};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{self, PhysicalKey};

/// Keys that went down during one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFrame {
    pressed: Vec<KeyCode>,
}

impl InputFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frame with the given keys pressed.
    pub fn with_keys(keys: impl IntoIterator<Item = KeyCode>) -> Self {
        let mut frame = Self::new();
        for key in keys {
            frame.press(key);
        }
        frame
    }

    /// Record a key-down edge. Repeated presses within a frame count once.
    pub fn press(&mut self, key: KeyCode) {
        if !self.pressed.contains(&key) {
            self.pressed.push(key);
        }
    }

    /// Record a winit keyboard event. Releases, key repeats and unmapped keys
    /// are ignored.
    pub fn record(&mut self, event: &KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        if let PhysicalKey::Code(code) = event.physical_key {
            if let Some(key) = map_winit_key(code) {
                self.press(key);
            }
        }
    }

    pub fn pressed(&self) -> &[KeyCode] {
        &self.pressed
    }

    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty()
    }

    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}

impl KeyInput for InputFrame {
    fn key_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }
}

/// Convert a winit [`keyboard::KeyCode`] to a [`KeyCode`], if the key can
/// be bound.
pub fn map_winit_key(key: keyboard::KeyCode) -> Option<KeyCode> {
    use keyboard::KeyCode as Winit;

    Some(match key {
        Winit::Space => KeyCode::Space,
        Winit::Enter => KeyCode::Enter,
        Winit::Escape => KeyCode::Escape,
        Winit::Tab => KeyCode::Tab,

        Winit::ArrowUp => KeyCode::ArrowUp,
        Winit::ArrowDown => KeyCode::ArrowDown,
        Winit::ArrowLeft => KeyCode::ArrowLeft,
        Winit::ArrowRight => KeyCode::ArrowRight,
        Winit::PageUp => KeyCode::PageUp,
        Winit::PageDown => KeyCode::PageDown,
        Winit::Home => KeyCode::Home,
        Winit::End => KeyCode::End,

        Winit::Numpad0 => KeyCode::Numpad0,
        Winit::Numpad1 => KeyCode::Numpad1,
        Winit::Numpad2 => KeyCode::Numpad2,
        Winit::Numpad3 => KeyCode::Numpad3,
        Winit::Numpad4 => KeyCode::Numpad4,
        Winit::Numpad5 => KeyCode::Numpad5,
        Winit::Numpad6 => KeyCode::Numpad6,
        Winit::Numpad7 => KeyCode::Numpad7,
        Winit::Numpad8 => KeyCode::Numpad8,
        Winit::Numpad9 => KeyCode::Numpad9,
        Winit::NumpadAdd => KeyCode::NumpadAdd,
        Winit::NumpadSubtract => KeyCode::NumpadSubtract,

        Winit::Minus => KeyCode::Minus,
        Winit::Equal => KeyCode::Equal,

        _ => return None,
    })
}
