//! Platform-agnostic input types.
//!
//! Provides a [`KeyCode`] enum that identifies physical keyboard keys
//! without depending on any windowing crate, and the [`KeyInput`] query
//! trait consumed by per-frame update hooks.

/// Physical keyboard key usable as a debug binding.
///
/// Covers the keys that stay free during gameplay: arrows, paging keys, the
/// numeric keypad and a few stepping symbols. Platform layers map their
/// native key codes onto this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum KeyCode {
    Space,
    Enter,
    Escape,
    Tab,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,
    Home,
    End,

    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    NumpadAdd,
    NumpadSubtract,

    Minus,
    Equal,
}

/// Key-down edge queries for the current frame.
///
/// Implemented by the host's input layer. `key_pressed` must report `true`
/// only on the frame the key went down, not while it is held.
pub trait KeyInput {
    /// Whether `key` transitioned to pressed during the current frame.
    fn key_pressed(&self, key: KeyCode) -> bool;
}

impl<T: KeyInput + ?Sized> KeyInput for &T {
    fn key_pressed(&self, key: KeyCode) -> bool {
        (**self).key_pressed(key)
    }
}

/// Input source that never reports a key press.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl KeyInput for NoInput {
    fn key_pressed(&self, _key: KeyCode) -> bool {
        false
    }
}

impl KeyInput for [KeyCode] {
    fn key_pressed(&self, key: KeyCode) -> bool {
        self.contains(&key)
    }
}
