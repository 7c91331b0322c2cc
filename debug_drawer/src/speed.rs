//! Keyboard-driven global time-scale control.
//!
//! Independent of line drawing; it lives next to the manager because both
//! are driven from the same per-frame update hook.

use linesmith_core::input::{KeyCode, KeyInput};

/// Time-scale multipliers selectable with the speed keys.
pub const SPEED_TABLE: [f32; 8] = [0.0, 0.125, 0.25, 0.5, 1.0, 2.0, 4.0, 8.0];

/// Index into [`SPEED_TABLE`] at startup (`1.0`).
pub const DEFAULT_SPEED_INDEX: usize = 4;

/// Index the reset key jumps to (`0.5`).
///
/// This is deliberately not [`DEFAULT_SPEED_INDEX`].
pub const RESET_SPEED_INDEX: usize = 3;

/// Sink for the process-wide time-scale value.
pub trait TimeScale {
    fn set_time_scale(&mut self, scale: f32);
}

impl TimeScale for f32 {
    fn set_time_scale(&mut self, scale: f32) {
        *self = scale;
    }
}

/// Keys driving the manager's update hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedBindings {
    /// Flips drawing on and off.
    pub toggle_drawing: KeyCode,
    pub faster: KeyCode,
    pub slower: KeyCode,
    pub reset: KeyCode,
}

impl Default for SpeedBindings {
    fn default() -> Self {
        Self {
            toggle_drawing: KeyCode::Space,
            faster: KeyCode::ArrowUp,
            slower: KeyCode::ArrowDown,
            reset: KeyCode::Numpad0,
        }
    }
}

/// A discrete speed change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedEvent {
    Faster,
    Slower,
    Reset,
}

/// Index into [`SPEED_TABLE`] plus the transitions that move it.
#[derive(Debug, Clone)]
pub struct SpeedController {
    index: usize,
}

impl SpeedController {
    pub fn new() -> Self {
        Self {
            index: DEFAULT_SPEED_INDEX,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Current multiplier.
    pub fn scale(&self) -> f32 {
        SPEED_TABLE[self.index]
    }

    /// Step up one entry, clamped at the fastest.
    pub fn increment(&mut self) {
        if self.index < SPEED_TABLE.len() - 1 {
            self.index += 1;
        }
    }

    /// Step down one entry, clamped at zero.
    pub fn decrement(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Jump to [`RESET_SPEED_INDEX`].
    pub fn reset(&mut self) {
        self.index = RESET_SPEED_INDEX;
    }

    /// Apply `event` and write the resulting multiplier to `time_scale`.
    pub fn apply(&mut self, event: SpeedEvent, time_scale: &mut impl TimeScale) -> f32 {
        match event {
            SpeedEvent::Faster => self.increment(),
            SpeedEvent::Slower => self.decrement(),
            SpeedEvent::Reset => self.reset(),
        }
        let scale = self.scale();
        time_scale.set_time_scale(scale);
        log::info!("time scale = x{}", scale);
        scale
    }

    /// Poll `input` for this frame's speed event, if any.
    ///
    /// When several speed keys go down in the same frame, reset wins over
    /// faster, and faster over slower.
    pub fn poll(input: &impl KeyInput, bindings: &SpeedBindings) -> Option<SpeedEvent> {
        if input.key_pressed(bindings.reset) {
            Some(SpeedEvent::Reset)
        } else if input.key_pressed(bindings.faster) {
            Some(SpeedEvent::Faster)
        } else if input.key_pressed(bindings.slower) {
            Some(SpeedEvent::Slower)
        } else {
            None
        }
    }
}

impl Default for SpeedController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_unit_speed() {
        let speed = SpeedController::new();
        assert_eq!(speed.index(), 4);
        assert_eq!(speed.scale(), 1.0);
    }

    #[test]
    fn test_clamps_at_both_ends() {
        let mut speed = SpeedController::new();
        for _ in 0..20 {
            speed.increment();
        }
        assert_eq!(speed.index(), 7);
        assert_eq!(speed.scale(), 8.0);

        for _ in 0..20 {
            speed.decrement();
        }
        assert_eq!(speed.index(), 0);
        assert_eq!(speed.scale(), 0.0);
    }

    #[test]
    fn test_reset_is_half_speed_not_default() {
        let mut speed = SpeedController::new();
        let mut time_scale = 1.0_f32;

        speed.apply(SpeedEvent::Slower, &mut time_scale);
        assert_eq!(speed.index(), 3);
        speed.apply(SpeedEvent::Reset, &mut time_scale);

        assert_eq!(speed.index(), 3);
        assert_eq!(time_scale, 0.5);

        speed.apply(SpeedEvent::Faster, &mut time_scale);
        speed.apply(SpeedEvent::Faster, &mut time_scale);
        speed.apply(SpeedEvent::Reset, &mut time_scale);
        assert_eq!(speed.index(), RESET_SPEED_INDEX);
        assert_ne!(RESET_SPEED_INDEX, DEFAULT_SPEED_INDEX);
    }

    #[test]
    fn test_apply_writes_time_scale() {
        let mut speed = SpeedController::new();
        let mut time_scale = 1.0_f32;
        assert_eq!(speed.apply(SpeedEvent::Faster, &mut time_scale), 2.0);
        assert_eq!(time_scale, 2.0);
    }

    #[test]
    fn test_poll_priority() {
        let bindings = SpeedBindings::default();

        let keys: &[KeyCode] = &[KeyCode::ArrowDown, KeyCode::ArrowUp, KeyCode::Numpad0];
        assert_eq!(SpeedController::poll(&keys, &bindings), Some(SpeedEvent::Reset));

        let keys: &[KeyCode] = &[KeyCode::ArrowDown, KeyCode::ArrowUp];
        assert_eq!(SpeedController::poll(&keys, &bindings), Some(SpeedEvent::Faster));

        let keys: &[KeyCode] = &[KeyCode::ArrowDown];
        assert_eq!(SpeedController::poll(&keys, &bindings), Some(SpeedEvent::Slower));

        let keys: &[KeyCode] = &[KeyCode::Space];
        assert_eq!(SpeedController::poll(&keys, &bindings), None);
    }
}
