//! Per-Tick Input Snapshot
//!
//! The controller never polls devices. The host samples its input system
//! once per physics tick and hands the result over as a [`TickInput`]
//! value, which keeps the simulation free of hidden global state and easy
//! to drive from tests.
//!
//! Mouse deltas are not part of the snapshot; they are delivered per event
//! through `PlayerController::on_pointer_delta`.

use glam::Vec2;

/// Input state for one physics tick.
///
/// The movement vector lives in "input space": `x` is strafe (+right),
/// `y` is forward/back (+back), and the vector is expected to already be
/// normalized to at most unit length, as analog sticks and key folding
/// both produce.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Movement axes: x = strafe right, y = back. Unit length or shorter.
    pub movement: Vec2,
    /// Run key currently held.
    pub run: bool,
    /// Jump key pressed this tick (press edge, not held state).
    pub jump_pressed: bool,
    /// Crouch key currently held. The crouch toggle edge is detected
    /// internally, so holding the key across many ticks toggles once.
    pub crouch: bool,
}

impl TickInput {
    /// Create an empty snapshot (no movement, no keys).
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold individual movement keys into a normalized snapshot.
    ///
    /// Opposing keys cancel; diagonals are normalized so keyboard input
    /// cannot exceed unit length.
    pub fn from_keys(
        forward: bool,
        backward: bool,
        left: bool,
        right: bool,
        run: bool,
        jump_pressed: bool,
        crouch: bool,
    ) -> Self {
        let x = (right as i32 - left as i32) as f32;
        let y = (backward as i32 - forward as i32) as f32;
        Self {
            movement: Vec2::new(x, y).normalize_or_zero(),
            run,
            jump_pressed,
            crouch,
        }
    }

    /// Check if any movement axis is active.
    pub fn has_movement(&self) -> bool {
        self.movement.length_squared() > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let input = TickInput::new();
        assert_eq!(input.movement, Vec2::ZERO);
        assert!(!input.has_movement());
        assert!(!input.run);
        assert!(!input.jump_pressed);
        assert!(!input.crouch);
    }

    #[test]
    fn test_forward_is_negative_y() {
        let input = TickInput::from_keys(true, false, false, false, false, false, false);
        assert_eq!(input.movement, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_strafe_right_is_positive_x() {
        let input = TickInput::from_keys(false, false, false, true, false, false, false);
        assert_eq!(input.movement, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let input = TickInput::from_keys(true, true, true, true, false, false, false);
        assert_eq!(input.movement, Vec2::ZERO);
        assert!(!input.has_movement());
    }

    #[test]
    fn test_diagonal_is_normalized() {
        let input = TickInput::from_keys(true, false, false, true, false, false, false);
        assert!((input.movement.length() - 1.0).abs() < 0.001);
        assert!(input.movement.x > 0.0);
        assert!(input.movement.y < 0.0);
    }

    #[test]
    fn test_flags_pass_through() {
        let input = TickInput::from_keys(false, false, false, false, true, true, true);
        assert!(input.run);
        assert!(input.jump_pressed);
        assert!(input.crouch);
    }
}
