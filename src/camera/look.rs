//! Mouse Look Controller
//!
//! Converts raw pointer-motion deltas into body yaw and camera pitch.
//! Runs outside the fixed tick cadence: the host forwards each pointer
//! event as it arrives, the angles are updated immediately, and the next
//! physics tick reads whatever orientation is current (last write wins).
//!
//! Key behavior:
//! - Moving the mouse right turns the body right (yaw decreases)
//! - Moving the mouse down looks down (pitch decreases)
//! - Pitch is clamped to [-90, 90] after every application
//! - No smoothing - instant response for precise aiming

/// Lowest allowed camera pitch, in degrees (looking straight down).
pub const PITCH_MIN_DEGREES: f32 = -90.0;

/// Highest allowed camera pitch, in degrees (looking straight up).
pub const PITCH_MAX_DEGREES: f32 = 90.0;

/// Applies pointer deltas to the shared orientation state.
///
/// Stateless apart from its sensitivity; the yaw and pitch it mutates are
/// owned by the body and camera respectively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookController {
    /// Sensitivity in degrees of rotation per pixel of pointer travel.
    sensitivity: f32,
}

impl LookController {
    /// Create a look controller with the given sensitivity
    /// (degrees per pixel).
    pub fn new(sensitivity: f32) -> Self {
        Self { sensitivity }
    }

    /// Get the sensitivity in degrees per pixel.
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Set the sensitivity in degrees per pixel.
    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity;
    }

    /// Apply one pointer-motion event to the given yaw and pitch angles.
    ///
    /// # Arguments
    /// * `yaw` - Body yaw in degrees. Positive dx (mouse right) decreases it.
    /// * `pitch` - Camera pitch in degrees. Positive dy (mouse down)
    ///   decreases it; the result is clamped to [-90, 90].
    /// * `dx`, `dy` - Pointer delta in pixels.
    pub fn apply_delta(&self, yaw: &mut f32, pitch: &mut f32, dx: f32, dy: f32) {
        *yaw -= dx * self.sensitivity;
        *pitch = (*pitch - dy * self.sensitivity).clamp(PITCH_MIN_DEGREES, PITCH_MAX_DEGREES);
    }
}
