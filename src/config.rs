//! Controller Configuration
//!
//! All tuning options for the character controller live here so a host can
//! load them from a settings file or tweak them at startup. Values use
//! metric units (meters, seconds) and angles in degrees.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Walk speed in meters per second
pub const WALK_SPEED: f32 = 5.0;

/// Run speed in meters per second
pub const RUN_SPEED: f32 = 10.0;

/// Jump velocity in meters per second
pub const JUMP_VELOCITY: f32 = 4.5;

/// Gravity acceleration in meters per second squared (negative = down)
pub const GRAVITY: f32 = -9.8;

/// Mouse sensitivity in degrees per pixel
pub const MOUSE_SENSITIVITY: f32 = 0.1;

/// Fraction of the standing collider height used while crouched
pub const CROUCH_HEIGHT_FACTOR: f32 = 0.5;

/// Smoothing rate for collider height and mesh scale, per second
pub const SMOOTHING_RATE: f32 = 5.0;

/// Smoothing rate for the camera's local offset, per second
pub const CAMERA_SMOOTHING_RATE: f32 = 5.0;

/// Configuration for the character controller.
///
/// The defaults reproduce the classic capsule-character feel: 5 m/s walk,
/// 10 m/s run, a 4.5 m/s jump under -9.8 m/s² gravity, and a crouch that
/// halves the collider height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Base walking speed in m/s.
    pub walk_speed: f32,

    /// Running speed in m/s. Running is suppressed while crouched.
    pub run_speed: f32,

    /// Upward velocity applied on a jump, in m/s.
    pub jump_velocity: f32,

    /// Gravity acceleration in m/s². Negative values pull down.
    pub gravity: f32,

    /// Mouse sensitivity in degrees of rotation per pixel of mouse travel.
    pub mouse_sensitivity: f32,

    /// Crouched collider height as a fraction of the standing height.
    pub crouch_height_factor: f32,

    /// Interpolation rate for collider height and mesh scale, per second.
    ///
    /// Applied as `rate * dt` each tick without clamping; rates above
    /// `1 / dt` overshoot the target instead of converging.
    pub smoothing_rate: f32,

    /// Interpolation rate for the camera's local offset, per second.
    /// Independent of `smoothing_rate` so camera feel can be tuned alone.
    pub camera_smoothing_rate: f32,

    /// Extra local offset added to the derived weapon position.
    pub weapon_local_offset: Vec3,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            walk_speed: WALK_SPEED,
            run_speed: RUN_SPEED,
            jump_velocity: JUMP_VELOCITY,
            gravity: GRAVITY,
            mouse_sensitivity: MOUSE_SENSITIVITY,
            crouch_height_factor: CROUCH_HEIGHT_FACTOR,
            smoothing_rate: SMOOTHING_RATE,
            camera_smoothing_rate: CAMERA_SMOOTHING_RATE,
            weapon_local_offset: Vec3::ZERO,
        }
    }
}

impl ControllerConfig {
    /// Create a configuration with the default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with custom walk and run speeds.
    pub fn with_speeds(walk_speed: f32, run_speed: f32) -> Self {
        Self {
            walk_speed,
            run_speed,
            ..Default::default()
        }
    }
}
