//! Camera Module
//!
//! Orientation math for the first-person camera: the world-space basis
//! derived from body yaw and camera pitch, and the mouse-look controller
//! that drives those angles.
//!
//! # Conventions
//!
//! Angles are in degrees. Yaw 0 / pitch 0 looks toward -Z; the local +Z
//! axis is the *back* vector. Positive pitch looks up, and pitch is
//! clamped to [-90, 90].

pub mod look;

pub use look::LookController;

use glam::{Quat, Vec3};

/// World-space basis vectors of a camera transform.
///
/// Derived from the body's yaw (rotation about world Y) composed with the
/// camera's pitch (rotation about the local X axis), exactly the transform
/// stack of a camera node parented to a rotating body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    /// Local +X in world space (right).
    pub right: Vec3,
    /// Local +Y in world space (up).
    pub up: Vec3,
    /// Local +Z in world space (back). The camera looks along `-back`.
    pub back: Vec3,
}

impl CameraBasis {
    /// Build the basis for the given yaw and pitch, both in degrees.
    pub fn from_angles(yaw_degrees: f32, pitch_degrees: f32) -> Self {
        let rotation = Quat::from_rotation_y(yaw_degrees.to_radians())
            * Quat::from_rotation_x(pitch_degrees.to_radians());
        Self {
            right: rotation * Vec3::X,
            up: rotation * Vec3::Y,
            back: rotation * Vec3::Z,
        }
    }

    /// The direction the camera is looking (`-back`), normalized.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        -self.back
    }
}
