//! Smoothed Crouch Geometry
//!
//! Holds the continuous geometric consequences of crouching - collider
//! height, mesh scale, and the camera's local offset - and eases each one
//! toward its state-selected target every tick.
//!
//! The interpolation step is `current += (target - current) * rate * dt`.
//! The factor `rate * dt` is applied as-is, without clamping to 1: with
//! rates above `1 / dt` the value overshoots its target and can oscillate
//! instead of converging. This matches the historical behavior and is kept
//! deliberately; hosts tune `rate` well below the tick frequency.
//! Convergence is asymptotic - the current value approaches the target
//! but only equals it when it started there.

use glam::Vec3;

/// Smoothed collider height, mesh scale, and camera offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothedGeometry {
    current_height: f32,
    current_scale: Vec3,
    current_camera_offset: Vec3,
    /// Interpolation rate for height and scale, per second.
    rate: f32,
    /// Interpolation rate for the camera offset, per second.
    camera_rate: f32,
}

impl SmoothedGeometry {
    /// Create smoothed geometry starting at the given current values.
    pub fn new(height: f32, scale: Vec3, camera_offset: Vec3, rate: f32, camera_rate: f32) -> Self {
        Self {
            current_height: height,
            current_scale: scale,
            current_camera_offset: camera_offset,
            rate,
            camera_rate,
        }
    }

    /// Current collider height.
    pub fn current_height(&self) -> f32 {
        self.current_height
    }

    /// Current mesh scale.
    pub fn current_scale(&self) -> Vec3 {
        self.current_scale
    }

    /// Current camera local offset.
    pub fn current_camera_offset(&self) -> Vec3 {
        self.current_camera_offset
    }

    /// Ease the collider height toward `target` over this tick.
    pub fn step_height(&mut self, target: f32, dt: f32) {
        self.current_height += (target - self.current_height) * self.rate * dt;
    }

    /// Ease the mesh scale toward `target` over this tick.
    pub fn step_scale(&mut self, target: Vec3, dt: f32) {
        self.current_scale += (target - self.current_scale) * self.rate * dt;
    }

    /// Ease the camera offset toward `target` over this tick, using the
    /// camera's own rate.
    pub fn step_camera_offset(&mut self, target: Vec3, dt: f32) {
        self.current_camera_offset +=
            (target - self.current_camera_offset) * self.camera_rate * dt;
    }

    /// Snap every value to the given targets with no easing
    /// (teleport/respawn).
    pub fn snap_to(&mut self, height: f32, scale: Vec3, camera_offset: Vec3) {
        self.current_height = height;
        self.current_scale = scale;
        self.current_camera_offset = camera_offset;
    }
}
