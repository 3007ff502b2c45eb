//! Collision Resolution Seam
//!
//! The controller never resolves collisions itself. Each tick it hands the
//! desired velocity to a [`CollisionResolver`], an injected strategy that
//! sweeps the body against world geometry and reports where it ended up
//! and whether it is standing on something. The host supplies the real
//! move-and-slide; [`FlatGroundResolver`] is the reference implementation
//! used by tests and standalone harnesses.

use glam::Vec3;

/// Outcome of one collision resolution step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Body position after sliding against world geometry.
    pub position: Vec3,
    /// Velocity after collision response.
    pub velocity: Vec3,
    /// Whether the body rests on a supporting surface.
    pub grounded: bool,
}

/// Strategy interface for the host's move-and-slide step.
pub trait CollisionResolver {
    /// Apply `velocity` to the body at `position` over `dt` seconds,
    /// resolving collisions against world geometry.
    fn resolve(&mut self, position: Vec3, velocity: Vec3, dt: f32) -> CollisionResult;
}

/// Shape of the body's collision volume.
///
/// Only capsules have an adjustable height, so crouch height smoothing is
/// active only for [`ColliderShape::Capsule`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColliderShape {
    /// Capsule standing on its round end; `height` is the crouch-adjusted
    /// parameter.
    Capsule { height: f32, radius: f32 },
    /// Sphere of fixed radius.
    Sphere { radius: f32 },
    /// Axis-aligned box given by half extents.
    Box { half_extents: Vec3 },
}

impl ColliderShape {
    /// The capsule height, if this shape is a capsule.
    pub fn capsule_height(&self) -> Option<f32> {
        match self {
            ColliderShape::Capsule { height, .. } => Some(*height),
            _ => None,
        }
    }

    /// Check if this shape supports crouch height adjustment.
    pub fn is_capsule(&self) -> bool {
        matches!(self, ColliderShape::Capsule { .. })
    }
}

/// Minimal resolver: an infinite horizontal ground plane and nothing else.
///
/// Integrates the position directly, clamps the body to the plane when it
/// would sink below, and zeroes the vertical velocity on landing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatGroundResolver {
    /// World-space Y of the ground plane.
    pub ground_height: f32,
}

impl FlatGroundResolver {
    /// Create a resolver with the ground plane at the given height.
    pub fn new(ground_height: f32) -> Self {
        Self { ground_height }
    }
}

impl Default for FlatGroundResolver {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl CollisionResolver for FlatGroundResolver {
    fn resolve(&mut self, position: Vec3, velocity: Vec3, dt: f32) -> CollisionResult {
        let mut position = position + velocity * dt;
        let mut velocity = velocity;

        if position.y <= self.ground_height {
            position.y = self.ground_height;
            velocity.y = 0.0;
            CollisionResult {
                position,
                velocity,
                grounded: true,
            }
        } else {
            CollisionResult {
                position,
                velocity,
                grounded: false,
            }
        }
    }
}
