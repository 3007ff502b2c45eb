//! Crouch State Machine
//!
//! Edge-triggered toggle between standing and crouching. Pressing the
//! crouch key flips the state once, on the tick the key goes down; holding
//! it does nothing further, and releasing it never transitions.
//!
//! The controller only decides *targets*: collider height, mesh scale, and
//! camera offset for the current state. Applying them smoothly over time
//! is [`SmoothedGeometry`](super::smoothing::SmoothedGeometry)'s job.

use glam::Vec3;

/// Discrete crouch state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrouchState {
    /// Standing upright at full collider height.
    #[default]
    Standing,
    /// Crouched at `crouch_height_factor` of the full height.
    Crouching,
}

impl CrouchState {
    /// Check if this state is the crouched one.
    pub fn is_crouching(&self) -> bool {
        matches!(self, CrouchState::Crouching)
    }
}

/// Tracks the crouch toggle and derives geometry targets from the state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrouchController {
    /// Current state.
    state: CrouchState,
    /// Crouched height as a fraction of the standing height.
    height_factor: f32,
    /// Whether the crouch key was held last tick (press-edge latch).
    was_pressed: bool,
}

impl CrouchController {
    /// Create a standing controller with the given height factor.
    pub fn new(height_factor: f32) -> Self {
        Self {
            state: CrouchState::Standing,
            height_factor,
            was_pressed: false,
        }
    }

    /// Get the current state.
    pub fn state(&self) -> CrouchState {
        self.state
    }

    /// Get the crouched height fraction.
    pub fn height_factor(&self) -> f32 {
        self.height_factor
    }

    /// Advance the state machine one tick.
    ///
    /// `crouch_held` is the raw held state of the crouch key; the press
    /// edge is detected here, so a key held across N ticks toggles exactly
    /// once, on the first of them.
    pub fn update(&mut self, crouch_held: bool) -> CrouchState {
        if crouch_held && !self.was_pressed {
            self.state = match self.state {
                CrouchState::Standing => CrouchState::Crouching,
                CrouchState::Crouching => CrouchState::Standing,
            };
        }
        self.was_pressed = crouch_held;
        self.state
    }

    /// Target collider height for the current state.
    pub fn target_height(&self, default_height: f32) -> f32 {
        match self.state {
            CrouchState::Standing => default_height,
            CrouchState::Crouching => default_height * self.height_factor,
        }
    }

    /// Target mesh scale for the current state. Crouching squashes the
    /// Y component only.
    pub fn target_scale(&self, default_scale: Vec3) -> Vec3 {
        match self.state {
            CrouchState::Standing => default_scale,
            CrouchState::Crouching => Vec3::new(
                default_scale.x,
                default_scale.y * self.height_factor,
                default_scale.z,
            ),
        }
    }

    /// Target camera offset for the current state: eye level sits at half
    /// the (state-selected) collider height above the body origin.
    pub fn target_camera_offset(&self, default_height: f32) -> Vec3 {
        Vec3::new(0.0, self.target_height(default_height) * 0.5, 0.0)
    }

    /// Return to standing immediately and clear the edge latch.
    pub fn reset(&mut self) {
        self.state = CrouchState::Standing;
        self.was_pressed = false;
    }
}
