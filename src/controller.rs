//! Player Controller
//!
//! Owns the kinematic body and camera state and runs the per-tick update
//! pipeline: velocity integration, collision resolution, the crouch state
//! machine, geometry smoothing, and weapon pose derivation. Mouse look
//! runs separately, per pointer event, and writes straight into the
//! orientation state the next tick reads.
//!
//! # Host contract
//!
//! The controller is driven by explicit calls, not engine callbacks:
//!
//! ```rust,ignore
//! use kinematic_player::{
//!     ControllerConfig, FlatGroundResolver, PlayerController, SceneBindings, TickInput,
//! };
//! use kinematic_player::physics::ColliderShape;
//! use glam::Vec3;
//!
//! let bindings = SceneBindings::new()
//!     .with_camera(Vec3::new(0.0, 1.0, 0.0))
//!     .with_collider(ColliderShape::Capsule { height: 2.0, radius: 0.4 })
//!     .with_mesh_scale(Vec3::ONE);
//! let mut player = PlayerController::new(ControllerConfig::default(), bindings)?;
//! let mut resolver = FlatGroundResolver::default();
//!
//! // Per pointer-motion event:
//! player.on_pointer_delta(dx, dy);
//!
//! // Per physics tick (after all queued pointer events were applied):
//! let out = player.tick(dt, &input, &mut resolver);
//! scene.apply(out);
//! ```
//!
//! Everything runs on one logical thread. Within a host frame, all pointer
//! deltas queued since the last tick must be forwarded (in arrival order)
//! before `tick` is called; a multi-threaded host must serialize access to
//! the controller.

use glam::Vec3;

use crate::camera::{CameraBasis, LookController};
use crate::config::ControllerConfig;
use crate::input::TickInput;
use crate::physics::{ColliderShape, CollisionResolver};
use crate::player::{CrouchController, MotionIntegrator, SmoothedGeometry};
use crate::weapon::{WeaponAttachment, WeaponPose};

/// The kinematic body: position, velocity, and heading.
///
/// Owned exclusively by the controller and mutated only inside a tick
/// (yaw also moves on pointer events).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// World-space position of the body origin.
    pub position: Vec3,
    /// World-space velocity in m/s.
    pub velocity: Vec3,
    /// Heading in degrees about world Y.
    pub yaw: f32,
}

/// First-person camera state: local offset from the body origin and pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Local offset from the body origin; the Y component is smoothed
    /// with the crouch transition.
    pub offset: Vec3,
    /// Pitch in degrees, always within [-90, 90].
    pub pitch: f32,
}

/// Scene collaborators injected at construction.
///
/// Stands in for string-keyed node lookups: the host resolves its scene
/// objects once and passes their relevant values here, where they are
/// validated up front instead of on first use inside a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SceneBindings {
    /// Initial camera local offset. Required.
    pub camera_offset: Option<Vec3>,
    /// The body's collision shape. Required; the standing height is
    /// captured from it when it is a capsule.
    pub collider: Option<ColliderShape>,
    /// The character mesh's default scale. Required.
    pub mesh_scale: Option<Vec3>,
    /// Local offset of an attached weapon. Optional; without it the
    /// weapon pose step is skipped entirely.
    pub weapon_offset: Option<Vec3>,
}

impl SceneBindings {
    /// Create an empty set of bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the camera's initial local offset.
    pub fn with_camera(mut self, offset: Vec3) -> Self {
        self.camera_offset = Some(offset);
        self
    }

    /// Bind the body's collision shape.
    pub fn with_collider(mut self, shape: ColliderShape) -> Self {
        self.collider = Some(shape);
        self
    }

    /// Bind the mesh's default scale.
    pub fn with_mesh_scale(mut self, scale: Vec3) -> Self {
        self.mesh_scale = Some(scale);
        self
    }

    /// Bind an attached weapon with the given local offset.
    pub fn with_weapon(mut self, offset: Vec3) -> Self {
        self.weapon_offset = Some(offset);
        self
    }
}

/// Errors raised when required scene collaborators are missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingError {
    /// No camera offset was bound.
    MissingCamera,
    /// No collider shape was bound.
    MissingCollider,
    /// No mesh scale was bound.
    MissingMesh,
}

impl std::fmt::Display for BindingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindingError::MissingCamera => write!(f, "no camera bound to the player controller"),
            BindingError::MissingCollider => {
                write!(f, "no collider shape bound to the player controller")
            }
            BindingError::MissingMesh => write!(f, "no mesh scale bound to the player controller"),
        }
    }
}

impl std::error::Error for BindingError {}

/// Everything the host writes back into its scene after a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutput {
    /// Body world position.
    pub position: Vec3,
    /// Body yaw in degrees.
    pub yaw: f32,
    /// Camera local offset from the body origin.
    pub camera_offset: Vec3,
    /// Camera pitch in degrees.
    pub pitch: f32,
    /// Crouch-smoothed collider height parameter.
    pub collider_height: f32,
    /// Crouch-smoothed mesh scale.
    pub mesh_scale: Vec3,
    /// Weapon pose, present only when a weapon is bound.
    pub weapon: Option<WeaponPose>,
}

/// First-person kinematic character controller.
///
/// Construction validates the injected collaborators and captures the
/// default collider height and mesh scale; after that the controller is
/// driven by [`tick`](Self::tick) and
/// [`on_pointer_delta`](Self::on_pointer_delta).
#[derive(Debug, Clone)]
pub struct PlayerController {
    body: Body,
    camera: CameraState,
    motion: MotionIntegrator,
    crouch: CrouchController,
    look: LookController,
    smoothing: SmoothedGeometry,
    weapon: Option<WeaponAttachment>,

    /// Standing collider height captured at construction. Stays 0 for
    /// non-capsule colliders, which have no adjustable height.
    default_height: f32,
    /// Mesh scale captured at construction.
    default_scale: Vec3,
    /// False when the collider is not a capsule; height smoothing is then
    /// a permanent no-op while scale and camera smoothing keep running.
    height_adjust_enabled: bool,
    /// Ground contact reported by the most recent collision resolution.
    grounded: bool,
}

impl PlayerController {
    /// Create a controller from a configuration and scene bindings.
    ///
    /// Fails immediately if the camera, collider, or mesh binding is
    /// absent. A non-capsule collider is accepted but disables crouch
    /// height adjustment (logged once).
    pub fn new(config: ControllerConfig, bindings: SceneBindings) -> Result<Self, BindingError> {
        let camera_offset = bindings.camera_offset.ok_or(BindingError::MissingCamera)?;
        let collider = bindings.collider.ok_or(BindingError::MissingCollider)?;
        let default_scale = bindings.mesh_scale.ok_or(BindingError::MissingMesh)?;

        let (default_height, height_adjust_enabled) = match collider.capsule_height() {
            Some(height) => (height, true),
            None => {
                log::warn!(
                    "player collider is not a capsule ({collider:?}); crouch height adjustment disabled"
                );
                (0.0, false)
            }
        };

        let weapon = bindings
            .weapon_offset
            .map(|offset| WeaponAttachment::new(offset + config.weapon_local_offset));

        log::info!(
            "player controller initialized: height {default_height}, weapon {}",
            if weapon.is_some() { "bound" } else { "absent" }
        );

        Ok(Self {
            body: Body {
                position: Vec3::ZERO,
                velocity: Vec3::ZERO,
                yaw: 0.0,
            },
            camera: CameraState {
                offset: camera_offset,
                pitch: 0.0,
            },
            motion: MotionIntegrator::from_config(&config),
            crouch: CrouchController::new(config.crouch_height_factor),
            look: LookController::new(config.mouse_sensitivity),
            smoothing: SmoothedGeometry::new(
                default_height,
                default_scale,
                camera_offset,
                config.smoothing_rate,
                config.camera_smoothing_rate,
            ),
            weapon,
            default_height,
            default_scale,
            height_adjust_enabled,
            grounded: false,
        })
    }

    /// Current body state.
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Current camera state.
    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// Ground contact reported by the last collision resolution.
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Whether the body is currently in the crouched state.
    pub fn is_crouching(&self) -> bool {
        self.crouch.state().is_crouching()
    }

    /// Place the body at a position (spawn point).
    pub fn set_position(&mut self, position: Vec3) {
        self.body.position = position;
    }

    /// Run one fixed physics tick.
    ///
    /// Pipeline order: integrate velocity, resolve collisions, advance the
    /// crouch toggle, smooth geometry, derive the weapon pose. The
    /// grounded flag consumed by the integrator is the one reported by the
    /// previous tick's resolution, so ground contact is always the
    /// resolver's latest word at integration time.
    pub fn tick(
        &mut self,
        dt: f32,
        input: &TickInput,
        resolver: &mut dyn CollisionResolver,
    ) -> TickOutput {
        let crouching = self.crouch.state().is_crouching();
        self.body.velocity = self.motion.integrate(
            self.body.velocity,
            self.grounded,
            input,
            crouching,
            self.body.yaw,
            dt,
        );

        let result = resolver.resolve(self.body.position, self.body.velocity, dt);
        self.body.position = result.position;
        self.body.velocity = result.velocity;
        self.grounded = result.grounded;

        self.crouch.update(input.crouch);

        if self.height_adjust_enabled {
            self.smoothing
                .step_height(self.crouch.target_height(self.default_height), dt);
        }
        self.smoothing
            .step_scale(self.crouch.target_scale(self.default_scale), dt);
        self.smoothing
            .step_camera_offset(self.crouch.target_camera_offset(self.default_height), dt);
        self.camera.offset = self.smoothing.current_camera_offset();

        let weapon = self.weapon.as_ref().map(|attachment| {
            let basis = CameraBasis::from_angles(self.body.yaw, self.camera.pitch);
            attachment.pose(self.body.position + self.camera.offset, &basis)
        });

        TickOutput {
            position: self.body.position,
            yaw: self.body.yaw,
            camera_offset: self.camera.offset,
            pitch: self.camera.pitch,
            collider_height: self.smoothing.current_height(),
            mesh_scale: self.smoothing.current_scale(),
            weapon,
        }
    }

    /// Apply one raw pointer-motion event.
    ///
    /// May be called any number of times between ticks; effects accumulate
    /// and the next tick reads the resulting orientation.
    pub fn on_pointer_delta(&mut self, dx: f32, dy: f32) {
        self.look
            .apply_delta(&mut self.body.yaw, &mut self.camera.pitch, dx, dy);
    }

    /// Teleport/respawn: zero the velocity, stand up, and snap the
    /// smoothed geometry to its standing targets. Orientation is kept.
    pub fn reset(&mut self, position: Vec3) {
        self.body.position = position;
        self.body.velocity = Vec3::ZERO;
        self.grounded = false;
        self.crouch.reset();
        let camera_offset = self.crouch.target_camera_offset(self.default_height);
        self.smoothing
            .snap_to(self.default_height, self.default_scale, camera_offset);
        self.camera.offset = camera_offset;
    }
}
