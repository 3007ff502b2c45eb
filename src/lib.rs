//! Kinematic Player Library
//!
//! A first-person character controller that turns per-tick input
//! (movement axes, run/jump/crouch keys, mouse deltas) into a kinematic
//! body's velocity, orientation, crouch-adjusted collision geometry,
//! camera placement, and an attached weapon's pose. It is engine-agnostic:
//! the host drives it from its fixed-timestep physics callback and its raw
//! pointer-input callback, and supplies collision resolution through an
//! injected strategy.
//!
//! # Modules
//!
//! - [`controller`] - The owning [`PlayerController`] and its tick pipeline
//! - [`player`] - Velocity integration, crouch state machine, geometry
//!   smoothing
//! - [`camera`] - Yaw/pitch basis math and the mouse-look controller
//! - [`physics`] - The collision-resolver seam and collider shapes
//! - [`weapon`] - Camera-derived weapon pose
//! - [`input`] - The per-tick input snapshot
//! - [`config`] - Tuning options with serde support
//!
//! # Example
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
//!     .with_mesh_scale(Vec3::ONE)
//!     .with_weapon(Vec3::ZERO);
//! let mut player = PlayerController::new(ControllerConfig::default(), bindings)?;
//! let mut resolver = FlatGroundResolver::default();
//!
//! // Raw input callback:
//! player.on_pointer_delta(dx, dy);
//!
//! // Fixed physics callback:
//! let input = TickInput::from_keys(w, s, a, d, shift, jumped, ctrl);
//! let out = player.tick(dt, &input, &mut resolver);
//! // write out.position, out.yaw, out.camera_offset, out.pitch,
//! // out.collider_height, out.mesh_scale, out.weapon back to the scene
//! ```

pub mod camera;
pub mod config;
pub mod controller;
pub mod input;
pub mod physics;
pub mod player;
pub mod weapon;

// Re-export the main entry points at crate level for convenience
pub use config::ControllerConfig;
pub use controller::{Body, BindingError, CameraState, PlayerController, SceneBindings, TickOutput};
pub use input::TickInput;
pub use physics::{ColliderShape, CollisionResolver, CollisionResult, FlatGroundResolver};
pub use weapon::WeaponPose;
