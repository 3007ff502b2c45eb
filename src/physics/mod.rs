//! Physics Interfaces
//!
//! The seam between the controller and the host's collision system.

pub mod resolver;

pub use resolver::{ColliderShape, CollisionResolver, CollisionResult, FlatGroundResolver};
