//! Player Simulation Modules
//!
//! The per-tick pieces of the character simulation: velocity integration,
//! the crouch state machine, and the smoothing that turns crouch state
//! into continuous geometry.

pub mod crouch;
pub mod motion;
pub mod smoothing;

pub use crouch::{CrouchController, CrouchState};
pub use motion::MotionIntegrator;
pub use smoothing::SmoothedGeometry;
