//! Motion Integrator
//!
//! Derives the next velocity from gravity, jump, and horizontal input.
//! Pure per-tick computation: the integrator holds only tuning values and
//! never touches position - applying the velocity against world geometry
//! is the collision resolver's job.
//!
//! # Velocity rules
//!
//! - Airborne: gravity accumulates on `velocity.y`
//! - Grounded + jump edge (and not crouched): `velocity.y` is set to the
//!   jump velocity; gravity and jump never both apply in the same tick
//! - Movement input: horizontal velocity is set directly to the input
//!   direction times the current speed (run speed only while not crouched)
//! - No input: each horizontal component decelerates linearly toward zero,
//!   never overshooting

use glam::{Quat, Vec3};

use crate::config::ControllerConfig;
use crate::input::TickInput;

/// Integrates per-tick velocity from gravity, jump, and movement input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionIntegrator {
    /// Walk speed in m/s; also the deceleration rate in m/s².
    walk_speed: f32,
    /// Run speed in m/s, used while the run key is held and not crouched.
    run_speed: f32,
    /// Vertical velocity applied on a jump, in m/s.
    jump_velocity: f32,
    /// Gravity acceleration in m/s² (negative = down).
    gravity: f32,
}

impl MotionIntegrator {
    /// Create an integrator with explicit tuning values.
    pub fn new(walk_speed: f32, run_speed: f32, jump_velocity: f32, gravity: f32) -> Self {
        Self {
            walk_speed,
            run_speed,
            jump_velocity,
            gravity,
        }
    }

    /// Create an integrator from a controller configuration.
    pub fn from_config(config: &ControllerConfig) -> Self {
        Self::new(
            config.walk_speed,
            config.run_speed,
            config.jump_velocity,
            config.gravity,
        )
    }

    /// Compute the next velocity.
    ///
    /// # Arguments
    /// * `velocity` - Velocity at the end of the previous tick.
    /// * `grounded` - Whether the resolver reported ground contact.
    /// * `input` - This tick's input snapshot.
    /// * `crouching` - Current crouch state (suppresses jump and run).
    /// * `yaw_degrees` - Body yaw; movement input is projected into this
    ///   heading.
    /// * `dt` - Delta time in seconds, must be positive.
    ///
    /// # Returns
    /// The new velocity. No other state is touched.
    pub fn integrate(
        &self,
        velocity: Vec3,
        grounded: bool,
        input: &TickInput,
        crouching: bool,
        yaw_degrees: f32,
        dt: f32,
    ) -> Vec3 {
        let mut velocity = velocity;

        // Vertical: gravity while airborne, jump impulse on the ground.
        // The branches are exclusive so velocity.y is never touched twice
        // in one tick.
        if !grounded {
            velocity.y += self.gravity * dt;
        } else if input.jump_pressed && !crouching {
            velocity.y = self.jump_velocity;
        }

        // Horizontal: project input axes into the body's heading
        let rotation = Quat::from_rotation_y(yaw_degrees.to_radians());
        let basis_x = rotation * Vec3::X;
        let basis_z = rotation * Vec3::Z;
        let direction =
            (basis_x * input.movement.x + basis_z * input.movement.y).normalize_or_zero();

        if direction != Vec3::ZERO {
            let speed = if input.run && !crouching {
                self.run_speed
            } else {
                self.walk_speed
            };
            velocity.x = direction.x * speed;
            velocity.z = direction.z * speed;
        } else {
            // Linear deceleration, component-wise, never past zero
            let step = self.walk_speed * dt;
            velocity.x = move_toward(velocity.x, 0.0, step);
            velocity.z = move_toward(velocity.z, 0.0, step);
        }

        velocity
    }
}

/// Move `from` toward `to` by at most `delta`, without overshooting.
fn move_toward(from: f32, to: f32, delta: f32) -> f32 {
    if (to - from).abs() <= delta {
        to
    } else {
        from + (to - from).signum() * delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const EPSILON: f32 = 0.0001;

    fn integrator() -> MotionIntegrator {
        MotionIntegrator::from_config(&ControllerConfig::default())
    }

    fn forward_input() -> TickInput {
        TickInput {
            movement: Vec2::new(0.0, -1.0),
            ..TickInput::default()
        }
    }

    fn horizontal(v: Vec3) -> f32 {
        Vec3::new(v.x, 0.0, v.z).length()
    }

    #[test]
    fn test_gravity_accumulates_while_airborne() {
        let m = integrator();
        let v = m.integrate(Vec3::ZERO, false, &TickInput::new(), false, 0.0, 0.1);
        // -9.8 * 0.1 = -0.98
        assert!((v.y - (-0.98)).abs() < EPSILON);
    }

    #[test]
    fn test_gravity_is_exact_for_any_dt() {
        let m = integrator();
        for dt in [0.001, 0.016, 0.05, 0.25, 1.0] {
            let before = Vec3::new(0.0, 3.0, 0.0);
            let after = m.integrate(before, false, &TickInput::new(), false, 0.0, dt);
            assert!((after.y - (before.y + GRAVITY_TEST * dt)).abs() < EPSILON);
        }
    }

    const GRAVITY_TEST: f32 = -9.8;

    #[test]
    fn test_jump_overrides_previous_vertical_velocity() {
        let m = integrator();
        let input = TickInput {
            jump_pressed: true,
            ..TickInput::default()
        };
        let v = m.integrate(Vec3::new(0.0, -7.0, 0.0), true, &input, false, 0.0, 0.016);
        assert!((v.y - 4.5).abs() < EPSILON);
    }

    #[test]
    fn test_crouch_suppresses_jump() {
        let m = integrator();
        let input = TickInput {
            jump_pressed: true,
            ..TickInput::default()
        };
        let v = m.integrate(Vec3::new(0.0, -0.25, 0.0), true, &input, true, 0.0, 0.016);
        // Grounded: no gravity either, so velocity.y is untouched
        assert!((v.y - (-0.25)).abs() < EPSILON);
    }

    #[test]
    fn test_no_gravity_while_grounded() {
        let m = integrator();
        let v = m.integrate(Vec3::ZERO, true, &TickInput::new(), false, 0.0, 0.1);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn test_walk_scenario_exact_speed() {
        // Grounded, zero velocity, forward input, dt 0.1, walk 5.0
        let m = integrator();
        let v = m.integrate(Vec3::ZERO, true, &forward_input(), false, 0.0, 0.1);
        assert!((horizontal(v) - 5.0).abs() < EPSILON);
        // Yaw 0 faces -Z
        assert!(v.z < 0.0);
        assert!(v.x.abs() < EPSILON);
    }

    #[test]
    fn test_run_speed_exact_and_dt_independent() {
        let m = integrator();
        let input = TickInput {
            movement: Vec2::new(0.0, -1.0),
            run: true,
            ..TickInput::default()
        };
        for dt in [0.004, 0.016, 0.1] {
            let v = m.integrate(Vec3::ZERO, true, &input, false, 0.0, dt);
            assert!((horizontal(v) - 10.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_crouch_caps_speed_at_walk() {
        let m = integrator();
        let input = TickInput {
            movement: Vec2::new(0.0, -1.0),
            run: true,
            ..TickInput::default()
        };
        let v = m.integrate(Vec3::ZERO, true, &input, true, 0.0, 0.016);
        assert!((horizontal(v) - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_movement_follows_yaw() {
        let m = integrator();
        // Yaw 90 degrees: forward input should head toward -X
        let v = m.integrate(Vec3::ZERO, true, &forward_input(), false, 90.0, 0.016);
        assert!(v.x < -4.9);
        assert!(v.z.abs() < 0.001);
    }

    #[test]
    fn test_deceleration_bounded_per_tick() {
        let m = integrator();
        let before = Vec3::new(5.0, 0.0, -3.0);
        let after = m.integrate(before, true, &TickInput::new(), false, 0.0, 0.1);
        // Each component moves at most walk_speed * dt = 0.5
        assert!((after.x - 4.5).abs() < EPSILON);
        assert!((after.z - (-2.5)).abs() < EPSILON);
    }

    #[test]
    fn test_deceleration_never_overshoots_zero() {
        let m = integrator();
        let mut v = Vec3::new(0.3, 0.0, -0.2);
        v = m.integrate(v, true, &TickInput::new(), false, 0.0, 0.1);
        assert_eq!(v.x, 0.0);
        assert_eq!(v.z, 0.0);

        // And stays at zero on subsequent ticks
        v = m.integrate(v, true, &TickInput::new(), false, 0.0, 0.1);
        assert_eq!(v.x, 0.0);
        assert_eq!(v.z, 0.0);
    }

    #[test]
    fn test_zero_input_is_not_normalized() {
        let m = integrator();
        // A zero movement vector must decelerate, not divide by zero
        let v = m.integrate(Vec3::new(1.0, 0.0, 1.0), true, &TickInput::new(), false, 0.0, 0.016);
        assert!(v.x.is_finite());
        assert!(v.z.is_finite());
        assert!(v.x < 1.0);
    }

    #[test]
    fn test_diagonal_input_same_speed() {
        let m = integrator();
        let input = TickInput {
            movement: Vec2::new(1.0, -1.0).normalize(),
            ..TickInput::default()
        };
        let v = m.integrate(Vec3::ZERO, true, &input, false, 0.0, 0.016);
        assert!((horizontal(v) - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_move_toward_helper() {
        assert_eq!(move_toward(5.0, 0.0, 1.0), 4.0);
        assert_eq!(move_toward(-5.0, 0.0, 1.0), -4.0);
        assert_eq!(move_toward(0.5, 0.0, 1.0), 0.0);
        assert_eq!(move_toward(0.0, 0.0, 1.0), 0.0);
    }
}
