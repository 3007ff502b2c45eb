//! Weapon Attachment
//!
//! Derives a held weapon's world pose from the camera transform each tick.
//! Fully stateless: no smoothing, no history - the pose snaps to wherever
//! the camera currently points. A controller without a configured weapon
//! simply skips this step.

use glam::{Mat3, Quat, Vec3};

use crate::camera::CameraBasis;

/// Offset along the camera's back axis; negative puts the weapon in front.
const BACK_OFFSET: f32 = -0.5;

/// Offset along the camera's up axis.
const UP_OFFSET: f32 = 0.3;

/// Distance along the camera's back axis to the aim target.
const AIM_DISTANCE: f32 = 10.0;

/// World-space pose of the attached weapon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponPose {
    /// Weapon position in world space.
    pub position: Vec3,
    /// Weapon orientation; the weapon's -Z axis points at the aim target.
    pub orientation: Quat,
}

/// Derives the weapon pose from the camera each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponAttachment {
    /// Fixed extra offset applied on top of the derived position.
    local_offset: Vec3,
}

impl WeaponAttachment {
    /// Create an attachment with the given fixed local offset.
    pub fn new(local_offset: Vec3) -> Self {
        Self { local_offset }
    }

    /// Get the fixed local offset.
    pub fn local_offset(&self) -> Vec3 {
        self.local_offset
    }

    /// Derive the weapon pose from the camera's current transform.
    pub fn pose(&self, camera_position: Vec3, basis: &CameraBasis) -> WeaponPose {
        let position =
            camera_position + basis.back * BACK_OFFSET + basis.up * UP_OFFSET + self.local_offset;
        let target = camera_position + basis.back * AIM_DISTANCE;

        WeaponPose {
            position,
            orientation: look_at_orientation(position, target),
        }
    }
}

/// Orientation whose -Z axis points from `position` toward `target`,
/// with world Y as the up reference.
fn look_at_orientation(position: Vec3, target: Vec3) -> Quat {
    let to_target = target - position;
    if to_target.length_squared() < 1e-6 {
        return Quat::IDENTITY;
    }

    let back = -to_target.normalize();
    let right = Vec3::Y.cross(back);
    // Degenerate when aiming straight along world Y
    let right = if right.length_squared() < 1e-6 {
        Vec3::X
    } else {
        right.normalize()
    };
    let up = back.cross(right);

    Quat::from_mat3(&Mat3::from_cols(right, up, back))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    #[test]
    fn test_position_at_identity_basis() {
        let attachment = WeaponAttachment::new(Vec3::ZERO);
        let basis = CameraBasis::from_angles(0.0, 0.0);
        let camera = Vec3::new(1.0, 2.0, 3.0);

        let pose = attachment.pose(camera, &basis);

        // back = +Z, up = +Y: half a meter in front, 0.3 up
        let expected = camera + Vec3::new(0.0, 0.3, -0.5);
        assert!((pose.position - expected).length() < EPSILON);
    }

    #[test]
    fn test_local_offset_is_added() {
        let offset = Vec3::new(0.2, -0.1, 0.05);
        let attachment = WeaponAttachment::new(offset);
        let basis = CameraBasis::from_angles(0.0, 0.0);

        let with_offset = attachment.pose(Vec3::ZERO, &basis);
        let without = WeaponAttachment::new(Vec3::ZERO).pose(Vec3::ZERO, &basis);
        assert!((with_offset.position - without.position - offset).length() < EPSILON);
    }

    #[test]
    fn test_orientation_aims_at_target() {
        let attachment = WeaponAttachment::new(Vec3::ZERO);
        let basis = CameraBasis::from_angles(30.0, -15.0);
        let camera = Vec3::new(5.0, 1.0, -2.0);

        let pose = attachment.pose(camera, &basis);
        let target = camera + basis.back * 10.0;

        let aim = pose.orientation * -Vec3::Z;
        let expected = (target - pose.position).normalize();
        assert!(aim.dot(expected) > 1.0 - EPSILON);
    }

    #[test]
    fn test_orientation_is_normalized() {
        let attachment = WeaponAttachment::new(Vec3::ZERO);
        let basis = CameraBasis::from_angles(200.0, 45.0);
        let pose = attachment.pose(Vec3::ZERO, &basis);
        assert!((pose.orientation.length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_pose_follows_camera_with_no_lag() {
        let attachment = WeaponAttachment::new(Vec3::ZERO);
        let a = attachment.pose(Vec3::ZERO, &CameraBasis::from_angles(0.0, 0.0));
        let b = attachment.pose(Vec3::ZERO, &CameraBasis::from_angles(90.0, 0.0));

        // Stateless derivation: same inputs, same pose; new inputs, new pose
        let a2 = attachment.pose(Vec3::ZERO, &CameraBasis::from_angles(0.0, 0.0));
        assert_eq!(a, a2);
        assert!((a.position - b.position).length() > 0.1);
    }

    #[test]
    fn test_look_at_straight_down_is_stable() {
        let q = look_at_orientation(Vec3::ZERO, Vec3::new(0.0, -10.0, 0.0));
        let aim = q * -Vec3::Z;
        assert!((aim - Vec3::new(0.0, -1.0, 0.0)).length() < EPSILON);
    }

    #[test]
    fn test_look_at_zero_distance_is_identity() {
        assert_eq!(look_at_orientation(Vec3::ONE, Vec3::ONE), Quat::IDENTITY);
    }
}
