//! Closed-form solver for a two-segment arm.
//!
//! Unlike the iterative [`FabrikSolver`](super::FabrikSolver), this solver is
//! specialized to exactly two segments and produces joint angles directly
//! from the law of cosines, with no convergence loop.

use glam::Vec2;
use log::debug;

use crate::error::{DegenerateInput, IkError, InvalidInput};
use crate::math::{clamp_cos, polar_offset};

/// Compute the two joint headings reaching from the origin toward `target`.
///
/// `target` is base-relative: callers with a non-origin base translate the
/// target into base coordinates first. Targets outside the reachable annulus
/// are clamped to its nearest boundary (`l1 + l2` outside, `|l1 - l2|`
/// inside), so the function is total for any non-zero target.
///
/// Both returned angles are absolute headings from +x, in radians. The second
/// value is `theta0 + elbow_angle`, NOT the elbow angle relative to the first
/// segment; feed it straight into [`joint_positions`] or
/// [`polar_offset`](crate::math::polar_offset).
pub fn solve_angles(target: Vec2, l1: f32, l2: f32) -> Result<(f32, f32), IkError> {
    for (index, length) in [l1, l2].into_iter().enumerate() {
        if length <= 0.0 {
            return Err(InvalidInput::NonPositiveLength { index, length }.into());
        }
    }

    let distance = target.length();
    if distance == 0.0 {
        // No heading exists at the base point, even when l1 == l2 makes the
        // origin technically reachable.
        return Err(DegenerateInput::ZeroDistance.into());
    }

    let max_reach = l1 + l2;
    let min_reach = (l1 - l2).abs();

    let target = if distance > max_reach {
        debug!("target beyond full extension: clamping {distance} to {max_reach}");
        target * (max_reach / distance)
    } else if distance < min_reach {
        debug!("target inside minimum-reach annulus: clamping {distance} to {min_reach}");
        target * (min_reach / distance)
    } else {
        target
    };

    let Vec2 { x, y } = target;
    let reach_sq = x * x + y * y;

    // Elbow interior angle via the law of cosines.
    let cos_elbow = clamp_cos((reach_sq - l1 * l1 - l2 * l2) / (2.0 * l1 * l2));
    let elbow = cos_elbow.acos();

    // Shoulder heading: bearing to the target minus the triangle's interior
    // angle at the shoulder.
    let beta = y.atan2(x);
    let cos_alpha = clamp_cos((reach_sq + l1 * l1 - l2 * l2) / (2.0 * l1 * reach_sq.sqrt()));
    let theta0 = beta - cos_alpha.acos();

    Ok((theta0, theta0 + elbow))
}

/// Derive the elbow and end-effector positions from the solved headings.
pub fn joint_positions(base: Vec2, theta0: f32, theta1: f32, l1: f32, l2: f32) -> (Vec2, Vec2) {
    let elbow = polar_offset(base, theta0, l1);
    let end = polar_offset(elbow, theta1, l2);
    (elbow, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn end_effector(target: Vec2, l1: f32, l2: f32) -> Vec2 {
        let (theta0, theta1) = solve_angles(target, l1, l2).unwrap();
        joint_positions(Vec2::ZERO, theta0, theta1, l1, l2).1
    }

    #[test]
    fn reachable_target_is_reproduced() {
        let targets = [
            Vec2::new(1.2, 0.7),
            Vec2::new(-0.5, 1.3),
            Vec2::new(0.4, -1.1),
            Vec2::new(-1.0, -0.8),
        ];

        for target in targets {
            let end = end_effector(target, 1.0, 1.0);
            assert_relative_eq!(end.x, target.x, epsilon = 1e-4);
            assert_relative_eq!(end.y, target.y, epsilon = 1e-4);
        }
    }

    #[test]
    fn unequal_links_reproduce_target() {
        let target = Vec2::new(1.5, 0.5);
        let end = end_effector(target, 2.0, 0.5);
        assert_relative_eq!(end.x, target.x, epsilon = 1e-4);
        assert_relative_eq!(end.y, target.y, epsilon = 1e-4);
    }

    #[test]
    fn beyond_reach_clamps_to_full_extension() {
        // Max reach 2; target at distance 3 lands at (2, 0).
        let end = end_effector(Vec2::new(3.0, 0.0), 1.0, 1.0);
        assert_relative_eq!(end.x, 2.0, epsilon = 1e-4);
        assert_relative_eq!(end.y, 0.0, epsilon = 1e-4);

        // Off-axis: clamped end lies on the ray at norm l1 + l2.
        let end = end_effector(Vec2::new(3.0, 4.0), 1.0, 1.0);
        assert_relative_eq!(end.length(), 2.0, epsilon = 1e-4);
        assert_relative_eq!(end.y / end.x, 4.0 / 3.0, epsilon = 1e-3);
    }

    #[test]
    fn inside_annulus_clamps_to_minimum_reach() {
        // Min reach |2 - 0.5| = 1.5; target at distance 0.1 lands at norm 1.5.
        let end = end_effector(Vec2::new(0.0, 0.1), 2.0, 0.5);
        assert_relative_eq!(end.length(), 1.5, epsilon = 1e-4);
        assert_relative_eq!(end.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(end.y, 1.5, epsilon = 1e-4);
    }

    #[test]
    fn boundary_exact_reach_is_total() {
        // Exactly at full extension; cos clamping absorbs any overshoot.
        let end = end_effector(Vec2::new(2.0, 0.0), 1.0, 1.0);
        assert_relative_eq!(end.x, 2.0, epsilon = 1e-4);
        assert_relative_eq!(end.y, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn target_at_base_is_degenerate() {
        let err = solve_angles(Vec2::ZERO, 1.0, 1.0).unwrap_err();
        assert_eq!(err, DegenerateInput::ZeroDistance.into());
    }

    #[test]
    fn non_positive_link_is_invalid() {
        let err = solve_angles(Vec2::new(1.0, 0.0), 0.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            InvalidInput::NonPositiveLength {
                index: 0,
                length: 0.0
            }
            .into()
        );

        let err = solve_angles(Vec2::new(1.0, 0.0), 1.0, -1.0).unwrap_err();
        assert_eq!(
            err,
            InvalidInput::NonPositiveLength {
                index: 1,
                length: -1.0
            }
            .into()
        );
    }

    #[test]
    fn second_angle_is_absolute_heading() {
        // Straight out along +x: both headings are zero, not theta1 == pi.
        let (theta0, theta1) = solve_angles(Vec2::new(2.0, 0.0), 1.0, 1.0).unwrap();
        assert_relative_eq!(theta0, 0.0, epsilon = 1e-4);
        assert_relative_eq!(theta1, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn joint_positions_translate_with_base() {
        let base = Vec2::new(3.0, -2.0);
        let target = Vec2::new(1.0, 1.0);
        let (theta0, theta1) = solve_angles(target, 1.0, 1.0).unwrap();
        let (elbow, end) = joint_positions(base, theta0, theta1, 1.0, 1.0);

        assert_relative_eq!((elbow - base).length(), 1.0, epsilon = 1e-5);
        assert_relative_eq!((end - elbow).length(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(end.x, base.x + target.x, epsilon = 1e-4);
        assert_relative_eq!(end.y, base.y + target.y, epsilon = 1e-4);
    }
}
