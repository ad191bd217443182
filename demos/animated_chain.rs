//! Headless per-frame driver: sweeps a target around a 4-segment chain and a
//! two-link arm, solving once per "frame" the way a render loop would.
//!
//! Run with `RUST_LOG=debug cargo run --example animated_chain` to see the
//! solver's unreachable-branch logging.

use glam::Vec2;
use planar_ik::{joint_positions, solve_angles, Chain, FabrikSolver, SolverConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut chain = Chain::builder()
        .base(Vec2::ZERO)
        .segment(1.0)
        .segment(1.0)
        .segment(1.0)
        .segment(1.0)
        .build()
        .expect("valid chain");

    let config = SolverConfig::default();
    let frames = 60;

    println!("FABRIK: 4 unit segments, target circling at radius 3.0");
    println!("(reach is 4.0 near the axes, the target dips out of reach off-axis)");

    for frame in 0..frames {
        let t = frame as f32 / frames as f32 * std::f32::consts::TAU;
        // Ellipse that crosses the reach boundary.
        let target = Vec2::new(4.5 * t.cos(), 3.0 * t.sin());

        let result = FabrikSolver::solve(&mut chain, target, &config).expect("valid inputs");
        let end = chain.end_effector();

        if frame % 10 == 0 {
            println!(
                "frame {frame:2}: target ({:6.2}, {:6.2}) end ({:6.2}, {:6.2}) \
                 residual {:.4} converged {}",
                target.x, target.y, end.x, end.y, result.final_distance, result.converged
            );
        }
    }

    println!();
    println!("Two-link arm: l1 = 1.5, l2 = 1.0, base at (1, 1)");

    let base = Vec2::new(1.0, 1.0);
    let (l1, l2) = (1.5, 1.0);

    for frame in 0..frames {
        let t = frame as f32 / frames as f32 * std::f32::consts::TAU;
        let target = Vec2::new(1.0 + 2.0 * t.cos(), 1.0 + 2.0 * t.sin());

        // The analytic solver works in base-relative coordinates.
        let (theta0, theta1) = solve_angles(target - base, l1, l2).expect("non-zero target");
        let (elbow, end) = joint_positions(base, theta0, theta1, l1, l2);

        if frame % 10 == 0 {
            println!(
                "frame {frame:2}: target ({:6.2}, {:6.2}) elbow ({:6.2}, {:6.2}) \
                 end ({:6.2}, {:6.2})",
                target.x, target.y, elbow.x, elbow.y, end.x, end.y
            );
        }
    }
}
