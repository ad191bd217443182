//! # planar-ik
//!
//! A planar (2-D) inverse kinematics library with two independent solvers.
//!
//! ## Features
//! - FABRIK (Forward And Backward Reaching Inverse Kinematics) solver for
//!   chains with any number of segments, with an explicit out-of-reach
//!   fallback
//! - Closed-form trigonometric solver for two-segment arms
//! - Typed errors for invalid and degenerate inputs; no panics on
//!   coincident points
//!
//! ## Example
//! ```rust
//! use planar_ik::{Chain, FabrikSolver, SolverConfig};
//! use glam::Vec2;
//!
//! // Four unit segments anchored at the origin.
//! let mut chain = Chain::new(Vec2::ZERO, &[1.0, 1.0, 1.0, 1.0]).unwrap();
//!
//! // Solve for a reachable target.
//! let target = Vec2::new(2.0, 0.0);
//! let result = FabrikSolver::solve(&mut chain, target, &SolverConfig::default()).unwrap();
//! assert!(result.converged);
//! ```
//!
//! The host's render/input loop calls a solver once per frame with the live
//! target and reads the joint positions back; the chain's positions carry
//! over as the next frame's warm start. The two-link solver returns a pair of
//! **absolute** headings from +x (the second value is not elbow-relative);
//! see [`ik::two_link::solve_angles`].

pub mod error;
pub mod ik;
pub mod math;

pub use error::{DegenerateInput, IkError, InvalidInput};
pub use ik::two_link::{joint_positions, solve_angles};
pub use ik::{Chain, ChainBuilder, FabrikSolver, SolveResult, SolverConfig};
pub use math::{clamp_cos, distance, polar_offset};
