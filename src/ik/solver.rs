use glam::Vec2;
use log::{debug, trace};

use super::chain::{validate_lengths, Chain};
use crate::error::IkError;

/// Configuration for the FABRIK convergence loop.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Maximum end-effector-to-target distance for declaring convergence.
    pub tolerance: f32,
    /// Iteration budget; the solver returns its best effort when exhausted.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.001,
            max_iterations: 10,
        }
    }
}

/// Result of a FABRIK solve.
#[derive(Debug, Clone, Copy)]
pub struct SolveResult {
    /// Whether the end-effector ended within tolerance of the target.
    pub converged: bool,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final end-effector-to-target distance.
    pub final_distance: f32,
}

/// Iterative FABRIK solver for chains with any number of segments.
///
/// Mutates the caller's [`Chain`] in place and holds no state between calls;
/// the chain's current positions double as the next call's warm start.
pub struct FabrikSolver;

impl FabrikSolver {
    /// Solve toward `target`, anchored at the chain's current base.
    pub fn solve(
        chain: &mut Chain,
        target: Vec2,
        config: &SolverConfig,
    ) -> Result<SolveResult, IkError> {
        let base = chain.base();
        Self::solve_anchored(chain, target, base, config)
    }

    /// Solve toward `target` with an explicit anchor for the base joint.
    pub fn solve_anchored(
        chain: &mut Chain,
        target: Vec2,
        base: Vec2,
        config: &SolverConfig,
    ) -> Result<SolveResult, IkError> {
        validate_lengths(&chain.lengths)?;

        chain.positions[0] = base;

        let total_length = chain.total_length();
        let distance_to_target = (target - base).length();

        if distance_to_target > total_length {
            debug!(
                "target out of reach: distance {distance_to_target} > total length {total_length}"
            );
            Self::stretch_towards_target(chain, target);
            return Ok(SolveResult {
                converged: false,
                iterations: 1,
                final_distance: distance_to_target - total_length,
            });
        }

        for iteration in 0..config.max_iterations {
            Self::reach_target(chain, target);
            Self::reach_base(chain, base);

            let distance = (chain.end_effector() - target).length();
            trace!("iteration {iteration}: residual {distance}");

            if distance <= config.tolerance {
                return Ok(SolveResult {
                    converged: true,
                    iterations: iteration + 1,
                    final_distance: distance,
                });
            }
        }

        // Budget exhausted; return the best effort and let the caller judge
        // the residual.
        let final_distance = (chain.end_effector() - target).length();
        Ok(SolveResult {
            converged: final_distance <= config.tolerance,
            iterations: config.max_iterations,
            final_distance,
        })
    }

    /// Backward-from-target pass ("forward reaching"): pin the end-effector to
    /// the target, then re-place each earlier joint at its segment length from
    /// the joint after it.
    fn reach_target(chain: &mut Chain, target: Vec2) {
        let n = chain.positions.len();

        chain.positions[n - 1] = target;

        for i in (0..n - 1).rev() {
            let next = chain.positions[i + 1];
            let curr = chain.positions[i];

            let r = (next - curr).length();
            if r == 0.0 {
                // Joints coincide, direction undefined; leave this one be.
                continue;
            }

            let lambda = chain.lengths[i] / r;
            chain.positions[i] = (1.0 - lambda) * next + lambda * curr;
        }
    }

    /// Forward-from-base pass: pin the base back to its anchor, then re-place
    /// each later joint at its segment length from the joint before it.
    fn reach_base(chain: &mut Chain, base: Vec2) {
        let n = chain.positions.len();

        chain.positions[0] = base;

        for i in 0..n - 1 {
            let prev = chain.positions[i];
            let curr = chain.positions[i + 1];

            let r = (curr - prev).length();
            if r == 0.0 {
                continue;
            }

            let lambda = chain.lengths[i] / r;
            chain.positions[i + 1] = (1.0 - lambda) * prev + lambda * curr;
        }
    }

    /// Out-of-reach fallback: one deterministic pass placing every joint on
    /// the straight line from base toward the target, each exactly one
    /// segment length beyond the previous.
    fn stretch_towards_target(chain: &mut Chain, target: Vec2) {
        for i in 1..chain.positions.len() {
            let prev = chain.positions[i - 1];

            let r = (target - prev).length();
            if r == 0.0 {
                // Target sits on a joint; keep the previous position rather
                // than divide by zero.
                continue;
            }

            let lambda = chain.lengths[i - 1] / r;
            chain.positions[i] = (1.0 - lambda) * prev + lambda * target;
        }
    }
}
