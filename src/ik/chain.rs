use glam::Vec2;

use crate::error::{IkError, InvalidInput};

/// A planar kinematic chain: N+1 joint positions and N segment lengths.
///
/// `positions[0]` is the base, `positions[N]` the end-effector. Once settled
/// by a solve, `‖positions[i+1] − positions[i]‖ == lengths[i]` within the
/// solver tolerance. The chain is a passive data holder; all movement comes
/// from the solvers, which mutate it in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    pub(crate) positions: Vec<Vec2>,
    pub(crate) lengths: Vec<f32>,
}

impl Chain {
    /// Create a chain from a base position and segment lengths.
    ///
    /// Joints are laid end-to-end along +x starting at `base`.
    pub fn new(base: Vec2, lengths: &[f32]) -> Result<Self, IkError> {
        validate_lengths(lengths)?;

        let mut positions = Vec::with_capacity(lengths.len() + 1);
        positions.push(base);

        let mut reach = 0.0;
        for &length in lengths {
            reach += length;
            positions.push(base + Vec2::new(reach, 0.0));
        }

        Ok(Self {
            positions,
            lengths: lengths.to_vec(),
        })
    }

    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    pub fn positions_mut(&mut self) -> &mut [Vec2] {
        &mut self.positions
    }

    pub fn lengths(&self) -> &[f32] {
        &self.lengths
    }

    /// Segment lengths, writable.
    ///
    /// A host may change lengths between solves (e.g. from a live control).
    /// No re-validation happens here; the next solve re-checks them.
    pub fn lengths_mut(&mut self) -> &mut [f32] {
        &mut self.lengths
    }

    pub fn total_length(&self) -> f32 {
        self.lengths.iter().sum()
    }

    pub fn segment_count(&self) -> usize {
        self.lengths.len()
    }

    pub fn joint_count(&self) -> usize {
        self.positions.len()
    }

    pub fn base(&self) -> Vec2 {
        self.positions[0]
    }

    pub fn end_effector(&self) -> Vec2 {
        self.positions[self.positions.len() - 1]
    }
}

/// Checks the chain invariants that hold at rest: non-empty, all lengths > 0.
pub(crate) fn validate_lengths(lengths: &[f32]) -> Result<(), IkError> {
    if lengths.is_empty() {
        return Err(InvalidInput::EmptyChain.into());
    }

    for (index, &length) in lengths.iter().enumerate() {
        if length <= 0.0 {
            return Err(InvalidInput::NonPositiveLength { index, length }.into());
        }
    }

    Ok(())
}

pub struct ChainBuilder {
    base: Vec2,
    lengths: Vec<f32>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self {
            base: Vec2::ZERO,
            lengths: Vec::new(),
        }
    }

    pub fn base(mut self, base: Vec2) -> Self {
        self.base = base;
        self
    }

    pub fn segment(mut self, length: f32) -> Self {
        self.lengths.push(length);
        self
    }

    pub fn build(self) -> Result<Chain, IkError> {
        Chain::new(self.base, &self.lengths)
    }
}

impl Default for ChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidInput;
    use approx::assert_relative_eq;

    #[test]
    fn lays_joints_along_x() {
        let chain = Chain::new(Vec2::new(1.0, 2.0), &[1.0, 0.5, 2.0]).unwrap();

        assert_eq!(chain.joint_count(), 4);
        assert_eq!(chain.segment_count(), 3);
        assert_eq!(chain.base(), Vec2::new(1.0, 2.0));
        assert_eq!(chain.positions()[1], Vec2::new(2.0, 2.0));
        assert_eq!(chain.positions()[2], Vec2::new(2.5, 2.0));
        assert_eq!(chain.end_effector(), Vec2::new(4.5, 2.0));
        assert_relative_eq!(chain.total_length(), 3.5);
    }

    #[test]
    fn rejects_empty_chain() {
        let err = Chain::new(Vec2::ZERO, &[]).unwrap_err();
        assert_eq!(err, InvalidInput::EmptyChain.into());
    }

    #[test]
    fn rejects_non_positive_length() {
        let err = Chain::new(Vec2::ZERO, &[1.0, 0.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            InvalidInput::NonPositiveLength {
                index: 1,
                length: 0.0
            }
            .into()
        );

        let err = Chain::new(Vec2::ZERO, &[-2.0]).unwrap_err();
        assert!(matches!(
            err,
            IkError::InvalidInput(InvalidInput::NonPositiveLength { index: 0, .. })
        ));
    }

    #[test]
    fn builder_matches_direct_construction() {
        let built = Chain::builder()
            .base(Vec2::new(0.0, 1.0))
            .segment(1.0)
            .segment(2.0)
            .build()
            .unwrap();
        let direct = Chain::new(Vec2::new(0.0, 1.0), &[1.0, 2.0]).unwrap();
        assert_eq!(built, direct);
    }

    #[test]
    fn builder_without_segments_fails() {
        let err = Chain::builder().build().unwrap_err();
        assert_eq!(err, InvalidInput::EmptyChain.into());
    }

    #[test]
    fn lengths_are_mutable_without_revalidation() {
        let mut chain = Chain::new(Vec2::ZERO, &[1.0, 1.0]).unwrap();
        chain.lengths_mut()[0] = 3.0;
        assert_relative_eq!(chain.total_length(), 4.0);
    }
}
