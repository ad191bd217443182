//! Math utilities module
//!
//! Shared geometry helpers used by both solvers: pure, total functions.

use glam::Vec2;

/// Euclidean distance between two points.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Clamp a cosine value into the valid `acos` domain.
///
/// Absorbs floating-point overshoot at the reach boundary, where the law of
/// cosines can produce values like `1.0000001`.
pub fn clamp_cos(v: f32) -> f32 {
    v.clamp(-1.0, 1.0)
}

/// Point at `length` from `origin` along the heading `angle` (radians from +x).
pub fn polar_offset(origin: Vec2, angle: f32, length: f32) -> Vec2 {
    origin + length * Vec2::new(angle.cos(), angle.sin())
}
