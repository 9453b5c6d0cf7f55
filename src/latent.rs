//! Latent-space arm coordinates and the proximity reward.
//!
//! Each arm is a fixed point in a 2D latent space. The ground-truth quality
//! of an arm is a deterministic function of its distance from the origin (the
//! "ideal" point): closer points reward higher. The engine never observes
//! this function directly; it only sees the binary outcomes it induces.

use rand::rngs::StdRng;
use rand_distr::{Distribution, StandardNormal};

/// A fixed point in the 2D latent space.
///
/// Immutable after creation; the coordinate is an arm's identity for the
/// lifetime of the engine that owns it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatentPoint {
    /// First latent coordinate.
    pub z1: f64,
    /// Second latent coordinate.
    pub z2: f64,
}

impl LatentPoint {
    /// The origin: the ideal point with maximal reward.
    pub const ORIGIN: LatentPoint = LatentPoint { z1: 0.0, z2: 0.0 };

    /// Create a point from explicit coordinates.
    pub fn new(z1: f64, z2: f64) -> Self {
        Self { z1, z2 }
    }

    /// Draw a point with both coordinates sampled independently from the
    /// standard normal distribution.
    pub fn sample_standard(rng: &mut StdRng) -> Self {
        let z1: f64 = StandardNormal.sample(rng);
        let z2: f64 = StandardNormal.sample(rng);
        Self { z1, z2 }
    }

    /// Euclidean norm (distance from the origin).
    pub fn norm(&self) -> f64 {
        self.z1.hypot(self.z2)
    }

    /// Ground-truth reward: `1 / (1 + norm)`.
    ///
    /// Always in `(0, 1]` for finite coordinates; equals 1 exactly at the
    /// origin and is strictly decreasing in distance from it.
    pub fn reward(&self) -> f64 {
        1.0 / (1.0 + self.norm())
    }
}
