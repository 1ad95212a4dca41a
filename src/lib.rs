//! # chancap
//!
//! Capacity of a discrete memoryless channel via the Blahut-Arimoto
//! algorithm.
//!
//! Given a channel transition matrix p(y|x), the capacity is the maximum
//! mutual information over all input distributions r(x):
//!
//! ```text
//! C = max_{r(x)} I(X;Y)
//!   = max_{r(x)} Σ_x Σ_y r(x) p(y|x) log( p(y|x) / Σ_x' r(x') p(y|x') )
//! ```
//!
//! Blahut-Arimoto finds it by alternating two closed-form updates until the
//! prior stops moving:
//!
//! | Step | Update |
//! |------|--------|
//! | Posterior | q(x\|y) ∝ r(x) p(y\|x), normalized over x |
//! | Prior | r(x) ∝ exp( Σ_y p(y\|x) log q(x\|y) ) |
//!
//! Each step can only increase I(X;Y), and the iteration converges to the
//! capacity-achieving input distribution.
//!
//! ## Quick Start
//!
//! ```rust
//! use chancap::{channel_capacity, channels};
//!
//! // Binary symmetric channel with 20% crossover.
//! let p = channels::binary_symmetric(0.2).unwrap();
//! let result = channel_capacity(&p, 2, 2).unwrap();
//!
//! // C = 1 - H_b(0.2) ≈ 0.278 bits, achieved by the uniform prior.
//! assert!((result.capacity - 0.27807).abs() < 1e-4);
//! assert!((result.input_distribution[0] - 0.5).abs() < 1e-6);
//! assert!(result.converged);
//! ```
//!
//! ## Matrix Convention
//!
//! Channel matrices are flattened row-major slices: row i holds the output
//! distribution p(y|x=i), so the entry for input i and output j lives at
//! `p[i * outputs + j]`. Every row must sum to 1.
//!
//! ## References
//!
//! - Blahut (1972). "Computation of channel capacity and rate-distortion
//!   functions"
//! - Arimoto (1972). "An algorithm for computing the capacity of arbitrary
//!   discrete memoryless channels"
//! - Cover & Thomas (2006). "Elements of Information Theory"
//!
//! ## What Can Go Wrong
//!
//! 1. **Rows that don't sum to 1**: matrices whose mean row-sum deviation
//!    exceeds 1e-6 are rejected before any iteration. Normalize rows first.
//! 2. **Non-convergence**: a near-degenerate channel may not reach the
//!    update threshold within `max_iterations`. The solver still returns
//!    its best estimate; check [`CapacityResult::converged`] before
//!    trusting tight tolerances.
//! 3. **Unreachable outputs**: a column of all zeros (an output symbol no
//!    input ever produces) is tolerated and simply carries no weight.

use thiserror::Error;

pub mod capacity;
pub mod channels;

pub use capacity::{
    channel_capacity, mutual_information_for_prior, BlahutArimoto, CapacityResult,
};

/// Error types for channel capacity computations.
#[derive(Debug, Error)]
pub enum Error {
    /// Matrix length disagrees with the stated dimensions.
    #[error("matrix of length {len} does not match {inputs} x {outputs}")]
    ShapeMismatch {
        len: usize,
        inputs: usize,
        outputs: usize,
    },

    /// Capacity maximization needs at least two input symbols.
    #[error("channel has {0} input symbol(s), need at least 2")]
    TooFewInputs(usize),

    /// The rows of the transition matrix do not sum to 1.
    #[error("matrix is not row-stochastic (mean row-sum deviation = {0})")]
    NotRowStochastic(f64),

    /// A transition probability is negative or non-finite.
    #[error("invalid probability: {0}")]
    NegativeProbability(f64),

    /// Two arrays were expected to have matching lengths.
    #[error("distribution has length {0}, expected {1}")]
    LengthMismatch(usize, usize),

    /// A distribution does not sum to 1.
    #[error("distribution does not sum to 1.0 (sum = {0})")]
    NotNormalized(f64),

    /// A solver parameter is outside its documented domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
