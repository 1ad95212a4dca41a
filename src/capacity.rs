//! Blahut-Arimoto fixed-point iteration for channel capacity.
//!
//! The solver alternates between the Bayesian posterior under the current
//! input prior and the prior that is optimal against that posterior:
//!
//! ```text
//! q(x|y) = r(x) p(y|x) / Σ_x' r(x') p(y|x')
//! r(x)  ∝ exp( Σ_y p(y|x) ln q(x|y) )
//! ```
//!
//! Starting from the uniform prior, each double step can only increase
//! I(X;Y), and the prior converges to the capacity-achieving distribution
//! r*(x). Iteration stops when the Euclidean norm of the prior update
//! falls below [`BlahutArimoto::threshold`] or after
//! [`BlahutArimoto::max_iterations`] passes, whichever comes first.
//!
//! Hitting the iteration cap is not an error: the solver returns its
//! current estimate with [`CapacityResult::converged`] set to `false`,
//! along with the final update norm, so callers can decide whether the
//! estimate is trustworthy.

use std::f64::consts::LN_2;

use crate::{Error, Result};

/// Mean absolute row-sum deviation allowed before a matrix is rejected.
const ROW_SUM_TOL: f64 = 1e-6;

/// Additive smoothing inside the final capacity logarithm, guarding
/// against ln(0) when a posterior entry is numerically zero.
const CAPACITY_EPS: f64 = 1e-16;

/// Blahut-Arimoto solver parameters.
///
/// # Example
///
/// ```rust
/// use chancap::{channels, BlahutArimoto};
///
/// let p = channels::binary_erasure(0.1).unwrap();
/// let solver = BlahutArimoto { log_base: 2.0, ..Default::default() };
/// let result = solver.solve(&p, 2, 3).unwrap();
///
/// // BEC capacity is 1 - e.
/// assert!((result.capacity - 0.9).abs() < 1e-9);
/// ```
#[derive(Clone, Debug)]
pub struct BlahutArimoto {
    /// Base of the logarithm the capacity is reported in (2 = bits,
    /// e = nats). Must be > 1.
    pub log_base: f64,
    /// Stop once the Euclidean norm of the prior update drops below this.
    /// Must be positive.
    pub threshold: f64,
    /// Iteration cap guarding against non-convergence. Must be >= 1.
    pub max_iterations: usize,
}

impl Default for BlahutArimoto {
    fn default() -> Self {
        Self {
            log_base: 2.0,
            threshold: 1e-12,
            max_iterations: 1000,
        }
    }
}

/// Outcome of a capacity computation.
#[derive(Clone, Debug, PartialEq)]
pub struct CapacityResult {
    /// Estimated channel capacity in the requested log base. Non-negative.
    pub capacity: f64,
    /// The converged input prior r*(x): non-negative, sums to 1.
    pub input_distribution: Vec<f64>,
    /// Whether the update norm dropped below the threshold before the
    /// iteration cap.
    pub converged: bool,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Euclidean norm of the last prior update.
    pub residual: f64,
}

impl BlahutArimoto {
    /// Create a solver with the given report base, update threshold, and
    /// iteration cap.
    pub fn new(log_base: f64, threshold: f64, max_iterations: usize) -> Self {
        Self {
            log_base,
            threshold,
            max_iterations,
        }
    }

    /// Compute the capacity of the channel `p` with `inputs` rows and
    /// `outputs` columns (flattened row-major, each row a distribution
    /// p(y|x=i)).
    ///
    /// Fails before any iteration if the matrix is not row-stochastic,
    /// has fewer than two inputs, contains an invalid probability, or if
    /// a solver parameter is out of domain. Exhausting the iteration cap
    /// is *not* a failure; inspect [`CapacityResult::converged`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use chancap::BlahutArimoto;
    ///
    /// // Noiseless binary channel: capacity is exactly 1 bit.
    /// let p = [1.0, 0.0, 0.0, 1.0];
    /// let result = BlahutArimoto::default().solve(&p, 2, 2).unwrap();
    /// assert!((result.capacity - 1.0).abs() < 1e-12);
    /// ```
    pub fn solve(&self, p: &[f64], inputs: usize, outputs: usize) -> Result<CapacityResult> {
        validate_channel(p, inputs, outputs)?;
        if !(self.log_base > 1.0) {
            return Err(Error::InvalidParameter("log_base must be > 1"));
        }
        if !(self.threshold > 0.0) {
            return Err(Error::InvalidParameter("threshold must be positive"));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidParameter("max_iterations must be >= 1"));
        }

        let m = inputs;
        let n = outputs;

        let mut r = vec![1.0 / m as f64; m];
        let mut r_new = vec![0.0; m];
        let mut q = vec![0.0; m * n];

        let mut converged = false;
        let mut iterations = 0;
        let mut residual = f64::INFINITY;

        while iterations < self.max_iterations {
            iterations += 1;

            // Unnormalized posterior q[i][j] = r[i] p[i][j], then each
            // column scaled to sum to 1 over i. A zero column means no
            // input reaches output j under the current prior; it stays
            // zero rather than dividing by zero.
            for i in 0..m {
                for j in 0..n {
                    q[i * n + j] = r[i] * p[i * n + j];
                }
            }
            for j in 0..n {
                let s: f64 = (0..m).map(|i| q[i * n + j]).sum();
                if s > 0.0 {
                    for i in 0..m {
                        q[i * n + j] /= s;
                    }
                }
            }

            // r_new[i] ∝ Π_j q[i][j]^p[i][j], computed in log space so a
            // zero posterior entry with positive transition probability
            // drives the weight to exactly 0 instead of relying on powf.
            for (i, w) in r_new.iter_mut().enumerate() {
                let mut log_w = 0.0;
                for j in 0..n {
                    let pij = p[i * n + j];
                    if pij > 0.0 {
                        let qij = q[i * n + j];
                        if qij > 0.0 {
                            log_w += pij * qij.ln();
                        } else {
                            log_w = f64::NEG_INFINITY;
                            break;
                        }
                    }
                }
                *w = log_w;
            }
            let max_log = r_new.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let mut sum = 0.0;
            for w in r_new.iter_mut() {
                *w = if w.is_finite() { (*w - max_log).exp() } else { 0.0 };
                sum += *w;
            }
            if sum > 0.0 {
                for w in r_new.iter_mut() {
                    *w /= sum;
                }
            } else {
                r_new.copy_from_slice(&r);
            }

            residual = r_new
                .iter()
                .zip(r.iter())
                .map(|(a, b)| (a - b) * (a - b))
                .sum::<f64>()
                .sqrt();
            r.copy_from_slice(&r_new);

            if residual < self.threshold {
                converged = true;
                break;
            }
        }

        // Capacity from the final prior and the posterior of the last
        // completed iteration:
        //
        //   C = Σ_{i: r[i]>0} r[i] Σ_j p[i][j] ln( q[i][j]/r[i] + ε )
        //
        // converted to the requested base. Inputs with no probability
        // mass contribute zero by convention.
        let mut c = 0.0;
        for i in 0..m {
            if r[i] > 0.0 {
                let mut acc = 0.0;
                for j in 0..n {
                    acc += p[i * n + j] * (q[i * n + j] / r[i] + CAPACITY_EPS).ln();
                }
                c += r[i] * acc;
            }
        }
        // Roundoff can push a zero-capacity channel slightly negative.
        let capacity = (c / self.log_base.ln()).max(0.0);

        Ok(CapacityResult {
            capacity,
            input_distribution: r,
            converged,
            iterations,
            residual,
        })
    }
}

/// Capacity of a channel with the default solver (bits, threshold 1e-12,
/// at most 1000 iterations).
///
/// # Example
///
/// ```rust
/// use chancap::channel_capacity;
///
/// // Binary erasure channel with 10% erasure: C = 0.9 bits.
/// let p = [0.9, 0.1, 0.0, 0.0, 0.1, 0.9];
/// let result = channel_capacity(&p, 2, 3).unwrap();
/// assert!((result.capacity - 0.9).abs() < 1e-9);
/// ```
pub fn channel_capacity(p: &[f64], inputs: usize, outputs: usize) -> Result<CapacityResult> {
    BlahutArimoto::default().solve(p, inputs, outputs)
}

/// Mutual information I(X;Y) in bits for a fixed input prior over the
/// channel.
///
/// This is the objective Blahut-Arimoto maximizes: for any prior r,
/// `mutual_information_for_prior(p, r, ..) <= capacity(p)` up to
/// numerical tolerance, with equality at the capacity-achieving prior.
///
/// # Example
///
/// ```rust
/// use chancap::mutual_information_for_prior;
///
/// // Noiseless binary channel under the uniform prior: exactly 1 bit.
/// let p = [1.0, 0.0, 0.0, 1.0];
/// let mi = mutual_information_for_prior(&p, &[0.5, 0.5], 2, 2).unwrap();
/// assert!((mi - 1.0).abs() < 1e-12);
///
/// // A degenerate prior transmits nothing.
/// let mi = mutual_information_for_prior(&p, &[1.0, 0.0], 2, 2).unwrap();
/// assert!(mi < 1e-12);
/// ```
pub fn mutual_information_for_prior(
    p: &[f64],
    prior: &[f64],
    inputs: usize,
    outputs: usize,
) -> Result<f64> {
    validate_channel(p, inputs, outputs)?;
    if prior.len() != inputs {
        return Err(Error::LengthMismatch(prior.len(), inputs));
    }
    for &ri in prior {
        if !ri.is_finite() || ri < 0.0 {
            return Err(Error::NegativeProbability(ri));
        }
    }
    let total: f64 = prior.iter().sum();
    if (total - 1.0).abs() >= ROW_SUM_TOL {
        return Err(Error::NotNormalized(total));
    }

    // Output marginal under this prior.
    let mut p_y = vec![0.0; outputs];
    for i in 0..inputs {
        for j in 0..outputs {
            p_y[j] += prior[i] * p[i * outputs + j];
        }
    }

    let mut mi = 0.0;
    for i in 0..inputs {
        for j in 0..outputs {
            let pij = p[i * outputs + j];
            if prior[i] > 0.0 && pij > 0.0 && p_y[j] > 0.0 {
                mi += prior[i] * pij * (pij / p_y[j]).ln();
            }
        }
    }

    // Numerical errors can make it slightly negative.
    Ok((mi / LN_2).max(0.0))
}

fn validate_channel(p: &[f64], inputs: usize, outputs: usize) -> Result<()> {
    if outputs == 0 || p.len() != inputs * outputs {
        return Err(Error::ShapeMismatch {
            len: p.len(),
            inputs,
            outputs,
        });
    }
    if inputs < 2 {
        return Err(Error::TooFewInputs(inputs));
    }
    for &x in p {
        if !x.is_finite() || x < 0.0 {
            return Err(Error::NegativeProbability(x));
        }
    }
    let mut deviation = 0.0;
    for i in 0..inputs {
        let s: f64 = p[i * outputs..(i + 1) * outputs].iter().sum();
        deviation += (s - 1.0).abs();
    }
    deviation /= inputs as f64;
    if deviation >= ROW_SUM_TOL {
        return Err(Error::NotRowStochastic(deviation));
    }
    Ok(())
}
