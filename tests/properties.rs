//! Property-based tests for the Blahut-Arimoto solver.
//!
//! Uses proptest to verify the solver's contract across many random
//! row-stochastic channels.

use proptest::prelude::*;

use chancap::{channel_capacity, mutual_information_for_prior};

/// Tolerance for distribution sums.
const TOL: f64 = 1e-9;

/// A random channel as (matrix, inputs, outputs): strictly positive
/// entries with each row normalized to sum to 1.
fn channel() -> impl Strategy<Value = (Vec<f64>, usize, usize)> {
    (2usize..=5, 1usize..=5).prop_flat_map(|(m, n)| {
        prop::collection::vec(0.01f64..1.0, m * n).prop_map(move |mut raw| {
            for i in 0..m {
                let s: f64 = raw[i * n..(i + 1) * n].iter().sum();
                for x in &mut raw[i * n..(i + 1) * n] {
                    *x /= s;
                }
            }
            (raw, m, n)
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// The returned prior is always a probability distribution.
    #[test]
    fn prior_is_a_distribution((p, m, n) in channel()) {
        let result = channel_capacity(&p, m, n).unwrap();
        let sum: f64 = result.input_distribution.iter().sum();
        prop_assert!((sum - 1.0).abs() < TOL, "prior sums to {}", sum);
        for &ri in &result.input_distribution {
            prop_assert!(ri >= 0.0, "negative prior mass {}", ri);
        }
    }

    /// 0 <= C <= log2(min(|X|, |Y|)).
    #[test]
    fn capacity_within_information_bounds((p, m, n) in channel()) {
        let result = channel_capacity(&p, m, n).unwrap();
        prop_assert!(result.capacity >= 0.0);
        let bound = (m.min(n) as f64).log2();
        prop_assert!(
            result.capacity <= bound + 1e-6,
            "capacity {} exceeds log2(min({}, {})) = {}",
            result.capacity, m, n, bound
        );
    }

    /// The solver is a pure function: re-running reproduces the result
    /// bit for bit.
    #[test]
    fn rerun_is_deterministic((p, m, n) in channel()) {
        let a = channel_capacity(&p, m, n).unwrap();
        let b = channel_capacity(&p, m, n).unwrap();
        prop_assert_eq!(a.capacity.to_bits(), b.capacity.to_bits());
        prop_assert_eq!(a.input_distribution, b.input_distribution);
        prop_assert_eq!(a.iterations, b.iterations);
    }

    /// Iteration bookkeeping is coherent with the reported convergence.
    #[test]
    fn residual_and_iterations_are_sane((p, m, n) in channel()) {
        let result = channel_capacity(&p, m, n).unwrap();
        prop_assert!(result.iterations >= 1 && result.iterations <= 1000);
        prop_assert!(result.residual.is_finite() && result.residual >= 0.0);
        if result.converged {
            prop_assert!(result.residual < 1e-12);
        } else {
            prop_assert_eq!(result.iterations, 1000);
        }
    }

    /// The optimized capacity dominates the mutual information of the
    /// uniform prior the iteration started from.
    #[test]
    fn capacity_dominates_uniform_prior((p, m, n) in channel()) {
        let c = channel_capacity(&p, m, n).unwrap().capacity;
        let uniform = vec![1.0 / m as f64; m];
        let mi = mutual_information_for_prior(&p, &uniform, m, n).unwrap();
        prop_assert!(c >= mi - 1e-9, "C = {} < I(uniform) = {}", c, mi);
    }
}
