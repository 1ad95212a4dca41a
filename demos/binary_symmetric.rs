//! Capacity of the binary symmetric channel across crossover probabilities.
//!
//! The BSC flips each transmitted bit with probability e, and its capacity
//! has the closed form C = 1 - H_b(e). This demo sweeps e, compares the
//! Blahut-Arimoto estimate against the analytic value, and shows that
//! skewed priors achieve strictly less mutual information than the
//! capacity.
//!
//! Run: cargo run --example binary_symmetric

use chancap::{channel_capacity, channels, mutual_information_for_prior};

fn main() {
    println!("Binary Symmetric Channel Capacity");
    println!("=================================\n");
    println!(
        "{:>6}  {:>12}  {:>12}  {:>10}  {:>6}",
        "e", "C (solver)", "1 - H_b(e)", "|delta|", "iters"
    );
    println!("{}", "-".repeat(56));

    let mut max_delta = 0.0_f64;
    for e in [0.0, 0.05, 0.1, 0.2, 0.3, 0.4, 0.5] {
        let p = channels::binary_symmetric(e).unwrap();
        let result = channel_capacity(&p, 2, 2).unwrap();
        let analytic = 1.0 - channels::binary_entropy(e);
        let delta = (result.capacity - analytic).abs();
        max_delta = max_delta.max(delta);

        println!(
            "{:>6.2}  {:>12.6}  {:>12.6}  {:>10.2e}  {:>6}",
            e, result.capacity, analytic, delta, result.iterations
        );
    }

    // -- Suboptimal priors lose mutual information ------------------------
    let e = 0.2;
    let p = channels::binary_symmetric(e).unwrap();
    let capacity = channel_capacity(&p, 2, 2).unwrap().capacity;

    println!("\nMutual information at e = {e} for fixed priors:");
    println!("{:>14}  {:>10}", "prior", "I(X;Y)");
    println!("{}", "-".repeat(26));
    for prior in [[0.5, 0.5], [0.7, 0.3], [0.9, 0.1], [0.99, 0.01]] {
        let mi = mutual_information_for_prior(&p, &prior, 2, 2).unwrap();
        println!(
            "{:>14}  {:>10.6}",
            format!("[{:.2}, {:.2}]", prior[0], prior[1]),
            mi
        );
    }
    println!("{:>14}  {:>10.6}   <- capacity", "max over r", capacity);

    println!();
    if max_delta < 1e-9 {
        println!("OK: solver matches the closed form to within 1e-9 bits.");
    } else {
        println!("UNEXPECTED: max deviation from closed form = {max_delta:e}");
    }
}
