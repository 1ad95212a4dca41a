//! Capacity of the binary erasure channel across erasure probabilities.
//!
//! The BEC delivers each bit intact with probability 1 - e and replaces it
//! with an erasure symbol otherwise; its capacity is exactly 1 - e. This
//! demo sweeps e and also reports the capacity in nats to show the log
//! base conversion.
//!
//! Run: cargo run --example binary_erasure

use chancap::{channels, BlahutArimoto};

fn main() {
    println!("Binary Erasure Channel Capacity");
    println!("===============================\n");
    println!(
        "{:>6}  {:>12}  {:>12}  {:>12}  {:>10}",
        "e", "C (bits)", "1 - e", "C (nats)", "converged"
    );
    println!("{}", "-".repeat(60));

    let bits = BlahutArimoto::default();
    let nats = BlahutArimoto::new(std::f64::consts::E, 1e-12, 1000);

    let mut max_delta = 0.0_f64;
    for e in [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0] {
        let p = channels::binary_erasure(e).unwrap();
        let in_bits = bits.solve(&p, 2, 3).unwrap();
        let in_nats = nats.solve(&p, 2, 3).unwrap();

        let delta = (in_bits.capacity - (1.0 - e)).abs();
        max_delta = max_delta.max(delta);

        println!(
            "{:>6.2}  {:>12.6}  {:>12.6}  {:>12.6}  {:>10}",
            e, in_bits.capacity, 1.0 - e, in_nats.capacity, in_bits.converged
        );
    }

    println!();
    if max_delta < 1e-9 {
        println!("OK: solver matches 1 - e to within 1e-9 bits.");
    } else {
        println!("UNEXPECTED: max deviation from 1 - e = {max_delta:e}");
    }
}
