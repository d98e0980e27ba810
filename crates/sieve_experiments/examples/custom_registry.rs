//! Example: measuring a custom kernel alongside the built-in sieves.
//!
//! Registers a trial-division kernel next to the two sieves, runs a short
//! sweep with three repetitions per timing pass, and prints every row.

use sieve_core::{AlgorithmRegistry, SieveAlgorithm, SieveKind};
use sieve_experiments::{config, summarize, Analyzer, HarnessConfig};

struct TrialDivision;

impl SieveAlgorithm for TrialDivision {
    fn name(&self) -> &'static str {
        "Trial Division"
    }

    fn primes_up_to(&self, n: usize) -> Vec<usize> {
        (2..=n)
            .filter(|&candidate| (2..).take_while(|d| d * d <= candidate).all(|d| candidate % d != 0))
            .collect()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = SieveKind::ALL
        .into_iter()
        .fold(AlgorithmRegistry::builder(), |builder, kind| {
            builder.with_algorithm(kind.display_name(), kind.build())
        })
        .with_algorithm("Trial Division", Box::new(TrialDivision))
        .build();
    let names: Vec<String> = registry.names().map(str::to_string).collect();

    let n_values = config::linspace(1_000, 50_000, 4)?;
    let mut analyzer = Analyzer::new(registry).with_config(HarnessConfig {
        repetitions: 3,
        show_progress: false,
    });
    let table = analyzer.run_analysis(&names, &n_values);

    for row in &table {
        println!(
            "{:24} n={:>6} time={:?} ms peak={:?} MB",
            row.algorithm, row.n, row.time_ms, row.peak_ram_mb
        );
    }

    println!("\n=== Summary ===");
    for summary in summarize(&table) {
        println!("{summary}");
    }

    Ok(())
}
