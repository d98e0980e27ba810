mod support;

use sieve_core::test_helpers::{PanickingSieve, PRIMES_UP_TO_30};
use sieve_core::{AlgorithmRegistry, SieveAlgorithm, SieveOfAtkin, SieveOfEratosthenes};
use sieve_experiments::{run_analysis, Analyzer, HarnessConfig};
use support::{FixedProbe, UnavailableProbe};

const BOTH: [&str; 2] = [SieveOfEratosthenes::NAME, SieveOfAtkin::NAME];

fn quiet_config() -> HarnessConfig {
    HarnessConfig {
        repetitions: 5,
        show_progress: false,
    }
}

#[test]
fn thirty_with_both_sieves() {
    let table = run_analysis(&BOTH, &[30]);

    assert_eq!(table.len(), 2);
    for (row, name) in table.iter().zip(BOTH) {
        assert_eq!(row.algorithm, name);
        assert_eq!(row.n, 30);
        assert!(row.time_ms.is_some_and(|ms| ms >= 0.0), "{row:?}");
        assert!(row.peak_ram_mb.is_some_and(|mb| mb >= 0.0), "{row:?}");
    }

    let registry = AlgorithmRegistry::standard();
    for name in BOTH {
        let kernel = registry.get(name).unwrap();
        assert_eq!(kernel.primes_up_to(30), PRIMES_UP_TO_30.to_vec());
    }
}

#[test]
fn row_count_is_names_times_bounds() {
    let n_values = [10, 100, 1_000, 10_000];
    let mut analyzer = Analyzer::new(AlgorithmRegistry::standard())
        .with_config(quiet_config())
        .with_probe(Box::new(FixedProbe(0)));

    let table = analyzer.run_analysis(&BOTH, &n_values);
    assert_eq!(table.len(), BOTH.len() * n_values.len());

    let with_unknown = analyzer.run_analysis(
        &[SieveOfEratosthenes::NAME, "Sieve of Sundaram", SieveOfAtkin::NAME],
        &n_values,
    );
    assert_eq!(with_unknown.len(), BOTH.len() * n_values.len());
    assert!(with_unknown.iter().all(|row| row.algorithm != "Sieve of Sundaram"));
}

#[test]
fn only_unknown_names_give_empty_table() {
    let table = run_analysis(&["Sieve of Sundaram"], &[10, 20]);
    assert!(table.is_empty());
}

#[test]
fn fault_in_one_pair_does_not_affect_others() {
    let registry = AlgorithmRegistry::builder()
        .with_algorithm(
            SieveOfEratosthenes::NAME,
            Box::new(PanickingSieve {
                inner: SieveOfEratosthenes,
                fail_at: 100,
            }),
        )
        .with_algorithm(SieveOfAtkin::NAME, Box::new(SieveOfAtkin))
        .build();

    let mut analyzer = Analyzer::new(registry)
        .with_config(quiet_config())
        .with_probe(Box::new(FixedProbe(3 * 1024 * 1024)));
    let table = analyzer.run_analysis(&BOTH, &[50, 100, 150]);

    assert_eq!(table.len(), 6);
    for row in &table {
        let faulted = row.algorithm == SieveOfEratosthenes::NAME && row.n == 100;
        assert_eq!(row.time_ms.is_none(), faulted, "{row:?}");
        assert_eq!(row.peak_ram_mb.is_none(), faulted, "{row:?}");
        if !faulted {
            assert_eq!(row.peak_ram_mb, Some(3.0));
        }
    }
}

#[test]
fn unavailable_probe_blanks_memory_only() {
    let mut analyzer = Analyzer::new(AlgorithmRegistry::standard())
        .with_config(quiet_config())
        .with_probe(Box::new(UnavailableProbe));
    let table = analyzer.run_analysis(&BOTH, &[1_000]);

    assert_eq!(table.len(), 2);
    assert!(table.iter().all(|row| row.time_ms.is_some() && row.peak_ram_mb.is_none()));
}
