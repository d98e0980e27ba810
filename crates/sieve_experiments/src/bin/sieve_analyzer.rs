//! Prime sieve analyzer: times and profiles each sieve over a sweep of upper
//! bounds, then writes CSV/JSON results and PNG charts.

use std::path::PathBuf;

use clap::Parser;
use sieve_core::{cross_check, AlgorithmRegistry};
use sieve_experiments::config::{
    AnalysisConfig, DEFAULT_CSV_PATH, DEFAULT_MAX_N, DEFAULT_PLOTS_DIR, DEFAULT_REPETITIONS,
    DEFAULT_STEPS,
};
use sieve_experiments::{export_to_csv, export_to_json, render_charts, summarize, Analyzer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sieve_analyzer",
    about = "Run a comparative analysis of prime sieve algorithms",
    long_about = "Times each prime sieve over evenly spaced upper bounds, samples its\n\
                  peak heap allocation, and writes the results as CSV and charts."
)]
struct Cli {
    /// Maximum number n to find primes up to
    #[arg(long, default_value_t = DEFAULT_MAX_N)]
    max_n: usize,
    /// Number of different n values to test
    #[arg(long, default_value_t = DEFAULT_STEPS)]
    steps: usize,
    /// File to save the raw CSV data to
    #[arg(long, default_value = DEFAULT_CSV_PATH)]
    csv: PathBuf,
    /// Also save the raw data as JSON
    #[arg(long)]
    json: Option<PathBuf>,
    /// Directory to save the output plots to
    #[arg(long, default_value = DEFAULT_PLOTS_DIR)]
    plots_dir: PathBuf,
    /// Skip chart rendering
    #[arg(long)]
    no_plots: bool,
    /// Kernel calls averaged per timing pass
    #[arg(long, default_value_t = DEFAULT_REPETITIONS)]
    repetitions: u32,
    /// Algorithm to measure (repeatable); defaults to every built-in sieve
    #[arg(long = "algorithm", value_name = "NAME")]
    algorithms: Vec<String>,
    /// Check that all sieves agree at every n before measuring
    #[arg(long)]
    verify: bool,
    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,
}

impl Cli {
    fn into_config(self) -> AnalysisConfig {
        let mut config = AnalysisConfig::default()
            .with_max_n(self.max_n)
            .with_steps(self.steps)
            .with_repetitions(self.repetitions);
        if !self.algorithms.is_empty() {
            config = config.with_algorithms(&self.algorithms);
        }
        config.csv_path = self.csv;
        config.json_path = self.json;
        config.plots_dir = (!self.no_plots).then_some(self.plots_dir);
        config.verify = self.verify;
        config.show_progress = !self.no_progress;
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Cli::parse().into_config();
    let n_values = config.n_values()?;
    let harness_config = config.harness_config()?;

    println!("--- Starting Prime Sieve Analysis ---");
    println!("Algorithms: {}", config.algorithms.join(", "));
    println!("n Values: {n_values:?}");

    let registry = AlgorithmRegistry::standard();
    if config.verify {
        for &n in &n_values {
            let primes = cross_check(&registry, n)?;
            info!(n, primes = primes.len(), "kernels agree");
        }
    }

    let mut analyzer = Analyzer::new(registry).with_config(harness_config);
    let table = analyzer.run_analysis(&config.algorithms, &n_values);

    if table.is_empty() {
        warn!("no measurements were recorded; nothing to export");
        return Ok(());
    }

    export_to_csv(&table, &config.csv_path)?;
    println!("\nRaw results saved to '{}'", config.csv_path.display());

    if let Some(json_path) = &config.json_path {
        export_to_json(&table, json_path)?;
        println!("JSON results saved to '{}'", json_path.display());
    }

    if let Some(plots_dir) = &config.plots_dir {
        let written = render_charts(&table, plots_dir)?;
        println!("Generated {} plots in '{}'", written.len(), plots_dir.display());
    }

    println!("\n=== Summary ===");
    for summary in summarize(&table) {
        println!("{summary}");
    }

    println!("--- Analysis Complete ---");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_analysis_config() {
        let config = Cli::parse_from(["sieve_analyzer"]).into_config();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn flags_map_onto_config() {
        let config = Cli::parse_from([
            "sieve_analyzer",
            "--max-n",
            "50000",
            "--steps",
            "3",
            "--algorithm",
            "atkin",
            "--no-plots",
            "--json",
            "out.json",
            "--verify",
        ])
        .into_config();

        assert_eq!(config.max_n, 50_000);
        assert_eq!(config.steps, 3);
        assert_eq!(config.algorithms, vec!["Sieve of Atkin"]);
        assert_eq!(config.plots_dir, None);
        assert_eq!(config.json_path, Some(PathBuf::from("out.json")));
        assert!(config.verify);
        assert!(config.show_progress);
    }
}
