use std::path::PathBuf;

use clap::Parser;
use fftcheck_backend_cpu::CpuBackend;
use fftcheck_core::{
    io::RunConfig,
    metrics::MetricsConfig,
    pipeline::{self, Verbosity},
};

#[derive(Parser, Debug)]
#[command(
    name = "fftcheck",
    about = "Measure FFT round-trip precision on a random Gaussian matrix"
)]
struct Cli {
    /// Path to a TOML run configuration (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Results file, overwritten on every run
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Dimension of the main square matrix
    #[arg(long)]
    size: Option<usize>,
    /// Dimension of the conjugate-symmetry bonus matrix
    #[arg(long)]
    bonus_size: Option<usize>,
    /// Seed of the random stream
    #[arg(long)]
    seed: Option<u64>,
    /// Mean of the Gaussian entries
    #[arg(long, allow_hyphen_values = true)]
    mean: Option<f64>,
    /// Standard deviation of the Gaussian entries
    #[arg(long)]
    std: Option<f64>,
    /// Write plain-text dumps of every intermediate matrix into this directory
    #[arg(long)]
    dump_dir: Option<PathBuf>,
    /// Record JSON-lines stage metrics to this file
    #[arg(long)]
    metrics: Option<PathBuf>,
    /// Suppress progress logs (stderr)
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<RunConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => {
                if !self.quiet {
                    eprintln!("[cli] loading config {}", path.display());
                }
                RunConfig::from_path(path)?
            }
            None => RunConfig::default(),
        };
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(bonus_size) = self.bonus_size {
            config.bonus_size = bonus_size;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(mean) = self.mean {
            config.mean = mean;
        }
        if let Some(std) = self.std {
            config.std = std;
        }
        if let Some(dir) = &self.dump_dir {
            config.dump_dir = Some(dir.clone());
        }
        if let Some(path) = &self.metrics {
            config.metrics = MetricsConfig {
                enabled: true,
                output: Some(path.clone()),
                ..config.metrics
            };
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    log::debug!("resolved configuration: {config:?}");

    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        Verbosity::Verbose
    };
    let summary = pipeline::run_to_file(&CpuBackend::new(), &config, verbosity)?;
    if !cli.quiet {
        eprintln!(
            "[cli] wrote report to {} (c2c rms={:e}, r2c rms={:e})",
            config.output.display(),
            summary.c2c.mean_abs,
            summary.r2c.mean_abs
        );
        if let Some(dir) = &config.dump_dir {
            eprintln!("[cli] matrix dumps in {}", dir.display());
        }
    }
    Ok(())
}
