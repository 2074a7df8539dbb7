//! rngbench - Command Line Harness for the RNG Engine
//!
//! Exercises every generator kind of `rng_engine` from the shell.
//!
//! # Commands
//!
//! - `rngbench uniform --kind <k>` - Range, moments and histogram of `next_f64`
//! - `rngbench distribution --kind <k>` - Same for `next_distribution`
//! - `rngbench speed [--workers <w>]` - `next_u64` throughput per uniform kind
//! - `rngbench analyze --kind <k>` - Chi-square goodness of fit
//! - `rngbench fill --kind <k> --bytes <n>` - Hex dump of `fill_bytes`
//!
//! # Configuration
//!
//! Settings come from CLI flags, then `RNGBENCH_*` environment variables,
//! then `rngbench.toml`, then defaults.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rng_engine::GeneratorKind;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod report;

use commands::ParamArgs;
use config::{build_config, BenchConfig, CliArgs as ConfigCliArgs};
pub use error::{CliError, Result};

/// RNG engine harness
#[derive(Parser)]
#[command(name = "rngbench")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./rngbench.toml when present)
    #[arg(short, long, global = true, env = "RNGBENCH_CONFIG")]
    config: Option<PathBuf>,

    /// Seed; 0 seeds from the system clock
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Number of values to draw
    #[arg(short = 'n', long, global = true)]
    samples: Option<usize>,

    /// Histogram bins
    #[arg(short, long, global = true)]
    bins: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise uniform doubles from a generator
    Uniform {
        /// Generator kind (e.g. fast-xor256, pcg32, mt19937)
        #[arg(short, long, default_value = "fast-xor256")]
        kind: GeneratorKind,
    },

    /// Summarise samples from a distribution generator
    Distribution {
        /// Distribution kind (gaussian, gamma, weibull, poisson)
        #[arg(short, long, default_value = "gaussian")]
        kind: GeneratorKind,

        #[command(flatten)]
        params: ParamArgs,
    },

    /// Measure next_u64 throughput
    Speed {
        /// Parallel workers for the jump-separated stream run
        #[arg(short, long, default_value = "1")]
        workers: usize,
    },

    /// Run the chi-square goodness-of-fit analysis
    Analyze {
        /// Generator kind
        #[arg(short, long, default_value = "fast-xor256")]
        kind: GeneratorKind,

        /// Upper-tail significance for the verdict
        #[arg(short = 'a', long, default_value = "0.01")]
        significance: f64,

        #[command(flatten)]
        params: ParamArgs,
    },

    /// Hex-dump generator bytes
    Fill {
        /// Generator kind
        #[arg(short, long, default_value = "fast-xor256")]
        kind: GeneratorKind,

        /// Number of bytes
        #[arg(long, default_value = "64")]
        bytes: usize,
    },
}

impl From<&Cli> for ConfigCliArgs {
    fn from(cli: &Cli) -> Self {
        ConfigCliArgs {
            config_file: cli.config.clone(),
            seed: cli.seed,
            samples: cli.samples,
            bins: cli.bins,
            log_level: cli.log_level.clone(),
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn dispatch(command: Commands, config: &BenchConfig) -> Result<()> {
    let seed = config.default_seed;
    match command {
        Commands::Uniform { kind } => {
            commands::uniform::run(kind, seed, config.samples, config.bins)
        }
        Commands::Distribution { kind, params } => {
            commands::distribution::run(kind, seed, config.samples, config.bins, &params)
        }
        Commands::Speed { workers } => commands::speed::run(seed, config.samples, workers),
        Commands::Analyze {
            kind,
            significance,
            params,
        } => commands::analyze::run(kind, seed, config.samples, significance, &params),
        Commands::Fill { kind, bytes } => commands::fill::run(kind, seed, bytes),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&ConfigCliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());
    debug!(?config, "configuration resolved");

    dispatch(cli.command, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_distribution_flags() {
        let cli = Cli::parse_from([
            "rngbench",
            "distribution",
            "--kind",
            "normal",
            "--mean",
            "-2.5",
            "--stddev",
            "0.5",
            "--seed",
            "42",
        ]);
        assert_eq!(cli.seed, Some(42));
        match cli.command {
            Commands::Distribution { kind, params } => {
                assert_eq!(kind, GeneratorKind::Gaussian);
                assert_eq!(params.mean, Some(-2.5));
                assert_eq!(params.stddev, Some(0.5));
            }
            _ => panic!("expected distribution command"),
        }
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(Cli::try_parse_from(["rngbench", "uniform", "--kind", "rand48"]).is_err());
    }

    #[test]
    fn test_cli_args_conversion() {
        let cli = Cli::parse_from(["rngbench", "-n", "500", "-b", "8", "speed", "-w", "2"]);
        let args = ConfigCliArgs::from(&cli);
        assert_eq!(args.samples, Some(500));
        assert_eq!(args.bins, Some(8));
        assert!(args.seed.is_none());
    }
}
