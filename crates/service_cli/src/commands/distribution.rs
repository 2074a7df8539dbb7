//! Distribution command implementation
//!
//! Draws `next_distribution` values and prints their range, moments and
//! histogram. Gaussian histograms span the mean plus or minus three standard
//! deviations; other kinds span the observed range.

use rng_engine::{DistributionParams, Generator, GeneratorKind};
use tracing::info;

use crate::commands::ParamArgs;
use crate::report::{Histogram, Summary};
use crate::{CliError, Result};

/// Run the distribution command
pub fn run(
    kind: GeneratorKind,
    seed: u64,
    samples: usize,
    bins: usize,
    params: &ParamArgs,
) -> Result<()> {
    let params = params.to_params(kind)?;
    let mut rng = Generator::new(kind, seed, params)?;
    info!(%kind, seed = rng.seed(), samples, ?params, "sampling distribution");

    print!("{}", render(&mut rng, samples, bins)?);
    Ok(())
}

/// Theoretical mean and variance, when the kind has a closed form
fn expected_moments(params: Option<DistributionParams>) -> Option<(f64, f64)> {
    match params? {
        DistributionParams::Gaussian { mean, stddev } => Some((mean, stddev * stddev)),
        DistributionParams::Gamma { shape, scale } => Some((shape * scale, shape * scale * scale)),
        DistributionParams::Poisson { lambda } => Some((lambda, lambda)),
        // Needs the gamma function; `analyze` reports it.
        DistributionParams::Weibull { .. } => None,
    }
}

fn render(rng: &mut Generator, samples: usize, bins: usize) -> Result<String> {
    let values: Vec<f64> = (0..samples).map(|_| rng.next_distribution()).collect();
    let summary = Summary::of(&values)
        .ok_or_else(|| CliError::InvalidArgument("samples must be at least 1".to_string()))?;

    let (lower, upper, label) = match rng.params() {
        Some(DistributionParams::Gaussian { mean, stddev }) => (
            mean - 3.0 * stddev,
            mean + 3.0 * stddev,
            "-3 to +3 sigma".to_string(),
        ),
        _ => (
            summary.min,
            summary.max,
            format!("{:.4} to {:.4}", summary.min, summary.max),
        ),
    };
    let histogram = Histogram::build(&values, lower, upper, bins);

    Ok(format!(
        "{} samples (seed {}):\n{}  Hist ({}):\n{}",
        rng.kind(),
        rng.seed(),
        summary.render(expected_moments(rng.params())),
        label,
        histogram.render()
    ))
}
