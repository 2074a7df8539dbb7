//! Uniform command implementation
//!
//! Draws `next_f64` values and prints their range, moments and histogram.

use rng_engine::{Generator, GeneratorKind};
use tracing::info;

use crate::report::{Histogram, Summary};
use crate::{CliError, Result};

/// Mean and variance of U(0, 1)
const UNIFORM_MOMENTS: (f64, f64) = (0.5, 1.0 / 12.0);

/// Run the uniform command
pub fn run(kind: GeneratorKind, seed: u64, samples: usize, bins: usize) -> Result<()> {
    let mut rng = Generator::new(kind, seed, None)?;
    info!(%kind, seed = rng.seed(), samples, "sampling uniform doubles");

    print!("{}", render(&mut rng, samples, bins)?);
    Ok(())
}

fn render(rng: &mut Generator, samples: usize, bins: usize) -> Result<String> {
    let values: Vec<f64> = (0..samples).map(|_| rng.next_f64()).collect();
    let summary = Summary::of(&values)
        .ok_or_else(|| CliError::InvalidArgument("samples must be at least 1".to_string()))?;
    let histogram = Histogram::build(&values, 0.0, 1.0, bins);

    Ok(format!(
        "Uniform doubles from {} (seed {}):\n{}  Hist:\n{}",
        rng.kind(),
        rng.seed(),
        summary.render(Some(UNIFORM_MOMENTS)),
        histogram.render()
    ))
}
