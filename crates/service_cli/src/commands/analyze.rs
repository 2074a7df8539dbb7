//! Analyze command implementation
//!
//! Runs the engine's goodness-of-fit analysis and prints the statistics with
//! a pass/fail verdict at the requested significance.

use rng_engine::{Generator, GeneratorKind, SampleStatistics};
use tracing::info;

use crate::commands::ParamArgs;
use crate::{CliError, Result};

/// Run the analyze command
pub fn run(
    kind: GeneratorKind,
    seed: u64,
    samples: usize,
    significance: f64,
    params: &ParamArgs,
) -> Result<()> {
    if !(significance > 0.0 && significance < 1.0) {
        return Err(CliError::InvalidArgument(format!(
            "significance must lie in (0, 1), got {}",
            significance
        )));
    }
    let params = params.to_params(kind)?;
    let mut rng = Generator::new(kind, seed, params)?;
    info!(%kind, seed = rng.seed(), samples, "analysing sample");

    let stats = rng.analyze(samples)?;
    print!("{}", render(&stats, rng.seed(), significance)?);
    Ok(())
}

fn render(stats: &SampleStatistics, seed: u64, significance: f64) -> Result<String> {
    let critical = stats.critical_value(significance)?;
    let verdict = if stats.chi_square <= critical {
        "PASS"
    } else {
        "FAIL"
    };
    Ok(format!(
        "Analysis of {} (seed {}):\n\
         \x20 Samples: {}\n\
         \x20 Range: [{:.6}, {:.6}]\n\
         \x20 Mean: {:.6} (exp {:.6})\n\
         \x20 Var: {:.6} (exp {:.6})\n\
         \x20 Chi-square: {:.3} on {} dof (critical {:.3} at {})\n\
         \x20 Verdict: {}\n",
        stats.kind,
        seed,
        stats.sample_size,
        stats.min,
        stats.max,
        stats.mean,
        stats.expected_mean,
        stats.variance,
        stats.expected_variance,
        stats.chi_square,
        stats.degrees_of_freedom,
        critical,
        significance,
        verdict
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_verdicts() {
        let mut good = Generator::new(GeneratorKind::Classic624, 42, None).unwrap();
        let text = render(&good.analyze(100_000).unwrap(), 42, 0.01).unwrap();
        assert!(text.contains("on 19 dof"));
        assert!(text.contains("Verdict: PASS"));

        let mut stub = Generator::new(GeneratorKind::StreamCipher20, 42, None).unwrap();
        let text = render(&stub.analyze(1_000).unwrap(), 42, 0.01).unwrap();
        assert!(text.contains("Verdict: FAIL"));
    }

    #[test]
    fn test_significance_validated() {
        let err = run(
            GeneratorKind::FastXor256,
            1,
            100,
            1.5,
            &ParamArgs::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }
}
