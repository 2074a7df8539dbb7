//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod analyze;
pub mod distribution;
pub mod fill;
pub mod speed;
pub mod uniform;

use clap::Args;
use rng_engine::{DistributionParams, GeneratorKind};
use tracing::warn;

use crate::{CliError, Result};

/// Distribution parameter flags shared by the sampling commands
#[derive(Args, Debug, Clone, Default)]
pub struct ParamArgs {
    /// Gaussian mean
    #[arg(long, allow_hyphen_values = true)]
    pub mean: Option<f64>,

    /// Gaussian standard deviation
    #[arg(long)]
    pub stddev: Option<f64>,

    /// Gamma / Weibull shape
    #[arg(long)]
    pub shape: Option<f64>,

    /// Gamma / Weibull scale
    #[arg(long)]
    pub scale: Option<f64>,

    /// Poisson rate
    #[arg(long)]
    pub lambda: Option<f64>,
}

impl ParamArgs {
    fn given(&self) -> Vec<&'static str> {
        [
            ("mean", self.mean),
            ("stddev", self.stddev),
            ("shape", self.shape),
            ("scale", self.scale),
            ("lambda", self.lambda),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|_| name))
        .collect()
    }

    /// Builds parameters for `kind`, filling unset flags with the kind's
    /// defaults
    ///
    /// Flags belonging to another family are rejected. Uniform kinds take no
    /// parameters; flags passed with them are ignored with a warning.
    pub fn to_params(&self, kind: GeneratorKind) -> Result<Option<DistributionParams>> {
        let allowed: &[&str] = match kind {
            GeneratorKind::Gaussian => &["mean", "stddev"],
            GeneratorKind::Gamma | GeneratorKind::Weibull => &["shape", "scale"],
            GeneratorKind::Poisson => &["lambda"],
            GeneratorKind::FastXor256
            | GeneratorKind::SmallLcg32
            | GeneratorKind::StreamCipher20
            | GeneratorKind::Classic624 => {
                let given = self.given();
                if !given.is_empty() {
                    warn!(%kind, flags = ?given, "distribution flags ignored for uniform kind");
                }
                return Ok(None);
            }
        };
        if let Some(flag) = self.given().into_iter().find(|f| !allowed.contains(f)) {
            return Err(CliError::InvalidArgument(format!(
                "--{} does not apply to {} generators",
                flag, kind
            )));
        }

        let params = match DistributionParams::default_for(kind) {
            Some(DistributionParams::Gaussian { mean, stddev }) => DistributionParams::Gaussian {
                mean: self.mean.unwrap_or(mean),
                stddev: self.stddev.unwrap_or(stddev),
            },
            Some(DistributionParams::Gamma { shape, scale }) => DistributionParams::Gamma {
                shape: self.shape.unwrap_or(shape),
                scale: self.scale.unwrap_or(scale),
            },
            Some(DistributionParams::Weibull { shape, scale }) => DistributionParams::Weibull {
                shape: self.shape.unwrap_or(shape),
                scale: self.scale.unwrap_or(scale),
            },
            Some(DistributionParams::Poisson { lambda }) => DistributionParams::Poisson {
                lambda: self.lambda.unwrap_or(lambda),
            },
            None => return Ok(None),
        };
        params.validate()?;
        Ok(Some(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_unset_flags() {
        let args = ParamArgs {
            stddev: Some(2.0),
            ..Default::default()
        };
        assert_eq!(
            args.to_params(GeneratorKind::Gaussian).unwrap(),
            Some(DistributionParams::Gaussian {
                mean: 0.0,
                stddev: 2.0
            })
        );
    }

    #[test]
    fn test_foreign_flag_rejected() {
        let args = ParamArgs {
            lambda: Some(3.0),
            ..Default::default()
        };
        let err = args.to_params(GeneratorKind::Weibull).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }

    #[test]
    fn test_uniform_kind_ignores_flags() {
        let args = ParamArgs {
            shape: Some(3.0),
            ..Default::default()
        };
        assert_eq!(args.to_params(GeneratorKind::Classic624).unwrap(), None);
    }

    #[test]
    fn test_invalid_value_is_engine_error() {
        let args = ParamArgs {
            lambda: Some(-1.0),
            ..Default::default()
        };
        let err = args.to_params(GeneratorKind::Poisson).unwrap_err();
        assert!(matches!(err, CliError::Engine(_)));
    }
}
