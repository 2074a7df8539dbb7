//! Generator kind tags.

use std::fmt;
use std::str::FromStr;

use crate::error::RngError;

/// Kind tag of a [`Generator`](crate::Generator).
///
/// The first four kinds are uniform bit generators; the last four are
/// distribution samplers that own a private [`FastXor256`](Self::FastXor256)
/// generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeneratorKind {
    /// xoshiro256++: 256-bit state, period 2^256 - 1, supports jump-ahead.
    FastXor256,
    /// PCG32 (XSH-RR): 64-bit LCG state with a permuted 32-bit output.
    SmallLcg32,
    /// ChaCha-shaped stub. Not cryptographic; see [`StreamCipherStub`](crate::uniform::StreamCipherStub).
    StreamCipher20,
    /// MT19937: 624-word state, period 2^19937 - 1.
    Classic624,
    /// Normal distribution (Marsaglia polar method).
    Gaussian,
    /// Gamma distribution (Ahrens-Dieter / Marsaglia-Tsang).
    Gamma,
    /// Weibull distribution (inverse CDF).
    Weibull,
    /// Poisson distribution (Knuth multiplication method).
    Poisson,
}

impl GeneratorKind {
    /// All kinds, uniform generators first.
    pub const ALL: [GeneratorKind; 8] = [
        GeneratorKind::FastXor256,
        GeneratorKind::SmallLcg32,
        GeneratorKind::StreamCipher20,
        GeneratorKind::Classic624,
        GeneratorKind::Gaussian,
        GeneratorKind::Gamma,
        GeneratorKind::Weibull,
        GeneratorKind::Poisson,
    ];

    /// The four uniform bit generators.
    pub const UNIFORM: [GeneratorKind; 4] = [
        GeneratorKind::FastXor256,
        GeneratorKind::SmallLcg32,
        GeneratorKind::StreamCipher20,
        GeneratorKind::Classic624,
    ];

    /// Returns `true` for the distribution sampler kinds.
    #[inline]
    pub fn is_distribution(&self) -> bool {
        matches!(
            self,
            GeneratorKind::Gaussian
                | GeneratorKind::Gamma
                | GeneratorKind::Weibull
                | GeneratorKind::Poisson
        )
    }

    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorKind::FastXor256 => "fast-xor256",
            GeneratorKind::SmallLcg32 => "small-lcg32",
            GeneratorKind::StreamCipher20 => "stream-cipher20",
            GeneratorKind::Classic624 => "classic624",
            GeneratorKind::Gaussian => "gaussian",
            GeneratorKind::Gamma => "gamma",
            GeneratorKind::Weibull => "weibull",
            GeneratorKind::Poisson => "poisson",
        }
    }
}

impl FromStr for GeneratorKind {
    type Err = RngError;

    /// Parses canonical names and the usual algorithm names
    /// (`xoshiro256pp`, `pcg32`, `chacha20`, `mt19937`, `normal`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fast-xor256" | "xoshiro256pp" | "xoshiro256++" | "xoshiro" => {
                Ok(GeneratorKind::FastXor256)
            }
            "small-lcg32" | "pcg32" | "pcg" => Ok(GeneratorKind::SmallLcg32),
            "stream-cipher20" | "chacha20" | "chacha" => Ok(GeneratorKind::StreamCipher20),
            "classic624" | "mt19937" | "mersenne" => Ok(GeneratorKind::Classic624),
            "gaussian" | "normal" => Ok(GeneratorKind::Gaussian),
            "gamma" => Ok(GeneratorKind::Gamma),
            "weibull" => Ok(GeneratorKind::Weibull),
            "poisson" => Ok(GeneratorKind::Poisson),
            _ => Err(RngError::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_display() {
        for kind in GeneratorKind::ALL {
            assert_eq!(kind.to_string().parse::<GeneratorKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_kind_aliases() {
        assert_eq!(
            "Xoshiro256PP".parse::<GeneratorKind>().unwrap(),
            GeneratorKind::FastXor256
        );
        assert_eq!("pcg32".parse::<GeneratorKind>().unwrap(), GeneratorKind::SmallLcg32);
        assert_eq!(
            "chacha20".parse::<GeneratorKind>().unwrap(),
            GeneratorKind::StreamCipher20
        );
        assert_eq!("MT19937".parse::<GeneratorKind>().unwrap(), GeneratorKind::Classic624);
        assert_eq!("normal".parse::<GeneratorKind>().unwrap(), GeneratorKind::Gaussian);
    }

    #[test]
    fn test_unknown_kind() {
        let err = "sobol".parse::<GeneratorKind>().unwrap_err();
        assert_eq!(err, RngError::UnknownKind("sobol".to_string()));
    }

    #[test]
    fn test_is_distribution() {
        for kind in GeneratorKind::UNIFORM {
            assert!(!kind.is_distribution());
        }
        assert!(GeneratorKind::Gaussian.is_distribution());
        assert!(GeneratorKind::Poisson.is_distribution());
    }
}
