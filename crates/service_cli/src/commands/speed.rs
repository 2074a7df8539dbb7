//! Speed command implementation
//!
//! Measures `next_u64` throughput for each uniform kind on one thread and,
//! with more than one worker, for jump-separated xoshiro256++ streams run on
//! a rayon pool.

use std::time::{Duration, Instant};

use rayon::prelude::*;
use rng_engine::{Generator, GeneratorKind};
use tracing::info;

use crate::{CliError, Result};

/// One throughput measurement
#[derive(Debug, Clone)]
pub struct Throughput {
    /// What was measured
    pub label: String,
    /// Values drawn in total
    pub draws: usize,
    /// Wall-clock time
    pub elapsed: Duration,
    /// XOR of every draw, kept so the loop is not optimised away
    pub checksum: u64,
}

impl Throughput {
    /// Millions of values per second
    pub fn mega_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.draws as f64 / (secs * 1e6)
        } else {
            f64::INFINITY
        }
    }
}

impl std::fmt::Display for Throughput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "  {}: {:.2} s ({:.2} Mnums/s)",
            self.label,
            self.elapsed.as_secs_f64(),
            self.mega_per_sec()
        )
    }
}

fn drain(rng: &mut Generator, draws: usize) -> u64 {
    let mut acc = 0u64;
    for _ in 0..draws {
        acc ^= rng.next_u64();
    }
    acc
}

/// Times `draws` values from one generator of `kind`
pub fn single_thread(kind: GeneratorKind, seed: u64, draws: usize) -> Result<Throughput> {
    let mut rng = Generator::new(kind, seed, None)?;
    let start = Instant::now();
    let checksum = drain(&mut rng, draws);
    Ok(Throughput {
        label: kind.to_string(),
        draws,
        elapsed: start.elapsed(),
        checksum,
    })
}

/// Times `draws` values split across `workers` jump-separated streams
pub fn parallel_streams(seed: u64, draws: usize, workers: usize) -> Result<Throughput> {
    if workers == 0 {
        return Err(CliError::InvalidArgument(
            "workers must be at least 1".to_string(),
        ));
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()?;
    let mut streams = Generator::streams(seed, workers);
    let per_worker = draws / workers;

    let start = Instant::now();
    let checksum = pool.install(|| {
        streams
            .par_iter_mut()
            .map(|rng| drain(rng, per_worker))
            .reduce(|| 0, |a, b| a ^ b)
    });
    Ok(Throughput {
        label: format!("{} x{} streams", GeneratorKind::FastXor256, workers),
        draws: per_worker * workers,
        elapsed: start.elapsed(),
        checksum,
    })
}

/// Run the speed command
pub fn run(seed: u64, draws: usize, workers: usize) -> Result<()> {
    info!(seed, draws, workers, "measuring throughput");
    println!("Throughput of next_u64 ({} draws):", draws);

    for kind in GeneratorKind::UNIFORM {
        let result = single_thread(kind, seed, draws)?;
        info!(%kind, checksum = result.checksum, "run finished");
        println!("{}", result);
    }

    if workers > 1 {
        let result = parallel_streams(seed, draws, workers)?;
        println!("{}", result);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_thread_checksum_is_deterministic() {
        let a = single_thread(GeneratorKind::SmallLcg32, 12345, 1_000).unwrap();
        let b = single_thread(GeneratorKind::SmallLcg32, 12345, 1_000).unwrap();
        assert_eq!(a.checksum, b.checksum);
        assert_eq!(a.draws, 1_000);
    }

    #[test]
    fn test_parallel_matches_sequential_streams() {
        let result = parallel_streams(7, 4_000, 4).unwrap();
        let expected = Generator::streams(7, 4)
            .iter_mut()
            .map(|rng| drain(rng, 1_000))
            .fold(0, |a, b| a ^ b);
        assert_eq!(result.checksum, expected);
        assert_eq!(result.draws, 4_000);
    }

    #[test]
    fn test_zero_workers_rejected() {
        assert!(parallel_streams(1, 10, 0).is_err());
    }

    #[test]
    fn test_display_format() {
        let t = Throughput {
            label: "pcg".to_string(),
            draws: 2_000_000,
            elapsed: Duration::from_secs(1),
            checksum: 0,
        };
        assert_eq!(t.to_string(), "  pcg: 1.00 s (2.00 Mnums/s)");
    }
}
