//! Sample summaries and text histograms printed by the commands

use std::fmt::Write as _;

/// Width in characters of the fullest histogram bar
const BAR_WIDTH: f64 = 50.0;

/// Range, mean and unbiased variance of a sample
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of values
    pub samples: usize,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Unbiased variance
    pub variance: f64,
}

impl Summary {
    /// Two-pass summary of `values`; `None` for an empty slice
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = if values.len() > 1 {
            values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)
        } else {
            0.0
        };
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        Some(Self {
            samples: values.len(),
            min,
            max,
            mean,
            variance,
        })
    }

    /// Standard deviation
    pub fn stddev(&self) -> f64 {
        self.variance.sqrt()
    }

    /// Renders the summary, with expected moments when known
    pub fn render(&self, expected: Option<(f64, f64)>) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "  Samples: {}", self.samples);
        let _ = writeln!(out, "  Range: [{:.6}, {:.6}]", self.min, self.max);
        match expected {
            Some((mean, variance)) => {
                let _ = writeln!(out, "  Mean: {:.6} (exp {:.4})", self.mean, mean);
                let _ = writeln!(out, "  Var: {:.6} (exp {:.4})", self.variance, variance);
                let _ = writeln!(
                    out,
                    "  Stddev: {:.6} (exp {:.4})",
                    self.stddev(),
                    variance.sqrt()
                );
            }
            None => {
                let _ = writeln!(out, "  Mean: {:.6}", self.mean);
                let _ = writeln!(out, "  Var: {:.6}", self.variance);
                let _ = writeln!(out, "  Stddev: {:.6}", self.stddev());
            }
        }
        out
    }
}

/// Equal-width histogram over `[lower, upper)`, as percentages of all values
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Percentage of all values falling in each bin
    pub percentages: Vec<f64>,
}

impl Histogram {
    /// Bins `values` into `bins` cells. Values outside the range are counted
    /// in the total but in no bin; a value equal to `upper` lands in the last
    /// bin.
    pub fn build(values: &[f64], lower: f64, upper: f64, bins: usize) -> Self {
        let mut counts = vec![0usize; bins];
        let width = (upper - lower) / bins as f64;
        if bins > 0 && width > 0.0 {
            for &x in values {
                if x < lower || x > upper {
                    continue;
                }
                let bin = (((x - lower) / width) as usize).min(bins - 1);
                counts[bin] += 1;
            }
        }
        let total = values.len().max(1) as f64;
        Self {
            percentages: counts
                .into_iter()
                .map(|c| c as f64 * 100.0 / total)
                .collect(),
        }
    }

    /// One line per bin: index, percentage and a bar scaled to the fullest
    /// bin
    pub fn render(&self) -> String {
        let peak = self.percentages.iter().cloned().fold(0.0, f64::max);
        let mut out = String::new();
        for (i, &pct) in self.percentages.iter().enumerate() {
            let width = if peak > 0.0 {
                (pct * BAR_WIDTH / peak) as usize
            } else {
                0
            };
            let _ = writeln!(out, "    {:2}: {:5.2}% |{}", i, pct, "#".repeat(width));
        }
        out
    }
}

/// Hex dump with sixteen bytes per line and an offset column
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::new();
    for (line, chunk) in bytes.chunks(16).enumerate() {
        let _ = write!(out, "  {:08x}:", line * 16);
        for byte in chunk {
            let _ = write!(out, " {:02x}", byte);
        }
        out.push('\n');
    }
    out
}
