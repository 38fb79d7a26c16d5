use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use crate::error::{UnionFindError, UnionFindRes};
use crate::percolation::Percolation;

const CONFIDENCE_95: f64 = 1.96;

/// Monte Carlo estimate of the percolation threshold of an n-by-n grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PercolationStats {
    thresholds: Vec<f64>,
}

pub fn seeded_rng(seed: u64) -> StdRng {
    let mut bytes = [0u8; 32];
    for (i, b) in seed.to_le_bytes().iter().enumerate() {
        bytes[i] = *b;
    }
    StdRng::from_seed(bytes)
}

impl PercolationStats {
    pub fn run<R: Rng>(n: usize, trials: usize, rng: &mut R) -> UnionFindRes<PercolationStats> {
        if trials == 0 {
            return Err(UnionFindError::InvalidArgument("need at least one trial".to_string()));
        }

        let mut thresholds = Vec::with_capacity(trials);
        for trial in 0..trials {
            let threshold = PercolationStats::trial(n, rng)?;
            debug!("trial {}: percolated with {:.4} of sites open", trial, threshold);
            thresholds.push(threshold);
        }

        let stats = PercolationStats { thresholds };
        info!("{} trials on a {}x{} grid: mean {:.6}, stddev {:.6}",
            trials, n, n, stats.mean(), stats.stddev());
        Ok(stats)
    }

    // open random sites until the grid percolates
    fn trial<R: Rng>(n: usize, rng: &mut R) -> UnionFindRes<f64> {
        let mut grid = Percolation::new(n)?;
        while !grid.percolates() {
            let row = rng.gen_range(0, n);
            let col = rng.gen_range(0, n);
            grid.open(row, col)?;
        }
        Ok(grid.number_of_open_sites() as f64 / (n * n) as f64)
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn mean(&self) -> f64 {
        self.thresholds.iter().sum::<f64>() / self.thresholds.len() as f64
    }

    /// Sample standard deviation; zero for a single trial.
    pub fn stddev(&self) -> f64 {
        let t = self.thresholds.len();
        if t < 2 {
            return 0.0;
        }
        let mean = self.mean();
        let squares: f64 = self.thresholds.iter().map(|x| (x - mean) * (x - mean)).sum();
        (squares / (t - 1) as f64).sqrt()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.thresholds.len() as f64).sqrt()
    }

    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_width()
    }

    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_width()
    }
}
