use crate::error::{PercolationError, Result};
use crate::percolation::PercolationGrid;
use crate::settings::SamplingPolicy;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Critical value of the standard normal for a 95% interval
const CONFIDENCE_95: f64 = 1.96;

/// Percolation threshold estimates over independent trials
#[derive(Debug, Clone)]
pub struct PercolationStats {
    n: usize,
    thresholds: Vec<f64>,
    elapsed_secs: f64,
}

/// Printable result of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub n: usize,
    pub trials: usize,
    pub mean: f64,
    pub stddev: f64,
    pub confidence_low: f64,
    pub confidence_high: f64,
    pub elapsed_secs: f64,
}

impl PercolationStats {
    /// Run `trials` experiments on an n-by-n grid with an entropy-seeded RNG
    pub fn new(n: i64, trials: i64) -> Result<Self> {
        let mut rng = StdRng::from_entropy();
        Self::run(n, trials, SamplingPolicy::default(), &mut rng)
    }

    pub fn run<R: Rng + ?Sized>(
        n: i64,
        trials: i64,
        policy: SamplingPolicy,
        rng: &mut R,
    ) -> Result<Self> {
        if n <= 0 {
            return Err(PercolationError::invalid(format!(
                "grid size must be positive, got {}",
                n
            )));
        }
        if trials <= 0 {
            return Err(PercolationError::invalid(format!(
                "number of trials must be positive, got {}",
                trials
            )));
        }

        let start = Instant::now();
        let mut thresholds = Vec::with_capacity(trials as usize);
        for trial in 0..trials {
            // Fresh grid per trial, nothing carries over
            let mut grid = PercolationGrid::new(n)?;
            match policy {
                SamplingPolicy::AllSites => open_uniform(&mut grid, rng)?,
                SamplingPolicy::ClosedSites => open_permuted(&mut grid, rng)?,
            }
            let threshold = grid.open_fraction();
            debug!("trial {}: threshold {:.6}", trial, threshold);
            thresholds.push(threshold);
        }

        let stats = Self {
            n: n as usize,
            thresholds,
            elapsed_secs: start.elapsed().as_secs_f64(),
        };
        info!(
            "{} trials on {}x{} ({}): mean {:.6}, stddev {:.6}",
            stats.trials(),
            stats.n,
            stats.n,
            policy.name(),
            stats.mean(),
            stats.stddev()
        );
        Ok(stats)
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Per-trial open fractions, in trial order
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn mean(&self) -> f64 {
        self.thresholds.iter().sum::<f64>() / self.thresholds.len() as f64
    }

    /// Sample standard deviation. NaN for a single trial.
    pub fn stddev(&self) -> f64 {
        let t = self.thresholds.len();
        if t < 2 {
            return f64::NAN;
        }
        let mean = self.mean();
        let sum_sq: f64 = self.thresholds.iter().map(|x| (x - mean) * (x - mean)).sum();
        (sum_sq / (t - 1) as f64).sqrt()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.thresholds.len() as f64).sqrt()
    }

    pub fn confidence_low(&self) -> f64 {
        self.mean() - self.half_width()
    }

    pub fn confidence_high(&self) -> f64 {
        self.mean() + self.half_width()
    }

    /// Wall-clock seconds spent running the trials
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            n: self.n,
            trials: self.trials(),
            mean: self.mean(),
            stddev: self.stddev(),
            confidence_low: self.confidence_low(),
            confidence_high: self.confidence_high(),
            elapsed_secs: self.elapsed_secs,
        }
    }
}

/// Open uniformly random coordinates until the grid percolates. Drawing an
/// already-open site is a no-op; a full grid always percolates.
fn open_uniform<R: Rng + ?Sized>(grid: &mut PercolationGrid, rng: &mut R) -> Result<()> {
    let n = grid.size() as i64;
    while !grid.percolates() {
        let row = rng.gen_range(0..n);
        let col = rng.gen_range(0..n);
        grid.open(row, col)?;
    }
    Ok(())
}

/// Open closed sites in a random order until the grid percolates
fn open_permuted<R: Rng + ?Sized>(grid: &mut PercolationGrid, rng: &mut R) -> Result<()> {
    let n = grid.size();
    let mut order: Vec<usize> = (0..n * n).collect();
    order.shuffle(rng);
    for id in order {
        if grid.percolates() {
            break;
        }
        grid.open((id / n) as i64, (id % n) as i64)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_invalid_arguments() {
        let mut rng = seeded(1);
        for (n, t) in [(0, 10), (-1, 10), (10, 0), (10, -1)] {
            let err = PercolationStats::run(n, t, SamplingPolicy::AllSites, &mut rng).unwrap_err();
            assert!(matches!(err, PercolationError::InvalidArgument(_)));
        }
        assert!(PercolationStats::new(0, 5).is_err());
    }

    #[test]
    fn test_single_site_grid_threshold_is_one() {
        let stats = PercolationStats::run(1, 5, SamplingPolicy::AllSites, &mut seeded(3)).unwrap();
        assert_eq!(stats.trials(), 5);
        assert!(stats.thresholds().iter().all(|&t| t == 1.0));
        assert_eq!(stats.mean(), 1.0);
        assert_eq!(stats.stddev(), 0.0);
        assert_eq!(stats.confidence_low(), stats.confidence_high());
    }

    #[test]
    fn test_single_trial_stddev_is_nan() {
        let stats = PercolationStats::run(10, 1, SamplingPolicy::AllSites, &mut seeded(7)).unwrap();
        assert!(stats.mean() > 0.0 && stats.mean() <= 1.0);
        assert!(stats.stddev().is_nan());
        assert!(stats.confidence_low().is_nan());
        assert!(stats.confidence_high().is_nan());
    }

    #[test]
    fn test_mean_near_known_threshold() {
        let stats = PercolationStats::run(20, 100, SamplingPolicy::AllSites, &mut seeded(42)).unwrap();
        let mean = stats.mean();
        assert!(mean > 0.55 && mean < 0.65, "mean {}", mean);
        assert!(stats.stddev() > 0.0);
        assert!(stats.confidence_high() >= stats.confidence_low());
        assert!(stats.confidence_low() <= mean && mean <= stats.confidence_high());
    }

    #[test]
    fn test_closed_sites_policy_agrees() {
        let stats =
            PercolationStats::run(20, 100, SamplingPolicy::ClosedSites, &mut seeded(42)).unwrap();
        let mean = stats.mean();
        assert!(mean > 0.55 && mean < 0.65, "mean {}", mean);
    }

    #[test]
    fn test_thresholds_are_valid_fractions() {
        let n = 8;
        let stats = PercolationStats::run(n, 30, SamplingPolicy::AllSites, &mut seeded(11)).unwrap();
        let sites = (n * n) as f64;
        for &t in stats.thresholds() {
            // At least one site per row is needed to percolate
            assert!(t >= n as f64 / sites && t <= 1.0);
            let opened = t * sites;
            assert!((opened - opened.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_same_seed_same_result() {
        let a = PercolationStats::run(12, 20, SamplingPolicy::AllSites, &mut seeded(99)).unwrap();
        let b = PercolationStats::run(12, 20, SamplingPolicy::AllSites, &mut seeded(99)).unwrap();
        assert_eq!(a.thresholds(), b.thresholds());
    }

    #[test]
    fn test_summary_matches_accessors() {
        let stats = PercolationStats::run(6, 10, SamplingPolicy::ClosedSites, &mut seeded(5)).unwrap();
        let summary = stats.summary();
        assert_eq!(summary.n, 6);
        assert_eq!(summary.trials, 10);
        assert_eq!(summary.mean, stats.mean());
        assert_eq!(summary.stddev, stats.stddev());
        assert_eq!(summary.confidence_low, stats.confidence_low());
        assert_eq!(summary.confidence_high, stats.confidence_high());
        assert!(summary.elapsed_secs >= 0.0);
    }
}
