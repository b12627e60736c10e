// src/signal.rs
//! Time grid and signal primitives shared by every pipeline stage

use crate::error::{EcgError, EcgResult};
use crate::utils::validation::ensure_positive;

/// An ordered sequence of real-valued samples, one per [`TimeGrid`] instant
pub type Signal = Vec<f64>;

/// An evenly spaced grid of sample instants
///
/// Immutable once constructed. The grid owns the sampling geometry every
/// other component works against: `sample_count = floor(duration_s *
/// sample_rate_hz)` samples at instants `t_i = i / sample_rate_hz`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    sample_rate_hz: f64,
    duration_s: f64,
    sample_count: usize,
}

impl TimeGrid {
    /// Creates a grid from a sample rate and duration, both strictly positive
    pub fn new(sample_rate_hz: f64, duration_s: f64) -> EcgResult<Self> {
        ensure_positive(sample_rate_hz, "sample_rate_hz")?;
        ensure_positive(duration_s, "duration_s")?;

        let sample_count = (duration_s * sample_rate_hz).floor() as usize;
        Ok(Self {
            sample_rate_hz,
            duration_s,
            sample_count,
        })
    }

    /// Sample rate in Hz
    pub fn sample_rate_hz(&self) -> f64 {
        self.sample_rate_hz
    }

    /// Grid duration in seconds
    pub fn duration_s(&self) -> f64 {
        self.duration_s
    }

    /// Number of sample instants on the grid
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Nyquist frequency (half the sample rate) in Hz
    pub fn nyquist_hz(&self) -> f64 {
        self.sample_rate_hz / 2.0
    }

    /// Time of the `i`-th sample in seconds
    pub fn instant(&self, i: usize) -> f64 {
        i as f64 / self.sample_rate_hz
    }

    /// All sample instants in seconds, in order
    pub fn instants(&self) -> Vec<f64> {
        (0..self.sample_count).map(|i| self.instant(i)).collect()
    }
}

/// Root-mean-square amplitude of a signal; 0 for an empty signal
pub fn rms(signal: &[f64]) -> f64 {
    if signal.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = signal.iter().map(|x| x * x).sum();
    (sum_sq / signal.len() as f64).sqrt()
}

/// Checks the length invariant at a component boundary
///
/// Every signal crossing a component boundary must carry exactly one sample
/// per grid instant.
pub fn ensure_signal_matches_grid(signal: &[f64], grid: &TimeGrid) -> EcgResult<()> {
    if signal.len() != grid.sample_count() {
        return Err(EcgError::invalid_parameter(
            "signal",
            format!(
                "length {} does not match the grid's {} samples",
                signal.len(),
                grid.sample_count()
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_sample_count() {
        let grid = TimeGrid::new(250.0, 10.0).unwrap();
        assert_eq!(grid.sample_count(), 2500);
        assert_eq!(grid.nyquist_hz(), 125.0);

        // fractional products floor
        let grid = TimeGrid::new(250.0, 0.9999).unwrap();
        assert_eq!(grid.sample_count(), 249);
    }

    #[test]
    fn test_grid_instants() {
        let grid = TimeGrid::new(100.0, 0.05).unwrap();
        let t = grid.instants();
        assert_eq!(t.len(), 5);
        assert!((t[0] - 0.0).abs() < 1e-12);
        assert!((t[4] - 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_grid_rejects_bad_inputs() {
        assert!(TimeGrid::new(0.0, 10.0).is_err());
        assert!(TimeGrid::new(-250.0, 10.0).is_err());
        assert!(TimeGrid::new(250.0, 0.0).is_err());
        assert!(TimeGrid::new(f64::NAN, 10.0).is_err());
        assert!(TimeGrid::new(250.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_length_invariant_check() {
        let grid = TimeGrid::new(100.0, 1.0).unwrap();
        assert!(ensure_signal_matches_grid(&vec![0.0; 100], &grid).is_ok());
        let err = ensure_signal_matches_grid(&vec![0.0; 99], &grid).unwrap_err();
        assert!(matches!(err, EcgError::InvalidParameter { .. }));
    }

    #[test]
    fn test_rms() {
        assert_eq!(rms(&[]), 0.0);
        assert!((rms(&[3.0, -3.0, 3.0, -3.0]) - 3.0).abs() < 1e-12);
        let sine: Vec<f64> = (0..1000)
            .map(|i| (2.0 * std::f64::consts::PI * i as f64 / 100.0).sin())
            .collect();
        assert!((rms(&sine) - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-3);
    }
}
