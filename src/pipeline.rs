// src/pipeline.rs
//! End-to-end entry points mirroring what an interactive caller needs
//!
//! A control surface drives the library through two calls: build a corrupted
//! observation, then clean it with whatever chain settings the user picked.
//! Both are thin compositions of the public building blocks; callers that
//! want the clean ground truth or individual stages use those blocks
//! directly.

use rand::Rng;
use tracing::debug;

use crate::config::constants::synthesis::DEFAULT_HEART_RATE_BPM;
use crate::error::EcgResult;
use crate::processing::chain::{apply_chain, FilterChainConfig};
use crate::signal::{Signal, TimeGrid};
use crate::synthesis::artifacts::{inject, ArtifactSpec};
use crate::synthesis::waveform::synthesize;

/// Synthesizes a corrupted observation over a fresh time grid
///
/// Builds the grid, synthesizes the clean template at the standard
/// [`DEFAULT_HEART_RATE_BPM`], and injects artifacts at the given
/// amplitudes, drawing noise from `rng`. Returns the grid together with the
/// corrupted signal. Callers that also need the clean ground truth call
/// [`synthesize`] and [`inject`] themselves.
pub fn synthesize_corrupted<R: Rng>(
    sample_rate_hz: f64,
    duration_s: f64,
    net_amplitude: f64,
    noise_amplitude: f64,
    rng: &mut R,
) -> EcgResult<(TimeGrid, Signal)> {
    let grid = TimeGrid::new(sample_rate_hz, duration_s)?;
    let clean = synthesize(&grid, DEFAULT_HEART_RATE_BPM)?;
    let spec = ArtifactSpec {
        net_amplitude,
        noise_amplitude,
    };
    let corrupted = inject(&clean, &grid, &spec, rng)?;

    debug!(
        "synthesized {} corrupted samples at {sample_rate_hz} Hz over {duration_s} s",
        corrupted.len()
    );
    Ok((grid, corrupted))
}

/// Cleans `signal` with the configured filter chain
///
/// Equivalent to [`apply_chain`]; this name mirrors the call an interactive
/// caller makes after adjusting chain settings.
pub fn filter_signal(
    signal: &[f64],
    sample_rate_hz: f64,
    config: &FilterChainConfig,
) -> EcgResult<Signal> {
    apply_chain(signal, sample_rate_hz, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants::artifacts::{DRIFT_AMPLITUDE, DRIFT_FREQUENCY_HZ};
    use crate::error::EcgError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::PI;

    #[test]
    fn test_reference_scenario_dimensions() {
        let mut rng = StdRng::seed_from_u64(42);
        let (grid, corrupted) = synthesize_corrupted(250.0, 10.0, 0.5, 0.2, &mut rng).unwrap();

        assert_eq!(grid.sample_count(), 2500);
        assert_eq!(corrupted.len(), 2500);
        assert!((grid.sample_rate_hz() - 250.0).abs() < 1e-12);
    }

    #[test]
    fn test_same_seed_reproduces_output() {
        let mut first_rng = StdRng::seed_from_u64(7);
        let (_, first) = synthesize_corrupted(250.0, 2.0, 0.5, 0.2, &mut first_rng).unwrap();

        let mut second_rng = StdRng::seed_from_u64(7);
        let (_, second) = synthesize_corrupted(250.0, 2.0, 0.5, 0.2, &mut second_rng).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_amplitudes_leave_template_plus_drift() {
        let mut rng = StdRng::seed_from_u64(1);
        let (grid, corrupted) = synthesize_corrupted(250.0, 2.0, 0.0, 0.0, &mut rng).unwrap();
        let clean = synthesize(&grid, DEFAULT_HEART_RATE_BPM).unwrap();

        for i in 0..grid.sample_count() {
            let drift =
                DRIFT_AMPLITUDE * (2.0 * PI * DRIFT_FREQUENCY_HZ * grid.instant(i)).sin();
            assert!((corrupted[i] - clean[i] - drift).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = synthesize_corrupted(0.0, 10.0, 0.5, 0.2, &mut rng).unwrap_err();
        assert!(matches!(err, EcgError::InvalidParameter { .. }));

        assert!(synthesize_corrupted(250.0, -1.0, 0.5, 0.2, &mut rng).is_err());
        assert!(synthesize_corrupted(250.0, 10.0, -0.1, 0.2, &mut rng).is_err());
        assert!(synthesize_corrupted(250.0, 10.0, 0.5, f64::NAN, &mut rng).is_err());
    }

    #[test]
    fn test_filter_signal_matches_apply_chain() {
        let mut rng = StdRng::seed_from_u64(9);
        let (grid, corrupted) = synthesize_corrupted(250.0, 2.0, 0.5, 0.2, &mut rng).unwrap();
        let config = FilterChainConfig::default();

        let via_facade = filter_signal(&corrupted, grid.sample_rate_hz(), &config).unwrap();
        let via_chain = apply_chain(&corrupted, grid.sample_rate_hz(), &config).unwrap();
        assert_eq!(via_facade, via_chain);
    }
}
