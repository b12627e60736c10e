// src/synthesis/artifacts.rs
//! Disturbance injection onto a clean signal
//!
//! Three independent sources model the clinically common ECG artifacts:
//! broadband Gaussian noise (muscle/thermal), a slow baseline drift
//! (respiration, fixed 0.6 mV at 0.2 Hz) and 50 Hz powerline interference.
//! Only the noise is stochastic; it draws from an injected generator so a
//! seeded run reproduces its output exactly.

use std::f64::consts::PI;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::constants::artifacts::*;
use crate::error::EcgResult;
use crate::signal::{ensure_signal_matches_grid, Signal, TimeGrid};
use crate::utils::validation::ensure_non_negative;

/// Tunable artifact amplitudes
///
/// Drift amplitude/frequency and the powerline frequency are fixed named
/// constants (`config::constants::artifacts`), not fields here.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtifactSpec {
    /// Powerline interference amplitude (mV), ≥ 0
    pub net_amplitude: f64,
    /// Broadband noise standard deviation (mV), ≥ 0
    pub noise_amplitude: f64,
}

impl Default for ArtifactSpec {
    fn default() -> Self {
        Self {
            net_amplitude: DEFAULT_POWERLINE_AMPLITUDE,
            noise_amplitude: DEFAULT_NOISE_AMPLITUDE,
        }
    }
}

/// Adds broadband noise, baseline drift and powerline interference
///
/// Consumes one Gaussian draw per sample from `rng`; zero amplitudes
/// degenerate cleanly to "no artifact" for that source. The fixed baseline
/// drift is always present.
pub fn inject<R: Rng>(
    clean: &[f64],
    grid: &TimeGrid,
    spec: &ArtifactSpec,
    rng: &mut R,
) -> EcgResult<Signal> {
    ensure_non_negative(spec.net_amplitude, "net_amplitude")?;
    ensure_non_negative(spec.noise_amplitude, "noise_amplitude")?;
    ensure_signal_matches_grid(clean, grid)?;

    let mut corrupted = Vec::with_capacity(clean.len());
    for (i, &sample) in clean.iter().enumerate() {
        let t = grid.instant(i);
        let noise = spec.noise_amplitude * gaussian_deviate(rng);
        let drift = DRIFT_AMPLITUDE * (2.0 * PI * DRIFT_FREQUENCY_HZ * t).sin();
        let powerline = spec.net_amplitude * (2.0 * PI * POWERLINE_FREQUENCY_HZ * t).sin();
        corrupted.push(sample + noise + drift + powerline);
    }
    Ok(corrupted)
}

/// Standard normal deviate via the Box-Muller transform
///
/// `1 - u` keeps the logarithm argument in (0, 1], since `gen` samples
/// the half-open [0, 1).
fn gaussian_deviate<R: Rng>(rng: &mut R) -> f64 {
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}
