// src/synthesis/waveform.rs
//! Beat-based ECG template synthesis
//!
//! The clean signal is a superposition of three Gaussian bumps (P, R and
//! T waves) repeated once per heartbeat. Tails are never truncated, so
//! adjacent beats superpose exactly as the closed-form expression says.

use crate::config::constants::synthesis::*;
use crate::error::EcgResult;
use crate::signal::{Signal, TimeGrid};
use crate::utils::validation::ensure_positive;

/// (amplitude, center after beat onset, standard deviation), all per beat
const WAVE_COMPONENTS: [(f64, f64, f64); 3] = [
    (R_WAVE_AMPLITUDE, R_WAVE_CENTER_S, R_WAVE_SIGMA_S),
    (T_WAVE_AMPLITUDE, T_WAVE_CENTER_S, T_WAVE_SIGMA_S),
    (P_WAVE_AMPLITUDE, P_WAVE_CENTER_S, P_WAVE_SIGMA_S),
];

/// Synthesizes a clean periodic ECG template over the grid
///
/// Accumulates the P/R/T Gaussian components for each whole beat index
/// `k` in `0..floor(duration / beat_period)` onto the output. Pure and
/// deterministic for fixed inputs; output length equals the grid length.
pub fn synthesize(grid: &TimeGrid, beats_per_minute: f64) -> EcgResult<Signal> {
    ensure_positive(beats_per_minute, "beats_per_minute")?;

    let beat_period_s = 60.0 / beats_per_minute;
    let beat_count = (grid.duration_s() / beat_period_s).floor() as usize;

    let mut signal = vec![0.0; grid.sample_count()];
    for k in 0..beat_count {
        let onset_s = k as f64 * beat_period_s;
        for (i, sample) in signal.iter_mut().enumerate() {
            let tau = grid.instant(i) - onset_s;
            for (amplitude, center, sigma) in WAVE_COMPONENTS {
                *sample += gaussian_bump(tau, amplitude, center, sigma);
            }
        }
    }
    Ok(signal)
}

fn gaussian_bump(tau: f64, amplitude: f64, center: f64, sigma: f64) -> f64 {
    let offset = tau - center;
    amplitude * (-(offset * offset) / (2.0 * sigma * sigma)).exp()
}
