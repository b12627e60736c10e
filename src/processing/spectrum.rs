// src/processing/spectrum.rs
//! Frequency-domain inspection of signals
//!
//! Cleaning claims are easiest to check in the frequency domain: a notch
//! that works shows up as a collapsed 50 Hz line, a working high-pass as a
//! collapsed sub-hertz band. This module computes a one-sided amplitude
//! spectrum and offers the small set of readouts the demo and the
//! integration tests need. It is diagnostic tooling, not part of the
//! filtering path itself.

use rustfft::num_complex::Complex64;
use rustfft::FftPlanner;

use crate::error::{EcgError, EcgResult};
use crate::utils::validation::ensure_positive;

/// One-sided amplitude spectrum of a real signal
///
/// Bin `k` covers frequency `k · resolution_hz`. Magnitudes are scaled so
/// a pure tone of amplitude `A` landing exactly on a bin reads back as `A`.
#[derive(Debug, Clone)]
pub struct Spectrum {
    magnitudes: Vec<f64>,
    resolution_hz: f64,
}

impl Spectrum {
    /// Frequency spacing between adjacent bins in Hz
    pub fn resolution_hz(&self) -> f64 {
        self.resolution_hz
    }

    /// Amplitude per bin, DC first, Nyquist last
    pub fn magnitudes(&self) -> &[f64] {
        &self.magnitudes
    }

    /// Amplitude of the bin nearest to `frequency_hz`
    ///
    /// Frequencies beyond the last bin clamp to it.
    pub fn magnitude_at(&self, frequency_hz: f64) -> f64 {
        let bin = (frequency_hz / self.resolution_hz).round().max(0.0) as usize;
        self.magnitudes[bin.min(self.magnitudes.len() - 1)]
    }

    /// Root-sum-square amplitude over all bins in `[low_hz, high_hz)`
    pub fn band_magnitude(&self, low_hz: f64, high_hz: f64) -> f64 {
        self.magnitudes
            .iter()
            .enumerate()
            .map(|(k, &m)| (k as f64 * self.resolution_hz, m))
            .filter(|&(f, _)| f >= low_hz && f < high_hz)
            .map(|(_, m)| m * m)
            .sum::<f64>()
            .sqrt()
    }
}

/// Computes the one-sided amplitude spectrum of `signal`
///
/// Fails with [`EcgError::InvalidParameter`] on an empty signal or a
/// non-positive sample rate.
pub fn periodogram(signal: &[f64], sample_rate_hz: f64) -> EcgResult<Spectrum> {
    ensure_positive(sample_rate_hz, "sample_rate_hz")?;
    if signal.is_empty() {
        return Err(EcgError::invalid_parameter(
            "signal",
            "cannot take the spectrum of an empty signal",
        ));
    }

    let n = signal.len();
    let mut buffer: Vec<Complex64> = signal.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    FftPlanner::new().plan_fft_forward(n).process(&mut buffer);

    // one-sided scaling: paired bins carry both halves of the energy
    let one_sided_len = n / 2 + 1;
    let magnitudes = buffer
        .iter()
        .take(one_sided_len)
        .enumerate()
        .map(|(k, x)| {
            let paired = k != 0 && !(n % 2 == 0 && k == n / 2);
            let scale = if paired { 2.0 } else { 1.0 } / n as f64;
            x.norm() * scale
        })
        .collect();

    Ok(Spectrum {
        magnitudes,
        resolution_hz: sample_rate_hz / n as f64,
    })
}

/// Attenuation in dB from a `before` amplitude to an `after` amplitude
///
/// Positive when the amplitude shrank. Infinite when `after` is zero.
pub fn attenuation_db(before: f64, after: f64) -> f64 {
    20.0 * (before / after).log10()
}
