// src/config/constants.rs
//! Named constants for the synthesis template, artifacts, and filter chain
//!
//! The reference parameter ranges record the operating envelope of the
//! original interactive demo; the library enforces only the hard constraints
//! (positivity and Nyquist bounds), so values outside these ranges are legal
//! where physically meaningful.

/// ECG template and synthesis constants
pub mod synthesis {
    /// Heart rate used when the caller does not supply one
    pub const DEFAULT_HEART_RATE_BPM: f64 = 75.0;

    /// R-wave amplitude (mV)
    pub const R_WAVE_AMPLITUDE: f64 = 1.0;
    /// R-wave center, seconds after beat onset
    pub const R_WAVE_CENTER_S: f64 = 0.3;
    /// R-wave Gaussian standard deviation in seconds
    pub const R_WAVE_SIGMA_S: f64 = 0.02;

    /// T-wave amplitude (mV)
    pub const T_WAVE_AMPLITUDE: f64 = 0.4;
    /// T-wave center, seconds after beat onset
    pub const T_WAVE_CENTER_S: f64 = 0.6;
    /// T-wave Gaussian standard deviation in seconds
    pub const T_WAVE_SIGMA_S: f64 = 0.08;

    /// P-wave amplitude (mV)
    pub const P_WAVE_AMPLITUDE: f64 = 0.2;
    /// P-wave center, seconds after beat onset
    pub const P_WAVE_CENTER_S: f64 = 0.1;
    /// P-wave Gaussian standard deviation in seconds
    pub const P_WAVE_SIGMA_S: f64 = 0.05;

    /// Default sampling rate in Hz
    pub const DEFAULT_SAMPLE_RATE_HZ: f64 = 250.0;
    /// Lower end of the reference sampling-rate range
    pub const MIN_SAMPLE_RATE_HZ: f64 = 100.0;
    /// Upper end of the reference sampling-rate range
    pub const MAX_SAMPLE_RATE_HZ: f64 = 500.0;
    /// Default signal duration in seconds
    pub const DEFAULT_DURATION_S: f64 = 10.0;
}

/// Disturbance-source constants
pub mod artifacts {
    /// Powerline interference frequency in Hz (European mains)
    pub const POWERLINE_FREQUENCY_HZ: f64 = 50.0;

    /// Baseline-drift amplitude (mV); fixed, not user-tunable
    pub const DRIFT_AMPLITUDE: f64 = 0.6;
    /// Baseline-drift frequency in Hz; fixed, not user-tunable
    pub const DRIFT_FREQUENCY_HZ: f64 = 0.2;

    /// Default powerline interference amplitude (mV)
    pub const DEFAULT_POWERLINE_AMPLITUDE: f64 = 0.5;
    /// Upper end of the reference powerline-amplitude range
    pub const MAX_POWERLINE_AMPLITUDE: f64 = 1.0;

    /// Default broadband noise standard deviation (mV)
    pub const DEFAULT_NOISE_AMPLITUDE: f64 = 0.2;
    /// Upper end of the reference noise-amplitude range
    pub const MAX_NOISE_AMPLITUDE: f64 = 0.5;
}

/// Filter design and application constants
pub mod filters {
    /// Butterworth order for the low-pass and high-pass stages
    pub const BUTTERWORTH_ORDER: usize = 4;

    /// Edge padding is this multiple of the longer coefficient sequence
    pub const PAD_LENGTH_FACTOR: usize = 3;

    /// Default low-pass cutoff in Hz
    pub const DEFAULT_LOW_PASS_CUTOFF_HZ: f64 = 40.0;
    /// Lower end of the reference low-pass cutoff range
    pub const MIN_LOW_PASS_CUTOFF_HZ: f64 = 5.0;
    /// Upper end of the reference low-pass cutoff range
    pub const MAX_LOW_PASS_CUTOFF_HZ: f64 = 100.0;

    /// Default high-pass cutoff in Hz
    pub const DEFAULT_HIGH_PASS_CUTOFF_HZ: f64 = 0.5;
    /// Lower end of the reference high-pass cutoff range
    pub const MIN_HIGH_PASS_CUTOFF_HZ: f64 = 0.01;
    /// Upper end of the reference high-pass cutoff range
    pub const MAX_HIGH_PASS_CUTOFF_HZ: f64 = 2.0;

    /// Default notch center frequency in Hz
    pub const DEFAULT_NOTCH_CENTER_HZ: f64 = 50.0;
    /// Lower end of the reference notch-center range
    pub const MIN_NOTCH_CENTER_HZ: f64 = 40.0;
    /// Upper end of the reference notch-center range
    pub const MAX_NOTCH_CENTER_HZ: f64 = 60.0;

    /// Default notch −3 dB bandwidth in Hz
    pub const DEFAULT_NOTCH_BANDWIDTH_HZ: f64 = 1.0;
    /// Lower end of the reference notch-bandwidth range
    pub const MIN_NOTCH_BANDWIDTH_HZ: f64 = 0.5;
    /// Upper end of the reference notch-bandwidth range
    pub const MAX_NOTCH_BANDWIDTH_HZ: f64 = 5.0;
}
