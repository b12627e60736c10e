//! ECG-Core: ECG signal synthesis and zero-phase filtering library
//!
//! This library synthesizes a realistic noisy ECG signal and cleans it with a
//! configurable chain of digital filters, so filter parameter choices can be
//! compared against a known ground truth. It features:
//!
//! - Beat-based ECG template synthesis over an evenly spaced time grid
//! - Reproducible artifact injection (broadband noise, baseline drift,
//!   powerline interference)
//! - 4th-order Butterworth low-pass/high-pass and 2nd-order notch design
//! - Zero-phase (forward-backward) filter application
//! - A fixed-order filter chain with per-stage enable switches
//! - FFT-based spectral readouts for before/after comparison
//!
//! # Quick Start
//!
//! ```rust
//! use ecg_core::pipeline::{filter_signal, synthesize_corrupted};
//! use ecg_core::processing::FilterChainConfig;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! fn main() -> Result<(), ecg_core::EcgError> {
//!     // Build 2 seconds of corrupted ECG at 250 Hz, reproducibly
//!     let mut rng = StdRng::seed_from_u64(42);
//!     let (grid, corrupted) = synthesize_corrupted(250.0, 2.0, 0.5, 0.2, &mut rng)?;
//!
//!     // Clean it with the default chain: low-pass, high-pass, notch
//!     let config = FilterChainConfig::default();
//!     let filtered = filter_signal(&corrupted, grid.sample_rate_hz(), &config)?;
//!
//!     assert_eq!(filtered.len(), grid.sample_count());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod pipeline;
pub mod processing;
pub mod signal;
pub mod synthesis;
pub mod utils;

// Re-export commonly used types for convenience
pub use error::{EcgError, EcgResult};
pub use pipeline::{filter_signal, synthesize_corrupted};
pub use processing::{
    apply_chain, apply_zero_phase, design, DesignedFilter, FilterChainConfig, FilterSpec,
    StageKind, CHAIN_ORDER,
};
pub use signal::{Signal, TimeGrid};
pub use synthesis::{inject, synthesize, ArtifactSpec};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn version_info() -> VersionInfo {
    VersionInfo {
        name: NAME.to_string(),
        version: VERSION.to_string(),
        description: "ECG signal synthesis and zero-phase filtering library".to_string(),
        features: vec![
            "Beat-based ECG template synthesis".to_string(),
            "Reproducible artifact injection".to_string(),
            "Butterworth and notch filter design".to_string(),
            "Zero-phase filter application".to_string(),
            "Fixed-order filter chain".to_string(),
            "FFT-based spectral readouts".to_string(),
        ],
    }
}

/// Library version information
#[derive(Debug, Clone)]
pub struct VersionInfo {
    /// Library name
    pub name: String,
    /// Version string
    pub version: String,
    /// Description
    pub description: String,
    /// List of features
    pub features: Vec<String>,
}
