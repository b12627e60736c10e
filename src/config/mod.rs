// src/config/mod.rs
//! Pipeline configuration: the parameter record a caller fills in
//!
//! [`PipelineConfig`] gathers everything one run needs: grid settings,
//! artifact amplitudes, filter chain stages, and an optional noise seed.
//! Defaults reproduce the standard demonstration scenario (250 Hz, 10 s,
//! all three stages enabled). Values come from code, or from a TOML file
//! through [`loader`].

pub mod constants;
pub mod loader;

use serde::{Deserialize, Serialize};

use crate::error::EcgResult;
use crate::processing::chain::{FilterChainConfig, CHAIN_ORDER};
use crate::processing::design::design;
use crate::synthesis::artifacts::ArtifactSpec;
use crate::utils::validation::{ensure_non_negative, ensure_positive};
use constants::synthesis::{DEFAULT_DURATION_S, DEFAULT_SAMPLE_RATE_HZ};

/// How much signal to synthesize and at what rate
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Sampling rate in Hz
    pub sample_rate_hz: f64,
    /// Signal duration in seconds
    pub duration_s: f64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
            duration_s: DEFAULT_DURATION_S,
        }
    }
}

/// Complete parameter record for one pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Time-grid settings
    pub synthesis: SynthesisConfig,
    /// Disturbance amplitudes
    pub artifacts: ArtifactSpec,
    /// Filter chain stages
    pub chain: FilterChainConfig,
    /// Noise seed; `None` means draw one from entropy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl PipelineConfig {
    /// Checks every setting the way the pipeline itself would
    ///
    /// Includes a trial design of each enabled filter stage at the
    /// configured sample rate, so a bad file is rejected before any signal
    /// work starts.
    pub fn validate(&self) -> EcgResult<()> {
        ensure_positive(self.synthesis.sample_rate_hz, "sample_rate_hz")?;
        ensure_positive(self.synthesis.duration_s, "duration_s")?;
        ensure_non_negative(self.artifacts.net_amplitude, "net_amplitude")?;
        ensure_non_negative(self.artifacts.noise_amplitude, "noise_amplitude")?;

        for kind in CHAIN_ORDER {
            if let Some(spec) = self.chain.stage_spec(kind) {
                design(spec, self.synthesis.sample_rate_hz)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EcgError;

    #[test]
    fn test_default_matches_reference_scenario() {
        let config = PipelineConfig::default();
        assert_eq!(config.synthesis.sample_rate_hz, 250.0);
        assert_eq!(config.synthesis.duration_s, 10.0);
        assert_eq!(config.artifacts.net_amplitude, 0.5);
        assert_eq!(config.artifacts.noise_amplitude, 0.2);
        assert!(config.chain.low_pass.enabled);
        assert!(config.chain.high_pass.enabled);
        assert!(config.chain.notch.enabled);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_default_validates() {
        assert!(PipelineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_catches_unrealizable_stage() {
        let mut config = PipelineConfig::default();
        config.chain.low_pass.cutoff_hz = 200.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, EcgError::InvalidSpec { .. }));
    }

    #[test]
    fn test_validate_skips_disabled_stages() {
        // an unrealizable cutoff on a disabled stage is never designed
        let mut config = PipelineConfig::default();
        config.chain.low_pass.cutoff_hz = 200.0;
        config.chain.low_pass.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_catches_bad_scalars() {
        let mut config = PipelineConfig::default();
        config.synthesis.sample_rate_hz = 0.0;
        assert!(config.validate().is_err());

        let mut config = PipelineConfig::default();
        config.synthesis.duration_s = -1.0;
        assert!(config.validate().is_err());

        let mut config = PipelineConfig::default();
        config.artifacts.noise_amplitude = -0.2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = PipelineConfig::default();
        config.seed = Some(7);
        config.chain.notch.center_hz = 60.0;

        let text = toml::to_string(&config).unwrap();
        let parsed: PipelineConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: PipelineConfig = toml::from_str(
            r#"
            seed = 99

            [synthesis]
            sample_rate_hz = 500.0
            "#,
        )
        .unwrap();

        assert_eq!(config.synthesis.sample_rate_hz, 500.0);
        assert_eq!(config.synthesis.duration_s, 10.0);
        assert_eq!(config.artifacts, ArtifactSpec::default());
        assert_eq!(config.chain, FilterChainConfig::default());
        assert_eq!(config.seed, Some(99));
    }
}
