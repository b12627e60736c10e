// src/processing/mod.rs
//! Filter design, zero-phase application, chain orchestration and spectra

pub mod chain;
pub mod design;
pub mod spectrum;
pub mod zero_phase;

pub use chain::{apply_chain, FilterChainConfig, StageKind, CHAIN_ORDER};
pub use design::{design, DesignedFilter, FilterSpec};
pub use spectrum::{attenuation_db, periodogram, Spectrum};
pub use zero_phase::{apply_zero_phase, pad_length};
