// src/synthesis/mod.rs
//! Clean ECG template synthesis and artifact injection

pub mod artifacts;
pub mod waveform;

pub use artifacts::{inject, ArtifactSpec};
pub use waveform::synthesize;
