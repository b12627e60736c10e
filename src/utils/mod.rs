// src/utils/mod.rs
//! Shared utility functions

pub mod validation;
