//! Utility functions for signal plotting.
//!
//! # Modules
//!
//! - [`signal_math`] - Decibel conversion, time vectors, spectrum reordering and phase unwrapping
//! - [`generation`] - Pure-tone test signal generation

pub mod generation;
pub mod signal_math;

pub use generation::*;
pub use signal_math::*;
