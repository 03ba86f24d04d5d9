//! # Engine Module
//!
//! The computational heart of the estimator. [`kernel`] chains the closed-form
//! relations of [`crate::core::kinetics`] into a single pure evaluation:
//!
//! 1. Canonicalization (GC fraction, absolute temperature)
//! 2. Stacking stability and the diffusion limit
//! 3. Hill ion saturation and supra-optimal ion inhibition
//! 4. Gibbs free energy and resonance synergy
//! 5. Release kinetics, rate combination and classification
//!
//! Supporting pieces are the builder-style run configurations ([`config`]),
//! the engine error type ([`error`]) and a callback-based progress reporter
//! ([`progress`]) used by multi-point workflows.

pub mod config;
pub mod error;
pub mod kernel;
pub mod progress;
