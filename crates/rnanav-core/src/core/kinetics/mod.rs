//! # Kinetics Module
//!
//! Closed-form thermodynamic and kinetic relations of the coarse-grained
//! ribozyme model: base-stacking stability, Hill ion saturation, Gibbs free
//! energy, resonance amplification, Eyring release kinetics and the
//! diffusion limit.
//!
//! Every relation is a pure `#[inline]` function in [`potentials`]. The
//! calibration constants are empirical and reproduced exactly; they are not
//! tunable inputs.

pub mod potentials;
