//! # Core Module
//!
//! Stateless building blocks of the estimator.
//!
//! - **Data Models** ([`models`]) - Validated sequences, environmental conditions and result records
//! - **Kinetics** ([`kinetics`]) - The closed-form thermodynamic and kinetic relations
//! - **I/O** ([`io`]) - JSON audit export and CSV tabulation of sweeps
//!
//! Nothing in this module holds state between calls; every function is a
//! mapping from its arguments to its return value.

pub mod io;
pub mod kinetics;
pub mod models;
