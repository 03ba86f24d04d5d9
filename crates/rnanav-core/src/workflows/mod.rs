//! # Workflows Module
//!
//! High-level entry points for users of the library. Each workflow accepts a
//! fully built configuration from [`crate::engine::config`], drives the
//! kernel and hands back owned result records.
//!
//! - **Simulation** ([`simulate`]) - One evaluation, stamped with the wall-clock time
//! - **Parameter Sweep** ([`sweep`]) - Repeated evaluation along one environmental axis,
//!   in parallel when the `parallel` feature is enabled

pub mod simulate;
pub mod sweep;
