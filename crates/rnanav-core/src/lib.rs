//! # RNA-Navigator Core Library
//!
//! A coarse-grained, closed-form estimator of ribozyme catalytic efficiency.
//! Given a nucleotide sequence, a divalent-ion concentration, a temperature
//! and a macromolecular crowding index, it estimates the folding free energy,
//! an observed cleavage rate and a discrete efficiency label, together with a
//! full audit of the intermediate quantities.
//!
//! This is an empirical parametric model, not a molecular-dynamics or
//! quantum-mechanical simulator.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Data models, the pure formula set and I/O helpers.
//! - **[`engine`]: The Logic Core.** The evaluation pipeline, configuration builders,
//!   error types and progress reporting.
//! - **[`workflows`]: The Public API.** Single simulations stamped with wall-clock
//!   time, and one-axis parameter sweeps.
//!
//! ```
//! use rnanav::core::models::sequence::Sequence;
//! use rnanav::engine::config::SimulationConfigBuilder;
//! use rnanav::workflows;
//!
//! let config = SimulationConfigBuilder::new()
//!     .sequence(Sequence::parse("GGGCGACUGAAGCGCCC").unwrap())
//!     .ion_concentration(10.0)
//!     .temperature(37.0)
//!     .crowding_index(25.0)
//!     .build()
//!     .unwrap();
//!
//! let result = workflows::simulate::run(&config).unwrap();
//! println!("{} at {:.2} min^-1", result.efficiency_label(), result.profile.observed_rate);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
