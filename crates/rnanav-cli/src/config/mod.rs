//! Layered run configuration: built-in defaults, an optional TOML file,
//! `-S KEY=VALUE` overrides and finally explicit command-line flags.

pub mod builder;
pub mod defaults;
pub mod file;

pub use builder::{RunSettings, build_settings};
