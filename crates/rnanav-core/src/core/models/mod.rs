//! # Models Module
//!
//! Plain data types shared by every layer of the estimator: the validated
//! input sequence, the environmental conditions and the result records.
//!
//! - [`sequence`] - Canonical `{A, U, G, C}` sequence with GC accounting
//! - [`conditions`] - Ion concentration, temperature and crowding inputs
//! - [`result`] - Efficiency label, audit detail, kinetic profile and the timestamped result

pub mod conditions;
pub mod result;
pub mod sequence;
