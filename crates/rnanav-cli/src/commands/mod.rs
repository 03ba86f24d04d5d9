pub mod simulate;
pub mod sweep;
