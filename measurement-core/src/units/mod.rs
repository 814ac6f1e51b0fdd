//! Predefined unit modules grouped by dimension.
//!
//! The catalog lives in `measurement-core` so that conversions between its units can be implemented without running
//! into Rust's orphan rules.
//!
//! ## Modules
//!
//! - [`length`]: metre (canonical) and kilometre.
//! - [`time`]: second (canonical), millisecond, microsecond and hour.
//! - [`velocity`]: velocity aliases (`Length / Time`) built from [`length`] and [`time`].
//! - [`scalar`]: plain numbers as the dimensionless [`crate::Scalar`] unit.

pub mod length;
pub mod scalar;
pub mod time;
pub mod velocity;
