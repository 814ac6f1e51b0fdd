//! Time units.
//!
//! The canonical scaling unit for this dimension is [`Second`]. Sub-multiples only move the power-of-ten exponent;
//! [`Hour`] combines the exact scale `36/10` with exponent `3`, i.e. `3.6 × 10³ s`.
//!
//! ```rust
//! use measurement_core::units::time::{Hour, Hours, Second};
//!
//! let half_hour = Hours::new(0.5);
//! let seconds = half_hour.to::<Second>();
//! assert_eq!(seconds.value(), 1800.0);
//!
//! let back = seconds.to::<Hour>();
//! assert!((back.value() - 0.5).abs() < 1e-12);
//! ```

pub use crate::dimension::Time;
use crate::{Quantity, Unit};
use measurement_derive::Unit;

/// Marker trait for any [`Unit`] whose dimension is [`Time`].
pub trait TimeUnit: Unit<Dim = Time> {}
impl<T: Unit<Dim = Time>> TimeUnit for T {}

/// Seconds (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "s", dimension = Time)]
pub struct Second;
/// A quantity measured in seconds.
pub type Seconds = Quantity<Second>;
/// A constant representing one second.
pub const SEC: Seconds = Seconds::new(1.0);

/// Milliseconds (`1 ms = 10^-3 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ms", dimension = Time, exponent = -3)]
pub struct Millisecond;
/// A quantity measured in milliseconds.
pub type Milliseconds = Quantity<Millisecond>;
/// A constant representing one millisecond.
pub const MILLISEC: Milliseconds = Milliseconds::new(1.0);

/// Microseconds (`1 µs = 10^-6 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "µs", dimension = Time, exponent = -6)]
pub struct Microsecond;
/// A quantity measured in microseconds.
pub type Microseconds = Quantity<Microsecond>;
/// A constant representing one microsecond.
pub const MICROSEC: Microseconds = Microseconds::new(1.0);

/// Hours (`36/10 × 10^3 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "h", dimension = Time, ratio = (36, 10), exponent = 3)]
pub struct Hour;
/// A quantity measured in hours.
pub type Hours = Quantity<Hour>;
/// A constant representing one hour.
pub const HOUR: Hours = Hours::new(1.0);

crate::impl_unit_conversions!(Second, Millisecond, Microsecond, Hour);
