//! Physical quantities whose unit and dimension are checked at compile time.
//!
//! `measurement` is the user-facing crate in this workspace. It re-exports the full API from `measurement-core` plus
//! the predefined units (lengths, times, velocities, plain scalars).
//!
//! The core idea is: a value is always a `Quantity<U>`, where `U` is a zero-sized type describing the unit. The unit
//! carries an exact rational scale, a power-of-ten exponent and a seven-component SI dimension vector, all at compile
//! time, with no runtime overhead beyond an `f64`.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible units: you can't add metres to seconds, nor seconds to milliseconds without an
//!   explicit conversion.
//! - Makes unit conversion explicit and type-checked (`to::<TargetUnit>()`), refusing conversions across dimensions.
//! - Derives the unit of products, quotients and integer powers in the type system.
//!
//! # What this crate does not try to solve
//!
//! - Parsing units from text, or registries of units by name.
//! - Exact arithmetic: quantities are backed by `f64`.
//! - Uncertainty tracking.
//!
//! # Quick start
//!
//! Convert between units of the same dimension:
//!
//! ```rust
//! use measurement::{Millisecond, Seconds};
//!
//! let t = Seconds::new(3.0);
//! assert_eq!(t.to::<Millisecond>().value(), 3000.0);
//! ```
//!
//! Compose and use derived units (velocity = length / time):
//!
//! ```rust
//! use measurement::{KilometrePerHour, Metre, MetresPerSecond, Seconds};
//!
//! let v = MetresPerSecond::new(5.0);
//! let d = (v * Seconds::new(3.0)).to::<Metre>();
//! assert_eq!(d.value(), 15.0);
//! assert!((v.to::<KilometrePerHour>().value() - 18.0).abs() < 1e-12);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use measurement::{Kilometres, Seconds};
//!
//! let d = Kilometres::new(1.0);
//! let t = Seconds::new(1.0);
//! let _ = d + t; // cannot add different unit types
//! ```
//!
//! ```compile_fail
//! use measurement::{Milliseconds, Seconds};
//!
//! // same dimension, different scale: convert first
//! let _ = Seconds::new(3.0) + Milliseconds::new(5.0);
//! ```
//!
//! ```compile_fail
//! use measurement::{Metres, Second};
//!
//! let _ = Metres::new(1.0).to::<Second>(); // no conversion across dimensions
//! ```
//!
//! ```compile_fail
//! use measurement::{Metres, Seconds};
//!
//! let _ = Metres::new(1.0) < Seconds::new(1.0);
//! ```
//!
//! # Runtime-checked quantities
//!
//! When the unit is only known at runtime, [`DynQuantity`] performs the same checks and returns [`QuantityError`]:
//!
//! ```rust
//! use measurement::{DynQuantity, Microsecond, Milliseconds, QuantityError, Seconds, Unit};
//!
//! let a = DynQuantity::from(Seconds::new(3.0));
//! let b = DynQuantity::from(Milliseconds::new(5.0));
//! assert!(matches!(a.checked_add(b), Err(QuantityError::UnitMismatch { .. })));
//!
//! let sum = a.convert_to(b.identity())?.checked_add(b)?;
//! let us = sum.convert_to(Microsecond::IDENTITY)?;
//! assert_eq!(us.value(), 3_005_000.0);
//! # Ok::<(), QuantityError>(())
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules (also re-exported at the crate root for convenience):
//!
//! - `measurement::length` (metres, kilometres)
//! - `measurement::time` (seconds, milliseconds, microseconds, hours)
//! - `measurement::velocity` (`Length / Time` aliases)
//! - `measurement::scalar` (plain numbers)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `measurement-core`.
//! - `serde`: enables `serde` support for `Quantity<U>`; serialization is the raw `f64` value only.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! measurement = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! The typed API reports misuse at compile time and never returns `Result`. Arithmetic follows IEEE-754 (NaN and
//! infinities propagate). Errors only appear in the runtime-checked API, as [`QuantityError`].
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use measurement_core::*;

/// Derive macro used by `measurement-core` to define unit marker types.
///
/// This macro expands in terms of `crate::Unit` and `crate::Ratio`, so it is intended for use inside
/// `measurement-core` (or crates exposing the same crate-root API). Most users should not need this.
pub use measurement_derive::Unit;

pub use measurement_core::units::length;
pub use measurement_core::units::scalar;
pub use measurement_core::units::time;
pub use measurement_core::units::velocity;

pub use measurement_core::units::length::*;
pub use measurement_core::units::scalar::*;
pub use measurement_core::units::time::*;
pub use measurement_core::units::velocity::*;
