//! Core type system for compile-time checked physical quantities.
//!
//! `measurement-core` provides a zero-cost units model in which a unit is identified by a triple:
//!
//! - an exact rational scale ([`Ratio`]), e.g. `36/10` for hours,
//! - a power-of-ten exponent, e.g. `-3` for milli,
//! - a dimension vector over the seven SI base quantities ([`DimensionVector`] at runtime, [`Dim`] at the type
//!   level).
//!
//! A *unit* is a zero-sized marker type implementing [`Unit`]; a value tagged with a unit is a [`Quantity<U>`],
//! backed by an `f64`. Because the unit type fixes the whole triple, adding two different units or converting across
//! dimensions is a compile error, while [`Quantity::to`] converts between units of the same dimension with a factor
//! folded at compile time.
//!
//! Most users should depend on `measurement` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of dimensions (length vs time vs velocity, …) and of units within a dimension.
//! - Products, quotients and integer powers whose unit and dimension are derived by the type system
//!   ([`Prod`], [`Per`], [`Pow`]).
//! - Exact scale composition: `Per<Kilometre, Hour>` has the scale `10/36` with no floating-point drift.
//! - A runtime-checked companion, [`DynQuantity`], for units only known at runtime.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic on magnitudes (`Quantity` is `f64`).
//! - Parsing units from text or registries of units by name.
//! - Uncertainty tracking.
//!
//! # Quick start
//!
//! Convert between predefined units:
//!
//! ```rust
//! use measurement_core::units::length::{Kilometres, Metre};
//!
//! let km = Kilometres::new(1.25);
//! let m = km.to::<Metre>();
//! assert_eq!(m.value(), 1250.0);
//! ```
//!
//! Compose derived units with `*` and `/`:
//!
//! ```rust
//! use measurement_core::units::length::Metres;
//! use measurement_core::units::time::Hours;
//! use measurement_core::units::velocity::KilometrePerHour;
//!
//! let v = (Metres::new(15_000.0) / Hours::new(3.0)).to::<KilometrePerHour>();
//! assert!((v.value() - 5.0).abs() < 1e-12);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `measurement-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! measurement-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Quantity<U>`; serialization is the raw `f64` value only. Together with
//!   `std` it also provides [`serde_with_unit`].
//!
//! # Panics and errors
//!
//! The typed API does not return `Result`: mismatched units are compile errors, and arithmetic follows IEEE-754
//! (division by zero yields infinities or NaN). Unit constants whose scale overflows `i64` fail during constant
//! evaluation. [`DynQuantity`] reports incompatibilities as [`QuantityError`] values and logs each rejection at
//! `debug` level through the `log` facade.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

pub mod dimension;
mod dynamic;
pub mod error;
mod identity;
mod macros;
pub mod math;
mod quantity;
mod ratio;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{
    BaseDimension, Dim, Dimension, DimensionVector, Dimensionless, DivDim, MulDim, PowDim,
};
pub use dynamic::DynQuantity;
pub use error::QuantityError;
pub use identity::Identity;
pub use quantity::Quantity;
pub use ratio::Ratio;
pub use unit::{Per, Pow, Prod, Scalar, Unit};

#[cfg(all(feature = "serde", feature = "std"))]
pub use quantity::serde_with_unit;

/// Type-level integers used for dimension exponents and [`Pow`].
pub use typenum;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by dimension).
pub mod units;

pub use units::length;
pub use units::scalar;
pub use units::time;
pub use units::velocity;
