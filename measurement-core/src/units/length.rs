//! Length units.
//!
//! The canonical scaling unit for this dimension is [`Metre`]. [`Kilometre`] keeps the metre's scale and shifts the
//! power-of-ten exponent by three.
//!
//! ```rust
//! use measurement_core::units::length::{Kilometres, Metre};
//!
//! let km = Kilometres::new(1.25);
//! let m = km.to::<Metre>();
//! assert_eq!(m.value(), 1250.0);
//! ```

pub use crate::dimension::Length;
use crate::{Quantity, Unit};
use measurement_derive::Unit;

/// Marker trait for any [`Unit`] whose dimension is [`Length`].
pub trait LengthUnit: Unit<Dim = Length> {}
impl<T: Unit<Dim = Length>> LengthUnit for T {}

/// Metres (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m", dimension = Length)]
pub struct Metre;
/// A quantity measured in metres.
pub type Metres = Quantity<Metre>;
/// A constant representing one metre.
pub const M: Metres = Metres::new(1.0);

/// Kilometres (`1 km = 10^3 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km", dimension = Length, exponent = 3)]
pub struct Kilometre;
/// A quantity measured in kilometres.
pub type Kilometres = Quantity<Kilometre>;
/// A constant representing one kilometre.
pub const KM: Kilometres = Kilometres::new(1.0);

crate::impl_unit_conversions!(Metre, Kilometre);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ratio;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Identity
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn metre_identity() {
        assert_eq!(Metre::RATIO, Ratio::ONE);
        assert_eq!(Metre::EXPONENT, 0);
        assert_eq!(Metre::SYMBOL, "m");
    }

    #[test]
    fn kilometre_identity() {
        assert_eq!(Kilometre::RATIO, Ratio::ONE);
        assert_eq!(Kilometre::EXPONENT, 3);
        assert!(Kilometre::IDENTITY.same_dimension(&Metre::IDENTITY));
        assert_ne!(Kilometre::IDENTITY, Metre::IDENTITY);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn kilometres_to_metres() {
        assert_eq!(Kilometres::new(3.0).to::<Metre>().value(), 3000.0);
    }

    #[test]
    fn metres_to_kilometres() {
        assert_abs_diff_eq!(Metres::new(42_195.0).to::<Kilometre>().value(), 42.195, epsilon = 1e-12);
    }

    #[test]
    fn from_conversions() {
        let m: Metres = KM.into();
        assert_eq!(m.value(), 1000.0);
        let km: Kilometres = Metres::new(250.0).into();
        assert_eq!(km.value(), 0.25);
    }

    #[test]
    fn display() {
        assert_eq!(Metres::new(12.5).to_string(), "12.5 m");
        assert_eq!(KM.to_string(), "1 km");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_roundtrip_km_m(v in -1e9..1e9f64) {
            let back = Kilometres::new(v).to::<Metre>().to::<Kilometre>();
            prop_assert!((back.value() - v).abs() <= 1e-12 * v.abs().max(1.0));
        }

        #[test]
        fn prop_km_m_ratio(v in 1e-6..1e6f64) {
            let m = Kilometres::new(v).to::<Metre>();
            prop_assert!((m.value() / v - 1000.0).abs() < 1e-9);
        }
    }
}
