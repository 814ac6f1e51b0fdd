//! Plain numbers as quantities.
//!
//! [`Scalar`] is the unit with the scalar identity `(1/1, 0, dimensionless)`. Quantities in it convert to and from
//! `f64` without scaling, and any other dimensionless quantity reaches it through [`Quantity::to`].
//!
//! ```rust
//! use measurement_core::units::length::{Kilometres, Metres};
//! use measurement_core::units::scalar::{Scalar, Scalars};
//!
//! let ratio = Kilometres::new(3.0) / Metres::new(1500.0);
//! let n: Scalars = ratio.to::<Scalar>();
//! assert_eq!(n.value(), 2.0);
//! assert_eq!(f64::from(n), 2.0);
//! ```

pub use crate::unit::Scalar;
use crate::Quantity;

/// A plain number tagged as a dimensionless quantity.
pub type Scalars = Quantity<Scalar>;

/// The scalar one.
pub const ONE: Scalars = Scalars::new(1.0);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::{Kilometres, Metres};
    use crate::units::time::{Microseconds, Seconds};
    use crate::{Identity, Unit};
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Basic Scalar behavior
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn scalar_identity() {
        assert_eq!(Scalar::IDENTITY, Identity::SCALAR);
        assert_eq!(Scalar::SYMBOL, "");
    }

    #[test]
    fn scalar_from_and_into_f64() {
        let s: Scalars = 1.5.into();
        assert_eq!(s.value(), 1.5);
        let x: f64 = s.into();
        assert_eq!(x, 1.5);
    }

    #[test]
    fn display_scalar() {
        assert_eq!(Scalars::new(123.456).to_string(), "123.456");
        assert_eq!(ONE.to_string(), "1");
    }

    #[test]
    fn scalar_arithmetic() {
        let a = Scalars::new(3.0);
        let b = Scalars::new(4.0);
        assert_eq!((a + b).value(), 7.0);
        assert_eq!((b - a).value(), 1.0);
        assert_eq!((a * 4.0).value(), 12.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Dimensionless ratios
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn ratio_of_different_scales_reaches_scalar() {
        let ratio = Seconds::new(2.0) / Microseconds::new(4.0);
        assert_eq!(ratio.value(), 0.5);
        assert_eq!(ratio.to::<Scalar>().value(), 500_000.0);
        assert_eq!(ratio.to_scalar(), 500_000.0);
    }

    #[test]
    fn ratio_into_f64_applies_scale() {
        let x: f64 = (Kilometres::new(1.0) / Metres::new(250.0)).into();
        assert_eq!(x, 4.0);
    }

    proptest! {
        #[test]
        fn prop_f64_round_trip(v in -1e12..1e12f64) {
            let s = Scalars::from(v);
            prop_assert_eq!(f64::from(s), v);
        }
    }
}
