//! Velocity unit aliases (`Length / Time`).
//!
//! Velocities are pure type aliases over [`Per`]: no standalone velocity unit exists, and the identity triple of a
//! velocity is derived from its length and time units. [`KilometrePerHour`] therefore carries the scale `10/36` and
//! exponent `0` without anyone writing those numbers down.
//!
//! ```rust
//! use measurement_core::units::length::Kilometres;
//! use measurement_core::units::time::Hours;
//! use measurement_core::units::velocity::KilometresPerHour;
//!
//! let v: KilometresPerHour = Kilometres::new(42.0) / Hours::new(2.0);
//! assert_eq!(v.value(), 21.0);
//! ```

use crate::dimension::DivDim;
use crate::units::length::{Kilometre, Length, Metre};
use crate::units::time::{Hour, Second, Time};
use crate::{Per, Quantity, Unit};

/// Dimension alias for velocities (`Length / Time`).
pub type Velocity = DivDim<Length, Time>;

/// Marker trait for any unit whose dimension is [`Velocity`].
pub trait VelocityUnit: Unit<Dim = Velocity> {}
impl<T: Unit<Dim = Velocity>> VelocityUnit for T {}

/// Metres per second.
pub type MetrePerSecond = Per<Metre, Second>;
/// A quantity measured in metres per second.
pub type MetresPerSecond = Quantity<MetrePerSecond>;

/// Kilometres per hour.
pub type KilometrePerHour = Per<Kilometre, Hour>;
/// A quantity measured in kilometres per hour.
pub type KilometresPerHour = Quantity<KilometrePerHour>;

crate::impl_unit_conversions!(MetrePerSecond, KilometrePerHour);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::{Kilometres, Metres};
    use crate::units::time::{Hours, Seconds};
    use crate::{DimensionVector, Ratio};
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Identity
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn metre_per_second_identity() {
        assert_eq!(MetrePerSecond::RATIO, Ratio::ONE);
        assert_eq!(MetrePerSecond::EXPONENT, 0);
        assert_eq!(
            MetrePerSecond::IDENTITY.dimension(),
            DimensionVector::new([1, 0, -1, 0, 0, 0, 0])
        );
    }

    #[test]
    fn kilometre_per_hour_identity() {
        assert_eq!(KilometrePerHour::RATIO, Ratio::new(10, 36));
        assert_eq!(KilometrePerHour::EXPONENT, 0);
        assert!(KilometrePerHour::IDENTITY.same_dimension(&MetrePerSecond::IDENTITY));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn mps_to_kmh() {
        let v = MetresPerSecond::new(5.0).to::<KilometrePerHour>();
        assert_abs_diff_eq!(v.value(), 18.0, epsilon = 1e-12);
    }

    #[test]
    fn kmh_to_mps() {
        let v = KilometresPerHour::new(3.6).to::<MetrePerSecond>();
        assert_abs_diff_eq!(v.value(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn from_conversion() {
        let v: KilometresPerHour = MetresPerSecond::new(10.0).into();
        assert_abs_diff_eq!(v.value(), 36.0, epsilon = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Length / Time = Velocity, Velocity * Time = Length
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn length_div_time() {
        let v: MetresPerSecond = Metres::new(100.0) / Seconds::new(20.0);
        assert_eq!(v.value(), 5.0);
    }

    #[test]
    fn metres_over_hours_to_kmh() {
        let v = (Metres::new(15_000.0) / Hours::new(3.0)).to::<KilometrePerHour>();
        assert_abs_diff_eq!(v.value(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn velocity_times_time() {
        let d = (MetresPerSecond::new(5.0) * Seconds::new(3.0)).to::<Metre>();
        assert_eq!(d.value(), 15.0);
        let d = (Hours::new(2.0) * KilometresPerHour::new(50.0)).to::<Kilometre>();
        assert_abs_diff_eq!(d.value(), 100.0, epsilon = 1e-12);
    }

    #[test]
    fn display() {
        assert_eq!(KilometresPerHour::new(18.0).to_string(), "18 km/h");
        assert_eq!((Kilometres::new(1.0) / Seconds::new(1.0)).to_string(), "1 km/s");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_roundtrip_mps_kmh(v in -1e6..1e6f64) {
            let back = MetresPerSecond::new(v).to::<KilometrePerHour>().to::<MetrePerSecond>();
            prop_assert!((back.value() - v).abs() <= 1e-12 * v.abs().max(1.0));
        }

        #[test]
        fn prop_velocity_time_roundtrip(v in 1e-3..1e3f64, t in 1e-3..1e3f64) {
            let d = (MetresPerSecond::new(v) * Seconds::new(t)).to::<Metre>();
            let back: MetresPerSecond = d / Seconds::new(t);
            prop_assert!((back.value() - v).abs() / v < 1e-12);
        }
    }
}
