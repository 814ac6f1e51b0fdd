//! Quantities whose unit is only known at runtime.
//!
//! [`DynQuantity`] carries its [`Identity`] as data and checks it on every operation, reporting incompatibilities as
//! [`QuantityError`] values instead of compile errors. Typed quantities convert into it losslessly, and back with
//! [`DynQuantity::into_typed`] once the expected unit is known.

use core::cmp::Ordering;
use core::fmt::{Display, Formatter};
use core::ops::{Div, Mul, Neg};

use crate::dimension::DimensionVector;
use crate::error::{QuantityError, Result};
use crate::identity::Identity;
use crate::quantity::Quantity;
use crate::ratio::Ratio;
use crate::unit::Unit;

/// A magnitude tagged with a runtime identity triple.
///
/// ```rust
/// use measurement_core::units::length::Kilometres;
/// use measurement_core::units::time::Hours;
/// use measurement_core::units::velocity::KilometrePerHour;
/// use measurement_core::DynQuantity;
///
/// let distance = DynQuantity::from(Kilometres::new(15.0));
/// let duration = DynQuantity::from(Hours::new(3.0));
/// let speed = distance.checked_div(duration)?;
/// assert_eq!(speed.into_typed::<KilometrePerHour>()?.value(), 5.0);
///
/// assert!(distance.checked_add(duration).is_err());
/// # Ok::<(), measurement_core::QuantityError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DynQuantity {
    value: f64,
    identity: Identity,
}

impl DynQuantity {
    /// Creates a quantity from a magnitude and an identity.
    #[inline]
    pub const fn new(value: f64, identity: Identity) -> Self {
        Self { value, identity }
    }

    /// Creates a quantity from loose parts, validating them.
    ///
    /// `scale` is `(numerator, denominator)`, both nonzero, and `dimension` must hold exactly seven exponents.
    ///
    /// ```rust
    /// use measurement_core::{DynQuantity, QuantityError};
    ///
    /// let ok = DynQuantity::from_parts(2.0, (36, 10), 3, &[0, 0, 1, 0, 0, 0, 0]);
    /// assert!(ok.is_ok());
    ///
    /// let err = DynQuantity::from_parts(2.0, (1, 1), 0, &[2, 0, 3, 4]).unwrap_err();
    /// assert_eq!(err, QuantityError::ShapeMismatch { expected: 7, found: 4 });
    /// ```
    pub fn from_parts(value: f64, scale: (i64, i64), exponent: i32, dimension: &[i32]) -> Result<Self> {
        let dimension = DimensionVector::try_from(dimension)?;
        let (num, den) = scale;
        if num == 0 || den == 0 {
            log::debug!("rejected scale {num}/{den}: scales must be nonzero");
            return Err(QuantityError::ZeroScale { num, den });
        }
        let ratio = Ratio::checked_new(num, den).ok_or(QuantityError::ScaleOverflow)?;
        Ok(Self::new(value, Identity::new(ratio, exponent, dimension)))
    }

    /// The raw magnitude, expressed in this quantity's own unit.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The identity triple.
    #[inline]
    pub const fn identity(&self) -> Identity {
        self.identity
    }

    fn require_same_unit(&self, other: &DynQuantity, op: &str) -> Result<()> {
        if self.identity == other.identity {
            Ok(())
        } else {
            log::debug!(
                "rejected {op}: unit {} does not match {}",
                self.identity,
                other.identity
            );
            Err(QuantityError::UnitMismatch {
                left: self.identity,
                right: other.identity,
            })
        }
    }

    /// Sum of two quantities of the same identity.
    pub fn checked_add(self, other: DynQuantity) -> Result<DynQuantity> {
        self.require_same_unit(&other, "addition")?;
        Ok(Self::new(self.value + other.value, self.identity))
    }

    /// Difference of two quantities of the same identity.
    pub fn checked_sub(self, other: DynQuantity) -> Result<DynQuantity> {
        self.require_same_unit(&other, "subtraction")?;
        Ok(Self::new(self.value - other.value, self.identity))
    }

    /// In-place [`DynQuantity::checked_add`]; `self` is left untouched on error.
    pub fn try_add_assign(&mut self, other: DynQuantity) -> Result<()> {
        *self = self.checked_add(other)?;
        Ok(())
    }

    /// In-place [`DynQuantity::checked_sub`]; `self` is left untouched on error.
    pub fn try_sub_assign(&mut self, other: DynQuantity) -> Result<()> {
        *self = self.checked_sub(other)?;
        Ok(())
    }

    /// Compares raw magnitudes of two quantities of the same identity.
    ///
    /// Returns `Ok(None)` when either magnitude is NaN.
    pub fn checked_cmp(&self, other: &DynQuantity) -> Result<Option<Ordering>> {
        self.require_same_unit(other, "comparison")?;
        Ok(self.value.partial_cmp(&other.value))
    }

    /// Product of two quantities; the identity is composed from both operands.
    pub fn checked_mul(self, other: DynQuantity) -> Result<DynQuantity> {
        let identity = self
            .identity
            .checked_multiply(other.identity)
            .ok_or(QuantityError::ScaleOverflow)?;
        Ok(Self::new(self.value * other.value, identity))
    }

    /// Quotient of two quantities; the identity is composed from both operands.
    pub fn checked_div(self, other: DynQuantity) -> Result<DynQuantity> {
        let identity = self
            .identity
            .checked_divide(other.identity)
            .ok_or(QuantityError::ScaleOverflow)?;
        Ok(Self::new(self.value / other.value, identity))
    }

    /// Integer power; the identity is composed accordingly.
    pub fn checked_powi(self, n: i32) -> Result<DynQuantity> {
        let identity = self
            .identity
            .checked_power(n)
            .ok_or(QuantityError::ScaleOverflow)?;
        Ok(Self::new(crate::math::powi(self.value, n), identity))
    }

    /// Converts to another identity of the same dimension.
    pub fn convert_to(self, target: Identity) -> Result<DynQuantity> {
        if !self.identity.same_dimension(&target) {
            log::debug!(
                "rejected conversion: dimension {} cannot become {}",
                self.identity.dimension(),
                target.dimension()
            );
            return Err(QuantityError::DimensionMismatch {
                from: self.identity.dimension(),
                to: target.dimension(),
            });
        }
        let factor = self.identity.conversion_factor(target);
        Ok(Self::new(self.value * factor, target))
    }

    /// Converts a dimensionless quantity to a plain number.
    pub fn to_scalar(self) -> Result<f64> {
        self.convert_to(Identity::SCALAR).map(|q| q.value)
    }

    /// Turns this quantity into a typed one, requiring an exact identity match.
    ///
    /// Use [`DynQuantity::convert_to`] with `U::IDENTITY` first to accept any unit of the right dimension.
    pub fn into_typed<U: Unit>(self) -> Result<Quantity<U>> {
        if self.identity == U::IDENTITY {
            Ok(Quantity::new(self.value))
        } else {
            log::debug!(
                "rejected typed view: unit {} does not match {}",
                self.identity,
                U::IDENTITY
            );
            Err(QuantityError::UnitMismatch {
                left: self.identity,
                right: U::IDENTITY,
            })
        }
    }
}

impl<U: Unit> From<Quantity<U>> for DynQuantity {
    fn from(quantity: Quantity<U>) -> Self {
        Self::new(quantity.value(), U::IDENTITY)
    }
}

impl Neg for DynQuantity {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value, self.identity)
    }
}

impl Mul<f64> for DynQuantity {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs, self.identity)
    }
}

impl Mul<DynQuantity> for f64 {
    type Output = DynQuantity;
    #[inline]
    fn mul(self, rhs: DynQuantity) -> DynQuantity {
        rhs * self
    }
}

impl Div<f64> for DynQuantity {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.value / rhs, self.identity)
    }
}

impl Display for DynQuantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Display::fmt(&self.value, f)?;
        write!(f, " ({})", self.identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{Length, Time};
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    struct Metre;
    impl Unit for Metre {
        const RATIO: Ratio = Ratio::ONE;
        const EXPONENT: i32 = 0;
        type Dim = Length;
        const SYMBOL: &'static str = "m";
    }

    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    struct Millisecond;
    impl Unit for Millisecond {
        const RATIO: Ratio = Ratio::ONE;
        const EXPONENT: i32 = -3;
        type Dim = Time;
        const SYMBOL: &'static str = "ms";
    }

    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    struct Second;
    impl Unit for Second {
        const RATIO: Ratio = Ratio::ONE;
        const EXPONENT: i32 = 0;
        type Dim = Time;
        const SYMBOL: &'static str = "s";
    }

    fn metres(v: f64) -> DynQuantity {
        Quantity::<Metre>::new(v).into()
    }

    fn seconds(v: f64) -> DynQuantity {
        Quantity::<Second>::new(v).into()
    }

    fn millis(v: f64) -> DynQuantity {
        Quantity::<Millisecond>::new(v).into()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn from_parts_validates_shape() {
        let err = DynQuantity::from_parts(1.0, (1, 1), 0, &[1, 0, 0]).unwrap_err();
        assert_eq!(
            err,
            QuantityError::ShapeMismatch {
                expected: 7,
                found: 3
            }
        );
    }

    #[test]
    fn from_parts_validates_denominator() {
        let err = DynQuantity::from_parts(1.0, (1, 0), 0, &[0; 7]).unwrap_err();
        assert_eq!(err, QuantityError::ZeroScale { num: 1, den: 0 });
    }

    #[test]
    fn from_parts_rejects_zero_numerator() {
        let err = DynQuantity::from_parts(1.0, (0, 5), 0, &[1, 0, 0, 0, 0, 0, 0]).unwrap_err();
        assert_eq!(err, QuantityError::ZeroScale { num: 0, den: 5 });
    }

    #[test]
    fn from_parts_reduces_scale() {
        let q = DynQuantity::from_parts(1.0, (36, 10), 3, &[0, 0, 1, 0, 0, 0, 0]).unwrap();
        assert_eq!(q.identity().ratio(), Ratio::new(18, 5));
    }

    #[test]
    fn from_typed_keeps_identity() {
        let q = metres(4.0);
        assert_eq!(q.value(), 4.0);
        assert_eq!(q.identity(), Metre::IDENTITY);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Same-unit operations
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn add_and_sub_same_unit() {
        assert_eq!(metres(2.0).checked_add(metres(3.0)).unwrap().value(), 5.0);
        assert_eq!(metres(2.0).checked_sub(metres(3.0)).unwrap().value(), -1.0);
    }

    #[test]
    fn add_rejects_same_dimension_other_scale() {
        let err = seconds(3.0).checked_add(millis(5.0)).unwrap_err();
        assert_eq!(
            err,
            QuantityError::UnitMismatch {
                left: Second::IDENTITY,
                right: Millisecond::IDENTITY
            }
        );
    }

    #[test]
    fn add_after_conversion() {
        let total = seconds(3.0)
            .convert_to(Millisecond::IDENTITY)
            .and_then(|s| s.checked_add(millis(5.0)))
            .unwrap();
        assert_eq!(total.value(), 3005.0);
    }

    #[test]
    fn assign_ops_leave_operand_on_error() {
        let mut q = metres(1.0);
        q.try_add_assign(metres(2.0)).unwrap();
        q.try_sub_assign(metres(0.5)).unwrap();
        assert_eq!(q.value(), 2.5);
        assert!(q.try_add_assign(seconds(1.0)).is_err());
        assert_eq!(q.value(), 2.5);
    }

    #[test]
    fn compare_same_unit_only() {
        assert_eq!(metres(1.0).checked_cmp(&metres(2.0)).unwrap(), Some(Ordering::Less));
        assert_eq!(metres(2.0).checked_cmp(&metres(2.0)).unwrap(), Some(Ordering::Equal));
        assert_eq!(metres(f64::NAN).checked_cmp(&metres(2.0)).unwrap(), None);
        assert!(seconds(1.0).checked_cmp(&millis(1.0)).is_err());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Composition and conversion
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn product_and_quotient_compose_identity() {
        let v = metres(15.0).checked_div(seconds(3.0)).unwrap();
        assert_eq!(v.identity(), Metre::IDENTITY.divide(Second::IDENTITY));
        let d = v.checked_mul(seconds(3.0)).unwrap();
        assert_eq!(d.identity().dimension(), Metre::IDENTITY.dimension());
        assert_eq!(d.convert_to(Metre::IDENTITY).unwrap().value(), 15.0);
    }

    #[test]
    fn composition_overflow_is_reported() {
        let huge = DynQuantity::from_parts(1.0, (i64::MAX, 1), 0, &[0; 7]).unwrap();
        assert_eq!(huge.checked_mul(huge).unwrap_err(), QuantityError::ScaleOverflow);
        assert_eq!(huge.checked_powi(2).unwrap_err(), QuantityError::ScaleOverflow);
    }

    #[test]
    fn dimension_exponent_overflow_is_reported() {
        let steep = DynQuantity::from_parts(1.0, (1, 1), 0, &[i32::MAX, 0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(steep.checked_mul(steep).unwrap_err(), QuantityError::ScaleOverflow);
        assert_eq!(steep.checked_powi(2).unwrap_err(), QuantityError::ScaleOverflow);
        let flat = DynQuantity::from_parts(1.0, (1, 1), 0, &[i32::MIN, 0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(flat.checked_div(steep).unwrap_err(), QuantityError::ScaleOverflow);
        assert_eq!(steep.checked_div(steep).unwrap().identity(), Identity::SCALAR);
    }

    #[test]
    fn conversion_across_extreme_exponents_saturates() {
        let dim = [1, 0, 0, 0, 0, 0, 0];
        let top = DynQuantity::from_parts(2.0, (1, 1), i32::MAX, &dim).unwrap();
        let below = DynQuantity::from_parts(2.0, (1, 1), -1, &dim).unwrap();
        assert_eq!(top.convert_to(below.identity()).unwrap().value(), f64::INFINITY);
        assert_eq!(below.convert_to(top.identity()).unwrap().value(), 0.0);
    }

    #[test]
    fn powi_composes_identity() {
        let sq = millis(3.0).checked_powi(2).unwrap();
        assert_eq!(sq.value(), 9.0);
        assert_eq!(sq.identity().exponent(), -6);
    }

    #[test]
    fn convert_rejects_other_dimension() {
        let err = metres(1.0).convert_to(Second::IDENTITY).unwrap_err();
        assert!(matches!(err, QuantityError::DimensionMismatch { .. }));
    }

    #[test]
    fn to_scalar_requires_dimensionless() {
        let ratio = millis(500.0).checked_div(seconds(2.0)).unwrap();
        assert_abs_diff_eq!(ratio.to_scalar().unwrap(), 0.25, epsilon = 1e-15);
        assert!(metres(1.0).to_scalar().is_err());
    }

    #[test]
    fn into_typed_requires_exact_identity() {
        assert_eq!(seconds(2.0).into_typed::<Second>().unwrap().value(), 2.0);
        assert!(seconds(2.0).into_typed::<Millisecond>().is_err());
    }

    #[test]
    fn scalar_operators() {
        assert_eq!((metres(2.0) * 3.0).value(), 6.0);
        assert_eq!((3.0 * metres(2.0)).value(), 6.0);
        assert_eq!((metres(3.0) / 2.0).value(), 1.5);
        assert_eq!((-metres(3.0)).value(), -3.0);
    }

    #[test]
    fn display() {
        assert_eq!(millis(2.5).to_string(), "2.5 (1 × 10^-3 [T])");
    }

    proptest! {
        #[test]
        fn prop_round_trip_through_other_scale(v in -1e9..1e9f64) {
            let back = seconds(v)
                .convert_to(Millisecond::IDENTITY)
                .and_then(|q| q.convert_to(Second::IDENTITY))
                .unwrap();
            prop_assert!((back.value() - v).abs() <= 1e-12 * v.abs().max(1.0));
        }

        #[test]
        fn prop_mismatch_never_mutates(a in -1e6..1e6f64, b in -1e6..1e6f64) {
            let mut q = metres(a);
            prop_assert!(q.try_sub_assign(seconds(b)).is_err());
            prop_assert_eq!(q.value(), a);
        }
    }
}
