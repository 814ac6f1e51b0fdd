//! The runtime image of a unit: rational scale, power-of-ten exponent and dimension vector.

use core::fmt::{Display, Formatter, Result};

use crate::dimension::DimensionVector;
use crate::math::powi;
use crate::ratio::Ratio;

/// Beyond this many decades `10^shift` is already `inf` (or its inverse `0`) for any `i64` ratio.
const MAX_SHIFT: i32 = 400;

/// The identity triple that fully determines a unit.
///
/// One unit of an identity `(r, e, d)` equals `r × 10^e` canonical SI units of dimension `d`. Two quantities are
/// add/subtract compatible only when their whole identities are equal; sharing a dimension is enough to convert.
///
/// Every [`crate::Unit`] exposes its identity as [`crate::Unit::IDENTITY`], computed at compile time.
///
/// ```rust
/// use measurement_core::{DimensionVector, Identity, Ratio};
///
/// let length = DimensionVector::new([1, 0, 0, 0, 0, 0, 0]);
/// let time = DimensionVector::new([0, 0, 1, 0, 0, 0, 0]);
/// let kilometre = Identity::new(Ratio::ONE, 3, length);
/// let hour = Identity::new(Ratio::new(36, 10), 3, time);
///
/// let kmh = kilometre.divide(hour);
/// assert_eq!(kmh.ratio(), Ratio::new(10, 36));
/// assert_eq!(kmh.exponent(), 0);
/// assert_eq!(kmh.dimension(), length.divide(time));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Identity {
    ratio: Ratio,
    exponent: i32,
    dimension: DimensionVector,
}

impl Identity {
    /// Identity of a plain number: scale `1/1`, exponent `0`, dimensionless.
    pub const SCALAR: Identity = Identity::new(Ratio::ONE, 0, DimensionVector::DIMENSIONLESS);

    /// Creates an identity from its three parts.
    #[inline]
    pub const fn new(ratio: Ratio, exponent: i32, dimension: DimensionVector) -> Self {
        Self {
            ratio,
            exponent,
            dimension,
        }
    }

    /// Rational scale.
    #[inline]
    pub const fn ratio(&self) -> Ratio {
        self.ratio
    }

    /// Power-of-ten exponent.
    #[inline]
    pub const fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Dimension vector.
    #[inline]
    pub const fn dimension(&self) -> DimensionVector {
        self.dimension
    }

    /// Returns `true` if both identities measure the same physical dimension.
    #[inline]
    pub const fn same_dimension(&self, other: &Identity) -> bool {
        self.dimension.same_dimension(&other.dimension)
    }

    /// Returns `true` if both identities have the same scale, exponent and dimension.
    ///
    /// Same as `==`, but usable in `const` contexts.
    pub const fn same_identity(&self, other: &Identity) -> bool {
        self.ratio.num() == other.ratio.num()
            && self.ratio.den() == other.ratio.den()
            && self.exponent == other.exponent
            && self.dimension.same_dimension(&other.dimension)
    }

    /// Returns `true` if this identity is [`Identity::SCALAR`].
    pub const fn is_scalar(&self) -> bool {
        self.ratio.num() == 1
            && self.ratio.den() == 1
            && self.exponent == 0
            && self.dimension.is_dimensionless()
    }

    /// Identity of a product, or `None` if the scale, the exponent or a dimension exponent overflows.
    pub const fn checked_multiply(self, other: Identity) -> Option<Identity> {
        let ratio = match self.ratio.checked_mul(other.ratio) {
            Some(r) => r,
            None => return None,
        };
        let exponent = match self.exponent.checked_add(other.exponent) {
            Some(e) => e,
            None => return None,
        };
        let dimension = match self.dimension.checked_multiply(other.dimension) {
            Some(d) => d,
            None => return None,
        };
        Some(Identity::new(ratio, exponent, dimension))
    }

    /// Identity of a quotient, or `None` if the scale, the exponent or a dimension exponent overflows.
    pub const fn checked_divide(self, other: Identity) -> Option<Identity> {
        let ratio = match self.ratio.checked_div(other.ratio) {
            Some(r) => r,
            None => return None,
        };
        let exponent = match self.exponent.checked_sub(other.exponent) {
            Some(e) => e,
            None => return None,
        };
        let dimension = match self.dimension.checked_divide(other.dimension) {
            Some(d) => d,
            None => return None,
        };
        Some(Identity::new(ratio, exponent, dimension))
    }

    /// Identity of an integer power, or `None` if the scale, the exponent or a dimension exponent overflows.
    pub const fn checked_power(self, n: i32) -> Option<Identity> {
        let ratio = match self.ratio.checked_pow(n) {
            Some(r) => r,
            None => return None,
        };
        let exponent = match self.exponent.checked_mul(n) {
            Some(e) => e,
            None => return None,
        };
        let dimension = match self.dimension.checked_power(n) {
            Some(d) => d,
            None => return None,
        };
        Some(Identity::new(ratio, exponent, dimension))
    }

    /// Identity of a product.
    ///
    /// # Panics
    ///
    /// Panics if any part of the identity overflows.
    pub const fn multiply(self, other: Identity) -> Identity {
        match self.checked_multiply(other) {
            Some(id) => id,
            None => panic!("unit identity overflow in multiplication"),
        }
    }

    /// Identity of a quotient.
    ///
    /// # Panics
    ///
    /// Panics if any part of the identity overflows.
    pub const fn divide(self, other: Identity) -> Identity {
        match self.checked_divide(other) {
            Some(id) => id,
            None => panic!("unit identity overflow in division"),
        }
    }

    /// Identity of an integer power.
    ///
    /// # Panics
    ///
    /// Panics if any part of the identity overflows.
    pub const fn power(self, n: i32) -> Identity {
        match self.checked_power(n) {
            Some(id) => id,
            None => panic!("unit identity overflow in power"),
        }
    }

    /// Factor that turns a magnitude in this identity into a magnitude in `target`.
    ///
    /// Computes `10^(E1 - E2) × R1 / R2`. The rational part is reduced exactly first, so integer ratios and pure
    /// powers of ten give exact factors. Dimensions are not inspected here; callers check them. Exponent gaps too
    /// wide for an `f64` saturate to the IEEE result (`inf` or `0`) instead of being stepped through.
    ///
    /// ```rust
    /// use measurement_core::{DimensionVector, Identity, Ratio};
    ///
    /// let t = DimensionVector::new([0, 0, 1, 0, 0, 0, 0]);
    /// let second = Identity::new(Ratio::ONE, 0, t);
    /// let millisecond = Identity::new(Ratio::ONE, -3, t);
    /// let hour = Identity::new(Ratio::new(36, 10), 3, t);
    ///
    /// assert_eq!(second.conversion_factor(millisecond), 1000.0);
    /// assert_eq!(hour.conversion_factor(second), 3600.0);
    /// ```
    pub const fn conversion_factor(self, target: Identity) -> f64 {
        let (num, den) = match self.ratio.checked_div(target.ratio) {
            Some(q) => (q.num() as f64, q.den() as f64),
            None => (
                self.ratio.num() as f64 * target.ratio.den() as f64,
                self.ratio.den() as f64 * target.ratio.num() as f64,
            ),
        };
        let shift = match self.exponent.checked_sub(target.exponent) {
            Some(s) if s > MAX_SHIFT => MAX_SHIFT,
            Some(s) if s < -MAX_SHIFT => -MAX_SHIFT,
            Some(s) => s,
            None if self.exponent > target.exponent => MAX_SHIFT,
            None => -MAX_SHIFT,
        };
        if shift >= 0 {
            num * powi(10.0, shift) / den
        } else {
            num / (den * powi(10.0, -shift))
        }
    }
}

impl Default for Identity {
    fn default() -> Self {
        Identity::SCALAR
    }
}

impl Display for Identity {
    /// Formats as `18/5 × 10^3 [T]`.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} × 10^{} [{}]",
            self.ratio, self.exponent, self.dimension
        )
    }
}
