//! Exact rational scale factors.

use core::fmt::{Display, Formatter, Result};

/// A reduced fraction `num / den` stating how many canonical SI units make up one unit of a type.
///
/// Metres use `1/1`, kilometres per hour use `10/36` (stored reduced as `5/18`). The denominator is always
/// positive and the pair is always in lowest terms, so two ratios describing the same number compare equal.
///
/// Composition widens both operands to `i128`, cancels the greatest common divisor exactly, and only then narrows
/// back to `i64`. The panicking forms ([`Ratio::mul`], [`Ratio::div`], …) are meant for unit constants, where a
/// panic surfaces as a compile-time error; the `checked_*` forms return `None` instead.
///
/// ```rust
/// use measurement_core::Ratio;
///
/// let hour = Ratio::new(36, 10);
/// assert_eq!((hour.num(), hour.den()), (18, 5));
/// assert_eq!(Ratio::ONE.div(hour), Ratio::new(10, 36));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ratio {
    num: i64,
    den: i64,
}

const fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl Ratio {
    /// The ratio `1/1`.
    pub const ONE: Ratio = Ratio { num: 1, den: 1 };

    /// Creates a reduced ratio.
    ///
    /// # Panics
    ///
    /// Panics if `den == 0` or if the reduced terms do not fit in an `i64`.
    pub const fn new(num: i64, den: i64) -> Self {
        match Self::checked_new(num, den) {
            Some(ratio) => ratio,
            None => panic!("rational scale must have a non-zero denominator and fit in i64"),
        }
    }

    /// Creates a reduced ratio, returning `None` on a zero denominator or overflow.
    pub const fn checked_new(num: i64, den: i64) -> Option<Self> {
        Self::reduce(num as i128, den as i128)
    }

    const fn reduce(num: i128, den: i128) -> Option<Self> {
        if den == 0 {
            return None;
        }
        let g = gcd(num.unsigned_abs(), den.unsigned_abs()) as i128;
        let (mut num, mut den) = (num / g, den / g);
        if den < 0 {
            num = -num;
            den = -den;
        }
        if num < i64::MIN as i128 || num > i64::MAX as i128 || den > i64::MAX as i128 {
            return None;
        }
        Some(Ratio {
            num: num as i64,
            den: den as i64,
        })
    }

    /// Numerator in lowest terms (carries the sign).
    #[inline]
    pub const fn num(self) -> i64 {
        self.num
    }

    /// Denominator in lowest terms (always positive).
    #[inline]
    pub const fn den(self) -> i64 {
        self.den
    }

    /// Returns `true` if this ratio is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    /// Floating-point value of the fraction.
    #[inline]
    pub const fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// `self × other`, reduced. Returns `None` if the result leaves `i64`.
    pub const fn checked_mul(self, other: Ratio) -> Option<Ratio> {
        Self::reduce(
            self.num as i128 * other.num as i128,
            self.den as i128 * other.den as i128,
        )
    }

    /// `self ÷ other`, reduced. Returns `None` if `other` is zero or the result leaves `i64`.
    pub const fn checked_div(self, other: Ratio) -> Option<Ratio> {
        Self::reduce(
            self.num as i128 * other.den as i128,
            self.den as i128 * other.num as i128,
        )
    }

    /// `1 ÷ self`. Returns `None` if `self` is zero.
    pub const fn checked_recip(self) -> Option<Ratio> {
        Self::reduce(self.den as i128, self.num as i128)
    }

    /// `self^n` for any integer `n`. Returns `None` on overflow or for a zero base with a negative power.
    pub const fn checked_pow(self, n: i32) -> Option<Ratio> {
        let base = if n < 0 {
            match self.checked_recip() {
                Some(r) => r,
                None => return None,
            }
        } else {
            self
        };
        let mut result = Ratio::ONE;
        let mut i = 0;
        while i < n.unsigned_abs() {
            result = match result.checked_mul(base) {
                Some(r) => r,
                None => return None,
            };
            i += 1;
        }
        Some(result)
    }

    /// `self × other`, reduced.
    ///
    /// # Panics
    ///
    /// Panics if the product leaves `i64`.
    pub const fn mul(self, other: Ratio) -> Ratio {
        match self.checked_mul(other) {
            Some(r) => r,
            None => panic!("rational scale overflow in multiplication"),
        }
    }

    /// `self ÷ other`, reduced.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero or the quotient leaves `i64`.
    pub const fn div(self, other: Ratio) -> Ratio {
        match self.checked_div(other) {
            Some(r) => r,
            None => panic!("rational scale overflow or division by a zero scale"),
        }
    }

    /// `1 ÷ self`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero.
    pub const fn recip(self) -> Ratio {
        match self.checked_recip() {
            Some(r) => r,
            None => panic!("reciprocal of a zero scale"),
        }
    }

    /// `self^n`.
    ///
    /// # Panics
    ///
    /// Panics on overflow or for a zero base with a negative power.
    pub const fn pow(self, n: i32) -> Ratio {
        match self.checked_pow(n) {
            Some(r) => r,
            None => panic!("rational scale overflow in power"),
        }
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Ratio::ONE
    }
}

impl Display for Ratio {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}
