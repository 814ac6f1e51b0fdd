//! Errors reported by runtime-checked operations.
//!
//! Statically typed [`crate::Quantity`] values never fail: incompatible operations are rejected by the compiler.
//! These errors come from the places where unit information is only known at runtime, such as [`crate::DynQuantity`]
//! or a dimension vector read from a slice.

use crate::dimension::DimensionVector;
use crate::identity::Identity;

/// Errors produced when unit information has to be checked at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    /// A dimension vector did not have exactly seven components.
    #[error("dimension vector must have {expected} components, found {found}")]
    ShapeMismatch {
        /// Required number of components.
        expected: usize,
        /// Number of components supplied.
        found: usize,
    },

    /// Two quantities with different unit identities were added, subtracted or compared.
    #[error("unit mismatch: {left} is not {right}")]
    UnitMismatch {
        /// Identity of the left operand.
        left: Identity,
        /// Identity of the right operand.
        right: Identity,
    },

    /// A conversion was requested between different physical dimensions.
    #[error("cannot convert dimension {from} into {to}")]
    DimensionMismatch {
        /// Dimension of the source quantity.
        from: DimensionVector,
        /// Dimension of the requested target.
        to: DimensionVector,
    },

    /// A composed identity does not fit its integers: the rational scale overflows `i64`, or the power-of-ten
    /// exponent or a dimension exponent overflows `i32`.
    #[error("unit identity overflow")]
    ScaleOverflow,

    /// A rational scale had a zero numerator or denominator.
    #[error("rational scale {num}/{den} is not a nonzero fraction")]
    ZeroScale {
        /// Numerator supplied.
        num: i64,
        /// Denominator supplied.
        den: i64,
    },
}

/// Convenience alias for results carrying a [`QuantityError`].
pub type Result<T> = core::result::Result<T, QuantityError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ratio::Ratio;

    #[test]
    fn shape_mismatch_message() {
        let err = QuantityError::ShapeMismatch {
            expected: 7,
            found: 4,
        };
        assert_eq!(err.to_string(), "dimension vector must have 7 components, found 4");
    }

    #[test]
    fn unit_mismatch_message_shows_both_identities() {
        let metre = Identity::new(Ratio::ONE, 0, DimensionVector::new([1, 0, 0, 0, 0, 0, 0]));
        let kilometre = Identity::new(Ratio::ONE, 3, DimensionVector::new([1, 0, 0, 0, 0, 0, 0]));
        let err = QuantityError::UnitMismatch {
            left: metre,
            right: kilometre,
        };
        assert_eq!(err.to_string(), "unit mismatch: 1 × 10^0 [L] is not 1 × 10^3 [L]");
    }

    #[test]
    fn dimension_mismatch_message() {
        let err = QuantityError::DimensionMismatch {
            from: DimensionVector::new([1, 0, 0, 0, 0, 0, 0]),
            to: DimensionVector::new([0, 0, 1, 0, 0, 0, 0]),
        };
        assert_eq!(err.to_string(), "cannot convert dimension L into T");
    }

    #[test]
    fn zero_scale_message() {
        let err = QuantityError::ZeroScale { num: 0, den: 5 };
        assert_eq!(err.to_string(), "rational scale 0/5 is not a nonzero fraction");
    }
}
