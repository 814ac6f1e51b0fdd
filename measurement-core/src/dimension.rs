//! Dimension vectors, at the value level and at the type level.
//!
//! A dimension is a vector of seven signed exponents, one per SI base quantity, in the fixed order
//! length, mass, time, current, temperature, amount of substance, luminous intensity.
//!
//! - [`DimensionVector`] is the runtime value, with `const` algebra (multiply, divide, power).
//! - [`Dim`] is the same vector encoded in the type system with [`typenum`] integers. The traits
//!   [`DimensionMul`], [`DimensionDiv`] and [`DimensionPow`] perform the arithmetic on types, so a
//!   velocity is *the same type* whether it is written as `DivDim<Length, Time>` or spelled out.
//!
//! Only the seven-slot [`Dim`] implements [`Dimension`]; any other shape cannot take part in the algebra:
//!
//! ```compile_fail
//! use measurement_core::dimension::{Length, MulDim};
//! use measurement_core::typenum::{P1, Z0};
//!
//! struct Planar<A, B>(core::marker::PhantomData<(A, B)>);
//! type Broken = MulDim<Length, Planar<P1, Z0>>;
//! fn assert_exists<T>() {}
//! assert_exists::<Broken>();
//! ```

use core::fmt::{Display, Formatter, Result};
use core::marker::PhantomData;
use core::ops::{Add, Mul, Sub};

use typenum::{Integer, N1, P1, Z0};

use crate::error::QuantityError;

/// Number of SI base quantities tracked by a dimension vector.
pub const BASE_DIMENSIONS: usize = 7;

// ─────────────────────────────────────────────────────────────────────────────
// Base quantities
// ─────────────────────────────────────────────────────────────────────────────

/// The seven SI base quantities, in dimension-vector order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BaseDimension {
    /// Length (metre).
    Length,
    /// Mass (kilogram).
    Mass,
    /// Time (second).
    Time,
    /// Electric current (ampere).
    Current,
    /// Thermodynamic temperature (kelvin).
    Temperature,
    /// Amount of substance (mole).
    Amount,
    /// Luminous intensity (candela).
    LuminousIntensity,
}

impl BaseDimension {
    /// All base quantities in vector order.
    pub const ALL: [BaseDimension; BASE_DIMENSIONS] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::Amount,
        BaseDimension::LuminousIntensity,
    ];

    /// Position of this quantity inside a dimension vector.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Conventional dimension symbol (`L`, `M`, `T`, `I`, `Θ`, `N`, `J`).
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Length => "L",
            BaseDimension::Mass => "M",
            BaseDimension::Time => "T",
            BaseDimension::Current => "I",
            BaseDimension::Temperature => "Θ",
            BaseDimension::Amount => "N",
            BaseDimension::LuminousIntensity => "J",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Value-level vector
// ─────────────────────────────────────────────────────────────────────────────

/// Exponents of the seven SI base quantities.
///
/// The all-zero vector is a dimensionless quantity. Vectors are plain values: every operation returns a new one.
///
/// ```rust
/// use measurement_core::DimensionVector;
///
/// let a = DimensionVector::new([2, 0, 1, 3, 0, 0, -2]);
/// let b = DimensionVector::new([1, 2, 0, 2, 0, 1, 0]);
/// assert_eq!(a.multiply(b), DimensionVector::new([3, 2, 1, 5, 0, 1, -2]));
/// assert!(a.power(0).is_dimensionless());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DimensionVector([i32; BASE_DIMENSIONS]);

impl DimensionVector {
    /// The dimensionless vector (all exponents zero).
    pub const DIMENSIONLESS: DimensionVector = DimensionVector([0; BASE_DIMENSIONS]);

    /// Creates a vector from exponents in base-quantity order.
    #[inline]
    pub const fn new(exponents: [i32; BASE_DIMENSIONS]) -> Self {
        Self(exponents)
    }

    /// The vector of a single base quantity (exponent `1` in its slot).
    pub const fn of(base: BaseDimension) -> Self {
        let mut exponents = [0; BASE_DIMENSIONS];
        exponents[base.index()] = 1;
        Self(exponents)
    }

    /// Exponent of `base` in this vector.
    #[inline]
    pub const fn exponent(&self, base: BaseDimension) -> i32 {
        self.0[base.index()]
    }

    /// The raw exponents.
    #[inline]
    pub const fn as_array(&self) -> [i32; BASE_DIMENSIONS] {
        self.0
    }

    /// Returns `true` if every exponent is zero.
    pub const fn is_dimensionless(&self) -> bool {
        self.same_dimension(&Self::DIMENSIONLESS)
    }

    /// Component-wise equality.
    pub const fn same_dimension(&self, other: &DimensionVector) -> bool {
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            if self.0[i] != other.0[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Dimension of a product: component-wise sum, or `None` if an exponent overflows `i32`.
    pub const fn checked_multiply(self, other: DimensionVector) -> Option<DimensionVector> {
        let mut out = [0; BASE_DIMENSIONS];
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            out[i] = match self.0[i].checked_add(other.0[i]) {
                Some(e) => e,
                None => return None,
            };
            i += 1;
        }
        Some(DimensionVector(out))
    }

    /// Dimension of a quotient: component-wise difference, or `None` if an exponent overflows `i32`.
    pub const fn checked_divide(self, other: DimensionVector) -> Option<DimensionVector> {
        let mut out = [0; BASE_DIMENSIONS];
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            out[i] = match self.0[i].checked_sub(other.0[i]) {
                Some(e) => e,
                None => return None,
            };
            i += 1;
        }
        Some(DimensionVector(out))
    }

    /// Dimension of an integer power, or `None` if an exponent overflows `i32`.
    pub const fn checked_power(self, n: i32) -> Option<DimensionVector> {
        let mut out = [0; BASE_DIMENSIONS];
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            out[i] = match self.0[i].checked_mul(n) {
                Some(e) => e,
                None => return None,
            };
            i += 1;
        }
        Some(DimensionVector(out))
    }

    /// Dimension of a product: component-wise sum.
    ///
    /// # Panics
    ///
    /// Panics if an exponent overflows `i32`.
    pub const fn multiply(self, other: DimensionVector) -> DimensionVector {
        match self.checked_multiply(other) {
            Some(v) => v,
            None => panic!("dimension exponent overflow in multiplication"),
        }
    }

    /// Dimension of a quotient: component-wise difference.
    ///
    /// # Panics
    ///
    /// Panics if an exponent overflows `i32`.
    pub const fn divide(self, other: DimensionVector) -> DimensionVector {
        match self.checked_divide(other) {
            Some(v) => v,
            None => panic!("dimension exponent overflow in division"),
        }
    }

    /// Dimension of an integer power: every exponent multiplied by `n`.
    ///
    /// # Panics
    ///
    /// Panics if an exponent overflows `i32`.
    pub const fn power(self, n: i32) -> DimensionVector {
        match self.checked_power(n) {
            Some(v) => v,
            None => panic!("dimension exponent overflow in power"),
        }
    }
}

impl From<[i32; BASE_DIMENSIONS]> for DimensionVector {
    fn from(exponents: [i32; BASE_DIMENSIONS]) -> Self {
        Self::new(exponents)
    }
}

impl TryFrom<&[i32]> for DimensionVector {
    type Error = QuantityError;

    /// Accepts exactly seven exponents; any other length is a shape mismatch.
    fn try_from(exponents: &[i32]) -> core::result::Result<Self, QuantityError> {
        let array: [i32; BASE_DIMENSIONS] =
            exponents
                .try_into()
                .map_err(|_| QuantityError::ShapeMismatch {
                    expected: BASE_DIMENSIONS,
                    found: exponents.len(),
                })?;
        Ok(Self(array))
    }
}

impl Display for DimensionVector {
    /// Formats as `L·T^-1`; the dimensionless vector prints as `1`.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        let mut first = true;
        for base in BaseDimension::ALL {
            let exp = self.exponent(base);
            if exp == 0 {
                continue;
            }
            if !first {
                f.write_str("·")?;
            }
            first = false;
            f.write_str(base.symbol())?;
            if exp != 1 {
                write!(f, "^{}", exp)?;
            }
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Type-level vector
// ─────────────────────────────────────────────────────────────────────────────

/// Trait implemented by type-level dimension vectors.
///
/// The only implementor is [`Dim`]; the associated integers are [`typenum`] signed integers, and
/// [`Dimension::VECTOR`] is the matching runtime value.
pub trait Dimension: 'static {
    /// Length exponent.
    type Length: Integer;
    /// Mass exponent.
    type Mass: Integer;
    /// Time exponent.
    type Time: Integer;
    /// Electric current exponent.
    type Current: Integer;
    /// Temperature exponent.
    type Temperature: Integer;
    /// Amount-of-substance exponent.
    type Amount: Integer;
    /// Luminous intensity exponent.
    type LuminousIntensity: Integer;

    /// The same exponents as a runtime value.
    const VECTOR: DimensionVector = DimensionVector::new([
        <Self::Length as Integer>::I32,
        <Self::Mass as Integer>::I32,
        <Self::Time as Integer>::I32,
        <Self::Current as Integer>::I32,
        <Self::Temperature as Integer>::I32,
        <Self::Amount as Integer>::I32,
        <Self::LuminousIntensity as Integer>::I32,
    ]);
}

/// Type-level dimension vector `L^l · M^m · T^t · I^i · Θ^θ · N^n · J^j`.
///
/// Never instantiated; it only appears as [`crate::Unit::Dim`].
pub struct Dim<L, M, T, I, Th, N, J>(PhantomData<(L, M, T, I, Th, N, J)>);

impl<L, M, T, I, Th, N, J> Dimension for Dim<L, M, T, I, Th, N, J>
where
    L: Integer,
    M: Integer,
    T: Integer,
    I: Integer,
    Th: Integer,
    N: Integer,
    J: Integer,
{
    type Length = L;
    type Mass = M;
    type Time = T;
    type Current = I;
    type Temperature = Th;
    type Amount = N;
    type LuminousIntensity = J;
}

/// Type-level product of two dimensions (component-wise sum).
pub trait DimensionMul<Rhs: Dimension>: Dimension {
    /// Resulting dimension.
    type Output: Dimension;
}

/// Type-level quotient of two dimensions (component-wise difference).
pub trait DimensionDiv<Rhs: Dimension>: Dimension {
    /// Resulting dimension.
    type Output: Dimension;
}

/// Type-level integer power of a dimension (component-wise product with `E`).
pub trait DimensionPow<E: Integer>: Dimension {
    /// Resulting dimension.
    type Output: Dimension;
}

macro_rules! impl_binary_dimension_op {
    ($trait:ident, $op:ident, $( ($a:ident, $b:ident) ),+ $(,)?) => {
        impl<$($a, $b),+> $trait<Dim<$($b),+>> for Dim<$($a),+>
        where
            $(
                $a: Integer + $op<$b>,
                $b: Integer,
                <$a as $op<$b>>::Output: Integer,
            )+
        {
            type Output = Dim<$(<$a as $op<$b>>::Output),+>;
        }
    };
}

impl_binary_dimension_op!(
    DimensionMul,
    Add,
    (L1, L2),
    (M1, M2),
    (T1, T2),
    (I1, I2),
    (Th1, Th2),
    (N1_, N2_),
    (J1, J2),
);

impl_binary_dimension_op!(
    DimensionDiv,
    Sub,
    (L1, L2),
    (M1, M2),
    (T1, T2),
    (I1, I2),
    (Th1, Th2),
    (N1_, N2_),
    (J1, J2),
);

macro_rules! impl_dimension_pow {
    ($( $a:ident ),+ $(,)?) => {
        impl<E, $($a),+> DimensionPow<E> for Dim<$($a),+>
        where
            E: Integer,
            $(
                $a: Integer + Mul<E>,
                <$a as Mul<E>>::Output: Integer,
            )+
        {
            type Output = Dim<$(<$a as Mul<E>>::Output),+>;
        }
    };
}

impl_dimension_pow!(L, M, T, I, Th, N_, J);

/// Dimension of `A × B`.
pub type MulDim<A, B> = <A as DimensionMul<B>>::Output;

/// Dimension of `A ÷ B`.
pub type DivDim<A, B> = <A as DimensionDiv<B>>::Output;

/// Dimension of `A^E`.
pub type PowDim<A, E> = <A as DimensionPow<E>>::Output;

// ─────────────────────────────────────────────────────────────────────────────
// Named dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// The dimensionless vector.
pub type Dimensionless = Dim<Z0, Z0, Z0, Z0, Z0, Z0, Z0>;
/// Length (`L`).
pub type Length = Dim<P1, Z0, Z0, Z0, Z0, Z0, Z0>;
/// Mass (`M`).
pub type Mass = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
/// Time (`T`).
pub type Time = Dim<Z0, Z0, P1, Z0, Z0, Z0, Z0>;
/// Electric current (`I`).
pub type Current = Dim<Z0, Z0, Z0, P1, Z0, Z0, Z0>;
/// Thermodynamic temperature (`Θ`).
pub type Temperature = Dim<Z0, Z0, Z0, Z0, P1, Z0, Z0>;
/// Amount of substance (`N`).
pub type Amount = Dim<Z0, Z0, Z0, Z0, Z0, P1, Z0>;
/// Luminous intensity (`J`).
pub type LuminousIntensity = Dim<Z0, Z0, Z0, Z0, Z0, Z0, P1>;
/// Frequency (`T^-1`).
pub type Frequency = Dim<Z0, Z0, N1, Z0, Z0, Z0, Z0>;
