//! Unit types and traits.

use crate::dimension::{
    Dimension, DimensionDiv, DimensionMul, DimensionPow, Dimensionless, DivDim, MulDim, PowDim,
};
use crate::identity::Identity;
use crate::ratio::Ratio;
use core::fmt::{Debug, Formatter, Result};
use core::marker::PhantomData;
use typenum::Integer;

/// Trait implemented by every **unit** type.
///
/// A unit is identified by its triple `(RATIO, EXPONENT, Dim)`: one unit equals `RATIO × 10^EXPONENT` canonical SI
/// units of dimension `Dim`.
///
/// * `RATIO` is the exact rational scale. Hours use `36/10` together with `EXPONENT = 3`, so `1 h = 3.6 × 10³ s`.
/// * `EXPONENT` is the power-of-ten offset (`-3` for milli, `3` for kilo).
/// * `Dim` ties the unit to its type-level dimension vector.
/// * `SYMBOL` is the printable string (e.g. `"m"` or `"km"`); composite units leave it empty and format through
///   [`Unit::fmt_symbol`].
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types.
/// - `RATIO` should be non-zero.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Rational scale relative to the canonical SI unit.
    const RATIO: Ratio;

    /// Power-of-ten exponent relative to the canonical SI unit.
    const EXPONENT: i32;

    /// Dimension to which this unit belongs.
    type Dim: Dimension;

    /// Printable symbol, shown by [`core::fmt::Display`].
    const SYMBOL: &'static str;

    /// The identity triple as a runtime value.
    const IDENTITY: Identity = Identity::new(
        Self::RATIO,
        Self::EXPONENT,
        <Self::Dim as Dimension>::VECTOR,
    );

    /// Writes the symbol of this unit.
    fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
        f.write_str(Self::SYMBOL)
    }
}

/// Writes a unit symbol, parenthesized when the unit is itself composite.
fn fmt_operand<U: Unit>(f: &mut Formatter<'_>) -> Result {
    if U::SYMBOL.is_empty() {
        f.write_str("(")?;
        U::fmt_symbol(f)?;
        f.write_str(")")
    } else {
        U::fmt_symbol(f)
    }
}

/// Unit representing the division of two other units.
///
/// `Per<N, D>` corresponds to `N / D`: the scale is `N::RATIO / D::RATIO`, the exponent is
/// `N::EXPONENT - D::EXPONENT` and the dimension is the component-wise difference of both vectors.
///
/// ```rust
/// use measurement_core::units::length::Kilometre;
/// use measurement_core::units::time::Hour;
/// use measurement_core::{Per, Ratio, Unit};
///
/// type Kmh = Per<Kilometre, Hour>;
/// assert_eq!(Kmh::RATIO, Ratio::new(10, 36));
/// assert_eq!(Kmh::EXPONENT, 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Per<N: Unit, D: Unit>(PhantomData<(N, D)>);

impl<N: Unit, D: Unit> Unit for Per<N, D>
where
    N::Dim: DimensionDiv<D::Dim>,
{
    const RATIO: Ratio = N::RATIO.div(D::RATIO);
    const EXPONENT: i32 = N::EXPONENT - D::EXPONENT;
    type Dim = DivDim<N::Dim, D::Dim>;
    const SYMBOL: &'static str = "";

    fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
        fmt_operand::<N>(f)?;
        f.write_str("/")?;
        fmt_operand::<D>(f)
    }
}

/// Unit representing the product of two other units.
///
/// `Prod<A, B>` corresponds to `A · B`: scales multiply, exponents add and dimension vectors add component-wise.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Prod<A: Unit, B: Unit>(PhantomData<(A, B)>);

impl<A: Unit, B: Unit> Unit for Prod<A, B>
where
    A::Dim: DimensionMul<B::Dim>,
{
    const RATIO: Ratio = A::RATIO.mul(B::RATIO);
    const EXPONENT: i32 = A::EXPONENT + B::EXPONENT;
    type Dim = MulDim<A::Dim, B::Dim>;
    const SYMBOL: &'static str = "";

    fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
        fmt_operand::<A>(f)?;
        f.write_str("·")?;
        fmt_operand::<B>(f)
    }
}

/// Unit `U` raised to the integer power `E` (a [`typenum`] integer such as `P2` or `N1`).
///
/// The scale is raised to `E`, the exponent and every dimension component are multiplied by `E`.
///
/// ```rust
/// use measurement_core::units::length::Kilometre;
/// use measurement_core::typenum::P2;
/// use measurement_core::{DimensionVector, Pow, Unit};
///
/// type SquareKilometre = Pow<Kilometre, P2>;
/// assert_eq!(SquareKilometre::EXPONENT, 6);
/// assert_eq!(SquareKilometre::IDENTITY.dimension(), DimensionVector::new([2, 0, 0, 0, 0, 0, 0]));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Pow<U: Unit, E>(PhantomData<(U, E)>);

impl<U: Unit, E> Unit for Pow<U, E>
where
    E: Integer + Copy + PartialEq + Debug + 'static,
    U::Dim: DimensionPow<E>,
{
    const RATIO: Ratio = U::RATIO.pow(E::I32);
    const EXPONENT: i32 = U::EXPONENT * E::I32;
    type Dim = PowDim<U::Dim, E>;
    const SYMBOL: &'static str = "";

    fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
        fmt_operand::<U>(f)?;
        write!(f, "^{}", E::I32)
    }
}

/// Zero-sized marker type for plain numbers.
///
/// `Scalar` has the identity `(1/1, 0, dimensionless)` and an empty symbol; quantities in it convert to and from
/// `f64` freely.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Scalar;

impl Unit for Scalar {
    const RATIO: Ratio = Ratio::ONE;
    const EXPONENT: i32 = 0;
    type Dim = Dimensionless;
    const SYMBOL: &'static str = "";
}
