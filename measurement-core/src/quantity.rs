//! Quantity type and its implementations.

use crate::dimension::{DimensionDiv, DimensionMul, DimensionPow, Dimensionless};
use crate::unit::{Per, Pow, Prod, Unit};
use core::fmt::{Display, Formatter, Result};
use core::marker::PhantomData;
use core::ops::*;
use typenum::Integer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A quantity with a specific unit.
///
/// `Quantity<U>` wraps an `f64` value together with phantom type information about its unit `U`. The unit fixes the
/// whole identity triple (scale, exponent, dimension), so the compiler only accepts `+`, `-` and comparisons between
/// quantities of the same unit, and only accepts [`Quantity::to`] between units of the same dimension. Composite
/// spellings of one identity (`m·s` and `s·m`) meet through [`Quantity::as_unit`].
///
/// # Examples
///
/// ```rust
/// use measurement_core::{Quantity, Ratio, Unit};
/// use measurement_core::dimension::Length;
///
/// #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
/// pub enum Metre {}
/// impl Unit for Metre {
///     const RATIO: Ratio = Ratio::ONE;
///     const EXPONENT: i32 = 0;
///     type Dim = Length;
///     const SYMBOL: &'static str = "m";
/// }
///
/// let x = Quantity::<Metre>::new(5.0);
/// let y = Quantity::<Metre>::new(3.0);
/// let sum = x + y;
/// assert_eq!(sum.value(), 8.0);
/// ```
///
/// Units of different identity cannot be added, even when they share a dimension:
///
/// ```compile_fail
/// use measurement_core::units::length::{Kilometres, Metres};
///
/// let _ = Metres::new(1.0) + Kilometres::new(1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Quantity<U: Unit>(f64, PhantomData<U>);

impl<U: Unit> Quantity<U> {
    /// A constant representing zero for this quantity type.
    pub const ZERO: Self = Self::new(0.0);

    /// A constant representing NaN for this quantity type.
    ///
    /// ```rust
    /// use measurement_core::units::length::Metres;
    /// assert!(Metres::NAN.value().is_nan());
    /// ```
    pub const NAN: Self = Self::new(f64::NAN);

    /// Creates a new quantity with the given value.
    ///
    /// ```rust
    /// use measurement_core::units::length::Metres;
    /// let d = Metres::new(3.0);
    /// assert_eq!(d.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw magnitude, expressed in this quantity's own unit.
    ///
    /// ```rust
    /// use measurement_core::units::time::Hours;
    /// let t = Hours::new(2.5);
    /// assert_eq!(t.value(), 2.5);
    /// ```
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the absolute value.
    ///
    /// ```rust
    /// use measurement_core::units::time::Seconds;
    /// let a = Seconds::new(-10.0);
    /// assert_eq!(a.abs().value(), 10.0);
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        #[cfg(feature = "std")]
        {
            Self::new(self.0.abs())
        }
        #[cfg(not(feature = "std"))]
        {
            Self::new(libm::fabs(self.0))
        }
    }

    /// Converts this quantity to another unit of the same dimension.
    ///
    /// The factor `10^(E1 - E2) × R1 / R2` is folded at compile time; a unit of another dimension is rejected by the
    /// compiler.
    ///
    /// ```rust
    /// use measurement_core::units::time::{Millisecond, Seconds};
    ///
    /// let ms = Seconds::new(3.0).to::<Millisecond>();
    /// assert_eq!(ms.value(), 3000.0);
    /// ```
    ///
    /// ```compile_fail
    /// use measurement_core::units::length::Metres;
    /// use measurement_core::units::time::Second;
    ///
    /// let _ = Metres::new(1.0).to::<Second>();
    /// ```
    #[inline]
    pub const fn to<T: Unit<Dim = U::Dim>>(self) -> Quantity<T> {
        Quantity::<T>::new(self.0 * const { U::IDENTITY.conversion_factor(T::IDENTITY) })
    }

    /// Views this quantity in another unit type with the same identity triple, without touching the magnitude.
    ///
    /// Composite units are structural, so `m·s` and `s·m` are distinct types describing one unit. This method
    /// moves between such spellings so they can be added or compared. A target whose scale or exponent differs is
    /// rejected at compile time; use [`Quantity::to`] for those.
    ///
    /// ```rust
    /// use measurement_core::units::length::{Metre, Metres};
    /// use measurement_core::units::time::{Second, Seconds};
    /// use measurement_core::Prod;
    ///
    /// let a = Metres::new(2.0) * Seconds::new(3.0);
    /// let b = Seconds::new(1.0) * Metres::new(4.0);
    /// let total = a + b.as_unit::<Prod<Metre, Second>>();
    /// assert_eq!(total.value(), 10.0);
    /// ```
    ///
    /// ```compile_fail
    /// use measurement_core::units::length::{Kilometre, Metres};
    ///
    /// let _ = Metres::new(1.0).as_unit::<Kilometre>();
    /// ```
    #[inline]
    pub const fn as_unit<T: Unit<Dim = U::Dim>>(self) -> Quantity<T> {
        const {
            assert!(
                U::IDENTITY.same_identity(&T::IDENTITY),
                "units differ in scale or exponent; convert with `to`"
            )
        };
        Quantity::<T>::new(self.0)
    }

    /// Returns the minimum of this quantity and another.
    ///
    /// ```rust
    /// use measurement_core::units::length::Metres;
    /// let a = Metres::new(3.0);
    /// let b = Metres::new(5.0);
    /// assert_eq!(a.min(b).value(), 3.0);
    /// ```
    #[inline]
    pub fn min(self, other: Quantity<U>) -> Quantity<U> {
        Quantity::<U>::new(self.0.min(other.0))
    }

    /// Returns the maximum of this quantity and another.
    #[inline]
    pub fn max(self, other: Quantity<U>) -> Quantity<U> {
        Quantity::<U>::new(self.0.max(other.0))
    }

    /// Raises this quantity to the integer power `E`.
    ///
    /// The unit becomes [`Pow<U, E>`], so the identity follows the value.
    ///
    /// ```rust
    /// use measurement_core::units::length::Kilometres;
    /// use measurement_core::typenum::P2;
    ///
    /// let area = Kilometres::new(3.0).powi::<P2>();
    /// assert_eq!(area.value(), 9.0);
    /// ```
    #[inline]
    pub fn powi<E>(self) -> Quantity<Pow<U, E>>
    where
        E: Integer + Copy + PartialEq + core::fmt::Debug + 'static,
        U::Dim: DimensionPow<E>,
    {
        Quantity::new(crate::math::powi(self.0, E::I32))
    }
}

impl<U: Unit<Dim = Dimensionless>> Quantity<U> {
    /// Converts a dimensionless quantity to a plain number.
    ///
    /// The magnitude is scaled to the scalar identity `(1/1, 0, dimensionless)`, so a ratio such as
    /// kilometres per metre yields the pure number.
    ///
    /// ```rust
    /// use measurement_core::units::length::{Kilometres, Metres};
    ///
    /// let ratio = Kilometres::new(1.5) / Metres::new(500.0);
    /// assert_eq!(ratio.to_scalar(), 3.0);
    /// ```
    #[inline]
    pub const fn to_scalar(self) -> f64 {
        self.0 * const { U::IDENTITY.conversion_factor(crate::identity::Identity::SCALAR) }
    }
}

impl<U: Unit> Default for Quantity<U> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<U: Unit> Display for Quantity<U> {
    /// Formats as `<value> <symbol>`; quantities with the scalar identity print the bare number.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(&self.0, f)?;
        if !U::IDENTITY.is_scalar() {
            f.write_str(" ")?;
            U::fmt_symbol(f)?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> Add for Quantity<U> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<U: Unit> AddAssign for Quantity<U> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<U: Unit> Sub for Quantity<U> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<U: Unit> SubAssign for Quantity<U> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<U: Unit> Mul<f64> for Quantity<U> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<U: Unit> Mul<Quantity<U>> for f64 {
    type Output = Quantity<U>;
    #[inline]
    fn mul(self, rhs: Quantity<U>) -> Self::Output {
        rhs * self
    }
}

impl<U: Unit> MulAssign<f64> for Quantity<U> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.0 *= rhs;
    }
}

impl<U: Unit> Div<f64> for Quantity<U> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.0 / rhs)
    }
}

impl<U: Unit> DivAssign<f64> for Quantity<U> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.0 /= rhs;
    }
}

impl<L: Unit, R: Unit> Mul<Quantity<R>> for Quantity<L>
where
    L::Dim: DimensionMul<R::Dim>,
{
    type Output = Quantity<Prod<L, R>>;
    #[inline]
    fn mul(self, rhs: Quantity<R>) -> Self::Output {
        Quantity::new(self.0 * rhs.0)
    }
}

impl<N: Unit, D: Unit> Div<Quantity<D>> for Quantity<N>
where
    N::Dim: DimensionDiv<D::Dim>,
{
    type Output = Quantity<Per<N, D>>;
    #[inline]
    fn div(self, rhs: Quantity<D>) -> Self::Output {
        Quantity::new(self.0 / rhs.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Plain numbers
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> From<f64> for Quantity<U> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl<U: Unit<Dim = Dimensionless>> From<Quantity<U>> for f64 {
    #[inline]
    fn from(quantity: Quantity<U>) -> f64 {
        quantity.to_scalar()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit> Serialize for Quantity<U> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> Deserialize<'de> for Quantity<U> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Ok(Quantity::new(value))
    }
}

/// Serde helper module for serializing quantities with their unit symbol.
///
/// Use this with the `#[serde(with = "...")]` attribute to keep the unit in serialized data. Deserialization rejects
/// a symbol that does not match the target unit.
///
/// # Examples
///
/// ```rust
/// use measurement_core::units::length::Metres;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Leg {
///     #[serde(with = "measurement_core::serde_with_unit")]
///     distance: Metres,  // {"value": 100.0, "unit": "m"}
///
///     margin: Metres,    // 50.0
/// }
/// ```
#[cfg(all(feature = "serde", feature = "std"))]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, Deserializer, MapAccess, Visitor};
    use serde::ser::{SerializeStruct, Serializer};

    /// Symbol of `U` as an owned string (composite units included).
    fn symbol_of<U: Unit>() -> String {
        struct Symbol<U>(PhantomData<U>);
        impl<U: Unit> Display for Symbol<U> {
            fn fmt(&self, f: &mut Formatter<'_>) -> Result {
                U::fmt_symbol(f)
            }
        }
        Symbol::<U>(PhantomData).to_string()
    }

    /// Serializes a `Quantity<U>` as a struct with `value` and `unit` fields.
    pub fn serialize<U, S>(quantity: &Quantity<U>, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        U: Unit,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.value())?;
        state.serialize_field("unit", &symbol_of::<U>())?;
        state.end()
    }

    /// Deserializes a `Quantity<U>` from a struct with `value` and optionally `unit` fields.
    ///
    /// A `unit` field, when present, must match the symbol of `U`.
    pub fn deserialize<'de, U, D>(deserializer: D) -> core::result::Result<Quantity<U>, D::Error>
    where
        U: Unit,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<U>(PhantomData<U>);

        impl<'de, U: Unit> Visitor<'de> for QuantityVisitor<U> {
            type Value = Quantity<U>;

            fn expecting(&self, formatter: &mut Formatter) -> Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> core::result::Result<Quantity<U>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<f64> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some(found) = unit {
                    let expected = symbol_of::<U>();
                    if found != expected {
                        log::debug!("rejected quantity: expected unit '{expected}', found '{found}'");
                        return Err(de::Error::custom(format!(
                            "unit mismatch: expected '{}', found '{}'",
                            expected, found
                        )));
                    }
                }

                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "unit"],
            QuantityVisitor(PhantomData),
        )
    }
}
