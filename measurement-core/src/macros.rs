//! Macros shared by the unit catalog.

/// Generates `From` conversions in both directions for every pair of the listed units.
///
/// All listed units must share one dimension; each `From` scales through [`crate::Quantity::to`].
///
/// ```rust
/// use measurement_core::units::time::{Hours, Seconds};
///
/// let s: Seconds = Hours::new(0.5).into();
/// assert_eq!(s.value(), 1800.0);
/// ```
#[macro_export]
macro_rules! impl_unit_conversions {
    ($unit:ty $(,)?) => {};

    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<$crate::Quantity<$first>> for $crate::Quantity<$rest> {
                #[inline]
                fn from(quantity: $crate::Quantity<$first>) -> Self {
                    quantity.to::<$rest>()
                }
            }

            impl From<$crate::Quantity<$rest>> for $crate::Quantity<$first> {
                #[inline]
                fn from(quantity: $crate::Quantity<$rest>) -> Self {
                    quantity.to::<$first>()
                }
            }
        )+

        $crate::impl_unit_conversions!($($rest),+);
    };
}
