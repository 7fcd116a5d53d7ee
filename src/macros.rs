//! Macros for declaring state enums.

/// Declare a fieldless enum and implement `State` and `Enumerable` for it.
///
/// The enum derives `Clone, Copy, PartialEq, Eq, Hash, Debug`. Each
/// variant's name is its identifier, and `Enumerable::all` follows the
/// declaration order.
///
/// # Example
///
/// ```
/// use statecraft::core::{Enumerable, State};
/// use statecraft::state_enum;
///
/// state_enum! {
///     pub enum Checkout {
///         Cart,
///         Payment,
///         Confirmed,
///     }
/// }
///
/// assert_eq!(Checkout::Payment.name(), "Payment");
/// assert_eq!(Checkout::all(), &[Checkout::Cart, Checkout::Payment, Checkout::Confirmed]);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl $crate::core::Enumerable for $name {
            fn all() -> &'static [Self] {
                &[$(Self::$variant),*]
            }
        }
    };
}
