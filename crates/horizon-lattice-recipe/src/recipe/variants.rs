//! Typed variant selections.
//!
//! Recipes loaded at runtime are addressed with string-keyed
//! [`VariantSelection`]s and validated on every call. Recipes known at
//! compile time can instead expose closed enums per axis, generated with
//! [`variant_enum!`](crate::variant_enum), and a selection struct
//! implementing [`Variants`], so that unknown values never type-check.

use super::selection::VariantSelection;

/// A typed selection that lowers to a [`VariantSelection`].
pub trait Variants {
    /// Build the string-keyed selection, leaving omitted axes out.
    fn selection(&self) -> VariantSelection;
}

impl Variants for VariantSelection {
    fn selection(&self) -> VariantSelection {
        self.clone()
    }
}

/// Define a closed enum for the values of one variant axis.
///
/// The generated enum gets `as_str`, an `ALL` slice in declaration order,
/// `Display`, and a conversion into [`VariantValue`](crate::recipe::VariantValue).
///
/// # Example
///
/// ```
/// use horizon_lattice_recipe::recipe::VariantValue;
///
/// horizon_lattice_recipe::variant_enum! {
///     /// Button sizes.
///     pub enum Size {
///         Small => "sm",
///         Large => "lg",
///     }
/// }
///
/// assert_eq!(Size::Small.as_str(), "sm");
/// assert_eq!(Size::ALL.len(), 2);
/// assert_eq!(VariantValue::from(Size::Large), VariantValue::from("lg"));
/// ```
#[macro_export]
macro_rules! variant_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// The variant key used in the recipe table.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $value ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::convert::From<$name> for $crate::recipe::VariantValue {
            fn from(value: $name) -> Self {
                $crate::recipe::VariantValue::Str(value.as_str().to_string())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::VariantValue;

    crate::variant_enum! {
        enum Position {
            Top => "top",
            Bottom => "bottom",
        }
    }

    #[test]
    fn generated_enum() {
        assert_eq!(Position::ALL, &[Position::Top, Position::Bottom]);
        assert_eq!(Position::Bottom.to_string(), "bottom");
        assert_eq!(
            VariantValue::from(Position::Top),
            VariantValue::Str("top".into())
        );
    }

    #[test]
    fn selection_is_its_own_variants() {
        let selection = VariantSelection::new().with("position", Position::Top);
        assert_eq!(selection.selection(), selection);
    }
}
