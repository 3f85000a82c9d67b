//! Declarative descriptors for user types

/// Declare one or more types as primitive leaves
///
/// Each type must be `PartialEq + Debug + Serialize + 'static`; it is then
/// compared by value and snapshotted through serde.
///
/// # Example
///
/// ```
/// use deepcmp_core::inspect_leaf;
/// use serde::Serialize;
///
/// #[derive(Debug, PartialEq, Serialize)]
/// enum Channel {
///     Mono,
///     Stereo,
/// }
///
/// inspect_leaf!(Channel);
///
/// let diffs = deepcmp_core::compare(&Channel::Mono, &Channel::Stereo).unwrap();
/// assert_eq!(diffs.len(), 1);
/// ```
#[macro_export]
macro_rules! inspect_leaf {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::inspect::Inspect for $ty {
                fn shape(&self) -> $crate::inspect::Shape<'_> {
                    $crate::inspect::Shape::Primitive(self)
                }
            }
        )+
    };
}

/// Describe a struct by listing its visible members
///
/// Members are walked in the order listed. Members left out of the list are
/// never compared.
///
/// # Example
///
/// ```
/// use deepcmp_core::inspect_struct;
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// inspect_struct!(Point { x, y });
///
/// let diffs = deepcmp_core::compare(&Point { x: 1, y: 2 }, &Point { x: 1, y: 3 }).unwrap();
/// assert_eq!(diffs[0].field, ".y");
/// ```
#[macro_export]
macro_rules! inspect_struct {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::inspect::Inspect for $ty {
            fn shape(&self) -> $crate::inspect::Shape<'_> {
                $crate::inspect::Shape::Struct(self)
            }
        }

        impl $crate::inspect::Fields for $ty {
            fn field_names(&self) -> &[&'static str] {
                &[$(stringify!($field)),*]
            }

            fn field(
                &self,
                name: &str,
            ) -> ::std::option::Option<&dyn $crate::inspect::Inspect> {
                match name {
                    $(stringify!($field) => ::std::option::Option::Some(&self.$field),)*
                    _ => ::std::option::Option::None,
                }
            }
        }
    };
}
