//! Declarative record implementations.

/// Implements [`Reflect`](crate::Reflect) and [`Record`](crate::Record) for a struct.
///
/// List the members in declaration order. A `pub` marker makes the member
/// exported; `#[embedded]` marks it as embedded. Members left out of the
/// list are invisible to walkers.
///
/// ```rust
/// use refwalk_reflect::{Record, Reflect, ReflectRef, impl_record};
///
/// struct Base {
///     pub id: u32,
/// }
///
/// struct User {
///     base: Base,
///     pub name: String,
///     password: String,
/// }
///
/// impl_record!(Base { pub id });
/// impl_record!(User {
///     #[embedded] base,
///     pub name,
///     password,
/// });
///
/// let user = User {
///     base: Base { id: 1 },
///     name: "ada".into(),
///     password: "secret".into(),
/// };
/// let ReflectRef::Record(record) = user.reflect() else { unreachable!() };
/// let fields = record.fields();
/// assert!(fields[0].0.embedded);
/// assert!(fields[1].0.exported);
/// assert!(!fields[2].0.exported);
/// ```
#[macro_export]
macro_rules! impl_record {
    ($ty:ident { $( $(#[$flag:ident])* $vis:vis $field:ident ),* $(,)? }) => {
        impl $crate::Reflect for $ty {
            fn reflect(&self) -> $crate::ReflectRef<'_> {
                $crate::ReflectRef::Record(self)
            }
        }

        impl $crate::Record for $ty {
            fn fields(&self) -> ::std::vec::Vec<($crate::Field, &dyn $crate::Reflect)> {
                ::std::vec![
                    $(
                        (
                            $crate::Field::new(
                                ::std::stringify!($field),
                                ::std::any::type_name_of_val(&self.$field),
                            )
                            .exported(!::std::stringify!($vis).is_empty())
                            .embedded(false $(|| $crate::__record_flag!($flag))*),
                            &self.$field as &dyn $crate::Reflect,
                        )
                    ),*
                ]
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __record_flag {
    (embedded) => {
        true
    };
}
