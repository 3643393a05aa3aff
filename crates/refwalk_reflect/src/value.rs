//! The value handle passed between iterators and walkers.

use std::fmt;

use crate::summary::{NIL, Summary};
use crate::{Field, Kind, Reflect};

/// A handle over a reflected value.
///
/// A handle either borrows from the walked data, owns a value received from
/// a [`Channel`](crate::Channel), or holds nothing (invalid). Values reached
/// through non-exported record members are marked as not observable.
pub struct Value<'a> {
    repr: Repr<'a>,
    observable: bool,
}

enum Repr<'a> {
    Invalid,
    Borrowed(&'a dyn Reflect),
    Owned(Box<dyn Reflect + 'a>),
}

impl<'a> Value<'a> {
    /// Creates a handle that holds nothing.
    #[inline]
    pub const fn invalid() -> Self {
        Self {
            repr: Repr::Invalid,
            observable: true,
        }
    }

    /// Creates a handle borrowing `value`.
    #[inline]
    pub fn borrowed(value: &'a dyn Reflect) -> Self {
        Self {
            repr: Repr::Borrowed(value),
            observable: true,
        }
    }

    /// Creates a handle owning `value`.
    #[inline]
    pub fn owned(value: Box<dyn Reflect + 'a>) -> Self {
        Self {
            repr: Repr::Owned(value),
            observable: true,
        }
    }

    /// Creates a handle for a record member, observable only if the member is exported.
    #[inline]
    pub fn member(field: &Field, value: &'a dyn Reflect) -> Self {
        Self {
            repr: Repr::Borrowed(value),
            observable: field.exported,
        }
    }

    /// Marks this handle as not observable.
    #[inline]
    pub fn hidden(mut self) -> Self {
        self.observable = false;
        self
    }

    /// Returns true if this handle holds a value.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        !matches!(self.repr, Repr::Invalid)
    }

    /// Returns true if the value may be handed to caller code.
    #[inline]
    pub const fn can_observe(&self) -> bool {
        self.is_valid() && self.observable
    }

    /// Returns the held value.
    pub fn get(&self) -> Option<&dyn Reflect> {
        match &self.repr {
            Repr::Invalid => None,
            Repr::Borrowed(value) => Some(*value),
            Repr::Owned(value) => Some(&**value),
        }
    }

    /// Returns the kind of the held value, or [`Kind::Invalid`].
    pub fn kind(&self) -> Kind {
        self.get()
            .map_or(Kind::Invalid, |value| value.reflect().kind())
    }

    /// Returns the type name of the held value.
    pub fn type_name(&self) -> Option<&'static str> {
        self.get().map(|value| value.type_name())
    }
}

impl<'a> From<&'a dyn Reflect> for Value<'a> {
    fn from(value: &'a dyn Reflect) -> Self {
        Self::borrowed(value)
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => fmt::Display::fmt(&Summary(value), f),
            None => f.write_str(NIL),
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("kind", &self.kind())
            .field("observable", &self.observable)
            .field("value", &format_args!("{self}"))
            .finish()
    }
}
